// User-based collaborative filtering over the review data.
//
// The matrix is materialized from a single bulk load of all reviews.
// A cell holds the review rating or 0.0 when no review exists; user
// ratings start at 1, so 0.0 always marks a missing review.

use std::{cmp::Ordering, collections::HashMap};

use crate::entities::*;

/// How many similar users are taken into account per prediction.
pub const DEFAULT_NEIGHBORHOOD_SIZE: usize = 5;

/// Dense user x vehicle rating table in row-major order.
///
/// Rows follow the natural user retrieval order, columns the natural
/// vehicle retrieval order.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingMatrix {
    user_ids: Vec<Id>,
    vehicle_ids: Vec<Id>,
    cells: Vec<f64>,
}

impl RatingMatrix {
    pub fn from_reviews(users: &[User], vehicles: &[Vehicle], reviews: &[Review]) -> Self {
        let index: HashMap<(&str, &str), f64> = reviews
            .iter()
            .map(|r| {
                (
                    (r.user_id.as_str(), r.vehicle_id.as_str()),
                    f64::from(r.rating),
                )
            })
            .collect();
        let mut cells = Vec::with_capacity(users.len() * vehicles.len());
        for user in users {
            for vehicle in vehicles {
                cells.push(
                    index
                        .get(&(user.id.as_str(), vehicle.id.as_str()))
                        .copied()
                        .unwrap_or(0.0),
                );
            }
        }
        Self {
            user_ids: users.iter().map(|u| u.id.clone()).collect(),
            vehicle_ids: vehicles.iter().map(|v| v.id.clone()).collect(),
            cells,
        }
    }

    pub fn user_count(&self) -> usize {
        self.user_ids.len()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicle_ids.len()
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let cols = self.vehicle_ids.len();
        &self.cells[row * cols..(row + 1) * cols]
    }

    pub fn row_of_user(&self, user_id: &Id) -> Option<usize> {
        self.user_ids.iter().position(|id| id == user_id)
    }
}

/// Pearson correlation coefficient of two equally long sample vectors.
///
/// `None` if either vector has no variance.
pub fn pearson(a: &[f64], b: &[f64]) -> Option<f64> {
    debug_assert_eq!(a.len(), b.len());
    if a.is_empty() {
        return None;
    }
    let n = a.len() as f64;
    let mean_a = a.iter().sum::<f64>() / n;
    let mean_b = b.iter().sum::<f64>() / n;
    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        let da = x - mean_a;
        let db = y - mean_b;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }
    if var_a == 0.0 || var_b == 0.0 {
        return None;
    }
    Some(cov / (var_a.sqrt() * var_b.sqrt()))
}

/// Predicted interest score per vehicle column for the given user row.
///
/// The neighborhood consists of the most similar positively correlated
/// rows. A column's score is the similarity-weighted mean of the
/// neighbors' existing ratings, or 0.0 when no neighbor has rated it.
pub fn predict_scores(
    matrix: &RatingMatrix,
    target_row: usize,
    neighborhood_size: usize,
) -> Vec<f64> {
    let target = matrix.row(target_row);
    let mut neighbors: Vec<(usize, f64)> = (0..matrix.user_count())
        .filter(|&row| row != target_row)
        .filter_map(|row| {
            pearson(target, matrix.row(row))
                .filter(|similarity| *similarity > 0.0)
                .map(|similarity| (row, similarity))
        })
        .collect();
    neighbors.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    neighbors.truncate(neighborhood_size);

    (0..matrix.vehicle_count())
        .map(|col| {
            let mut weighted_sum = 0.0;
            let mut weights = 0.0;
            for &(row, similarity) in &neighbors {
                let rating = matrix.row(row)[col];
                if rating > 0.0 {
                    weighted_sum += similarity * rating;
                    weights += similarity;
                }
            }
            if weights > 0.0 {
                weighted_sum / weights
            } else {
                0.0
            }
        })
        .collect()
}
