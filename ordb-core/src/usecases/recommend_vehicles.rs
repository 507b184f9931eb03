use std::collections::HashSet;

use super::prelude::*;
use crate::recommend::{self, RatingMatrix, DEFAULT_NEIGHBORHOOD_SIZE};

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendedVehicle {
    pub vehicle: Vehicle,
    pub score: f64,
}

/// Propose vehicles the given user has not reviewed yet, scored by
/// similarity to other users' rating patterns.
///
/// The result is aligned with the natural vehicle retrieval order and
/// deliberately not sorted by score.
pub fn recommend_vehicles<R>(repo: &R, user_id: &Id) -> Result<Vec<RecommendedVehicle>>
where
    R: UserRepo + VehicleRepo + ReviewRepo,
{
    let users = repo.all_users()?;
    let vehicles = repo.all_vehicles()?;
    let reviews = repo.all_reviews()?;

    let matrix = RatingMatrix::from_reviews(&users, &vehicles, &reviews);
    let target_row = matrix
        .row_of_user(user_id)
        .ok_or(Error::UserDoesNotExist)?;
    let scores = recommend::predict_scores(&matrix, target_row, DEFAULT_NEIGHBORHOOD_SIZE);
    debug_assert_eq!(scores.len(), vehicles.len());

    let reviewed: HashSet<&str> = reviews
        .iter()
        .filter(|r| r.user_id == *user_id)
        .map(|r| r.vehicle_id.as_str())
        .collect();

    Ok(vehicles
        .into_iter()
        .zip(scores)
        .filter(|(vehicle, score)| *score > 0.0 && !reviewed.contains(vehicle.id.as_str()))
        .map(|(vehicle, score)| RecommendedVehicle { vehicle, score })
        .collect())
}
