use std::cmp::Reverse;

use super::prelude::*;

/// Reviews of a vehicle, most recent first.
pub fn load_reviews_of_vehicle<R>(
    repo: &R,
    vehicle_id: &str,
    pagination: &Pagination,
) -> Result<Vec<Review>>
where
    R: ReviewRepo,
{
    let mut reviews = repo.reviews_of_vehicle(vehicle_id)?;
    reviews.sort_by_key(|r| Reverse(r.created_at));
    Ok(paginate(reviews, pagination))
}

/// Reviews written by a user, most recent first.
pub fn load_reviews_of_user<R>(
    repo: &R,
    user_id: &Id,
    pagination: &Pagination,
) -> Result<Vec<Review>>
where
    R: ReviewRepo,
{
    let mut reviews = repo.reviews_of_user(user_id.as_ref())?;
    reviews.sort_by_key(|r| Reverse(r.created_at));
    Ok(paginate(reviews, pagination))
}

fn paginate<T>(items: Vec<T>, pagination: &Pagination) -> Vec<T> {
    let offset = pagination.offset.unwrap_or(0) as usize;
    let limit = pagination.limit.map(|l| l as usize).unwrap_or(usize::MAX);
    items.into_iter().skip(offset).take(limit).collect()
}
