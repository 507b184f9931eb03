use super::*;

/// Store a new review and refresh the aggregate rating of the reviewed
/// vehicle. Returns the id of the new review.
pub fn create_review<D: Db>(
    db: &D,
    author_id: &Id,
    review: usecases::NewReview,
) -> Result<String> {
    let storable = usecases::prepare_new_review(db, author_id, review)?;
    let review_id = storable.review_id().to_owned();
    let vehicle_id = storable.vehicle_id().to_owned();
    usecases::store_new_review(db, storable)?;

    // The review has already been stored at this point, so the rating
    // refresh is best-effort only.
    if let Err(err) = usecases::recompute_vehicle_rating(db, &vehicle_id) {
        warn!(
            "Failed to recompute the rating of vehicle {} after adding review {}: {}",
            vehicle_id, review_id, err
        );
    }

    Ok(review_id)
}
