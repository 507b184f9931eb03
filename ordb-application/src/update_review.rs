use super::*;

/// Apply field updates to a review on behalf of its author.
///
/// Unlike review creation this does not refresh the aggregate rating of
/// the vehicle, matching the behavior of the legacy system (see
/// DESIGN.md).
pub fn update_review<D: Db>(
    db: &D,
    author_id: &Id,
    review_id: &str,
    update: usecases::ReviewUpdate,
) -> Result<Review> {
    Ok(usecases::update_review(db, author_id, review_id, update)?)
}
