use super::*;

/// Delete a review on behalf of its author and detach it from the
/// vehicle.
///
/// The aggregate rating of the vehicle keeps its last computed value,
/// matching the behavior of the legacy system (see DESIGN.md).
pub fn delete_review<D: Db>(db: &D, author_id: &Id, review_id: &str) -> Result<()> {
    Ok(usecases::delete_review(db, author_id, review_id)?)
}
