use super::prelude::*;

pub fn delete_review<R>(repo: &R, author_id: &Id, review_id: &str) -> Result<()>
where
    R: VehicleRepo + ReviewRepo,
{
    let review = repo.get_review(review_id)?;
    if review.user_id != *author_id {
        return Err(Error::Forbidden);
    }
    match repo.get_vehicle(review.vehicle_id.as_ref()) {
        Ok(mut vehicle) => {
            vehicle.reviews.retain(|id| *id != review.id);
            repo.update_vehicle(&vehicle)?;
        }
        // The vehicle is already gone, nothing to detach.
        Err(RepoError::NotFound) => (),
        Err(err) => return Err(err.into()),
    }
    repo.delete_review(review_id)?;
    Ok(())
}
