use super::prelude::*;

pub fn add_owner_response<R>(
    repo: &R,
    owner_id: &Id,
    review_id: &str,
    text: String,
) -> Result<Review>
where
    R: VehicleRepo + ReviewRepo,
{
    let mut review = repo.get_review(review_id)?;
    let vehicle = repo.get_vehicle(review.vehicle_id.as_ref())?;
    if !vehicle.is_owned_by(owner_id) {
        return Err(Error::Forbidden);
    }
    if text.trim().is_empty() {
        return Err(Error::EmptyComment);
    }
    if review.owner_response.is_some() {
        return Err(Error::OwnerResponseExists);
    }
    review.owner_response = Some(OwnerResponse {
        text,
        responded_at: Timestamp::now(),
    });
    repo.update_review(&review)?;
    Ok(review)
}

pub fn update_owner_response<R>(
    repo: &R,
    owner_id: &Id,
    review_id: &str,
    text: String,
) -> Result<Review>
where
    R: VehicleRepo + ReviewRepo,
{
    let mut review = repo.get_review(review_id)?;
    let vehicle = repo.get_vehicle(review.vehicle_id.as_ref())?;
    if !vehicle.is_owned_by(owner_id) {
        return Err(Error::Forbidden);
    }
    if text.trim().is_empty() {
        return Err(Error::EmptyComment);
    }
    if review.owner_response.is_none() {
        return Err(Error::OwnerResponseMissing);
    }
    review.owner_response = Some(OwnerResponse {
        text,
        responded_at: Timestamp::now(),
    });
    repo.update_review(&review)?;
    Ok(review)
}
