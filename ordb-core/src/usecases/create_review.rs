use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewReview {
    pub vehicle: String,
    pub rating: RatingValue,
    pub comment: String,
    pub photos: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Storable(Vehicle, Review);

impl Storable {
    pub fn review_id(&self) -> &str {
        self.1.id.as_ref()
    }
    pub fn vehicle_id(&self) -> &str {
        self.0.id.as_ref()
    }
}

pub fn prepare_new_review<R>(repo: &R, author_id: &Id, r: NewReview) -> Result<Storable>
where
    R: VehicleRepo + ReviewRepo,
{
    if r.comment.trim().is_empty() {
        return Err(Error::EmptyComment);
    }
    if !r.rating.is_valid() {
        return Err(Error::RatingValue);
    }
    let vehicle = repo.get_vehicle(&r.vehicle)?;
    if repo
        .try_get_review_of_user_for_vehicle(author_id.as_ref(), vehicle.id.as_ref())?
        .is_some()
    {
        return Err(Error::DuplicateReview);
    }
    let review = Review {
        id: Id::new(),
        vehicle_id: vehicle.id.clone(),
        user_id: author_id.clone(),
        created_at: Timestamp::now(),
        rating: r.rating,
        comment: r.comment,
        photos: r.photos,
        owner_response: None,
    };
    Ok(Storable(vehicle, review))
}

pub fn store_new_review<R>(repo: &R, s: Storable) -> Result<(Vehicle, Vec<Review>)>
where
    R: VehicleRepo + ReviewRepo,
{
    let Storable(mut vehicle, review) = s;
    debug_assert_eq!(vehicle.id, review.vehicle_id);
    repo.create_review(&review)?;
    vehicle.reviews.push(review.id);
    repo.update_vehicle(&vehicle)?;
    let reviews = repo.reviews_of_vehicle(vehicle.id.as_ref())?;
    Ok((vehicle, reviews))
}
