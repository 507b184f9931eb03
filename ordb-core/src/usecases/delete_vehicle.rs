use super::prelude::*;

/// Remove a listing together with all reviews that reference it.
pub fn delete_vehicle<R>(repo: &R, owner_id: &Id, vehicle_id: &str) -> Result<()>
where
    R: VehicleRepo + ReviewRepo,
{
    let vehicle = repo.get_vehicle(vehicle_id)?;
    if !vehicle.is_owned_by(owner_id) {
        return Err(Error::Forbidden);
    }
    for review in repo.reviews_of_vehicle(vehicle_id)? {
        repo.delete_review(review.id.as_ref())?;
    }
    repo.delete_vehicle(vehicle_id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use ordb_entities::builders::*;

    #[test]
    fn delete_cascades_to_reviews() {
        let db = MockDb::default();
        db.vehicles
            .borrow_mut()
            .push(Vehicle::build().id("v").owner("owner").finish());
        db.reviews
            .borrow_mut()
            .push(Review::build().id("r").user("guest").vehicle("v").finish());
        db.reviews.borrow_mut().push(
            Review::build()
                .id("other")
                .user("guest")
                .vehicle("w")
                .finish(),
        );
        delete_vehicle(&db, &"owner".into(), "v").unwrap();
        assert!(db.vehicles.borrow().is_empty());
        assert_eq!(db.reviews.borrow().len(), 1);
        assert_eq!(db.reviews.borrow()[0].id, "other".into());
    }

    #[test]
    fn only_the_owner_may_delete() {
        let db = MockDb::default();
        db.vehicles
            .borrow_mut()
            .push(Vehicle::build().id("v").owner("owner").finish());
        assert!(matches!(
            delete_vehicle(&db, &"intruder".into(), "v"),
            Err(Error::Forbidden)
        ));
        assert_eq!(db.vehicles.borrow().len(), 1);
    }
}
