use super::prelude::*;
use crate::rating::Rated;

/// Recompute the aggregate rating of a vehicle from the current set of
/// its reviews and persist it.
///
/// An empty review set leaves the stored rating untouched. Returns the
/// newly stored value, or `None` if nothing was written.
pub fn recompute_vehicle_rating<R>(repo: &R, vehicle_id: &str) -> Result<Option<AvgRating>>
where
    R: VehicleRepo + ReviewRepo,
{
    let reviews = repo.reviews_of_vehicle(vehicle_id)?;
    if reviews.is_empty() {
        return Ok(None);
    }
    let mut vehicle = repo.get_vehicle(vehicle_id)?;
    let rating = vehicle.avg_rating(&reviews);
    vehicle.rating = rating;
    repo.update_vehicle(&vehicle)?;
    Ok(Some(rating))
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use ordb_entities::builders::*;

    fn db_with_vehicle_and_ratings(ratings: &[i8]) -> MockDb {
        let db = MockDb::default();
        db.vehicles
            .borrow_mut()
            .push(Vehicle::build().id("v").finish());
        for (i, rating) in ratings.iter().enumerate() {
            db.reviews.borrow_mut().push(
                Review::build()
                    .id(&format!("r{i}"))
                    .user(&format!("u{i}"))
                    .vehicle("v")
                    .rating(*rating)
                    .finish(),
            );
        }
        db
    }

    #[test]
    fn recompute_mean_of_current_reviews() {
        let db = db_with_vehicle_and_ratings(&[4, 5]);
        let rating = recompute_vehicle_rating(&db, "v").unwrap();
        assert_eq!(rating, Some(4.5.into()));
        assert_eq!(db.vehicles.borrow()[0].rating, 4.5.into());

        db.reviews.borrow_mut().push(
            Review::build()
                .id("r2")
                .user("u2")
                .vehicle("v")
                .rating(3)
                .finish(),
        );
        let rating = recompute_vehicle_rating(&db, "v").unwrap();
        assert_eq!(rating, Some(4.0.into()));
        assert_eq!(db.vehicles.borrow()[0].rating, 4.0.into());
    }

    #[test]
    fn recompute_without_reviews_keeps_stored_rating() {
        let db = MockDb::default();
        db.vehicles
            .borrow_mut()
            .push(Vehicle::build().id("v").rating(3.7).finish());
        assert_eq!(recompute_vehicle_rating(&db, "v").unwrap(), None);
        assert_eq!(db.vehicles.borrow()[0].rating, 3.7.into());
    }

    #[test]
    fn recompute_is_idempotent() {
        let db = db_with_vehicle_and_ratings(&[4, 5, 3]);
        let first = recompute_vehicle_rating(&db, "v").unwrap();
        let second = recompute_vehicle_rating(&db, "v").unwrap();
        assert_eq!(first, second);
        assert_eq!(db.vehicles.borrow()[0].rating, 4.0.into());
    }

    #[test]
    fn recompute_of_missing_vehicle_fails() {
        let db = db_with_vehicle_and_ratings(&[4]);
        db.vehicles.borrow_mut().clear();
        assert!(matches!(
            recompute_vehicle_rating(&db, "v"),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
