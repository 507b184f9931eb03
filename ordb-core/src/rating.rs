use crate::entities::*;

pub trait Rated {
    fn avg_rating(&self, _: &[Review]) -> AvgRating;
}

impl Rated for Vehicle {
    fn avg_rating(&self, reviews: &[Review]) -> AvgRating {
        debug_assert_eq!(
            reviews.len(),
            reviews.iter().filter(|r| r.vehicle_id == self.id).count()
        );
        reviews
            .iter()
            .fold(AvgRatingBuilder::default(), |mut acc, r| {
                acc.add(r.rating);
                acc
            })
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordb_entities::builders::*;

    fn new_vehicle(id: &str) -> Vehicle {
        Vehicle::build().id(id).finish()
    }

    fn new_review(id: &str, vehicle_id: &str, value: i8) -> Review {
        Review::build()
            .id(id)
            .vehicle(vehicle_id)
            .rating(value)
            .finish()
    }

    #[test]
    fn average_rating_of_two_reviews() {
        let vehicle = new_vehicle("a");
        let reviews = [new_review("1", "a", 4), new_review("2", "a", 5)];
        assert_eq!(vehicle.avg_rating(&reviews), 4.5.into());
    }

    #[test]
    fn average_rating_after_third_review() {
        let vehicle = new_vehicle("a");
        let reviews = [
            new_review("1", "a", 4),
            new_review("2", "a", 5),
            new_review("3", "a", 3),
        ];
        assert_eq!(vehicle.avg_rating(&reviews), 4.0.into());
    }

    #[test]
    fn average_rating_without_reviews() {
        let vehicle = new_vehicle("a");
        assert_eq!(vehicle.avg_rating(&[]), 0.0.into());
    }

    #[test]
    fn average_rating_rounds_half_up() {
        let vehicle = new_vehicle("a");
        let reviews = [
            new_review("1", "a", 3),
            new_review("2", "a", 4),
            new_review("3", "a", 4),
            new_review("4", "a", 2),
        ];
        // mean 3.25
        assert_eq!(vehicle.avg_rating(&reviews), 3.3.into());
    }
}
