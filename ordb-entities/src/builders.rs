pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{
    booking_builder::*, review_builder::*, user_builder::*, vehicle_builder::*,
};

pub mod vehicle_builder {

    use super::*;
    use crate::{address::*, id::*, review::*, time::*, vehicle::*};

    #[derive(Debug)]
    pub struct VehicleBuild {
        vehicle: Vehicle,
    }

    impl VehicleBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.vehicle.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.vehicle.name = name.into();
            self
        }
        pub fn vehicle_type(mut self, vehicle_type: &str) -> Self {
            self.vehicle.vehicle_type = vehicle_type.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.vehicle.description = desc.into();
            self
        }
        pub fn price_per_day(mut self, price: f64) -> Self {
            self.vehicle.price_per_day = price;
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.vehicle.address.city = Some(city.into());
            self
        }
        pub fn rating(mut self, rating: f64) -> Self {
            self.vehicle.rating = rating.into();
            self
        }
        pub fn features(mut self, features: Vec<Feature>) -> Self {
            self.vehicle.features = features;
            self
        }
        pub fn owner(mut self, owner: &str) -> Self {
            self.vehicle.owner = owner.into();
            self
        }
        pub fn finish(self) -> Vehicle {
            self.vehicle
        }
    }

    impl Builder for Vehicle {
        type Build = VehicleBuild;
        fn build() -> VehicleBuild {
            VehicleBuild {
                vehicle: Vehicle {
                    id: Id::new(),
                    name: "".into(),
                    vehicle_type: "car".into(),
                    description: "".into(),
                    price_per_day: 50.0,
                    address: Address::default(),
                    images: vec![],
                    rating: AvgRating::default(),
                    reviews: vec![],
                    features: vec![],
                    owner: Id::new(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod review_builder {

    use super::*;
    use crate::{id::*, review::*, time::*};

    #[derive(Debug)]
    pub struct ReviewBuild {
        review: Review,
    }

    impl ReviewBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.review.id = id.into();
            self
        }
        pub fn vehicle(mut self, vehicle_id: &str) -> Self {
            self.review.vehicle_id = vehicle_id.into();
            self
        }
        pub fn user(mut self, user_id: &str) -> Self {
            self.review.user_id = user_id.into();
            self
        }
        pub fn rating(mut self, value: i8) -> Self {
            self.review.rating = value.into();
            self
        }
        pub fn comment(mut self, comment: &str) -> Self {
            self.review.comment = comment.into();
            self
        }
        pub fn created_at(mut self, at: Timestamp) -> Self {
            self.review.created_at = at;
            self
        }
        pub fn finish(self) -> Review {
            self.review
        }
    }

    impl Builder for Review {
        type Build = ReviewBuild;
        fn build() -> ReviewBuild {
            ReviewBuild {
                review: Review {
                    id: Id::new(),
                    vehicle_id: Id::new(),
                    user_id: Id::new(),
                    created_at: Timestamp::now(),
                    rating: RatingValue::from(3),
                    comment: "ok".into(),
                    photos: vec![],
                    owner_response: None,
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, password::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn password(mut self, plain: &str) -> Self {
            self.user.password = plain.parse().unwrap();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn favorites(mut self, favorites: Vec<&str>) -> Self {
            self.user.favorites = favorites.into_iter().map(Into::into).collect();
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: Id::new(),
                    name: "".into(),
                    email: EmailAddress::new_unchecked("user@example.org".into()),
                    password: Password::from_hash(String::new()),
                    role: Role::default(),
                    favorites: vec![],
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod booking_builder {

    use super::*;
    use crate::{booking::*, id::*, time::*};

    #[derive(Debug)]
    pub struct BookingBuild {
        booking: Booking,
    }

    impl BookingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.booking.id = id.into();
            self
        }
        pub fn vehicle(mut self, vehicle_id: &str) -> Self {
            self.booking.vehicle_id = vehicle_id.into();
            self
        }
        pub fn user(mut self, user_id: &str) -> Self {
            self.booking.user_id = user_id.into();
            self
        }
        pub fn period(mut self, start: i64, end: i64) -> Self {
            self.booking.start_date = Timestamp::from_seconds(start);
            self.booking.end_date = Timestamp::from_seconds(end);
            self
        }
        pub fn status(mut self, status: BookingStatus) -> Self {
            self.booking.status = status;
            self
        }
        pub fn finish(self) -> Booking {
            self.booking
        }
    }

    impl Builder for Booking {
        type Build = BookingBuild;
        fn build() -> BookingBuild {
            BookingBuild {
                booking: Booking {
                    id: Id::new(),
                    vehicle_id: Id::new(),
                    user_id: Id::new(),
                    created_at: Timestamp::now(),
                    start_date: Timestamp::from_seconds(0),
                    end_date: Timestamp::from_seconds(86_400),
                    special_requests: None,
                    status: BookingStatus::default(),
                },
            }
        }
    }
}
