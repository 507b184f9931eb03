// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;
    fn delete_user(&self, id: &str) -> Result<()>;

    // The returned order is stable (insertion order) and defines
    // the row order of the rating matrix.
    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
}

pub trait VehicleRepo {
    fn create_vehicle(&self, vehicle: &Vehicle) -> Result<()>;
    fn update_vehicle(&self, vehicle: &Vehicle) -> Result<()>;
    fn delete_vehicle(&self, id: &str) -> Result<()>;

    fn get_vehicle(&self, id: &str) -> Result<Vehicle>;

    // The returned order is stable (insertion order) and defines
    // the column order of the rating matrix.
    fn all_vehicles(&self) -> Result<Vec<Vehicle>>;
    fn count_vehicles(&self) -> Result<usize>;

    fn vehicles_of_owner(&self, owner_id: &str) -> Result<Vec<Vehicle>>;
}

pub trait ReviewRepo {
    fn create_review(&self, review: &Review) -> Result<()>;
    fn update_review(&self, review: &Review) -> Result<()>;
    fn delete_review(&self, id: &str) -> Result<()>;

    fn get_review(&self, id: &str) -> Result<Review>;
    fn all_reviews(&self) -> Result<Vec<Review>>;
    fn count_reviews(&self) -> Result<usize>;

    fn reviews_of_vehicle(&self, vehicle_id: &str) -> Result<Vec<Review>>;
    fn reviews_of_user(&self, user_id: &str) -> Result<Vec<Review>>;

    // At most one review exists per (user, vehicle) pair.
    fn try_get_review_of_user_for_vehicle(
        &self,
        user_id: &str,
        vehicle_id: &str,
    ) -> Result<Option<Review>>;
}

pub trait BookingRepo {
    fn create_booking(&self, booking: &Booking) -> Result<()>;
    fn update_booking(&self, booking: &Booking) -> Result<()>;

    fn get_booking(&self, id: &str) -> Result<Booking>;
    fn all_bookings(&self) -> Result<Vec<Booking>>;
    fn count_bookings(&self) -> Result<usize>;

    fn bookings_of_user(&self, user_id: &str) -> Result<Vec<Booking>>;
    fn bookings_of_vehicle(&self, vehicle_id: &str) -> Result<Vec<Booking>>;
}
