#[macro_use]
extern crate log;

mod create_booking;
mod create_review;
mod create_vehicle;
mod delete_review;
mod register_user;
mod update_booking_status;
mod update_review;

pub mod prelude {
    pub use super::{
        create_booking::*, create_review::*, create_vehicle::*, delete_review::*, register_user::*,
        update_booking_status::*, update_review::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use ordb_core::{db::*, entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;
