mod change_user_role;
mod create_booking;
mod create_review;
mod create_vehicle;
mod dashboard;
mod delete_review;
mod delete_vehicle;
mod error;
mod favorites;
mod filter_vehicles;
mod load_bookings;
mod load_reviews;
mod login;
mod recommend_vehicles;
mod recompute_rating;
mod register;
mod respond_to_review;
mod update_booking_status;
mod update_review;
mod update_vehicle;


pub use self::{
    change_user_role::*, create_booking::*, create_review::*, create_vehicle::*, dashboard::*,
    delete_review::*, delete_vehicle::*, error::Error, favorites::*, filter_vehicles::*,
    load_bookings::*, load_reviews::*, login::*, recommend_vehicles::*, recompute_rating::*,
    register::*, respond_to_review::*, update_booking_status::*, update_review::*,
    update_vehicle::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        db::*,
        entities::*,
        repositories::{self, Error as RepoError, *},
    };
}
