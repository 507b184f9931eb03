use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The user already exists")]
    UserExists,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("The vehicle has already been reviewed by this user")]
    DuplicateReview,
    #[error("Empty comment")]
    EmptyComment,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid password")]
    Password,
    #[error("Invalid credentials")]
    Credentials,
    #[error("The name is invalid")]
    Name,
    #[error("The vehicle type is invalid")]
    VehicleType,
    #[error("The price is invalid")]
    Price,
    #[error("The end date is not after the start")]
    DateRange,
    #[error("The booking has already reached a terminal status")]
    BookingStatusTransition,
    #[error("An owner response already exists")]
    OwnerResponseExists,
    #[error("No owner response exists")]
    OwnerResponseMissing,
    #[error("This is not allowed")]
    Forbidden,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<ordb_entities::password::ParseError> for Error {
    fn from(_: ordb_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<ordb_entities::email::EmailAddressParseError> for Error {
    fn from(_: ordb_entities::email::EmailAddressParseError) -> Self {
        Self::Email
    }
}
