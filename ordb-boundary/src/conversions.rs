use ordb_entities::{
    address, booking, email::EmailAddress, password::Password, review, time::Timestamp, user,
    vehicle,
};
use thiserror::Error;

use super::*;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Invalid password")]
    Password,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Unknown feature: {0}")]
    Feature(String),
    #[error("Unknown booking status: {0}")]
    BookingStatus(String),
}

impl From<user::Role> for UserRole {
    fn from(from: user::Role) -> Self {
        use user::Role::*;
        match from {
            User => Self::User,
            Owner => Self::Owner,
            Admin => Self::Admin,
        }
    }
}

impl From<UserRole> for user::Role {
    fn from(from: UserRole) -> Self {
        use UserRole::*;
        match from {
            User => Self::User,
            Owner => Self::Owner,
            Admin => Self::Admin,
        }
    }
}

impl From<user::User> for User {
    fn from(from: user::User) -> Self {
        let user::User {
            id,
            name,
            email,
            password: _,
            role,
            favorites,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            email: email.into_string(),
            password: None,
            role: role.into(),
            favorites: favorites.into_iter().map(Into::into).collect(),
            created_at: created_at.into_seconds(),
        }
    }
}

impl TryFrom<User> for user::User {
    type Error = ConversionError;
    fn try_from(from: User) -> Result<Self, Self::Error> {
        let User {
            id,
            name,
            email,
            password,
            role,
            favorites,
            created_at,
        } = from;
        let password = match password {
            Some(plain) => plain.parse().map_err(|_| ConversionError::Password)?,
            None => Password::from_hash(String::new()),
        };
        Ok(Self {
            id: id.into(),
            name,
            email: EmailAddress::new_unchecked(email),
            password,
            role: role.into(),
            favorites: favorites.into_iter().map(Into::into).collect(),
            created_at: Timestamp::from_seconds(created_at),
        })
    }
}

impl From<address::Address> for Address {
    fn from(from: address::Address) -> Self {
        let address::Address {
            street,
            zip,
            city,
            state,
            country,
        } = from;
        Self {
            street,
            zip,
            city,
            state,
            country,
        }
    }
}

impl From<Address> for address::Address {
    fn from(from: Address) -> Self {
        let Address {
            street,
            zip,
            city,
            state,
            country,
        } = from;
        Self {
            street,
            zip,
            city,
            state,
            country,
        }
    }
}

impl From<vehicle::Vehicle> for Vehicle {
    fn from(from: vehicle::Vehicle) -> Self {
        let vehicle::Vehicle {
            id,
            name,
            vehicle_type,
            description,
            price_per_day,
            address,
            images,
            rating,
            reviews,
            features,
            owner,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            vehicle_type,
            description,
            price_per_day,
            address: address.into(),
            images,
            rating: rating.into(),
            reviews: reviews.into_iter().map(Into::into).collect(),
            features: features.iter().map(ToString::to_string).collect(),
            owner: owner.into(),
            created_at: created_at.into_seconds(),
        }
    }
}

impl TryFrom<Vehicle> for vehicle::Vehicle {
    type Error = ConversionError;
    fn try_from(from: Vehicle) -> Result<Self, Self::Error> {
        let Vehicle {
            id,
            name,
            vehicle_type,
            description,
            price_per_day,
            address,
            images,
            rating,
            reviews,
            features,
            owner,
            created_at,
        } = from;
        let features = vehicle::parse_features(features.iter().map(String::as_str))
            .map_err(|_| ConversionError::Feature(features.join(",")))?;
        Ok(Self {
            id: id.into(),
            name,
            vehicle_type,
            description,
            price_per_day,
            address: address.into(),
            images,
            rating: rating.into(),
            reviews: reviews.into_iter().map(Into::into).collect(),
            features,
            owner: owner.into(),
            created_at: Timestamp::from_seconds(created_at),
        })
    }
}

impl From<review::OwnerResponse> for OwnerResponse {
    fn from(from: review::OwnerResponse) -> Self {
        Self {
            text: from.text,
            responded_at: from.responded_at.into_seconds(),
        }
    }
}

impl From<OwnerResponse> for review::OwnerResponse {
    fn from(from: OwnerResponse) -> Self {
        Self {
            text: from.text,
            responded_at: Timestamp::from_seconds(from.responded_at),
        }
    }
}

impl From<review::Review> for Review {
    fn from(from: review::Review) -> Self {
        let review::Review {
            id,
            vehicle_id,
            user_id,
            created_at,
            rating,
            comment,
            photos,
            owner_response,
        } = from;
        Self {
            id: id.into(),
            vehicle: vehicle_id.into(),
            user: user_id.into(),
            rating: rating.into(),
            comment,
            photos,
            owner_response: owner_response.map(Into::into),
            created_at: created_at.into_seconds(),
        }
    }
}

impl TryFrom<Review> for review::Review {
    type Error = ConversionError;
    fn try_from(from: Review) -> Result<Self, Self::Error> {
        let Review {
            id,
            vehicle,
            user,
            rating,
            comment,
            photos,
            owner_response,
            created_at,
        } = from;
        let rating = review::RatingValue::from(rating);
        if !rating.is_valid() {
            return Err(ConversionError::RatingValue);
        }
        Ok(Self {
            id: id.into(),
            vehicle_id: vehicle.into(),
            user_id: user.into(),
            created_at: Timestamp::from_seconds(created_at),
            rating,
            comment,
            photos,
            owner_response: owner_response.map(Into::into),
        })
    }
}

impl From<booking::Booking> for Booking {
    fn from(from: booking::Booking) -> Self {
        let booking::Booking {
            id,
            vehicle_id,
            user_id,
            created_at,
            start_date,
            end_date,
            special_requests,
            status,
        } = from;
        Self {
            id: id.into(),
            vehicle: vehicle_id.into(),
            user: user_id.into(),
            start_date: start_date.into_seconds(),
            end_date: end_date.into_seconds(),
            special_requests,
            status: status.to_string(),
            created_at: created_at.into_seconds(),
        }
    }
}

impl TryFrom<Booking> for booking::Booking {
    type Error = ConversionError;
    fn try_from(from: Booking) -> Result<Self, Self::Error> {
        let Booking {
            id,
            vehicle,
            user,
            start_date,
            end_date,
            special_requests,
            status,
            created_at,
        } = from;
        let status = status
            .parse()
            .map_err(|_| ConversionError::BookingStatus(status))?;
        Ok(Self {
            id: id.into(),
            vehicle_id: vehicle.into(),
            user_id: user.into(),
            created_at: Timestamp::from_seconds(created_at),
            start_date: Timestamp::from_seconds(start_date),
            end_date: Timestamp::from_seconds(end_date),
            special_requests,
            status,
        })
    }
}
