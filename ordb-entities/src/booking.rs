use strum::{Display, EnumString};

use crate::{id::*, time::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// A cancelled booking never changes its status again.
    pub fn is_terminal(self) -> bool {
        self == Self::Cancelled
    }
}

impl Default for BookingStatus {
    fn default() -> Self {
        Self::Pending
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id               : Id,
    pub vehicle_id       : Id,
    pub user_id          : Id,
    pub created_at       : Timestamp,
    pub start_date       : Timestamp,
    pub end_date         : Timestamp,
    pub special_requests : Option<String>,
    pub status           : BookingStatus,
}
