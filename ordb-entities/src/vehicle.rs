use std::str::FromStr;

use strum::{Display, EnumCount, EnumIter, EnumString};

use crate::{address::*, id::*, review::*, time::*};

/// Equipment and rental options a vehicle can be listed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Feature {
    OpenType,
    WithDriver,
    WithoutDriver,
    WheelchairAccessible,
    Wifi,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id            : Id,
    pub name          : String,
    pub vehicle_type  : String,
    pub description   : String,
    pub price_per_day : f64,
    pub address       : Address,
    pub images        : Vec<String>,
    /// Derived from the current set of reviews, see `ordb-core`.
    pub rating        : AvgRating,
    pub reviews       : Vec<Id>,
    pub features      : Vec<Feature>,
    pub owner         : Id,
    pub created_at    : Timestamp,
}

impl Vehicle {
    pub fn is_owned_by(&self, user_id: &Id) -> bool {
        self.owner == *user_id
    }
}

pub fn parse_features<'a>(
    from: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<Feature>, strum::ParseError> {
    from.into_iter().map(Feature::from_str).collect()
}
