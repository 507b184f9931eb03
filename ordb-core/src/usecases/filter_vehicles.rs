use std::cmp::Ordering;

use super::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct VehicleQuery {
    pub vehicle_type: Option<String>,
    pub features: Vec<Feature>,
    pub max_price_per_day: Option<f64>,
    /// Matched case-insensitively against name and city.
    pub text: Option<String>,
}

impl VehicleQuery {
    pub fn is_empty(&self) -> bool {
        let Self {
            vehicle_type,
            features,
            max_price_per_day,
            text,
        } = self;
        vehicle_type.is_none() && features.is_empty() && max_price_per_day.is_none() && text.is_none()
    }
}

/// Listings matching the query, best rated first.
pub fn filter_vehicles<R>(repo: &R, query: &VehicleQuery) -> Result<Vec<Vehicle>>
where
    R: VehicleRepo,
{
    let mut vehicles = repo.all_vehicles()?;
    vehicles.retain(|v| matches_query(v, query));
    vehicles.sort_by(|a, b| {
        f64::from(b.rating)
            .partial_cmp(&f64::from(a.rating))
            .unwrap_or(Ordering::Equal)
    });
    Ok(vehicles)
}

fn matches_query(vehicle: &Vehicle, query: &VehicleQuery) -> bool {
    if let Some(vehicle_type) = &query.vehicle_type {
        if !vehicle.vehicle_type.eq_ignore_ascii_case(vehicle_type) {
            return false;
        }
    }
    if !query
        .features
        .iter()
        .all(|feature| vehicle.features.contains(feature))
    {
        return false;
    }
    if let Some(max_price) = query.max_price_per_day {
        if vehicle.price_per_day > max_price {
            return false;
        }
    }
    if let Some(text) = &query.text {
        let text = text.to_lowercase();
        let name_matches = vehicle.name.to_lowercase().contains(&text);
        let city_matches = vehicle
            .address
            .city
            .as_deref()
            .map(|city| city.to_lowercase().contains(&text))
            .unwrap_or(false);
        if !name_matches && !city_matches {
            return false;
        }
    }
    true
}
