use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub name: String,
    pub vehicle_type: String,
    pub description: String,
    pub price_per_day: f64,
    pub address: Address,
    pub images: Vec<String>,
    pub features: Vec<Feature>,
}

pub fn create_vehicle<R>(repo: &R, owner_id: &Id, v: NewVehicle) -> Result<Vehicle>
where
    R: VehicleRepo,
{
    validate_listing(&v.name, &v.vehicle_type, v.price_per_day)?;
    let vehicle = Vehicle {
        id: Id::new(),
        name: v.name,
        vehicle_type: v.vehicle_type,
        description: v.description,
        price_per_day: v.price_per_day,
        address: v.address,
        images: v.images,
        rating: AvgRating::default(),
        reviews: vec![],
        features: v.features,
        owner: owner_id.clone(),
        created_at: Timestamp::now(),
    };
    log::debug!("Creating vehicle listing {}", vehicle.id);
    repo.create_vehicle(&vehicle)?;
    Ok(vehicle)
}

pub(super) fn validate_listing(name: &str, vehicle_type: &str, price_per_day: f64) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Name);
    }
    if vehicle_type.trim().is_empty() {
        return Err(Error::VehicleType);
    }
    if !validate::is_valid_daily_price(price_per_day) {
        return Err(Error::Price);
    }
    Ok(())
}
