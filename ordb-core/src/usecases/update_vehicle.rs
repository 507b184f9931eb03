use super::prelude::*;

use super::create_vehicle::validate_listing;

/// Only fields that are set are applied.
#[derive(Debug, Clone, Default)]
pub struct VehicleUpdate {
    pub name: Option<String>,
    pub vehicle_type: Option<String>,
    pub description: Option<String>,
    pub price_per_day: Option<f64>,
    pub address: Option<Address>,
    pub images: Option<Vec<String>>,
    pub features: Option<Vec<Feature>>,
}

pub fn update_vehicle<R>(
    repo: &R,
    owner_id: &Id,
    vehicle_id: &str,
    update: VehicleUpdate,
) -> Result<Vehicle>
where
    R: VehicleRepo,
{
    let mut vehicle = repo.get_vehicle(vehicle_id)?;
    if !vehicle.is_owned_by(owner_id) {
        return Err(Error::Forbidden);
    }
    let VehicleUpdate {
        name,
        vehicle_type,
        description,
        price_per_day,
        address,
        images,
        features,
    } = update;
    if let Some(name) = name {
        vehicle.name = name;
    }
    if let Some(vehicle_type) = vehicle_type {
        vehicle.vehicle_type = vehicle_type;
    }
    if let Some(description) = description {
        vehicle.description = description;
    }
    if let Some(price_per_day) = price_per_day {
        vehicle.price_per_day = price_per_day;
    }
    if let Some(address) = address {
        vehicle.address = address;
    }
    if let Some(images) = images {
        vehicle.images = images;
    }
    if let Some(features) = features {
        vehicle.features = features;
    }
    validate_listing(&vehicle.name, &vehicle.vehicle_type, vehicle.price_per_day)?;
    repo.update_vehicle(&vehicle)?;
    Ok(vehicle)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use ordb_entities::builders::*;

    fn db_with_vehicle() -> MockDb {
        let db = MockDb::default();
        db.vehicles.borrow_mut().push(
            Vehicle::build()
                .id("v")
                .name("Old name")
                .price_per_day(50.0)
                .owner("owner")
                .finish(),
        );
        db
    }

    #[test]
    fn owner_updates_name_and_price() {
        let db = db_with_vehicle();
        let update = VehicleUpdate {
            name: Some("New name".into()),
            price_per_day: Some(70.0),
            ..Default::default()
        };
        let vehicle = update_vehicle(&db, &"owner".into(), "v", update).unwrap();
        assert_eq!(vehicle.name, "New name");
        assert_eq!(db.vehicles.borrow()[0].price_per_day, 70.0);
    }

    #[test]
    fn only_the_owner_may_update() {
        let db = db_with_vehicle();
        assert!(matches!(
            update_vehicle(&db, &"intruder".into(), "v", VehicleUpdate::default()),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn updated_listing_is_validated() {
        let db = db_with_vehicle();
        let update = VehicleUpdate {
            price_per_day: Some(-1.0),
            ..Default::default()
        };
        assert!(matches!(
            update_vehicle(&db, &"owner".into(), "v", update),
            Err(Error::Price)
        ));
    }
}
