use super::*;

pub fn create_vehicle<D: Db>(
    db: &D,
    owner_id: &Id,
    vehicle: usecases::NewVehicle,
) -> Result<Vehicle> {
    Ok(usecases::create_vehicle(db, owner_id, vehicle)?)
}
