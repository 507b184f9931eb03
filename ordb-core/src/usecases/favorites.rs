use super::prelude::*;

/// Bookmark or un-bookmark a vehicle. Returns whether the vehicle is a
/// favorite afterwards.
pub fn toggle_favorite_vehicle<R>(repo: &R, user_id: &Id, vehicle_id: &str) -> Result<bool>
where
    R: UserRepo + VehicleRepo,
{
    let vehicle = repo.get_vehicle(vehicle_id)?;
    let mut user = repo.get_user(user_id.as_ref())?;
    let was_favorite = user.favorites.contains(&vehicle.id);
    if was_favorite {
        user.favorites.retain(|id| *id != vehicle.id);
    } else {
        user.favorites.push(vehicle.id);
    }
    repo.update_user(&user)?;
    Ok(!was_favorite)
}

pub fn load_favorite_vehicles<R>(repo: &R, user_id: &Id) -> Result<Vec<Vehicle>>
where
    R: UserRepo + VehicleRepo,
{
    let user = repo.get_user(user_id.as_ref())?;
    let mut vehicles = Vec::with_capacity(user.favorites.len());
    for id in &user.favorites {
        match repo.get_vehicle(id.as_ref()) {
            Ok(vehicle) => vehicles.push(vehicle),
            // A favorite may reference a listing that was deleted.
            Err(RepoError::NotFound) => (),
            Err(err) => return Err(err.into()),
        }
    }
    Ok(vehicles)
}
