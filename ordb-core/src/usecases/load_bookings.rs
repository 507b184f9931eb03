use std::cmp::Reverse;

use super::prelude::*;

/// Bookings made by a user, most recent start date first, optionally
/// filtered by status.
pub fn load_bookings_of_user<R>(
    repo: &R,
    user_id: &Id,
    status: Option<BookingStatus>,
) -> Result<Vec<Booking>>
where
    R: BookingRepo,
{
    let mut bookings = repo.bookings_of_user(user_id.as_ref())?;
    if let Some(status) = status {
        bookings.retain(|b| b.status == status);
    }
    bookings.sort_by_key(|b| Reverse(b.start_date));
    Ok(bookings)
}

/// Bookings of a vehicle, visible to its owner only.
pub fn load_bookings_of_vehicle<R>(
    repo: &R,
    owner_id: &Id,
    vehicle_id: &str,
) -> Result<Vec<Booking>>
where
    R: VehicleRepo + BookingRepo,
{
    let vehicle = repo.get_vehicle(vehicle_id)?;
    if !vehicle.is_owned_by(owner_id) {
        return Err(Error::Forbidden);
    }
    let mut bookings = repo.bookings_of_vehicle(vehicle_id)?;
    bookings.sort_by_key(|b| Reverse(b.start_date));
    Ok(bookings)
}
