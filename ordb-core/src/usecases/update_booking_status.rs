use super::prelude::*;

pub fn update_booking_status<R>(
    repo: &R,
    owner_id: &Id,
    booking_id: &str,
    status: BookingStatus,
) -> Result<Booking>
where
    R: VehicleRepo + BookingRepo,
{
    let mut booking = repo.get_booking(booking_id)?;
    let vehicle = repo.get_vehicle(booking.vehicle_id.as_ref())?;
    if !vehicle.is_owned_by(owner_id) {
        return Err(Error::Forbidden);
    }
    if booking.status.is_terminal() {
        return Err(Error::BookingStatusTransition);
    }
    booking.status = status;
    repo.update_booking(&booking)?;
    if status == BookingStatus::Confirmed {
        log::info!(
            "Booking {} of vehicle {} confirmed for user {}",
            booking.id,
            booking.vehicle_id,
            booking.user_id
        );
    }
    Ok(booking)
}
