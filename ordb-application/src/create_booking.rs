use super::*;

pub fn create_booking<D: Db>(
    db: &D,
    user_id: &Id,
    booking: usecases::NewBooking,
) -> Result<Booking> {
    let booking = usecases::create_booking(db, user_id, booking)?;
    info!(
        "User {} requested booking {} for vehicle {}",
        user_id, booking.id, booking.vehicle_id
    );
    Ok(booking)
}
