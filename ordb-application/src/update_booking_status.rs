use super::*;

pub fn update_booking_status<D: Db>(
    db: &D,
    owner_id: &Id,
    booking_id: &str,
    status: BookingStatus,
) -> Result<Booking> {
    Ok(usecases::update_booking_status(
        db, owner_id, booking_id, status,
    )?)
}
