use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub vehicle: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub special_requests: Option<String>,
}

pub fn create_booking<R>(repo: &R, user_id: &Id, b: NewBooking) -> Result<Booking>
where
    R: VehicleRepo + BookingRepo,
{
    if b.end_date <= b.start_date {
        return Err(Error::DateRange);
    }
    let vehicle = repo.get_vehicle(&b.vehicle)?;
    let booking = Booking {
        id: Id::new(),
        vehicle_id: vehicle.id,
        user_id: user_id.clone(),
        created_at: Timestamp::now(),
        start_date: b.start_date,
        end_date: b.end_date,
        special_requests: b.special_requests,
        status: BookingStatus::Pending,
    };
    log::debug!("Creating booking {} for user {}", booking.id, user_id);
    repo.create_booking(&booking)?;
    Ok(booking)
}
