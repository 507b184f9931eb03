use std::cmp::Reverse;

use super::prelude::*;

const RECENT_ACTIVITY_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct AdminDashboard {
    pub total_users: usize,
    pub total_vehicles: usize,
    pub total_bookings: usize,
    pub total_reviews: usize,
    pub recent_bookings: Vec<Booking>,
    pub recent_reviews: Vec<Review>,
}

/// Marketplace-wide statistics, admins only.
pub fn admin_dashboard<D: Db>(db: &D, account_id: &Id) -> Result<AdminDashboard> {
    let account = db.get_user(account_id.as_ref())?;
    if account.role < Role::Admin {
        return Err(Error::Forbidden);
    }

    let total_users = db.count_users()?;
    let total_vehicles = db.count_vehicles()?;
    let total_bookings = db.count_bookings()?;
    let total_reviews = db.count_reviews()?;

    let mut recent_bookings = db.all_bookings()?;
    recent_bookings.sort_by_key(|b| Reverse(b.created_at));
    recent_bookings.truncate(RECENT_ACTIVITY_LIMIT);

    let mut recent_reviews = db.all_reviews()?;
    recent_reviews.sort_by_key(|r| Reverse(r.created_at));
    recent_reviews.truncate(RECENT_ACTIVITY_LIMIT);

    Ok(AdminDashboard {
        total_users,
        total_vehicles,
        total_bookings,
        total_reviews,
        recent_bookings,
        recent_reviews,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleDashboard {
    pub pending_bookings: usize,
    pub confirmed_bookings: usize,
    pub cancelled_bookings: usize,
    pub total_reviews: usize,
    pub rating: AvgRating,
}

/// Per-listing statistics, visible to the owner only.
pub fn vehicle_dashboard<R>(repo: &R, owner_id: &Id, vehicle_id: &str) -> Result<VehicleDashboard>
where
    R: VehicleRepo + ReviewRepo + BookingRepo,
{
    let vehicle = repo.get_vehicle(vehicle_id)?;
    if !vehicle.is_owned_by(owner_id) {
        return Err(Error::Forbidden);
    }
    let bookings = repo.bookings_of_vehicle(vehicle_id)?;
    let count_by = |status: BookingStatus| bookings.iter().filter(|b| b.status == status).count();
    Ok(VehicleDashboard {
        pending_bookings: count_by(BookingStatus::Pending),
        confirmed_bookings: count_by(BookingStatus::Confirmed),
        cancelled_bookings: count_by(BookingStatus::Cancelled),
        total_reviews: repo.reviews_of_vehicle(vehicle_id)?.len(),
        rating: vehicle.rating,
    })
}
