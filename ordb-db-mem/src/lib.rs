//! Thread-safe in-memory implementation of the `ordb-core` repositories.
//!
//! Used by the command line tools and by integration tests. All data is
//! lost when the process exits; persistence across invocations is the
//! caller's job.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use ordb_core::{
    entities::*,
    repositories::{Error, *},
};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Default)]
pub struct MemoryDb {
    users: RwLock<Vec<User>>,
    vehicles: RwLock<Vec<Vehicle>>,
    reviews: RwLock<Vec<Review>>,
    bookings: RwLock<Vec<Booking>>,
}

// A poisoned lock only indicates that another thread panicked while
// holding it; the plain data inside is still usable.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

trait Record {
    fn primary_key(&self) -> &str;
}

impl Record for User {
    fn primary_key(&self) -> &str {
        self.id.as_ref()
    }
}

impl Record for Vehicle {
    fn primary_key(&self) -> &str {
        self.id.as_ref()
    }
}

impl Record for Review {
    fn primary_key(&self) -> &str {
        self.id.as_ref()
    }
}

impl Record for Booking {
    fn primary_key(&self) -> &str {
        self.id.as_ref()
    }
}

impl MemoryDb {
    fn insert<T: Record + Clone>(lock: &RwLock<Vec<T>>, record: &T) -> Result<()> {
        let mut records = write(lock);
        if records.iter().any(|r| r.primary_key() == record.primary_key()) {
            return Err(Error::AlreadyExists);
        }
        records.push(record.clone());
        Ok(())
    }

    fn replace<T: Record + Clone>(lock: &RwLock<Vec<T>>, record: &T) -> Result<()> {
        let mut records = write(lock);
        match records
            .iter_mut()
            .find(|r| r.primary_key() == record.primary_key())
        {
            Some(slot) => {
                *slot = record.clone();
                Ok(())
            }
            None => Err(Error::NotFound),
        }
    }

    fn remove<T: Record>(lock: &RwLock<Vec<T>>, id: &str) -> Result<()> {
        let mut records = write(lock);
        match records.iter().position(|r| r.primary_key() == id) {
            Some(pos) => {
                records.remove(pos);
                Ok(())
            }
            None => Err(Error::NotFound),
        }
    }

    fn find<T: Record + Clone>(lock: &RwLock<Vec<T>>, id: &str) -> Result<T> {
        read(lock)
            .iter()
            .find(|r| r.primary_key() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn filtered<T: Clone>(lock: &RwLock<Vec<T>>, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        read(lock).iter().filter(|r| predicate(r)).cloned().collect()
    }
}

impl UserRepo for MemoryDb {
    fn create_user(&self, user: &User) -> Result<()> {
        Self::insert(&self.users, user)
    }

    fn update_user(&self, user: &User) -> Result<()> {
        Self::replace(&self.users, user)
    }

    fn delete_user(&self, id: &str) -> Result<()> {
        Self::remove(&self.users, id)
    }

    fn all_users(&self) -> Result<Vec<User>> {
        Ok(read(&self.users).clone())
    }

    fn count_users(&self) -> Result<usize> {
        Ok(read(&self.users).len())
    }

    fn get_user(&self, id: &str) -> Result<User> {
        Self::find(&self.users, id)
    }

    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        self.try_get_user_by_email(email)?.ok_or(Error::NotFound)
    }

    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        Ok(read(&self.users).iter().find(|u| u.email == *email).cloned())
    }
}

impl VehicleRepo for MemoryDb {
    fn create_vehicle(&self, vehicle: &Vehicle) -> Result<()> {
        Self::insert(&self.vehicles, vehicle)
    }

    fn update_vehicle(&self, vehicle: &Vehicle) -> Result<()> {
        Self::replace(&self.vehicles, vehicle)
    }

    fn delete_vehicle(&self, id: &str) -> Result<()> {
        Self::remove(&self.vehicles, id)
    }

    fn get_vehicle(&self, id: &str) -> Result<Vehicle> {
        Self::find(&self.vehicles, id)
    }

    fn all_vehicles(&self) -> Result<Vec<Vehicle>> {
        Ok(read(&self.vehicles).clone())
    }

    fn count_vehicles(&self) -> Result<usize> {
        Ok(read(&self.vehicles).len())
    }

    fn vehicles_of_owner(&self, owner_id: &str) -> Result<Vec<Vehicle>> {
        Ok(Self::filtered(&self.vehicles, |v| {
            v.owner.as_str() == owner_id
        }))
    }
}

impl ReviewRepo for MemoryDb {
    fn create_review(&self, review: &Review) -> Result<()> {
        Self::insert(&self.reviews, review)
    }

    fn update_review(&self, review: &Review) -> Result<()> {
        Self::replace(&self.reviews, review)
    }

    fn delete_review(&self, id: &str) -> Result<()> {
        Self::remove(&self.reviews, id)
    }

    fn get_review(&self, id: &str) -> Result<Review> {
        Self::find(&self.reviews, id)
    }

    fn all_reviews(&self) -> Result<Vec<Review>> {
        Ok(read(&self.reviews).clone())
    }

    fn count_reviews(&self) -> Result<usize> {
        Ok(read(&self.reviews).len())
    }

    fn reviews_of_vehicle(&self, vehicle_id: &str) -> Result<Vec<Review>> {
        Ok(Self::filtered(&self.reviews, |r| {
            r.vehicle_id.as_str() == vehicle_id
        }))
    }

    fn reviews_of_user(&self, user_id: &str) -> Result<Vec<Review>> {
        Ok(Self::filtered(&self.reviews, |r| {
            r.user_id.as_str() == user_id
        }))
    }

    fn try_get_review_of_user_for_vehicle(
        &self,
        user_id: &str,
        vehicle_id: &str,
    ) -> Result<Option<Review>> {
        Ok(read(&self.reviews)
            .iter()
            .find(|r| r.user_id.as_str() == user_id && r.vehicle_id.as_str() == vehicle_id)
            .cloned())
    }
}

impl BookingRepo for MemoryDb {
    fn create_booking(&self, booking: &Booking) -> Result<()> {
        Self::insert(&self.bookings, booking)
    }

    fn update_booking(&self, booking: &Booking) -> Result<()> {
        Self::replace(&self.bookings, booking)
    }

    fn get_booking(&self, id: &str) -> Result<Booking> {
        Self::find(&self.bookings, id)
    }

    fn all_bookings(&self) -> Result<Vec<Booking>> {
        Ok(read(&self.bookings).clone())
    }

    fn count_bookings(&self) -> Result<usize> {
        Ok(read(&self.bookings).len())
    }

    fn bookings_of_user(&self, user_id: &str) -> Result<Vec<Booking>> {
        Ok(Self::filtered(&self.bookings, |b| {
            b.user_id.as_str() == user_id
        }))
    }

    fn bookings_of_vehicle(&self, vehicle_id: &str) -> Result<Vec<Booking>> {
        Ok(Self::filtered(&self.bookings, |b| {
            b.vehicle_id.as_str() == vehicle_id
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordb_entities::builders::*;

    #[test]
    fn insertion_order_is_preserved() {
        let db = MemoryDb::default();
        for id in ["c", "a", "b"] {
            db.create_user(&User::build().id(id).finish()).unwrap();
        }
        let ids: Vec<_> = db
            .all_users()
            .unwrap()
            .into_iter()
            .map(|u| String::from(u.id))
            .collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let db = MemoryDb::default();
        let vehicle = Vehicle::build().id("v").finish();
        db.create_vehicle(&vehicle).unwrap();
        assert!(matches!(
            db.create_vehicle(&vehicle),
            Err(Error::AlreadyExists)
        ));
    }

    #[test]
    fn update_of_missing_record_fails() {
        let db = MemoryDb::default();
        let booking = Booking::build().id("b").finish();
        assert!(matches!(db.update_booking(&booking), Err(Error::NotFound)));
    }
}
