use crate::repositories::*;

pub trait Db: UserRepo + VehicleRepo + ReviewRepo + BookingRepo {}

impl<T> Db for T where T: UserRepo + VehicleRepo + ReviewRepo + BookingRepo {}
