use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use anyhow::{Context, Result};
use ordb_boundary::Dataset;
use ordb_core::{entities::*, repositories::*};
use ordb_db_mem::MemoryDb;

pub fn load_dataset(path: &Path) -> Result<MemoryDb> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open dataset {}", path.display()))?;
    let dataset: Dataset = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse dataset {}", path.display()))?;

    let db = MemoryDb::default();
    for user in dataset.users {
        db.create_user(&User::try_from(user)?)?;
    }
    for vehicle in dataset.vehicles {
        db.create_vehicle(&Vehicle::try_from(vehicle)?)?;
    }
    for review in dataset.reviews {
        db.create_review(&Review::try_from(review)?)?;
    }
    for booking in dataset.bookings {
        db.create_booking(&Booking::try_from(booking)?)?;
    }
    log::info!(
        "Loaded dataset {}: {} users, {} vehicles, {} reviews, {} bookings",
        path.display(),
        db.count_users()?,
        db.count_vehicles()?,
        db.count_reviews()?,
        db.count_bookings()?
    );
    Ok(db)
}

pub fn save_dataset(db: &MemoryDb, path: &Path) -> Result<()> {
    let dataset = Dataset {
        users: db.all_users()?.into_iter().map(Into::into).collect(),
        vehicles: db.all_vehicles()?.into_iter().map(Into::into).collect(),
        reviews: db.all_reviews()?.into_iter().map(Into::into).collect(),
        bookings: db.all_bookings()?.into_iter().map(Into::into).collect(),
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to write dataset {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &dataset)?;
    Ok(())
}
