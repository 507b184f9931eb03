use anyhow::{anyhow, Result};
use ordb_application::prelude as flows;
use ordb_core::{entities::*, repositories::*, usecases};
use ordb_db_mem::MemoryDb;

use crate::{
    cli::{Cli, Command},
    seed,
};

pub fn run(args: Cli) -> Result<()> {
    let db = seed::load_dataset(&args.dataset)?;
    match args.command {
        Command::Recommend { user, json } => {
            let user = resolve_user(&db, &user)?;
            recommend(&db, &user, json)
        }
        Command::Rating { vehicle } => {
            recompute_rating(&db, &vehicle)?;
            seed::save_dataset(&db, &args.dataset)
        }
        Command::Review {
            user,
            vehicle,
            rating,
            comment,
        } => {
            let author = resolve_user(&db, &user)?;
            add_review(&db, &author, vehicle, rating, comment)?;
            seed::save_dataset(&db, &args.dataset)
        }
        Command::Stats => stats(&db),
    }
}

fn resolve_user(db: &MemoryDb, key: &str) -> Result<User> {
    if let Ok(user) = db.get_user(key) {
        return Ok(user);
    }
    let email = EmailAddress::new_unchecked(key.to_owned());
    db.try_get_user_by_email(&email)?
        .ok_or_else(|| anyhow!("No user with id or e-mail '{key}'"))
}

fn recommend(db: &MemoryDb, user: &User, json: bool) -> Result<()> {
    let recommended = usecases::recommend_vehicles(db, &user.id)?;
    if json {
        let recommended: Vec<ordb_boundary::RecommendedVehicle> = recommended
            .into_iter()
            .map(|r| ordb_boundary::RecommendedVehicle {
                vehicle: r.vehicle.into(),
                recommendation_score: r.score,
            })
            .collect();
        serde_json::to_writer_pretty(std::io::stdout(), &recommended)?;
        println!();
        return Ok(());
    }
    if recommended.is_empty() {
        println!("No recommendations for {}", user.name);
        return Ok(());
    }
    println!("Recommendations for {}:", user.name);
    for usecases::RecommendedVehicle { vehicle, score } in recommended {
        println!("  {score:5.2}  {} ({})", vehicle.name, vehicle.id);
    }
    Ok(())
}

fn recompute_rating(db: &MemoryDb, vehicle_id: &str) -> Result<()> {
    match usecases::recompute_vehicle_rating(db, vehicle_id)? {
        Some(rating) => println!("Rating of vehicle {vehicle_id} is now {rating}"),
        None => println!("Vehicle {vehicle_id} has no reviews, rating left unchanged"),
    }
    Ok(())
}

fn add_review(
    db: &MemoryDb,
    author: &User,
    vehicle: String,
    rating: i8,
    comment: String,
) -> Result<()> {
    let review_id = flows::create_review(
        db,
        &author.id,
        usecases::NewReview {
            vehicle: vehicle.clone(),
            rating: rating.into(),
            comment,
            photos: vec![],
        },
    )
    .map_err(|err| anyhow!("Failed to add review: {err}"))?;
    let vehicle = db.get_vehicle(&vehicle)?;
    println!(
        "Added review {review_id}; rating of {} is now {}",
        vehicle.name, vehicle.rating
    );
    Ok(())
}

fn stats(db: &MemoryDb) -> Result<()> {
    println!("Users:    {:>6}", db.count_users()?);
    println!("Vehicles: {:>6}", db.count_vehicles()?);
    println!("Bookings: {:>6}", db.count_bookings()?);
    println!("Reviews:  {:>6}", db.count_reviews()?);
    Ok(())
}
