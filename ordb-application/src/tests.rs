use ordb_core::repositories::*;
use ordb_db_mem::MemoryDb;

use super::{prelude as flows, *};

struct BackendFixture {
    db: MemoryDb,
}

impl BackendFixture {
    fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self {
            db: MemoryDb::default(),
        }
    }

    fn register_user(&self, name: &str, email: &str) -> Id {
        flows::register_user(
            &self.db,
            usecases::NewUser {
                name: name.into(),
                email: EmailAddress::new_unchecked(email.into()),
                password: "secret".into(),
            },
        )
        .unwrap()
        .id
    }

    fn create_vehicle(&self, owner_id: &Id, name: &str) -> Id {
        flows::create_vehicle(
            &self.db,
            owner_id,
            usecases::NewVehicle {
                name: name.into(),
                vehicle_type: "car".into(),
                description: "a test listing".into(),
                price_per_day: 42.0,
                address: Address::default(),
                images: vec![],
                features: vec![],
            },
        )
        .unwrap()
        .id
    }

    fn create_review(&self, author_id: &Id, vehicle_id: &Id, rating: i8) -> String {
        flows::create_review(
            &self.db,
            author_id,
            usecases::NewReview {
                vehicle: vehicle_id.to_string(),
                rating: rating.into(),
                comment: "a comment".into(),
                photos: vec![],
            },
        )
        .unwrap()
    }

    fn vehicle(&self, id: &Id) -> Vehicle {
        self.db.get_vehicle(id.as_ref()).unwrap()
    }
}

#[test]
fn creating_reviews_updates_the_aggregate_rating() {
    let fixture = BackendFixture::new();
    let owner = fixture.register_user("Owner", "owner@example.org");
    let alice = fixture.register_user("Alice", "alice@example.org");
    let bob = fixture.register_user("Bob", "bob@example.org");
    let carol = fixture.register_user("Carol", "carol@example.org");
    let vehicle = fixture.create_vehicle(&owner, "Camper");

    fixture.create_review(&alice, &vehicle, 4);
    fixture.create_review(&bob, &vehicle, 5);
    assert_eq!(fixture.vehicle(&vehicle).rating, 4.5.into());

    fixture.create_review(&carol, &vehicle, 3);
    let vehicle = fixture.vehicle(&vehicle);
    assert_eq!(vehicle.rating, 4.0.into());
    assert_eq!(vehicle.reviews.len(), 3);
}

#[test]
fn a_second_review_of_the_same_vehicle_is_rejected() {
    let fixture = BackendFixture::new();
    let owner = fixture.register_user("Owner", "owner@example.org");
    let alice = fixture.register_user("Alice", "alice@example.org");
    let vehicle = fixture.create_vehicle(&owner, "Camper");

    fixture.create_review(&alice, &vehicle, 4);
    let result = flows::create_review(
        &fixture.db,
        &alice,
        usecases::NewReview {
            vehicle: vehicle.to_string(),
            rating: 5.into(),
            comment: "changed my mind".into(),
            photos: vec![],
        },
    );
    assert!(matches!(
        result,
        Err(error::AppError::Business(error::BError::Parameter(
            usecases::Error::DuplicateReview
        )))
    ));
    assert_eq!(fixture.vehicle(&vehicle).reviews.len(), 1);
}

#[test]
fn review_updates_do_not_refresh_the_aggregate_rating() {
    let fixture = BackendFixture::new();
    let owner = fixture.register_user("Owner", "owner@example.org");
    let alice = fixture.register_user("Alice", "alice@example.org");
    let vehicle = fixture.create_vehicle(&owner, "Camper");
    let review_id = fixture.create_review(&alice, &vehicle, 4);
    assert_eq!(fixture.vehicle(&vehicle).rating, 4.0.into());

    flows::update_review(
        &fixture.db,
        &alice,
        &review_id,
        usecases::ReviewUpdate {
            rating: Some(1.into()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(fixture.vehicle(&vehicle).rating, 4.0.into());
}

#[test]
fn deleting_a_review_keeps_the_last_known_rating() {
    let fixture = BackendFixture::new();
    let owner = fixture.register_user("Owner", "owner@example.org");
    let alice = fixture.register_user("Alice", "alice@example.org");
    let vehicle = fixture.create_vehicle(&owner, "Camper");
    let review_id = fixture.create_review(&alice, &vehicle, 4);

    flows::delete_review(&fixture.db, &alice, &review_id).unwrap();
    let vehicle = fixture.vehicle(&vehicle);
    assert!(vehicle.reviews.is_empty());
    assert_eq!(vehicle.rating, 4.0.into());
}

#[test]
fn recommendations_surface_what_similar_users_liked() {
    let fixture = BackendFixture::new();
    let owner = fixture.register_user("Owner", "owner@example.org");
    let alice = fixture.register_user("Alice", "alice@example.org");
    let bob = fixture.register_user("Bob", "bob@example.org");
    let camper = fixture.create_vehicle(&owner, "Camper");
    let roadster = fixture.create_vehicle(&owner, "Roadster");

    fixture.create_review(&alice, &camper, 5);
    fixture.create_review(&bob, &camper, 5);
    fixture.create_review(&bob, &roadster, 4);

    let recommended = usecases::recommend_vehicles(&fixture.db, &alice).unwrap();
    assert_eq!(recommended.len(), 1);
    assert_eq!(recommended[0].vehicle.id, roadster);
    assert!(recommended[0].score > 0.0);
}

#[test]
fn recommendations_for_a_user_without_reviews_are_empty_but_ok() {
    let fixture = BackendFixture::new();
    let owner = fixture.register_user("Owner", "owner@example.org");
    let alice = fixture.register_user("Alice", "alice@example.org");
    let bob = fixture.register_user("Bob", "bob@example.org");
    let camper = fixture.create_vehicle(&owner, "Camper");
    fixture.create_review(&bob, &camper, 5);

    let recommended = usecases::recommend_vehicles(&fixture.db, &alice).unwrap();
    assert!(recommended.is_empty());
}

#[test]
fn booking_lifecycle() {
    let fixture = BackendFixture::new();
    let owner = fixture.register_user("Owner", "owner@example.org");
    let alice = fixture.register_user("Alice", "alice@example.org");
    let vehicle = fixture.create_vehicle(&owner, "Camper");

    let booking = flows::create_booking(
        &fixture.db,
        &alice,
        usecases::NewBooking {
            vehicle: vehicle.to_string(),
            start_date: Timestamp::from_seconds(1_000),
            end_date: Timestamp::from_seconds(90_000),
            special_requests: Some("child seat".into()),
        },
    )
    .unwrap();
    assert_eq!(booking.status, BookingStatus::Pending);

    // Guests cannot confirm their own bookings.
    assert!(flows::update_booking_status(
        &fixture.db,
        &alice,
        booking.id.as_ref(),
        BookingStatus::Confirmed
    )
    .is_err());

    let confirmed = flows::update_booking_status(
        &fixture.db,
        &owner,
        booking.id.as_ref(),
        BookingStatus::Confirmed,
    )
    .unwrap();
    assert_eq!(confirmed.status, BookingStatus::Confirmed);
}
