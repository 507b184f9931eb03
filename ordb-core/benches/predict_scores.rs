use brunch::{Bench, Benches};
use ordb_core::recommend::{predict_scores, RatingMatrix, DEFAULT_NEIGHBORHOOD_SIZE};
use ordb_entities::{builders::*, review::*, user::*, vehicle::*};

fn main() {
    let mut benches = Benches::default();

    let (users, vehicles, reviews) = seed_marketplace(200, 100);
    let matrix = RatingMatrix::from_reviews(&users, &vehicles, &reviews);

    benches.push(
        Bench::new("Build a 200 x 100 rating matrix")
            .run(|| RatingMatrix::from_reviews(&users, &vehicles, &reviews)),
    );
    benches.push(
        Bench::new("Predict scores for one user against 200 x 100 ratings")
            .run(|| predict_scores(&matrix, 0, DEFAULT_NEIGHBORHOOD_SIZE)),
    );
    benches.finish();
}

fn seed_marketplace(
    user_count: usize,
    vehicle_count: usize,
) -> (Vec<User>, Vec<Vehicle>, Vec<Review>) {
    let users: Vec<User> = (0..user_count)
        .map(|i| User::build().id(&format!("u{i}")).finish())
        .collect();
    let vehicles: Vec<Vehicle> = (0..vehicle_count)
        .map(|i| Vehicle::build().id(&format!("v{i}")).finish())
        .collect();
    let reviews: Vec<Review> = users
        .iter()
        .enumerate()
        .flat_map(|(i, user)| {
            vehicles
                .iter()
                .enumerate()
                .filter(move |(j, _)| (i + j) % 3 == 0)
                .map(move |(j, vehicle)| {
                    Review::build()
                        .user(user.id.as_str())
                        .vehicle(vehicle.id.as_str())
                        .rating(((i + j) % 5 + 1) as i8)
                        .finish()
                })
        })
        .collect();
    (users, vehicles, reviews)
}
