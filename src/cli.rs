use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "openrentdb", version, about = "Vehicle rental marketplace backend tools")]
pub struct Cli {
    /// Path to the JSON dataset file
    #[arg(long, env = "OPENRENTDB_DATASET", default_value = "dataset.json")]
    pub dataset: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print recommended vehicles for a user
    Recommend {
        /// User id or e-mail address
        user: String,
        /// Emit the recommendations as JSON
        #[arg(long)]
        json: bool,
    },
    /// Recompute and persist the aggregate rating of a vehicle
    Rating {
        /// Vehicle id
        vehicle: String,
    },
    /// Add a review and refresh the vehicle rating
    Review {
        /// User id or e-mail address of the author
        #[arg(long)]
        user: String,
        /// Vehicle id
        #[arg(long)]
        vehicle: String,
        /// Rating in the range 1..=5
        #[arg(long)]
        rating: i8,
        /// Review text
        #[arg(long)]
        comment: String,
    },
    /// Print marketplace statistics
    Stats,
}
