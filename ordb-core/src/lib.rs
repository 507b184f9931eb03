pub mod db;
pub mod rating;
pub mod recommend;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use ordb_entities::{
        address::*, booking::*, email::*, id::*, password::*, review::*, time::*, user::*,
        vehicle::*,
    };
}
