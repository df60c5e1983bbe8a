pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod manager;
pub mod schema;
pub mod track;
pub mod unit_of_work;

pub use database::Database;
pub use error::{Result, StoreError};
pub use manager::create_and_store_track_info;
pub use track::TrackInfo;
pub use unit_of_work::UnitOfWork;
