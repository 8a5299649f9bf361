//! # wardrobe-storage
//!
//! SQLite persistence layer for the wardrobe engine: connection
//! management, schema initialization, and per-table query modules.

pub mod connection;
pub mod queries;
pub mod schema;

pub use connection::WardrobeDb;
pub use queries::garments::{GarmentField, NewGarment};
pub use queries::feedback::FeedbackRecord;
