//! Error types shared across the wardrobe crates.

use thiserror::Error;

/// Persistence-layer failures.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("sqlite error: {message}")]
    SqliteError { message: String },

    /// A garment id referenced by an outfit does not exist. This aborts
    /// the scoring pass; missing garments are never silently skipped.
    #[error("garment {id} not found")]
    GarmentNotFound { id: i64 },

    #[error("unknown weight key '{key}'")]
    UnknownWeightKey { key: String },
}

/// Feedback contract violations and their downstream failures.
#[derive(Debug, Error)]
pub enum FeedbackError {
    /// The like/reason contract was violated: a like carries no reason,
    /// a dislike carries exactly one valid reason code.
    #[error("invalid feedback: {message}")]
    Validation { message: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Color name / hex parsing failures.
#[derive(Debug, Error)]
pub enum ColorError {
    #[error("'{name}' is not a recognized color name")]
    UnknownName { name: String },

    #[error("'{value}' is not a valid hex color")]
    InvalidHex { value: String },
}

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("failed to parse config file '{path}': {message}")]
    Parse { path: String, message: String },
}
