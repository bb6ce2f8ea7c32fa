// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Reservation error: {0}")]
    Reservation(#[from] crate::domain::ReservationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Delivery error: {0}")]
    Delivery(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
