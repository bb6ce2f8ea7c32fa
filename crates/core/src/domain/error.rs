// Reservation Error Types

use super::queue::{ResourceId, UserId};
use thiserror::Error;

/// Rejections produced by the registry.
///
/// Every variant is detected before any mutation, so a returned error always
/// means the registry is exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    #[error("Resource identifier is empty")]
    InvalidResource,

    #[error("Resource not found: {0}")]
    NotFound(ResourceId),

    #[error("User {user} already owns {resource}")]
    AlreadyOwner { resource: ResourceId, user: UserId },

    #[error("User {user} is already waiting for {resource}")]
    AlreadyWaiting { resource: ResourceId, user: UserId },

    #[error("User {user} does not own {resource}")]
    NotOwner { resource: ResourceId, user: UserId },
}

pub type Result<T> = std::result::Result<T, ReservationError>;
