// Domain Layer - Pure business entities

pub mod error;
pub mod intent;
pub mod outcome;
pub mod queue;

// Re-exports
pub use error::ReservationError;
pub use intent::{Command, Intent};
pub use outcome::{AcquireOutcome, ReleaseOutcome};
pub use queue::{QueueSnapshot, ReservationQueue, ResourceId, UserId};
