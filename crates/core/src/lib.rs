// Baton Core - Reservation state machine & Ports
// NO transport dependencies: chat adapters and RPC live in outer crates

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
