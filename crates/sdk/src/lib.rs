//! Baton SDK - Rust Client Library
//!
//! Provides a convenient client for the Baton reservation daemon.
//!
//! # Example
//!
//! ```no_run
//! use baton_sdk::BatonClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BatonClient::connect("http://127.0.0.1:9531").await?;
//!
//!     let acquired = client.acquire("staging-db", "ana").await?;
//!     let queued = client.acquire("staging-db", "bea").await?;
//!     assert!(acquired.is_owner() && !queued.is_owner());
//!
//!     let handoff = client.release("staging-db", "ana").await?;
//!     println!("new owner: {:?}", handoff.new_owner);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::BatonClient;
pub use error::{code, Result, SdkError};
pub use types::{
    AcquireResponse, ChatMessageResponse, ListResponse, QueueSnapshot, ReleaseResponse,
    StatsResponse,
};
