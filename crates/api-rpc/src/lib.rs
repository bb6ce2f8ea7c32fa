//! JSON-RPC API Layer
//!
//! Implements the JSON-RPC 2.0 server for Baton: reservation methods for
//! tools and scripts, plus `chat.message.v1` for chat transport adapters.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use error::ServerError;
pub use server::{RpcServer, RpcServerConfig};
