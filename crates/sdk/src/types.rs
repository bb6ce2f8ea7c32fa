//! SDK Request/Response Types
//!
//! Mirrors the JSON-RPC types from the api-rpc crate.

use serde::Deserialize;

/// Result of an acquire call
#[derive(Debug, Clone, Deserialize)]
pub struct AcquireResponse {
    /// ACQUIRED or QUEUED
    pub status: String,
    pub resource: String,
    pub owner: String,
    pub ahead: Vec<String>,
}

impl AcquireResponse {
    pub fn is_owner(&self) -> bool {
        self.status == "ACQUIRED"
    }
}

/// Result of a release call
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseResponse {
    /// RELEASED or HANDED_OFF
    pub status: String,
    pub resource: String,
    pub previous_owner: String,
    pub new_owner: Option<String>,
    pub remaining: Vec<String>,
}

/// State of one reserved resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueueSnapshot {
    pub resource: String,
    pub owner: String,
    pub waiters: Vec<String>,
    pub owner_since_ms: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub queues: Vec<QueueSnapshot>,
}

/// Replies for one chat message, in send order
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessageResponse {
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    pub active_resources: usize,
    pub waiting_users: usize,
    pub uptime_seconds: u64,
}
