//! RPC Request/Response Types
//!
//! Defines the JSON-RPC method parameters and results.

use baton_core::domain::{AcquireOutcome, QueueSnapshot, ReleaseOutcome};
use serde::{Deserialize, Serialize};

/// reservation.acquire.v1 / reservation.release.v1
#[derive(Debug, Deserialize)]
pub struct ReservationRequest {
    pub resource: String,
    pub user: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AcquireResponse {
    /// ACQUIRED or QUEUED
    pub status: String,
    pub resource: String,
    pub owner: String,
    /// Waiters queued before the caller (empty when ACQUIRED)
    pub ahead: Vec<String>,
}

impl From<AcquireOutcome> for AcquireResponse {
    fn from(outcome: AcquireOutcome) -> Self {
        match outcome {
            AcquireOutcome::Acquired { resource, owner } => Self {
                status: "ACQUIRED".to_string(),
                resource,
                owner,
                ahead: vec![],
            },
            AcquireOutcome::Queued {
                resource,
                owner,
                ahead,
            } => Self {
                status: "QUEUED".to_string(),
                resource,
                owner,
                ahead,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReleaseResponse {
    /// RELEASED or HANDED_OFF
    pub status: String,
    pub resource: String,
    pub previous_owner: String,
    pub new_owner: Option<String>,
    pub remaining: Vec<String>,
}

impl From<ReleaseOutcome> for ReleaseResponse {
    fn from(outcome: ReleaseOutcome) -> Self {
        match outcome {
            ReleaseOutcome::ReleasedNoSuccessor {
                resource,
                previous_owner,
            } => Self {
                status: "RELEASED".to_string(),
                resource,
                previous_owner,
                new_owner: None,
                remaining: vec![],
            },
            ReleaseOutcome::ReleasedWithSuccessor {
                resource,
                previous_owner,
                new_owner,
                remaining,
            } => Self {
                status: "HANDED_OFF".to_string(),
                resource,
                previous_owner,
                new_owner: Some(new_owner),
                remaining,
            },
        }
    }
}

/// reservation.query.v1
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub resource: String,
}

/// reservation.list.v1 (no parameters)
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub queues: Vec<QueueSnapshot>,
}

/// chat.message.v1 - Raw chat text from a transport adapter
#[derive(Debug, Deserialize)]
pub struct ChatMessageRequest {
    pub user: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessageResponse {
    /// Replies in the order they must be sent
    pub messages: Vec<String>,
}

/// admin.stats.v1 (no parameters)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub active_resources: usize,
    pub waiting_users: usize,
    pub uptime_seconds: u64,
}
