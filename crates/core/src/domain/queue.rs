// Reservation Queue Domain Model

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Resource identifier (caller supplied, case-sensitive)
pub type ResourceId = String;

/// User identifier (compared by exact string equality)
pub type UserId = String;

/// Ownership record for one resource plus its FIFO waiting list.
///
/// The queue carries no policy of its own. It only exposes the primitives the
/// registry needs; duplicate and authorization checks happen upstream so the
/// invariants live in a single place.
///
/// A stored queue always has an owner: a free resource is removed from the
/// registry instead of being kept as an empty record.
#[derive(Debug, Clone)]
pub struct ReservationQueue {
    id: ResourceId,
    owner: UserId,
    owner_since_ms: i64, // epoch ms
    waiters: VecDeque<UserId>,
}

impl ReservationQueue {
    /// Create a queue owned by `owner` with nobody waiting
    pub fn new(id: impl Into<String>, owner: impl Into<String>, now_millis: i64) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
            owner_since_ms: now_millis,
            waiters: VecDeque::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn owner_since_ms(&self) -> i64 {
        self.owner_since_ms
    }

    pub fn waiters(&self) -> impl Iterator<Item = &UserId> {
        self.waiters.iter()
    }

    pub fn is_owner(&self, user: &str) -> bool {
        self.owner == user
    }

    pub fn has_waiter(&self, user: &str) -> bool {
        self.waiters.iter().any(|w| w == user)
    }

    pub fn has_waiters(&self) -> bool {
        !self.waiters.is_empty()
    }

    /// Append a waiter at the tail. Callers reject duplicates first.
    pub fn push_waiter(&mut self, user: impl Into<String>) {
        self.waiters.push_back(user.into());
    }

    /// Hand ownership to the head waiter.
    ///
    /// Returns the previous owner, or `None` (leaving the queue untouched)
    /// when nobody is waiting.
    pub fn promote_next(&mut self, now_millis: i64) -> Option<UserId> {
        let next = self.waiters.pop_front()?;
        self.owner_since_ms = now_millis;
        Some(std::mem::replace(&mut self.owner, next))
    }

    /// Immutable copy of the current state
    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot {
            resource: self.id.clone(),
            owner: self.owner.clone(),
            waiters: self.waiters.iter().cloned().collect(),
            owner_since_ms: self.owner_since_ms,
        }
    }
}

/// Point-in-time view of a queue, safe to hand out after the registry lock is released
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueSnapshot {
    pub resource: ResourceId,
    pub owner: UserId,
    pub waiters: Vec<UserId>,
    pub owner_since_ms: i64,
}
