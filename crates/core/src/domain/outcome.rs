// Registry Outcomes
//
// Semantic results of successful operations. They carry enough data to
// compose user-facing messages once the registry lock is gone.

use super::queue::{ResourceId, UserId};

/// Successful Acquire
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquireOutcome {
    /// The resource was free; the requester owns it now
    Acquired { resource: ResourceId, owner: UserId },

    /// The resource is held by `owner`; the requester was appended to the waiters.
    /// `ahead` lists the waiters that were already queued before this call.
    Queued {
        resource: ResourceId,
        owner: UserId,
        ahead: Vec<UserId>,
    },
}

impl AcquireOutcome {
    pub fn resource(&self) -> &str {
        match self {
            AcquireOutcome::Acquired { resource, .. } | AcquireOutcome::Queued { resource, .. } => {
                resource
            }
        }
    }

    /// 1-based position in the waiting list, `None` when ownership was granted
    pub fn position(&self) -> Option<usize> {
        match self {
            AcquireOutcome::Acquired { .. } => None,
            AcquireOutcome::Queued { ahead, .. } => Some(ahead.len() + 1),
        }
    }
}

/// Successful Release
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Nobody was waiting; the queue was removed from the registry
    ReleasedNoSuccessor {
        resource: ResourceId,
        previous_owner: UserId,
    },

    /// Ownership moved to the head waiter
    ReleasedWithSuccessor {
        resource: ResourceId,
        previous_owner: UserId,
        new_owner: UserId,
        /// Waiters still queued behind `new_owner`, in order. Reported over
        /// RPC only; chat replies address the new owner alone.
        remaining: Vec<UserId>,
    },
}

impl ReleaseOutcome {
    pub fn resource(&self) -> &str {
        match self {
            ReleaseOutcome::ReleasedNoSuccessor { resource, .. }
            | ReleaseOutcome::ReleasedWithSuccessor { resource, .. } => resource,
        }
    }

    pub fn new_owner(&self) -> Option<&str> {
        match self {
            ReleaseOutcome::ReleasedNoSuccessor { .. } => None,
            ReleaseOutcome::ReleasedWithSuccessor { new_owner, .. } => Some(new_owner),
        }
    }
}
