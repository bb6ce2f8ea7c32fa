// Reservation Registry - the single entry point for Acquire/Release/Query

use crate::domain::error::Result;
use crate::domain::{
    AcquireOutcome, QueueSnapshot, ReleaseOutcome, ReservationError, ReservationQueue, ResourceId,
};
use crate::port::TimeProvider;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

/// Authoritative mapping from resource id to its reservation queue.
///
/// All operations run under one registry-wide lock. Every precondition is
/// checked before the first mutation, so a rejected call leaves the registry
/// untouched. The lock is never held across an `.await`: callers get owned
/// outcomes back and do any message delivery afterwards.
///
/// Invariants between calls:
/// - no user appears twice in a waiting list
/// - an owner never also appears among its queue's waiters
/// - a resource with no owner and no waiters is not stored at all
pub struct ReservationRegistry {
    queues: Mutex<BTreeMap<ResourceId, ReservationQueue>>,
    time_provider: Arc<dyn TimeProvider>,
}

impl ReservationRegistry {
    pub fn new(time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            queues: Mutex::new(BTreeMap::new()),
            time_provider,
        }
    }

    /// Acquire `resource` for `user`, or join its waiting list.
    ///
    /// # Errors
    /// - `InvalidResource` if `resource` is empty
    /// - `AlreadyOwner` if `user` holds the resource
    /// - `AlreadyWaiting` if `user` is already queued
    pub fn acquire(&self, resource: &str, user: &str) -> Result<AcquireOutcome> {
        validate_resource(resource)?;
        let now = self.time_provider.now_millis();

        let mut queues = self.lock();
        match queues.entry(resource.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(ReservationQueue::new(resource, user, now));
                info!(resource = %resource, user = %user, "Resource acquired");
                Ok(AcquireOutcome::Acquired {
                    resource: resource.to_string(),
                    owner: user.to_string(),
                })
            }
            Entry::Occupied(mut slot) => {
                let queue = slot.get_mut();
                if queue.is_owner(user) {
                    debug!(resource = %resource, user = %user, "Acquire rejected: already owner");
                    return Err(ReservationError::AlreadyOwner {
                        resource: resource.to_string(),
                        user: user.to_string(),
                    });
                }
                if queue.has_waiter(user) {
                    debug!(resource = %resource, user = %user, "Acquire rejected: already waiting");
                    return Err(ReservationError::AlreadyWaiting {
                        resource: resource.to_string(),
                        user: user.to_string(),
                    });
                }

                let ahead: Vec<String> = queue.waiters().cloned().collect();
                queue.push_waiter(user);
                info!(
                    resource = %resource,
                    user = %user,
                    owner = %queue.owner(),
                    position = ahead.len() + 1,
                    "User queued for resource"
                );
                Ok(AcquireOutcome::Queued {
                    resource: resource.to_string(),
                    owner: queue.owner().to_string(),
                    ahead,
                })
            }
        }
    }

    /// Release `resource` held by `user`, handing it to the next waiter if any.
    ///
    /// # Errors
    /// - `InvalidResource` if `resource` is empty
    /// - `NotFound` if no queue exists for `resource`
    /// - `NotOwner` if `user` does not hold the resource
    pub fn release(&self, resource: &str, user: &str) -> Result<ReleaseOutcome> {
        validate_resource(resource)?;
        let now = self.time_provider.now_millis();

        let mut queues = self.lock();
        let queue = queues
            .get_mut(resource)
            .ok_or_else(|| ReservationError::NotFound(resource.to_string()))?;

        if !queue.is_owner(user) {
            debug!(resource = %resource, user = %user, owner = %queue.owner(), "Release rejected: not owner");
            return Err(ReservationError::NotOwner {
                resource: resource.to_string(),
                user: user.to_string(),
            });
        }

        match queue.promote_next(now) {
            Some(previous_owner) => {
                let new_owner = queue.owner().to_string();
                let remaining: Vec<String> = queue.waiters().cloned().collect();
                info!(
                    resource = %resource,
                    previous_owner = %previous_owner,
                    new_owner = %new_owner,
                    remaining = remaining.len(),
                    "Resource handed off"
                );
                Ok(ReleaseOutcome::ReleasedWithSuccessor {
                    resource: resource.to_string(),
                    previous_owner,
                    new_owner,
                    remaining,
                })
            }
            None => {
                queues.remove(resource);
                info!(resource = %resource, user = %user, "Resource released, queue removed");
                Ok(ReleaseOutcome::ReleasedNoSuccessor {
                    resource: resource.to_string(),
                    previous_owner: user.to_string(),
                })
            }
        }
    }

    /// Current state of `resource`. Never mutates.
    ///
    /// # Errors
    /// - `InvalidResource` if `resource` is empty
    /// - `NotFound` if no queue exists for `resource`
    pub fn query(&self, resource: &str) -> Result<QueueSnapshot> {
        validate_resource(resource)?;

        let queues = self.lock();
        let snapshot = queues
            .get(resource)
            .map(ReservationQueue::snapshot)
            .ok_or_else(|| ReservationError::NotFound(resource.to_string()))?;
        debug!(resource = %resource, owner = %snapshot.owner, waiters = snapshot.waiters.len(), "Resource queried");
        Ok(snapshot)
    }

    /// Snapshots of every active queue, ordered by resource id
    pub fn list(&self) -> Vec<QueueSnapshot> {
        self.lock().values().map(ReservationQueue::snapshot).collect()
    }

    /// Number of resources currently held
    pub fn active_count(&self) -> usize {
        self.lock().len()
    }

    // A panic can only happen before the first mutation of an operation,
    // so the map behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, BTreeMap<ResourceId, ReservationQueue>> {
        self.queues.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn validate_resource(resource: &str) -> Result<()> {
    if resource.is_empty() {
        return Err(ReservationError::InvalidResource);
    }
    Ok(())
}
