//! Registry of active target managers.
//!
//! The registry never owns a manager. It keeps weak handles in registration
//! order; a manager whose last `Arc` is dropped silently disappears from every
//! query, which is how destruction deregisters it.

use std::sync::{Arc, Weak};

use tracing::debug;

use crate::manager::TargetManager;
use crate::state::{ManagerId, ObjectId};

#[derive(Debug, Default)]
pub struct ManagerRegistry {
    managers: Vec<Weak<TargetManager>>,
}

impl ManagerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, manager: &Arc<TargetManager>) -> Option<usize> {
        let target = Arc::as_ptr(manager);
        self.managers
            .iter()
            .position(|handle| std::ptr::eq(handle.as_ptr(), target))
    }

    /// Adds `manager` if it is not already registered. Returns true if added.
    ///
    /// Handles of dropped managers are swept first.
    pub fn register(&mut self, manager: &Arc<TargetManager>) -> bool {
        self.prune();
        if self.position(manager).is_some() {
            return false;
        }
        self.managers.push(Arc::downgrade(manager));
        debug!(target: "hunt::registry", manager = %manager.id(), "Registered manager");
        true
    }

    /// Removes `manager` if present. Returns true if it was removed.
    pub fn deregister(&mut self, manager: &Arc<TargetManager>) -> bool {
        match self.position(manager) {
            Some(index) => {
                self.managers.remove(index);
                debug!(target: "hunt::registry", manager = %manager.id(), "Deregistered manager");
                true
            }
            None => false,
        }
    }

    /// Drops handles whose manager no longer exists.
    pub fn prune(&mut self) {
        self.managers.retain(|handle| handle.strong_count() > 0);
    }

    /// Live managers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = Arc<TargetManager>> + '_ {
        self.managers.iter().filter_map(Weak::upgrade)
    }

    /// Snapshot of the live managers in registration order.
    pub fn managers(&self) -> Vec<Arc<TargetManager>> {
        self.iter().collect()
    }

    pub fn find(&self, id: ManagerId) -> Option<Arc<TargetManager>> {
        self.iter().find(|manager| manager.id() == id)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if `object` is an active target of any registered manager.
    pub fn contains_target(&self, object: ObjectId) -> bool {
        self.iter().any(|manager| manager.is_active_target(object))
    }

    /// Sum of the active-set sizes of every registered manager.
    pub fn total_target_count(&self) -> usize {
        self.iter().map(|manager| manager.active_len()).sum()
    }
}
