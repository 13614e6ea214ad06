use hostbridge_core::Connector;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// Connectors the application believes it configured, in insertion order.
///
/// Duplicates are kept. Every operation, removal included, runs under the
/// same lock.
pub struct ConnectorRegistry {
    connectors: Mutex<Vec<Arc<dyn Connector>>>,
}

impl ConnectorRegistry {
    pub fn new() -> Self {
        ConnectorRegistry {
            connectors: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the current registrations.
    pub fn list(&self) -> Vec<Arc<dyn Connector>> {
        self.connectors.lock().clone()
    }

    pub fn add(&self, connector: Arc<dyn Connector>) {
        debug!("Adding connector {}", connector.describe());
        self.connectors.lock().push(connector);
    }

    /// Removes the first registration of `connector`, compared by identity.
    pub fn remove(&self, connector: &Arc<dyn Connector>) -> bool {
        let removed = {
            let mut connectors = self.connectors.lock();
            connectors
                .iter()
                .position(|c| Arc::ptr_eq(c, connector))
                .map(|index| connectors.remove(index))
        };

        // Caller code may re-enter the registry, so describe only after unlocking.
        match removed {
            Some(removed) => {
                debug!("Removed connector {}", removed.describe());
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.connectors.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.connectors.lock().is_empty()
    }
}

impl Default for ConnectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
