use hostbridge_core::LifecycleListener;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// Registered lifecycle observers. The adapter never transitions, so
/// nothing here is ever notified.
pub struct LifecycleListenerRegistry {
    listeners: Mutex<Vec<Arc<dyn LifecycleListener>>>,
}

impl LifecycleListenerRegistry {
    pub fn new() -> Self {
        LifecycleListenerRegistry {
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn add(&self, listener: Arc<dyn LifecycleListener>) {
        let mut listeners = self.listeners.lock();
        listeners.push(listener);
        debug!("Registered lifecycle listener, {} total", listeners.len());
    }

    /// Removes the first registration of `listener`, compared by identity.
    pub fn remove(&self, listener: &Arc<dyn LifecycleListener>) -> bool {
        let mut listeners = self.listeners.lock();
        match listeners.iter().position(|l| Arc::ptr_eq(l, listener)) {
            Some(index) => {
                listeners.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.lock().is_empty()
    }
}

impl Default for LifecycleListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingListener {
        calls: AtomicUsize,
    }

    impl LifecycleListener for CountingListener {
        fn lifecycle_started(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_add_and_remove() {
        let registry = LifecycleListenerRegistry::new();
        let listener: Arc<dyn LifecycleListener> = Arc::new(CountingListener::default());

        registry.add(listener.clone());
        registry.add(listener.clone());
        assert_eq!(registry.len(), 2);

        assert!(registry.remove(&listener));
        assert_eq!(registry.len(), 1);
        assert!(registry.remove(&listener));
        assert!(!registry.remove(&listener));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registration_does_not_notify() {
        let registry = LifecycleListenerRegistry::new();
        let listener = Arc::new(CountingListener::default());
        registry.add(listener.clone());

        assert_eq!(listener.calls.load(Ordering::SeqCst), 0);
    }
}
