use hostbridge_core::Handler;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::info;

/// Installed handlers in registration order. The first one is the primary
/// handler. Handlers are never invoked and never removed.
pub struct HandlerRegistry {
    handlers: Mutex<Vec<Arc<dyn Handler>>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        HandlerRegistry {
            handlers: Mutex::new(Vec::new()),
        }
    }

    pub fn primary(&self) -> Option<Arc<dyn Handler>> {
        self.handlers.lock().first().cloned()
    }

    pub fn all(&self) -> Vec<Arc<dyn Handler>> {
        self.handlers.lock().clone()
    }

    pub fn add(&self, handler: Arc<dyn Handler>) {
        info!(handler = handler.type_name(), "Set handler");
        self.handlers.lock().push(handler);
    }

    /// Concrete type names of the installed handlers.
    pub fn type_names(&self) -> Vec<&'static str> {
        let handlers = self.all();
        handlers.iter().map(|h| h.type_name()).collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.lock().is_empty()
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ServletHandler;
    impl Handler for ServletHandler {}

    struct AdminHandler;
    impl Handler for AdminHandler {}

    #[test]
    fn test_primary_is_first_registered() {
        let registry = HandlerRegistry::new();
        assert!(registry.primary().is_none());

        let h1: Arc<dyn Handler> = Arc::new(ServletHandler);
        let h2: Arc<dyn Handler> = Arc::new(AdminHandler);
        registry.add(h1.clone());
        registry.add(h2.clone());
        registry.add(Arc::new(AdminHandler));

        let primary = registry.primary().unwrap();
        assert!(Arc::ptr_eq(&primary, &h1));

        let all = registry.all();
        assert_eq!(all.len(), 3);
        assert!(Arc::ptr_eq(&all[0], &h1));
        assert!(Arc::ptr_eq(&all[1], &h2));
    }

    #[test]
    fn test_type_names_in_order() {
        let registry = HandlerRegistry::new();
        registry.add(Arc::new(AdminHandler));
        registry.add(Arc::new(ServletHandler));

        let names = registry.type_names();
        assert!(names[0].ends_with("AdminHandler"));
        assert!(names[1].ends_with("ServletHandler"));
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }
}
