//! Opaque server components.
//!
//! Servers store these by shared reference and compare them by identity
//! (`Arc::ptr_eq`). Nothing here is inspected for control flow; the
//! descriptive methods exist for diagnostics only.

use std::any::type_name;

/// A configured network endpoint.
pub trait Connector: Send + Sync {
    /// Human readable description used by diagnostics.
    fn describe(&self) -> String {
        type_name::<Self>().to_string()
    }
}

/// A unit of request-processing logic.
pub trait Handler: Send + Sync {
    /// Concrete type name of the handler.
    fn type_name(&self) -> &'static str {
        type_name::<Self>()
    }
}

/// Observer of lifecycle transitions. All callbacks default to no-ops.
pub trait LifecycleListener: Send + Sync {
    fn lifecycle_starting(&self) {}

    fn lifecycle_started(&self) {}

    fn lifecycle_failure(&self, _cause: &(dyn std::error::Error + Send + Sync)) {}

    fn lifecycle_stopping(&self) {}

    fn lifecycle_stopped(&self) {}
}

/// An inbound connection carrying requests to be dispatched.
pub trait HttpChannel: Send + Sync {
    fn remote_addr(&self) -> Option<std::net::SocketAddr> {
        None
    }
}
