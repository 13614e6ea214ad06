use crate::component::{Connector, Handler, HttpChannel, LifecycleListener};
use crate::error::BridgeError;
use crate::state::LifecycleState;
use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

pub type Request = http::Request<Bytes>;
pub type Response = http::Response<Bytes>;

/// Operations application startup and management code performs on a server
/// object: connector, attribute, handler, lifecycle and listener management.
///
/// Bookkeeping methods take `&self` so a server can be shared across the
/// threads that configure it.
pub trait ServerLifecycle: Send + Sync {
    // Connectors

    fn connectors(&self) -> Vec<Arc<dyn Connector>>;

    fn add_connector(&self, connector: Arc<dyn Connector>);

    fn remove_connector(&self, connector: &Arc<dyn Connector>);

    // Attributes

    fn attribute(&self, name: &str) -> Option<Value>;

    fn attribute_names(&self) -> Vec<String>;

    fn set_attribute(&self, name: &str, value: Value);

    fn remove_attribute(&self, name: &str);

    fn clear_attributes(&self);

    // Handlers

    /// The primary handler, if any has been installed.
    fn handler(&self) -> Option<Arc<dyn Handler>>;

    fn handlers(&self) -> Vec<Arc<dyn Handler>>;

    fn set_handler(&self, handler: Arc<dyn Handler>);

    // Lifecycle

    fn start(&self) -> Result<(), BridgeError>;

    fn stop(&self) -> Result<(), BridgeError>;

    fn state(&self) -> LifecycleState;

    fn stop_timeout(&self) -> Duration;

    fn state_name(&self) -> &'static str {
        self.state().as_str()
    }

    fn is_running(&self) -> bool {
        self.state().is_running()
    }

    fn is_started(&self) -> bool {
        self.state() == LifecycleState::Started
    }

    fn is_starting(&self) -> bool {
        self.state() == LifecycleState::Starting
    }

    fn is_stopping(&self) -> bool {
        self.state() == LifecycleState::Stopping
    }

    fn is_stopped(&self) -> bool {
        self.state() == LifecycleState::Stopped
    }

    fn is_failed(&self) -> bool {
        self.state() == LifecycleState::Failed
    }

    // Lifecycle listeners

    fn add_lifecycle_listener(&self, listener: Arc<dyn LifecycleListener>);

    fn remove_lifecycle_listener(&self, listener: &Arc<dyn LifecycleListener>);
}

/// Entry points that route an inbound request to the installed handlers.
#[async_trait]
pub trait RequestDispatch: Send + Sync {
    async fn handle(&self, target: &str, request: Request) -> Result<Response, BridgeError>;

    async fn handle_channel(&self, channel: &dyn HttpChannel) -> Result<(), BridgeError>;

    async fn handle_async(&self, channel: &dyn HttpChannel) -> Result<(), BridgeError>;
}
