use crate::attributes::AttributeStore;
use crate::config::HostEnvironment;
use crate::connectors::ConnectorRegistry;
use crate::handlers::HandlerRegistry;
use crate::listeners::LifecycleListenerRegistry;
use crate::snapshot::AdapterSnapshot;
use async_trait::async_trait;
use hostbridge_core::{
    BridgeError, Connector, Handler, HttpChannel, LifecycleListener, LifecycleState, Request,
    RequestDispatch, Response, ServerLifecycle,
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// A server object for applications running inside a host-managed container.
///
/// Startup code configures and starts it exactly as it would an embedded
/// server. Nothing is bound: the host owns the socket and the request path.
/// The adapter records what it is told and always reports itself as
/// started. Every dispatch entry point fails with
/// [`ErrorCode::Unsupported`](hostbridge_core::ErrorCode::Unsupported).
pub struct ServerAdapter {
    environment: HostEnvironment,
    connectors: ConnectorRegistry,
    attributes: AttributeStore,
    handlers: HandlerRegistry,
    listeners: LifecycleListenerRegistry,
}

impl ServerAdapter {
    /// The only state this adapter ever reports.
    pub const STATE: LifecycleState = LifecycleState::Started;

    pub fn new(environment: HostEnvironment) -> Self {
        ServerAdapter {
            environment,
            connectors: ConnectorRegistry::new(),
            attributes: AttributeStore::new(),
            handlers: HandlerRegistry::new(),
            listeners: LifecycleListenerRegistry::new(),
        }
    }

    pub fn environment(&self) -> &HostEnvironment {
        &self.environment
    }

    pub fn connector_registry(&self) -> &ConnectorRegistry {
        &self.connectors
    }

    pub fn attribute_store(&self) -> &AttributeStore {
        &self.attributes
    }

    pub fn handler_registry(&self) -> &HandlerRegistry {
        &self.handlers
    }

    pub fn listener_registry(&self) -> &LifecycleListenerRegistry {
        &self.listeners
    }

    pub fn snapshot(&self) -> AdapterSnapshot {
        AdapterSnapshot {
            state: Self::STATE.as_str(),
            stop_timeout_ms: u64::try_from(self.stop_timeout().as_millis()).unwrap_or(u64::MAX),
            environment: self.environment.clone(),
            connectors: self.connectors.list().iter().map(|c| c.describe()).collect(),
            attributes: self.attributes.entries(),
            handlers: self.handlers.type_names(),
            lifecycle_listeners: self.listeners.len(),
        }
    }

    fn reject(&self, operation: &str) -> BridgeError {
        error!(
            application = %self.environment.application,
            operation,
            "Request dispatch reached the server adapter; the host container must route requests"
        );
        BridgeError::unsupported(operation)
    }
}

impl Default for ServerAdapter {
    fn default() -> Self {
        Self::new(HostEnvironment::default())
    }
}

impl ServerLifecycle for ServerAdapter {
    fn connectors(&self) -> Vec<Arc<dyn Connector>> {
        self.connectors.list()
    }

    fn add_connector(&self, connector: Arc<dyn Connector>) {
        self.connectors.add(connector);
    }

    fn remove_connector(&self, connector: &Arc<dyn Connector>) {
        self.connectors.remove(connector);
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        self.attributes.get(name)
    }

    fn attribute_names(&self) -> Vec<String> {
        self.attributes.names()
    }

    fn set_attribute(&self, name: &str, value: Value) {
        self.attributes.set(name, value);
    }

    fn remove_attribute(&self, name: &str) {
        self.attributes.remove(name);
    }

    fn clear_attributes(&self) {
        self.attributes.clear();
    }

    fn handler(&self) -> Option<Arc<dyn Handler>> {
        self.handlers.primary()
    }

    fn handlers(&self) -> Vec<Arc<dyn Handler>> {
        self.handlers.all()
    }

    fn set_handler(&self, handler: Arc<dyn Handler>) {
        self.handlers.add(handler);
    }

    fn start(&self) -> Result<(), BridgeError> {
        info!(
            application = %self.environment.application,
            context_path = %self.environment.context_path,
            "Dummy start of server adapter, host container owns the listener"
        );
        Ok(())
    }

    fn stop(&self) -> Result<(), BridgeError> {
        info!(
            application = %self.environment.application,
            context_path = %self.environment.context_path,
            "Dummy stop of server adapter"
        );
        Ok(())
    }

    fn state(&self) -> LifecycleState {
        Self::STATE
    }

    fn stop_timeout(&self) -> Duration {
        Duration::ZERO
    }

    fn add_lifecycle_listener(&self, listener: Arc<dyn LifecycleListener>) {
        self.listeners.add(listener);
    }

    fn remove_lifecycle_listener(&self, listener: &Arc<dyn LifecycleListener>) {
        self.listeners.remove(listener);
    }
}

#[async_trait]
impl RequestDispatch for ServerAdapter {
    async fn handle(&self, _target: &str, _request: Request) -> Result<Response, BridgeError> {
        Err(self.reject("handle"))
    }

    async fn handle_channel(&self, _channel: &dyn HttpChannel) -> Result<(), BridgeError> {
        Err(self.reject("handle_channel"))
    }

    async fn handle_async(&self, _channel: &dyn HttpChannel) -> Result<(), BridgeError> {
        Err(self.reject("handle_async"))
    }
}
