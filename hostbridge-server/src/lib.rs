pub mod adapter;
pub mod attributes;
pub mod config;
pub mod connectors;
pub mod handlers;
pub mod listeners;
pub mod logging;
pub mod snapshot;

pub use adapter::ServerAdapter;
pub use attributes::AttributeStore;
pub use config::HostEnvironment;
pub use connectors::ConnectorRegistry;
pub use handlers::HandlerRegistry;
pub use listeners::LifecycleListenerRegistry;
pub use logging::{init_logging, init_test_logging};
pub use snapshot::AdapterSnapshot;

pub use hostbridge_core::{
    BridgeError, Connector, ErrorCode, Handler, HttpChannel, LifecycleListener, LifecycleState,
    RequestDispatch, ServerLifecycle,
};
