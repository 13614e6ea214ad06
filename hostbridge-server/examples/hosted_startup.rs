//! Runs embedded-server startup code against the adapter and prints the
//! resulting diagnostics snapshot.

use hostbridge_server::{
    init_test_logging, Connector, Handler, HostEnvironment, ServerAdapter, ServerLifecycle,
};
use serde_json::json;
use std::sync::Arc;

struct HttpConnector {
    host: &'static str,
    port: u16,
}

impl Connector for HttpConnector {
    fn describe(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

struct ApplicationHandler;
impl Handler for ApplicationHandler {}

fn configure(server: &dyn ServerLifecycle) -> Result<(), hostbridge_server::BridgeError> {
    server.add_connector(Arc::new(HttpConnector {
        host: "0.0.0.0",
        port: 8080,
    }));
    server.set_attribute("app.version", json!(env!("CARGO_PKG_VERSION")));
    server.set_handler(Arc::new(ApplicationHandler));
    server.start()
}

fn main() -> anyhow::Result<()> {
    init_test_logging();

    let environment = HostEnvironment::new("example")
        .with_context_path("/example")
        .with_container("servlet-container");
    let adapter = Arc::new(ServerAdapter::new(environment));

    configure(adapter.as_ref())?;

    println!("running: {}", adapter.is_running());
    println!("{}", serde_json::to_string_pretty(&adapter.snapshot())?);
    Ok(())
}
