use crate::config::HostEnvironment;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Point-in-time view of an adapter for management endpoints.
///
/// Each field is read under its own collection's lock; fields are not
/// mutually consistent under concurrent writers.
#[derive(Debug, Clone, Serialize)]
pub struct AdapterSnapshot {
    pub state: &'static str,
    pub stop_timeout_ms: u64,
    pub environment: HostEnvironment,
    pub connectors: Vec<String>,
    pub attributes: IndexMap<String, Value>,
    pub handlers: Vec<&'static str>,
    pub lifecycle_listeners: usize,
}

impl AdapterSnapshot {
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
