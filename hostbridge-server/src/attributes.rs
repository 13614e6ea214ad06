use indexmap::IndexMap;
use parking_lot::Mutex;
use serde_json::Value;
use tracing::debug;

/// Named values exchanged with startup code. One lock guards the whole map.
pub struct AttributeStore {
    attributes: Mutex<IndexMap<String, Value>>,
}

impl AttributeStore {
    pub fn new() -> Self {
        AttributeStore {
            attributes: Mutex::new(IndexMap::new()),
        }
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.attributes.lock().get(name).cloned()
    }

    pub fn set(&self, name: &str, value: Value) {
        debug!("Setting attribute {}", name);
        self.attributes.lock().insert(name.to_string(), value);
    }

    pub fn remove(&self, name: &str) -> Option<Value> {
        self.attributes.lock().shift_remove(name)
    }

    pub fn clear(&self) {
        self.attributes.lock().clear();
    }

    /// Snapshot of the current keys.
    pub fn names(&self) -> Vec<String> {
        self.attributes.lock().keys().cloned().collect()
    }

    /// Snapshot of every entry.
    pub fn entries(&self) -> IndexMap<String, Value> {
        self.attributes.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.attributes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.lock().is_empty()
    }
}

impl Default for AttributeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_last_write_wins() {
        let store = AttributeStore::new();
        store.set("region", json!("eu"));
        store.set("region", json!("us"));

        assert_eq!(store.get("region"), Some(json!("us")));
        assert_eq!(store.len(), 1);

        store.clear();
        assert!(store.names().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove() {
        let store = AttributeStore::new();
        store.set("a", json!(1));
        store.set("b", json!({"nested": true}));

        assert_eq!(store.remove("a"), Some(json!(1)));
        assert_eq!(store.get("a"), None);
        assert_eq!(store.remove("a"), None);
        assert_eq!(store.names(), vec!["b".to_string()]);
    }

    #[test]
    fn test_missing_attribute_is_none() {
        let store = AttributeStore::new();
        assert_eq!(store.get("absent"), None);
        store.remove("absent");
        assert!(store.is_empty());
    }

    #[test]
    fn test_entries_snapshot() {
        let store = AttributeStore::new();
        store.set("x", json!(1));
        let entries = store.entries();
        store.set("y", json!(2));

        assert_eq!(entries.len(), 1);
        assert_eq!(entries.get("x"), Some(&json!(1)));
        assert_eq!(store.len(), 2);
    }
}
