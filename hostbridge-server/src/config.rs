use hostbridge_core::BridgeError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Describes the deployment the adapter is hosted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostEnvironment {
    /// Name of the deployed application.
    pub application: String,
    /// Mount path inside the host container.
    pub context_path: String,
    /// Host container name, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
}

impl Default for HostEnvironment {
    fn default() -> Self {
        HostEnvironment {
            application: "application".to_string(),
            context_path: "/".to_string(),
            container: None,
        }
    }
}

impl HostEnvironment {
    pub fn new(application: impl Into<String>) -> Self {
        HostEnvironment {
            application: application.into(),
            ..Self::default()
        }
    }

    pub fn with_context_path(mut self, context_path: impl Into<String>) -> Self {
        self.context_path = context_path.into();
        self
    }

    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = Some(container.into());
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, BridgeError> {
        let environment: HostEnvironment = serde_json::from_str(json)?;
        environment.validate()?;
        Ok(environment)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, BridgeError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    fn validate(&self) -> Result<(), BridgeError> {
        if self.application.trim().is_empty() {
            return Err(BridgeError::invalid_config("application name must not be empty"));
        }
        if !self.context_path.starts_with('/') {
            return Err(BridgeError::invalid_config(format!(
                "context path must start with '/': {}",
                self.context_path
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostbridge_core::ErrorCode;

    #[test]
    fn test_defaults() {
        let env = HostEnvironment::default();
        assert_eq!(env.application, "application");
        assert_eq!(env.context_path, "/");
        assert_eq!(env.container, None);
    }

    #[test]
    fn test_builder() {
        let env = HostEnvironment::new("billing")
            .with_context_path("/billing")
            .with_container("tomcat");
        assert_eq!(env.application, "billing");
        assert_eq!(env.context_path, "/billing");
        assert_eq!(env.container.as_deref(), Some("tomcat"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let env = HostEnvironment::from_json_str(r#"{"application": "billing"}"#).unwrap();
        assert_eq!(env.application, "billing");
        assert_eq!(env.context_path, "/");
    }

    #[test]
    fn test_invalid_json() {
        let err = HostEnvironment::from_json_str("{").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfig);
    }

    #[test]
    fn test_validation() {
        let err = HostEnvironment::from_json_str(r#"{"application": "  "}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfig);

        let err =
            HostEnvironment::from_json_str(r#"{"application": "a", "context_path": "api"}"#)
                .unwrap_err();
        assert!(err.message.contains("api"));
    }

    #[test]
    fn test_missing_file() {
        let err = HostEnvironment::from_json_file("/nonexistent/hostbridge.json").unwrap_err();
        assert_eq!(err.code, ErrorCode::Internal);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("host.json");
        std::fs::write(
            &path,
            r#"{"application": "billing", "context_path": "/billing", "container": "jetty"}"#,
        )
        .unwrap();

        let env = HostEnvironment::from_json_file(&path).unwrap();
        assert_eq!(
            env,
            HostEnvironment::new("billing")
                .with_context_path("/billing")
                .with_container("jetty")
        );
    }
}
