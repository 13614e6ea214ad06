use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle phases a server can report.
///
/// Implementations that never transition still expose the full set so
/// callers can match on every phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    Failed,
    Starting,
    Started,
    Stopping,
    Stopped,
}

impl LifecycleState {
    pub const ALL: [LifecycleState; 5] = [
        LifecycleState::Failed,
        LifecycleState::Starting,
        LifecycleState::Started,
        LifecycleState::Stopping,
        LifecycleState::Stopped,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Failed => "FAILED",
            LifecycleState::Starting => "STARTING",
            LifecycleState::Started => "STARTED",
            LifecycleState::Stopping => "STOPPING",
            LifecycleState::Stopped => "STOPPED",
        }
    }

    /// Running covers both the starting and started phases.
    pub fn is_running(&self) -> bool {
        matches!(self, LifecycleState::Starting | LifecycleState::Started)
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_serde() {
        for state in LifecycleState::ALL {
            let json = serde_json::to_value(state).unwrap();
            assert_eq!(json, serde_json::Value::String(state.as_str().to_string()));
            assert_eq!(state.to_string(), state.as_str());
        }
    }

    #[test]
    fn test_running_phases() {
        let running: Vec<_> = LifecycleState::ALL
            .into_iter()
            .filter(LifecycleState::is_running)
            .collect();
        assert_eq!(
            running,
            vec![LifecycleState::Starting, LifecycleState::Started]
        );
    }
}
