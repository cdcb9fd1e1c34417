use crate::config::{DEFAULT_NOTIFY_ON_FAILURE, default_notify_on_failure};

use serde::{Deserialize, Serialize};

/// Application behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviourConfig {
    /// Whether to show a desktop notification when applying lighting fails.
    #[serde(default = "default_notify_on_failure")]
    pub notify_on_failure: bool,
}

impl Default for BehaviourConfig {
    fn default() -> Self {
        Self {
            notify_on_failure: DEFAULT_NOTIFY_ON_FAILURE,
        }
    }
}
