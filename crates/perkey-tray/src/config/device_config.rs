use crate::config::default_binary;

use perkey_tray_core::{CommandTemplate, Model};
use serde::{Deserialize, Serialize};

/// Keyboard and lighting tool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Lighting tool executable, looked up on `PATH` unless absolute.
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Keyboard model passed to `--model`.
    #[serde(default)]
    pub model: Model,
}

impl DeviceConfig {
    /// Command template for this device.
    pub fn template(&self) -> CommandTemplate {
        CommandTemplate::new(self.binary.as_str(), self.model)
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            model: Model::default(),
        }
    }
}
