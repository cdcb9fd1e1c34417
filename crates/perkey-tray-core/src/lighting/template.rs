use crate::lighting::{Color, CommandLine, Model, Preset};

/// Binary name of the per-key RGB lighting tool.
pub const DEFAULT_BINARY: &str = "msi-perkeyrgb";

/// Flag selecting a built-in preset.
pub const PRESET_FLAG: &str = "-p";

/// Flag setting a single static color.
pub const COLOR_FLAG: &str = "-s";

/// Base invocation of the lighting tool for one keyboard model.
///
/// Every menu action is this base plus a mode flag and its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    binary: String,
    model: Model,
}

impl CommandTemplate {
    /// Template for `binary --model <model>`.
    pub fn new(binary: impl Into<String>, model: Model) -> Self {
        Self {
            binary: binary.into(),
            model,
        }
    }

    /// The base command line, without a mode flag.
    pub fn base(&self) -> CommandLine {
        CommandLine::new(self.binary.as_str()).args(["--model", self.model.as_str()])
    }

    /// `<base> -p <preset>`.
    pub fn preset(&self, preset: &Preset) -> CommandLine {
        self.with_mode(PRESET_FLAG, preset.name)
    }

    /// `<base> -s <hex>`.
    pub fn color(&self, color: &Color) -> CommandLine {
        self.with_mode(COLOR_FLAG, color.hex)
    }

    /// Apply an arbitrary mode flag and value to the base.
    pub fn with_mode(&self, flag: &str, value: &str) -> CommandLine {
        self.base().args([flag, value])
    }

    /// Keyboard model addressed by this template.
    pub fn model(&self) -> Model {
        self.model
    }

    /// Lighting binary invoked by this template.
    pub fn binary(&self) -> &str {
        &self.binary
    }
}

impl Default for CommandTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_BINARY, Model::default())
    }
}
