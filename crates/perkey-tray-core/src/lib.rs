//! perkey-tray Core Library
//!
//! Headless model of a keyboard-backlight tray menu: the fixed preset and
//! color tables, command lines for the `msi-perkeyrgb` lighting tool, and a
//! process runner that never fails.
//!
//! # Example
//!
//! ```no_run
//! use perkey_tray_core::{CommandTemplate, CoreResult, MenuActionRegistry, Model, ProcessRunner};
//!
//! fn main() -> CoreResult<()> {
//!     let template = CommandTemplate::new("msi-perkeyrgb", Model::Gs65);
//!     let registry = MenuActionRegistry::with_defaults(&template, ProcessRunner);
//!
//!     if let Some(index) = registry.position("rainbow-split") {
//!         let output = registry.invoke(index)?;
//!         println!("{}", output);
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod lighting;
mod registry;
mod runner;

pub use {
    error::CoreError,
    error::Result as CoreResult,
    lighting::{
        COLOR_FLAG, COLORS, Color, CommandLine, CommandTemplate, DEFAULT_BINARY, Model,
        PRESET_FLAG, PRESETS, Preset,
    },
    registry::{ActionHost, ActionKind, MenuAction, MenuActionRegistry},
    runner::{CommandRunner, ExecutionResult, ProcessRunner, RunOutcome},
};

#[cfg(test)]
mod tests;
