use crate::lighting::CommandLine;

use std::fmt;

/// Menu section an action belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Built-in lighting preset (`-p`).
    Preset,
    /// Single static color (`-s`).
    Color,
}

impl ActionKind {
    /// Submenu title for this kind.
    pub const fn section_title(self) -> &'static str {
        match self {
            ActionKind::Preset => "Presets",
            ActionKind::Color => "Colors",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Preset => f.write_str("preset"),
            ActionKind::Color => f.write_str("color"),
        }
    }
}

/// A menu entry paired with its precomputed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuAction {
    /// Text shown in the menu.
    pub label: String,
    /// Section the entry is listed under.
    pub kind: ActionKind,
    /// Command run when the entry is activated.
    pub command: CommandLine,
}
