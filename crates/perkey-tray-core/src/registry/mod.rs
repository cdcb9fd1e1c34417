mod action;
mod host;
#[allow(clippy::module_inception)]
mod registry;

pub use {
    action::{ActionKind, MenuAction},
    host::ActionHost,
    registry::MenuActionRegistry,
};
