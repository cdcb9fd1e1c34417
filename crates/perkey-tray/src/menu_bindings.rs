use crate::AppCommand;

use std::collections::HashMap;

use tray_icon::menu::MenuId;

/// Maps tray menu item IDs to application commands.
///
/// Built on the UI thread while the menu is populated, then cloned to the
/// async runtime, which only ever sees `MenuEvent` IDs.
#[derive(Debug, Clone)]
pub struct MenuBindings {
    actions: HashMap<MenuId, usize>,
    open_config: MenuId,
    exit: MenuId,
}

impl MenuBindings {
    /// Bindings for the fixed menu items, with no lighting actions yet.
    pub fn new(open_config: MenuId, exit: MenuId) -> Self {
        Self {
            actions: HashMap::new(),
            open_config,
            exit,
        }
    }

    /// Route activations of `id` to registry action `index`.
    pub fn bind_action(&mut self, id: MenuId, index: usize) {
        self.actions.insert(id, index);
    }

    /// Forget every lighting action binding.
    pub fn clear_actions(&mut self) {
        self.actions.clear();
    }

    /// Number of bound lighting actions.
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Command for an activated menu item, if it is one of ours.
    pub fn resolve(&self, id: &MenuId) -> Option<AppCommand> {
        if *id == self.exit {
            Some(AppCommand::Shutdown)
        } else if *id == self.open_config {
            Some(AppCommand::OpenConfig)
        } else {
            self.actions
                .get(id)
                .map(|&index| AppCommand::ApplyAction { index })
        }
    }
}
