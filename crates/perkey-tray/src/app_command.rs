/// Intents resolved from tray menu activations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Apply a lighting action from the registry.
    ApplyAction {
        /// Registry index of the action.
        index: usize,
    },
    /// Open the configuration file with the system handler.
    OpenConfig,
    /// Request application shutdown.
    Shutdown,
}
