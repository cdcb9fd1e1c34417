use crate::registry::ActionKind;

/// UI host that displays menu actions and reports activations by index.
///
/// Keeps toolkit-specific menu plumbing out of the core. The host receives
/// each action once, in registry order, and later hands the same `index`
/// back to [`crate::MenuActionRegistry::invoke`] when the user activates
/// the entry.
pub trait ActionHost {
    /// Error raised while building host widgets.
    type Error;

    /// Add one activatable entry under the `kind` section.
    fn register_action(
        &mut self,
        kind: ActionKind,
        label: &str,
        index: usize,
    ) -> Result<(), Self::Error>;

    /// Remove every registered entry and release host resources.
    fn teardown(&mut self);
}
