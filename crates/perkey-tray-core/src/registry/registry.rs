use crate::{
    CoreError, CoreResult,
    lighting::{COLORS, Color, CommandTemplate, PRESETS, Preset},
    registry::{ActionHost, ActionKind, MenuAction},
    runner::{CommandRunner, RunOutcome},
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// Fixed table of menu actions and the runner that executes them.
///
/// Presets come first, then colors, each in table order. The table is
/// built once and never mutated, so a registry can be shared behind an
/// `Arc` and invoked from any thread.
pub struct MenuActionRegistry<R> {
    actions: Vec<MenuAction>,
    runner: R,
}

impl<R: CommandRunner> MenuActionRegistry<R> {
    /// Build one action per preset and one per color.
    ///
    /// Preset labels are the preset name verbatim; color labels are the
    /// capitalized color name.
    #[instrument(skip_all, fields(presets = presets.len(), colors = colors.len()))]
    pub fn new(
        presets: &[Preset],
        colors: &[Color],
        template: &CommandTemplate,
        runner: R,
    ) -> Self {
        let presets = presets.iter().map(|preset| MenuAction {
            label: preset.name.to_string(),
            kind: ActionKind::Preset,
            command: template.preset(preset),
        });

        let colors = colors.iter().map(|color| MenuAction {
            label: color.label(),
            kind: ActionKind::Color,
            command: template.color(color),
        });

        let actions: Vec<MenuAction> = presets.chain(colors).collect();

        debug!(
            action_count = actions.len(),
            model = %template.model(),
            "Menu actions registered"
        );

        Self { actions, runner }
    }

    /// Registry over the built-in preset and color tables.
    pub fn with_defaults(template: &CommandTemplate, runner: R) -> Self {
        Self::new(&PRESETS, &COLORS, template, runner)
    }

    /// Run action `index` and return its textual result.
    ///
    /// Execution failures are folded into the returned text; only an index
    /// outside the table is an error.
    #[track_caller]
    pub fn invoke(&self, index: usize) -> CoreResult<String> {
        self.invoke_outcome(index).map(RunOutcome::into_report)
    }

    /// Run action `index` and return the classified outcome.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn invoke_outcome(&self, index: usize) -> CoreResult<RunOutcome> {
        let action = self.get(index).ok_or_else(|| CoreError::UnknownAction {
            index,
            available: self.actions.len(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(
            label = %action.label,
            kind = %action.kind,
            command = %action.command,
            "Invoking menu action"
        );

        Ok(self.runner.execute(&action.command))
    }

    /// Register every action with `host`, in table order.
    ///
    /// Stops at the first host error.
    pub fn bind<H: ActionHost>(&self, host: &mut H) -> Result<(), H::Error> {
        for (index, action) in self.actions.iter().enumerate() {
            host.register_action(action.kind, &action.label, index)?;
        }
        Ok(())
    }

    /// All actions, presets first.
    pub fn actions(&self) -> &[MenuAction] {
        &self.actions
    }

    /// Action at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&MenuAction> {
        self.actions.get(index)
    }

    /// Index of the first action labelled `label`.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.actions.iter().position(|action| action.label == label)
    }

    /// Number of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the registry has no actions.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The runner used for invocations.
    pub fn runner(&self) -> &R {
        &self.runner
    }
}
