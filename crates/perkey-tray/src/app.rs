use crate::{
    AppCommand, AppError, AppResult, MenuBindings, TrayCommand, TrayStatus, config::Config,
    notifier,
};

use std::{panic::Location, sync::Arc};

use error_location::ErrorLocation;
use perkey_tray_core::{CoreError, MenuActionRegistry, ProcessRunner, RunOutcome};
use tao::event_loop::EventLoopProxy;
use tokio::sync::mpsc;
use tracing::{error, info, instrument, warn};
use tray_icon::menu::MenuEvent;
use uuid::Uuid;

/// Main application state.
///
/// Runs on the async runtime thread. Communicates tray icon updates
/// back to the main thread via `tray_proxy` because `TrayIcon` is `!Send`
/// and must remain on the UI thread.
pub struct App {
    pub(crate) registry: Arc<MenuActionRegistry<ProcessRunner>>,
    pub(crate) bindings: MenuBindings,
    pub(crate) tray_proxy: EventLoopProxy<TrayCommand>,
    pub(crate) config: Arc<Config>,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(self) -> AppResult<()> {
        info!(
            actions = self.registry.len(),
            model = %self.config.device.model,
            "Perkey-Tray starting"
        );

        // Tray event forwarding via single persistent blocking task.
        //
        // MenuEvent::receiver() returns a crossbeam_channel::Receiver which
        // HAS blocking recv() -- zero polling, instant response, one thread.
        //
        // Shutdown: when tray_event_rx is dropped (main loop breaks),
        // tray_event_tx.blocking_send() fails, breaking the blocking loop.
        let (tray_event_tx, mut tray_event_rx) = mpsc::channel(32);
        let tray_handle = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if tray_event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        while let Some(event) = tray_event_rx.recv().await {
            let Some(command) = self.bindings.resolve(&event.id) else {
                continue;
            };

            match command {
                AppCommand::ApplyAction { index } => {
                    if let Err(e) = self.apply_action(index) {
                        error!(index, error = ?e, "Failed to apply lighting action");
                    }
                }
                AppCommand::OpenConfig => self.open_config(),
                AppCommand::Shutdown => {
                    info!("Exit requested from tray menu");
                    break;
                }
            }
        }

        drop(tray_event_rx);

        match tokio::time::timeout(std::time::Duration::from_secs(1), tray_handle).await {
            Ok(Ok(())) => info!("Tray event forwarder stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Tray event forwarder task panicked"),
            Err(_) => info!(
                "Tray event forwarder did not stop within timeout, \
                     will be cleaned up on exit"
            ),
        }

        if let Err(e) = send_tray(&self.tray_proxy, TrayCommand::Shutdown) {
            error!(error = ?e, "Failed to send shutdown to UI thread");
        }
        info!("Perkey-Tray shut down successfully");

        Ok(())
    }

    /// Run a lighting action in the background.
    ///
    /// The lighting tool blocks until it exits, so it runs on the blocking
    /// pool. Repeated clicks start independent invocations. Statuses carry
    /// the invocation id so the UI thread can drop results from superseded
    /// clicks.
    #[track_caller]
    #[instrument(skip(self))]
    fn apply_action(&self, index: usize) -> AppResult<()> {
        let label = self
            .registry
            .get(index)
            .map(|action| action.label.clone())
            .ok_or_else(|| CoreError::UnknownAction {
                index,
                available: self.registry.len(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let invocation_id = Uuid::new_v4();
        let registry = Arc::clone(&self.registry);
        let tray_proxy = self.tray_proxy.clone();
        let notify_on_failure = self.config.behaviour.notify_on_failure;

        let applying = TrayCommand::SetStatus {
            invocation_id,
            status: TrayStatus::Applying {
                label: label.clone(),
            },
        };
        if let Err(e) = send_tray(&tray_proxy, applying) {
            warn!(invocation_id = %invocation_id, error = ?e, "Failed to show applying status");
        }

        tokio::task::spawn(async move {
            let start = std::time::Instant::now();

            let outcome =
                match tokio::task::spawn_blocking(move || registry.invoke_outcome(index)).await {
                    Ok(Ok(outcome)) => outcome,
                    Ok(Err(e)) => {
                        error!(%invocation_id, error = ?e, "Lighting action rejected");
                        return;
                    }
                    Err(e) => {
                        error!(%invocation_id, error = ?e, "Lighting task panicked");
                        return;
                    }
                };

            let duration_ms = start.elapsed().as_millis();

            let status = match &outcome {
                RunOutcome::Succeeded(result) => {
                    info!(
                        invocation_id = %invocation_id,
                        label = %label,
                        duration_ms,
                        stdout = %result.stdout.trim_end(),
                        "Lighting applied"
                    );
                    TrayStatus::Applied { label }
                }
                RunOutcome::Failed(_) | RunOutcome::SpawnFailed { .. } => {
                    warn!(
                        invocation_id = %invocation_id,
                        label = %label,
                        status = ?outcome.status(),
                        duration_ms,
                        report = %outcome.report().trim_end(),
                        "Lighting change failed"
                    );

                    if notify_on_failure {
                        let label = label.clone();
                        let report = outcome.report().to_string();
                        let shown = tokio::task::spawn_blocking(move || {
                            notifier::notify_failure(&label, &report)
                        })
                        .await;

                        match shown {
                            Ok(Ok(())) => {}
                            Ok(Err(e)) => warn!(error = ?e, "Failed to show notification"),
                            Err(e) => error!(error = ?e, "Notification task panicked"),
                        }
                    }

                    TrayStatus::Failed { label }
                }
            };

            let command = TrayCommand::SetStatus {
                invocation_id,
                status,
            };
            if let Err(e) = send_tray(&tray_proxy, command) {
                error!(invocation_id = %invocation_id, error = ?e, "Failed to update tray status");
            }
        });

        Ok(())
    }

    /// Open `config.toml` with the platform's default handler.
    #[instrument(skip(self))]
    fn open_config(&self) {
        let path = match Config::config_path() {
            Ok(path) => path,
            Err(e) => {
                error!(error = ?e, "Failed to locate config file");
                return;
            }
        };

        match open::that(&path) {
            Ok(()) => info!(config_path = ?path, "Opened config file"),
            Err(e) => error!(config_path = ?path, error = ?e, "Failed to open config file"),
        }
    }
}

/// Post a command to the UI thread's event loop.
#[track_caller]
fn send_tray(proxy: &EventLoopProxy<TrayCommand>, command: TrayCommand) -> AppResult<()> {
    proxy
        .send_event(command)
        .map_err(|e| AppError::ChannelSendFailed {
            message: format!("Failed to send tray command: {:?}", e),
            location: ErrorLocation::from(Location::caller()),
        })
}
