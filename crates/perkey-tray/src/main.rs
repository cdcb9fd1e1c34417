//! Perkey-Tray: keyboard backlight presets and colors from the system tray.

mod app;
mod app_command;
mod config;
mod error;
mod menu_bindings;
mod notifier;
mod status_gate;
mod tray_command;
mod tray_manager;
mod tray_status;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    error::{AppError, Result as AppResult},
    menu_bindings::MenuBindings,
    status_gate::StatusGate,
    tray_command::TrayCommand,
    tray_manager::TrayManager,
    tray_status::TrayStatus,
};

use crate::config::Config;

use std::sync::Arc;

use perkey_tray_core::{ActionHost, MenuActionRegistry, ProcessRunner};
use tao::{
    event::Event,
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "perkey_tray=debug,perkey_tray_core=debug";

/// Application entry point.
fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let tray_proxy = event_loop.create_proxy();

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut tray_manager = match TrayManager::new() {
        Ok(tm) => tm,
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            std::process::exit(1);
        }
    };

    let mut status_gate = StatusGate::default();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => match cmd {
                TrayCommand::SetStatus {
                    invocation_id,
                    status,
                } => {
                    if !status_gate.admit(invocation_id, &status) {
                        debug!(%invocation_id, ?status, "Dropping status from superseded action");
                        return;
                    }
                    if let Err(e) = tray_manager.update_status(&status) {
                        error!(error = ?e, "Failed to update tray icon");
                    }
                }
                TrayCommand::Shutdown => {
                    tray_manager.teardown();
                    *control_flow = ControlFlow::ExitWithCode(0);
                }
            },
            Event::NewEvents(tao::event::StartCause::Init) => {
                let config = match Config::load() {
                    Ok(c) => c,
                    Err(e) => {
                        error!("Failed to load config: {:?}", e);
                        std::process::exit(1);
                    }
                };

                let registry = MenuActionRegistry::with_defaults(&config.template(), ProcessRunner);

                // Menu items must be created on the main thread.
                if let Err(e) = registry.bind(&mut tray_manager) {
                    error!("Failed to build lighting menu: {:?}", e);
                    std::process::exit(1);
                }
                info!(
                    actions = tray_manager.bindings().action_count(),
                    model = %config.device.model,
                    "Lighting menu built"
                );

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                let app = App {
                    registry: Arc::new(registry),
                    bindings: tray_manager.bindings().clone(),
                    tray_proxy: tray_proxy.clone(),
                    config: Arc::new(config),
                };

                // Spawn tokio runtime on separate thread.
                // TrayManager stays on the main thread.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        if let Err(e) = app.run().await {
                            error!(error = ?e, "App error");
                        }
                    });
                });
            }
            _ => {}
        }
    });
}
