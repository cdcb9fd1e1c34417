use crate::TrayStatus;

use uuid::Uuid;

/// Commands sent from the async runtime to the main UI thread.
///
/// The main thread owns `TrayManager` (because `TrayIcon` is `!Send`),
/// so all tray mutations and process lifecycle events flow through this enum.
#[derive(Debug, Clone)]
pub enum TrayCommand {
    /// Update the tray icon and tooltip, unless a newer invocation has
    /// already reported `Applying`.
    SetStatus {
        /// Lighting invocation the status belongs to.
        invocation_id: Uuid,
        /// New tray state.
        status: TrayStatus,
    },
    /// Shut down the application. The main thread will exit the event loop.
    Shutdown,
}
