use crate::TrayStatus;

use uuid::Uuid;

/// Drops status updates from invocations that a newer click has superseded.
///
/// Every click starts its own lighting invocation, and they can finish in any
/// order. Only the invocation that most recently reported `Applying` may move
/// the tray to `Applied` or `Failed`.
#[derive(Debug, Default)]
pub struct StatusGate {
    latest: Option<Uuid>,
}

impl StatusGate {
    /// Whether `status` from `invocation_id` should be shown.
    ///
    /// `Applying` always passes and makes `invocation_id` the latest.
    pub fn admit(&mut self, invocation_id: Uuid, status: &TrayStatus) -> bool {
        match status {
            TrayStatus::Applying { .. } => {
                self.latest = Some(invocation_id);
                true
            }
            TrayStatus::Applied { .. } | TrayStatus::Failed { .. } => {
                self.latest == Some(invocation_id)
            }
            TrayStatus::Ready => self.latest.is_none(),
        }
    }
}
