//! Desktop notifications for failed lighting changes.

use crate::{AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;
use notify_rust::Notification;
use tracing::{debug, instrument};

/// Summary line shown in failure notifications.
const APP_NAME: &str = "Keyboard Lighting";

/// Longest tool output included in a notification body.
const MAX_BODY_CHARS: usize = 240;

/// Build the notification body for a failed action.
///
/// Trims trailing whitespace and truncates long tool output on a character
/// boundary.
pub fn failure_body(label: &str, report: &str) -> String {
    let report = report.trim();
    let detail = if report.is_empty() {
        "The lighting tool reported no details.".to_string()
    } else if report.chars().count() > MAX_BODY_CHARS {
        let truncated: String = report.chars().take(MAX_BODY_CHARS).collect();
        format!("{}...", truncated)
    } else {
        report.to_string()
    };

    format!("Could not apply {}: {}", label, detail)
}

/// Show a desktop notification that `label` failed to apply.
///
/// Blocks while the notification server is contacted; call from a blocking
/// context.
#[track_caller]
#[instrument(skip(report))]
pub fn notify_failure(label: &str, report: &str) -> AppResult<()> {
    Notification::new()
        .appname(APP_NAME)
        .summary(APP_NAME)
        .body(&failure_body(label, report))
        .show()
        .map(|_| ())
        .map_err(|e| AppError::NotificationFailed {
            reason: format!("Failed to show notification: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    debug!("Failure notification shown");

    Ok(())
}
