/// Tray states reflecting the most recent lighting change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrayStatus {
    /// Nothing applied yet this session.
    Ready,
    /// Lighting tool is running for the named action.
    Applying {
        /// Menu label of the action.
        label: String,
    },
    /// The named action was applied.
    Applied {
        /// Menu label of the action.
        label: String,
    },
    /// The lighting tool failed for the named action.
    Failed {
        /// Menu label of the action.
        label: String,
    },
}

impl TrayStatus {
    /// Tooltip text for this state.
    pub fn tooltip(&self) -> String {
        match self {
            TrayStatus::Ready => "Keyboard Lighting - Ready".to_string(),
            TrayStatus::Applying { label } => format!("Keyboard Lighting - Applying {}...", label),
            TrayStatus::Applied { label } => format!("Keyboard Lighting - {}", label),
            TrayStatus::Failed { label } => {
                format!("Keyboard Lighting - Failed to apply {}", label)
            }
        }
    }

    /// RGB color of the key grid in the tray icon.
    pub fn accent(&self) -> [u8; 3] {
        match self {
            TrayStatus::Ready => [0x00, 0xa8, 0xff],
            TrayStatus::Applying { .. } => [0xff, 0xa5, 0x00],
            TrayStatus::Applied { .. } => [0xff, 0xff, 0xff],
            TrayStatus::Failed { .. } => [0xff, 0x30, 0x30],
        }
    }
}
