/// A built-in lighting effect shipped with the lighting binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Preset {
    /// Name passed to the `-p` flag and shown in the menu verbatim.
    pub name: &'static str,
}

impl Preset {
    /// Create a preset entry.
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

/// Presets offered in the tray menu, in menu order.
pub const PRESETS: [Preset; 8] = [
    Preset::new("aqua"),
    Preset::new("chakra"),
    Preset::new("default"),
    Preset::new("disco"),
    Preset::new("drain"),
    Preset::new("freeway"),
    Preset::new("rainbow-split"),
    Preset::new("roulette"),
];
