/// A solid backlight color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Lowercase color name.
    pub name: &'static str,
    /// Six lowercase hex digits passed to the `-s` flag, without `#`.
    pub hex: &'static str,
}

impl Color {
    /// Create a color entry.
    pub const fn new(name: &'static str, hex: &'static str) -> Self {
        Self { name, hex }
    }

    /// Menu label: the name with its first character uppercased.
    pub fn label(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Colors offered in the tray menu, in menu order.
pub const COLORS: [Color; 9] = [
    Color::new("white", "ffffff"),
    Color::new("black", "000000"),
    Color::new("red", "ff0000"),
    Color::new("orange", "ffa500"),
    Color::new("yellow", "ffff00"),
    Color::new("green", "008000"),
    Color::new("blue", "0000ff"),
    Color::new("purple", "4b0082"),
    Color::new("pink", "ee82ee"),
];
