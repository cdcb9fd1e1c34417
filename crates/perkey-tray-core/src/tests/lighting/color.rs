use crate::{COLORS, Color};

/// WHAT: Color labels capitalize the first letter only
/// WHY: Menu shows "Rainbow" style labels while commands use raw names
#[test]
fn given_color_names_when_building_labels_then_first_letter_uppercased() {
    // Given/When/Then: Simple, multi-word and empty names
    assert_eq!(Color::new("red", "ff0000").label(), "Red");
    assert_eq!(Color::new("deep sky", "00bfff").label(), "Deep sky");
    assert_eq!(Color::new("", "000000").label(), "");
}

/// WHAT: Built-in hex values are six lowercase hex digits
/// WHY: The lighting tool rejects anything else and no validation happens later
#[test]
fn given_builtin_colors_when_checking_hex_then_all_six_lowercase_digits() {
    // Given/When/Then: Every table entry is well formed
    for color in &COLORS {
        assert_eq!(color.hex.len(), 6, "{} has bad length", color.name);
        assert!(
            color
                .hex
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
            "{} has bad digits",
            color.name
        );
    }
}

/// WHAT: Built-in table keeps its documented order
/// WHY: Menu order is part of the user-facing layout
#[test]
fn given_builtin_colors_when_listing_names_then_documented_order() {
    // Given/When: Names in table order
    let names: Vec<&str> = COLORS.iter().map(|c| c.name).collect();

    // Then: Fixed order
    assert_eq!(
        names,
        vec!["white", "black", "red", "orange", "yellow", "green", "blue", "purple", "pink"]
    );
}
