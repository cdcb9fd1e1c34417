use crate::{COLORS, CommandLine, CommandTemplate, DEFAULT_BINARY, Model, PRESETS};

/// WHAT: Every preset renders as `<base> -p <preset>`
/// WHY: The lighting tool expects exactly this argument layout
#[test]
fn given_each_preset_when_building_command_then_base_plus_preset_flag() {
    // Given: Default template (msi-perkeyrgb, GS65)
    let template = CommandTemplate::default();
    let base = template.base().to_string();

    // When/Then: Each preset renders with no extra whitespace
    assert_eq!(base, "msi-perkeyrgb --model GS65");
    for preset in &PRESETS {
        assert_eq!(
            template.preset(preset).to_string(),
            format!("{} -p {}", base, preset.name)
        );
    }
}

/// WHAT: Every color renders as `<base> -s <hex>`
/// WHY: The lighting tool expects exactly this argument layout
#[test]
fn given_each_color_when_building_command_then_base_plus_color_flag() {
    // Given: Template for another model
    let template = CommandTemplate::new(DEFAULT_BINARY, Model::Ge75);
    let base = template.base().to_string();

    // When/Then: Each color renders with its literal hex
    assert_eq!(base, "msi-perkeyrgb --model GE75");
    for color in &COLORS {
        assert_eq!(
            template.color(color).to_string(),
            format!("{} -s {}", base, color.hex)
        );
    }
}

/// WHAT: Commands are argument vectors, not shell strings
/// WHY: Values are passed through unchanged with no quoting concerns
#[test]
#[allow(clippy::unwrap_used)]
fn given_value_with_shell_metacharacters_when_building_command_then_single_argument() {
    // Given: A hostile-looking value
    let template = CommandTemplate::default();

    // When: Building a command with it
    let command = template.with_mode("-p", "aqua; rm -rf ~");

    // Then: It stays one argument after the flag
    assert_eq!(command.program(), "msi-perkeyrgb");
    assert_eq!(
        command.arguments(),
        ["--model", "GS65", "-p", "aqua; rm -rf ~"]
    );
    let unquoted = CommandLine::parse("msi-perkeyrgb --model GS65 -p aqua; rm -rf ~").unwrap();
    let quoted = CommandLine::parse("msi-perkeyrgb --model GS65 -p 'aqua; rm -rf ~'").unwrap();
    assert_ne!(unquoted, command);
    assert_eq!(quoted, command);
}
