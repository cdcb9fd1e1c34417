use crate::{CoreError, Model};

use std::collections::HashSet;

/// WHAT: All ten model identifiers are distinct and round-trip through parsing
/// WHY: The identifier is passed verbatim to the lighting tool
#[test]
#[allow(clippy::unwrap_used)]
fn given_every_model_when_parsing_its_identifier_then_same_model() {
    // Given: All supported models
    let ids: HashSet<&str> = Model::ALL.iter().map(|m| m.as_str()).collect();
    assert_eq!(ids.len(), 10);

    // When/Then: Display form parses back
    for model in Model::ALL {
        assert_eq!(model.to_string().parse::<Model>().unwrap(), model);
    }
}

/// WHAT: Parsing ignores case and surrounding whitespace
/// WHY: Hand-edited config files are forgiving
#[test]
#[allow(clippy::unwrap_used)]
fn given_lowercase_identifier_when_parsing_then_model_found() {
    // Given/When/Then
    assert_eq!(" gs75 ".parse::<Model>().unwrap(), Model::Gs75);
}

/// WHAT: Unknown identifiers are rejected
/// WHY: An unsupported model would address the wrong key layout
#[test]
fn given_unknown_identifier_when_parsing_then_unknown_model_error() {
    // Given/When: An identifier outside the set
    let result = "GS66".parse::<Model>();

    // Then: UnknownModel carrying the input
    assert!(matches!(result, Err(CoreError::UnknownModel { ref value, .. }) if value == "GS66"));
}

/// WHAT: Default model is GS65
/// WHY: Matches the keyboard the tray was first built for
#[test]
fn given_no_configuration_when_taking_default_model_then_gs65() {
    assert_eq!(Model::default(), Model::Gs65);
}
