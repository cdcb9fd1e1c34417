use super::{FakeHost, RecordingRunner};
use crate::{ActionHost, ActionKind, CommandTemplate, MenuActionRegistry, PRESETS};

/// WHAT: Binding registers every action with the host, in order
/// WHY: Host menu entries must map back to the right registry index
#[test]
#[allow(clippy::unwrap_used)]
fn given_registry_when_binding_to_host_then_every_action_registered_in_order() {
    // Given: Default registry and an empty host
    let registry = MenuActionRegistry::with_defaults(
        &CommandTemplate::default(),
        RecordingRunner::exiting_with(0),
    );
    let mut host = FakeHost::default();

    // When: Binding
    registry.bind(&mut host).unwrap();

    // Then: One entry per action with matching kind, label and index
    assert_eq!(host.entries.len(), registry.len());
    for (position, (kind, label, index)) in host.entries.iter().enumerate() {
        let action = &registry.actions()[position];
        assert_eq!(*index, position);
        assert_eq!(*kind, action.kind);
        assert_eq!(label, &action.label);
    }
    assert_eq!(host.entries[0].0, ActionKind::Preset);
    assert_eq!(host.entries[PRESETS.len()].0, ActionKind::Color);

    // And: No command ran while binding
    assert!(registry.runner().calls().is_empty());
}

/// WHAT: Binding stops at the first host error
/// WHY: A partially built menu must be reported, not silently accepted
#[test]
fn given_failing_host_when_binding_then_error_returned_and_later_actions_skipped() {
    // Given: Host that rejects the third action
    let registry = MenuActionRegistry::with_defaults(
        &CommandTemplate::default(),
        RecordingRunner::exiting_with(0),
    );
    let mut host = FakeHost {
        fail_at: Some(2),
        ..FakeHost::default()
    };

    // When: Binding
    let result = registry.bind(&mut host);

    // Then: The host error surfaces and only the first two entries exist
    assert_eq!(result, Err("cannot add default".to_string()));
    assert_eq!(host.entries.len(), 2);

    // And: Teardown clears the partial menu
    host.teardown();
    assert!(host.entries.is_empty());
    assert!(host.torn_down);
}
