use netops_core::{update, AppState, Msg};

fn toggle(state: AppState, panel_id: &str) -> (AppState, Vec<netops_core::Effect>) {
    update(
        state,
        Msg::PanelToggled {
            panel_id: panel_id.to_string(),
        },
    )
}

fn panel_open(state: &AppState, panel_id: &str) -> Option<bool> {
    state
        .view()
        .panels
        .iter()
        .find(|panel| panel.panel_id == panel_id)
        .map(|panel| panel.open)
}

#[test]
fn toggle_alternates_open_flag() {
    let state = AppState::with_panels(["tools".to_string()], None);
    assert_eq!(panel_open(&state, "tools"), Some(false));

    let (mut state, effects) = toggle(state, "tools");
    assert!(effects.is_empty());
    assert_eq!(panel_open(&state, "tools"), Some(true));
    assert!(state.consume_dirty());

    let (mut state, _effects) = toggle(state, "tools");
    assert_eq!(panel_open(&state, "tools"), Some(false));
    assert!(state.consume_dirty());
}

#[test]
fn unknown_target_is_a_noop() {
    let state = AppState::with_panels(["tools".to_string()], None);

    let (mut next, effects) = toggle(state, "no-such-panel");

    assert!(effects.is_empty());
    assert_eq!(panel_open(&next, "tools"), Some(false));
    assert!(!next.consume_dirty());
}

#[test]
fn default_panel_starts_open() {
    let state = AppState::with_panels(
        ["tools".to_string(), "history".to_string()],
        Some("history"),
    );

    assert_eq!(panel_open(&state, "tools"), Some(false));
    assert_eq!(panel_open(&state, "history"), Some(true));
}

#[test]
fn panels_toggle_independently() {
    // No mutual exclusion: any subset may be open at once.
    let state = AppState::with_panels(["tools".to_string(), "history".to_string()], None);

    let (state, _effects) = toggle(state, "tools");
    let (state, _effects) = toggle(state, "history");

    assert_eq!(panel_open(&state, "tools"), Some(true));
    assert_eq!(panel_open(&state, "history"), Some(true));
}
