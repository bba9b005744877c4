use super::*;

#[test]
fn menu_starts_closed() {
    let state = MenuState::default();
    assert!(!state.is_open(0));
    assert!(!state.is_open(1));
}

#[test]
fn toggle_opens_a_closed_trigger() {
    let mut state = MenuState::default();
    state.toggle(0);
    assert!(state.is_open(0));
}

#[test]
fn toggle_closes_the_open_trigger() {
    let mut state = MenuState::default();
    state.toggle(0);
    state.toggle(0);
    assert!(!state.is_open(0));
}

#[test]
fn opening_one_trigger_closes_its_sibling() {
    let mut state = MenuState::default();
    state.toggle(0);
    state.toggle(1);
    assert!(!state.is_open(0));
    assert!(state.is_open(1));
}

#[test]
fn close_clears_any_open_trigger() {
    let mut state = MenuState::default();
    state.toggle(2);
    state.close();
    assert!(!state.is_open(2));
    assert_eq!(state, MenuState::default());
}
