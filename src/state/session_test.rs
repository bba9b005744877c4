use super::*;

#[test]
fn session_starts_signed_out() {
    assert!(!SessionState::default().signed_in);
}

#[test]
fn sign_in_sets_the_flag() {
    let mut state = SessionState::default();
    state.sign_in();
    assert!(state.signed_in);
}

#[test]
fn sign_out_clears_the_flag() {
    let mut state = SessionState::default();
    state.sign_in();
    state.sign_out();
    assert!(!state.signed_in);
}
