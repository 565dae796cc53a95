use super::*;

#[test]
fn initial_state_is_unauthenticated() {
    assert!(!AuthState::default().authenticated);
}
