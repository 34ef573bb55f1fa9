use super::*;

#[test]
fn auth_state_default_has_no_session() {
    let state = AuthState::default();
    assert!(!state.signed_in());
    assert!(!state.restored);
    assert!(state.bearer().is_none());
}

#[test]
fn sign_in_then_out() {
    let mut state = AuthState::default();
    state.sign_in("tok");
    assert!(state.signed_in());
    assert!(state.restored);
    assert_eq!(state.bearer(), Some("tok"));

    state.sign_out();
    assert!(!state.signed_in());
}

#[test]
fn empty_token_does_not_sign_in() {
    let mut state = AuthState::default();
    state.sign_in("");
    assert!(!state.signed_in());
}

#[test]
fn unauthorized_error_expires_session() {
    let mut state = AuthState::default();
    state.sign_in("tok");
    assert!(state.expire_on(&ApiError::Unauthorized));
    assert!(state.token.is_none());
}

#[test]
fn other_errors_keep_session() {
    let mut state = AuthState::default();
    state.sign_in("tok");
    assert!(!state.expire_on(&ApiError::Network("offline".to_owned())));
    assert!(!state.expire_on(&ApiError::from_status(500, None)));
    assert_eq!(state.bearer(), Some("tok"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn restore_outside_browser_has_no_token() {
    let state = AuthState::restore();
    assert!(state.restored);
    assert!(!state.signed_in());
}
