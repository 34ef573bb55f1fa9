use super::*;

#[test]
fn should_redirect_unauth_when_restored_and_token_missing() {
    let state = AuthState { token: None, restored: true };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_before_restore() {
    let state = AuthState { token: None, restored: false };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_token_exists() {
    let state = AuthState { token: Some("tok".to_owned()), restored: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn expire_session_only_on_unauthorized() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState { token: Some("tok".to_owned()), restored: true });
        assert!(!expire_session(auth, &ApiError::Network("offline".to_owned())));
        assert!(auth.get_untracked().signed_in());
        assert!(expire_session(auth, &ApiError::Unauthorized));
        assert!(!auth.get_untracked().signed_in());
    });
}
