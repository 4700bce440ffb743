use super::*;
use crate::net::types::Session;
use crate::state::session::AuthError;

fn restored_with(username: &str, role: &str) -> SessionState {
    let mut state = SessionState::default();
    let generation = state.generation();
    state.apply_restore(
        generation,
        Some(Session {
            id: "u1".to_owned(),
            username: username.to_owned(),
            email: format!("{username}@example.com"),
            role: role.to_owned(),
            created_at: String::new(),
            updated_at: String::new(),
        }),
    );
    state
}

fn restored_anonymous() -> SessionState {
    let mut state = SessionState::default();
    let generation = state.generation();
    state.apply_restore(generation, None);
    state
}

#[test]
fn require_auth_waits_while_restoring() {
    let state = SessionState::default();
    assert_eq!(require_auth_outcome(&state), GuardOutcome::Wait);
}

#[test]
fn require_auth_redirects_once_restore_resolves_anonymous() {
    let state = restored_anonymous();
    assert_eq!(require_auth_outcome(&state), GuardOutcome::Redirect);
}

#[test]
fn require_auth_renders_for_authenticated_session() {
    let state = restored_with("alice", "Admin");
    assert_eq!(require_auth_outcome(&state), GuardOutcome::Render);
}

#[test]
fn require_auth_redirects_after_logout() {
    let mut state = restored_with("alice", "Admin");
    let generation = state.begin_mutation();
    state.apply_logout(generation, true);
    assert_eq!(require_auth_outcome(&state), GuardOutcome::Redirect);
}

#[test]
fn require_auth_redirects_after_expiry() {
    let mut state = restored_with("alice", "Admin");
    state.apply_expired();
    assert_eq!(state.error, Some(AuthError::SessionExpired));
    assert_eq!(require_auth_outcome(&state), GuardOutcome::Redirect);
}

#[test]
fn public_only_renders_while_restoring_without_identity() {
    let state = SessionState::default();
    assert_eq!(public_only_outcome(&state), GuardOutcome::Render);
}

#[test]
fn public_only_renders_for_anonymous_visitor() {
    let state = restored_anonymous();
    assert_eq!(public_only_outcome(&state), GuardOutcome::Render);
}

#[test]
fn public_only_never_renders_with_a_session() {
    let state = restored_with("alice", "Admin");
    assert_eq!(public_only_outcome(&state), GuardOutcome::Redirect);
}

#[test]
fn restored_admin_renders_private_and_leaves_public() {
    let state = restored_with("alice", "Admin");
    assert_eq!(require_auth_outcome(&state), GuardOutcome::Render);
    assert_eq!(public_only_outcome(&state), GuardOutcome::Redirect);
}
