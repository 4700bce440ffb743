use std::cell::Cell;

use super::*;

// =============================================================
// Refresh decision
// =============================================================

#[test]
fn only_401_needs_refresh() {
    assert!(needs_refresh(401));
    assert!(!needs_refresh(200));
    assert!(!needs_refresh(403));
    assert!(!needs_refresh(500));
}

#[test]
fn api_url_joins_path_onto_base() {
    assert_eq!(api_url("/api/v1/users/login"), format!("{}/api/v1/users/login", base_url()));
}

#[test]
fn refresh_endpoint_matches_backend_contract() {
    assert_eq!(REFRESH_PATH, "/api/v1/users/refresh-token");
}

// =============================================================
// Retry contract
// =============================================================

#[test]
fn success_is_returned_without_refresh() {
    let sends = Cell::new(0u32);
    let refreshes = Cell::new(0u32);
    let outcome = futures::executor::block_on(run_with_refresh(
        || {
            sends.set(sends.get() + 1);
            async { Ok::<_, String>((200u16, "body")) }
        },
        || {
            refreshes.set(refreshes.get() + 1);
            async { true }
        },
    ));
    assert!(matches!(outcome, RefreshOutcome::Completed(Ok((200, "body")))));
    assert_eq!(sends.get(), 1);
    assert_eq!(refreshes.get(), 0);
}

#[test]
fn unauthorized_with_successful_refresh_retries_once() {
    let sends = Cell::new(0u32);
    let outcome = futures::executor::block_on(run_with_refresh(
        || {
            let attempt = sends.get() + 1;
            sends.set(attempt);
            async move {
                if attempt == 1 {
                    Ok::<_, String>((401u16, "stale"))
                } else {
                    Ok((200u16, "fresh"))
                }
            }
        },
        || async { true },
    ));
    assert!(matches!(outcome, RefreshOutcome::Completed(Ok((200, "fresh")))));
    assert_eq!(sends.get(), 2);
}

#[test]
fn unauthorized_with_failed_refresh_expires_with_original_status() {
    let sends = Cell::new(0u32);
    let outcome = futures::executor::block_on(run_with_refresh(
        || {
            sends.set(sends.get() + 1);
            async { Ok::<_, String>((401u16, "stale")) }
        },
        || async { false },
    ));
    assert!(matches!(outcome, RefreshOutcome::Expired { original_status: 401 }));
    assert_eq!(sends.get(), 1);
}

#[test]
fn retry_that_still_fails_is_not_refreshed_again() {
    let sends = Cell::new(0u32);
    let refreshes = Cell::new(0u32);
    let outcome = futures::executor::block_on(run_with_refresh(
        || {
            sends.set(sends.get() + 1);
            async { Ok::<_, String>((401u16, "still stale")) }
        },
        || {
            refreshes.set(refreshes.get() + 1);
            async { true }
        },
    ));
    assert!(matches!(outcome, RefreshOutcome::Completed(Ok((401, _)))));
    assert_eq!(sends.get(), 2);
    assert_eq!(refreshes.get(), 1);
}

#[test]
fn transport_error_skips_refresh() {
    let refreshes = Cell::new(0u32);
    let outcome = futures::executor::block_on(run_with_refresh(
        || async { Err::<(u16, &str), _>("connection reset".to_owned()) },
        || {
            refreshes.set(refreshes.get() + 1);
            async { true }
        },
    ));
    assert!(matches!(outcome, RefreshOutcome::Completed(Err(ref e)) if e == "connection reset"));
    assert_eq!(refreshes.get(), 0);
}

// =============================================================
// Error surface
// =============================================================

#[test]
fn session_expired_is_distinguishable() {
    assert!(FetchError::SessionExpired { original_status: 401 }.is_session_expired());
    assert!(!FetchError::Status(500).is_session_expired());
    assert!(!FetchError::Network("down".to_owned()).is_session_expired());
}

#[test]
fn fetch_error_messages_are_generic() {
    assert_eq!(FetchError::Status(500).to_string(), "request failed with status 500");
    assert_eq!(
        FetchError::SessionExpired { original_status: 401 }.to_string(),
        "session expired (original status 401)"
    );
    assert_eq!(FetchError::Unavailable.to_string(), "not available on server");
}
