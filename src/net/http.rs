//! Credentialed request plumbing and the silent session-refresh decorator.
//!
//! DESIGN
//! ======
//! Every authenticated endpoint call goes through [`send_with_refresh`]: the
//! request is sent once, a 401 triggers exactly one silent refresh-token
//! call, and a successful refresh retries the original request exactly once.
//! A failed refresh surfaces [`FetchError::SessionExpired`] so the caller
//! can clear the session store while still propagating the original
//! failure. There are no retry loops and no cross-request coordination;
//! concurrent 401s may each refresh independently, which the cookie-based
//! backend tolerates.
//!
//! The retry contract lives in [`run_with_refresh`], generic over the send
//! and refresh effects, so it stays unit-testable without a browser.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

#[cfg(any(test, feature = "hydrate"))]
use std::future::Future;

const DEFAULT_API_URL: &str = "http://localhost:8000";

#[cfg(any(test, feature = "hydrate"))]
const REFRESH_PATH: &str = "/api/v1/users/refresh-token";

/// Failure modes of a backend call, uniform across endpoints.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure: DNS, CORS, connection reset.
    #[error("network error: {0}")]
    Network(String),
    /// Non-success HTTP status outside the refresh path.
    #[error("request failed with status {0}")]
    Status(u16),
    /// A 401 survived the single silent refresh attempt.
    #[error("session expired (original status {original_status})")]
    SessionExpired { original_status: u16 },
    /// Response body did not match the expected envelope.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Server-side rendering stub; endpoints only exist in the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Backend base URL, overridable at compile time.
pub fn base_url() -> &'static str {
    option_env!("USERBOARD_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Join an endpoint path onto the configured base URL.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn api_url(path: &str) -> String {
    format!("{}{path}", base_url())
}

/// Only a 401 is worth a silent refresh; every other status is final.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn needs_refresh(status: u16) -> bool {
    status == 401
}

/// Result of driving one request through the refresh contract.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug)]
pub(crate) enum RefreshOutcome<T, E> {
    /// The first attempt was final, or the post-refresh retry resolved.
    Completed(Result<(u16, T), E>),
    /// The refresh itself failed; the original 401 stands.
    Expired { original_status: u16 },
}

/// Drive `send` once, refreshing and retrying exactly once on a 401.
///
/// `send` yields `(status, body)` on transport success; `refresh` reports
/// whether the silent refresh call succeeded. The second `send` outcome is
/// returned as-is, so a retry that still fails propagates its own status.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) async fn run_with_refresh<T, E, S, SFut, R, RFut>(send: S, refresh: R) -> RefreshOutcome<T, E>
where
    S: Fn() -> SFut,
    SFut: Future<Output = Result<(u16, T), E>>,
    R: FnOnce() -> RFut,
    RFut: Future<Output = bool>,
{
    let first = send().await;
    let original_status = match &first {
        Ok((status, _)) if needs_refresh(*status) => *status,
        _ => return RefreshOutcome::Completed(first),
    };
    if refresh().await {
        RefreshOutcome::Completed(send().await)
    } else {
        RefreshOutcome::Expired { original_status }
    }
}

/// Mark a request as cookie-bearing. The backend session rides entirely on
/// credentials; no Authorization header is ever attached client-side.
#[cfg(feature = "hydrate")]
pub(crate) fn credentialed(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    builder.credentials(web_sys::RequestCredentials::Include)
}

/// Silently renew the session cookie. Failures are logged, not surfaced;
/// the decorator converts them into [`FetchError::SessionExpired`].
#[cfg(feature = "hydrate")]
async fn refresh_session() -> bool {
    let result = credentialed(gloo_net::http::Request::post(&api_url(REFRESH_PATH)))
        .send()
        .await;
    match result {
        Ok(response) => response.ok(),
        Err(err) => {
            log::warn!("session refresh failed: {err}");
            false
        }
    }
}

/// Send a credentialed request with the single-retry refresh contract.
///
/// `build` is invoked per attempt because a request body can only be sent
/// once; it must produce a fresh request each time.
///
/// # Errors
///
/// [`FetchError::Network`] on transport failure, [`FetchError::SessionExpired`]
/// when a 401 outlives the refresh attempt. Non-2xx statuses are returned as
/// plain responses for the caller to map.
#[cfg(feature = "hydrate")]
pub(crate) async fn send_with_refresh<F>(build: F) -> Result<gloo_net::http::Response, FetchError>
where
    F: Fn() -> Result<gloo_net::http::Request, gloo_net::Error>,
{
    let send = || async {
        let request = build().map_err(|e| FetchError::Network(e.to_string()))?;
        let response = request.send().await.map_err(|e| FetchError::Network(e.to_string()))?;
        Ok((response.status(), response))
    };
    match run_with_refresh(send, refresh_session).await {
        RefreshOutcome::Completed(result) => result.map(|(_, response)| response),
        RefreshOutcome::Expired { original_status } => {
            log::warn!("session expired: refresh rejected after {original_status}");
            Err(FetchError::SessionExpired { original_status })
        }
    }
}

impl FetchError {
    /// True when the error means the session is gone and the store should
    /// drop the local identity.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, FetchError::SessionExpired { .. })
    }
}
