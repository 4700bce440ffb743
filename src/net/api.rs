//! REST endpoint functions for the user-account backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, all credentialed
//! so the session cookie rides along. Server-side (SSR): stubs returning
//! `None`/`Unavailable` since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and
//! admin-page fetch failures degrade UI behavior without crashing
//! hydration. Response internals are logged, never surfaced to views.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::FetchError;
use super::types::{RegisterPayload, Session, User, UserDraft};
#[cfg(feature = "hydrate")]
use super::types::{ApiEnvelope, LoginMessage};

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_PATH: &str = "/api/v1/users/login";
#[cfg(any(test, feature = "hydrate"))]
const LOGOUT_PATH: &str = "/api/v1/users/logout";
#[cfg(any(test, feature = "hydrate"))]
const CURRENT_USER_PATH: &str = "/api/v1/users/current-user";
#[cfg(any(test, feature = "hydrate"))]
const REGISTER_PATH: &str = "/api/v1/users/register";
#[cfg(any(test, feature = "hydrate"))]
const ALL_USERS_PATH: &str = "/api/v1/users/all-users";

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(user_id: &str) -> String {
    format!("/api/v1/users/{user_id}")
}

/// Check the status and pull the body out of a decorated response.
#[cfg(feature = "hydrate")]
async fn decode<T>(response: gloo_net::http::Response) -> Result<T, FetchError>
where
    T: serde::de::DeserializeOwned,
{
    if !response.ok() {
        log::warn!("request to {} failed: {}", response.url(), response.status());
        return Err(FetchError::Status(response.status()));
    }
    response.json::<T>().await.map_err(|e| FetchError::Decode(e.to_string()))
}

/// Authenticate with username and password via `POST /api/v1/users/login`.
///
/// The backend sets the session cookie as a side effect; the returned
/// session is the only copy of the identity held client-side.
///
/// # Errors
///
/// Any failure is returned as a [`FetchError`]; the session store maps all
/// of them to the fixed invalid-credentials message.
pub async fn login(username: &str, password: &str) -> Result<Session, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let request = crate::net::http::credentialed(gloo_net::http::Request::post(
            &crate::net::http::api_url(LOGIN_PATH),
        ))
        .json(&payload)
        .map_err(|e| FetchError::Network(e.to_string()))?;
        let response = request.send().await.map_err(|e| FetchError::Network(e.to_string()))?;
        let body: ApiEnvelope<LoginMessage> = decode(response).await?;
        Ok(body.message.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(FetchError::Unavailable)
    }
}

/// End the backend session via `POST /api/v1/users/logout`.
///
/// # Errors
///
/// Backend failure is reported but the caller clears the local session
/// either way; the cookie's server-side validity is out of client control.
pub async fn logout() -> Result<(), FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let response = crate::net::http::credentialed(gloo_net::http::Request::post(
            &crate::net::http::api_url(LOGOUT_PATH),
        ))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
        if !response.ok() {
            log::warn!("logout failed: {}", response.status());
            return Err(FetchError::Status(response.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Unavailable)
    }
}

/// Restore the session from the ambient cookie via
/// `GET /api/v1/users/current-user`.
///
/// Returns `None` if not authenticated, on any failure, or on the server;
/// the caller cannot distinguish these and should not try to.
pub async fn fetch_current_user() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let result = crate::net::http::send_with_refresh(|| {
            crate::net::http::credentialed(gloo_net::http::Request::get(
                &crate::net::http::api_url(CURRENT_USER_PATH),
            ))
            .build()
        })
        .await;
        let response = match result {
            Ok(response) => response,
            Err(err) => {
                log::warn!("session restore failed: {err}");
                return None;
            }
        };
        if !response.ok() {
            return None;
        }
        let body: ApiEnvelope<Session> = response.json().await.ok()?;
        Some(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Create a user via `POST /api/v1/users/register`.
///
/// # Errors
///
/// [`FetchError::SessionExpired`] when the session outlives its refresh;
/// otherwise transport/status/decode failures as usual.
pub async fn register_user(payload: &RegisterPayload) -> Result<(), FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let response = crate::net::http::send_with_refresh(|| {
            crate::net::http::credentialed(gloo_net::http::Request::post(
                &crate::net::http::api_url(REGISTER_PATH),
            ))
            .json(payload)
        })
        .await?;
        if !response.ok() {
            log::warn!("register failed: {}", response.status());
            return Err(FetchError::Status(response.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(FetchError::Unavailable)
    }
}

/// List every managed user via `GET /api/v1/users/all-users`.
///
/// # Errors
///
/// See [`register_user`]; the list is never cached client-side.
pub async fn fetch_all_users() -> Result<Vec<User>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let response = crate::net::http::send_with_refresh(|| {
            crate::net::http::credentialed(gloo_net::http::Request::get(
                &crate::net::http::api_url(ALL_USERS_PATH),
            ))
            .build()
        })
        .await?;
        let body: ApiEnvelope<Vec<User>> = decode(response).await?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Unavailable)
    }
}

/// Fetch one user record via `GET /api/v1/users/{id}`.
///
/// # Errors
///
/// See [`register_user`].
pub async fn fetch_user(user_id: &str) -> Result<User, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let response = crate::net::http::send_with_refresh(|| {
            crate::net::http::credentialed(gloo_net::http::Request::get(
                &crate::net::http::api_url(&user_endpoint(user_id)),
            ))
            .build()
        })
        .await?;
        let body: ApiEnvelope<User> = decode(response).await?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err(FetchError::Unavailable)
    }
}

/// Update one user record via `PATCH /api/v1/users/{id}`.
///
/// # Errors
///
/// See [`register_user`].
pub async fn update_user(user_id: &str, draft: &UserDraft) -> Result<User, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let response = crate::net::http::send_with_refresh(|| {
            crate::net::http::credentialed(gloo_net::http::Request::patch(
                &crate::net::http::api_url(&user_endpoint(user_id)),
            ))
            .json(draft)
        })
        .await?;
        let body: ApiEnvelope<User> = decode(response).await?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, draft);
        Err(FetchError::Unavailable)
    }
}

/// Delete one user record via `DELETE /api/v1/users/{id}`.
///
/// # Errors
///
/// See [`register_user`].
pub async fn delete_user(user_id: &str) -> Result<(), FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let response = crate::net::http::send_with_refresh(|| {
            crate::net::http::credentialed(gloo_net::http::Request::delete(
                &crate::net::http::api_url(&user_endpoint(user_id)),
            ))
            .build()
        })
        .await?;
        if !response.ok() {
            log::warn!("delete user failed: {}", response.status());
            return Err(FetchError::Status(response.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err(FetchError::Unavailable)
    }
}
