//! Route guards over the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two complementary gates share the session context: `RequireAuth` keeps
//! anonymous visitors out of admin routes, `RedirectIfAuth` keeps signed-in
//! users off public ones. Both are read-only observers; neither mutates the
//! store. The decision rules live in pure functions so the redirect
//! behavior is testable without a router.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionState, SessionStatus};

/// What a guard does with its children for a given session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render nothing yet; the restore has not resolved.
    Wait,
    /// Navigate away and render the guard's placeholder.
    Redirect,
    /// Render children.
    Render,
}

/// Authenticated-only rule: wait out the restore (avoids redirect flicker),
/// redirect once the store is definitively anonymous.
pub fn require_auth_outcome(state: &SessionState) -> GuardOutcome {
    match state.status {
        SessionStatus::Restoring => GuardOutcome::Wait,
        SessionStatus::Anonymous => GuardOutcome::Redirect,
        SessionStatus::Authenticated => GuardOutcome::Render,
    }
}

/// Public-only rule: any populated session leaves, everyone else (including
/// a still-restoring visitor) may see the public page.
pub fn public_only_outcome(state: &SessionState) -> GuardOutcome {
    if state.session.is_some() {
        GuardOutcome::Redirect
    } else {
        GuardOutcome::Render
    }
}

/// Gate for admin routes: renders children only for an authenticated
/// session, redirecting to `/login` once restore resolves anonymous.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    Effect::new(move || {
        if require_auth_outcome(&session.get()) == GuardOutcome::Redirect {
            navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || require_auth_outcome(&session.get()) == GuardOutcome::Render
            fallback=|| ()
        >
            {children()}
        </Show>
    }
}

/// Gate for public routes: sends an authenticated user to the landing route
/// and shows a placeholder while the redirect lands.
#[component]
pub fn RedirectIfAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    Effect::new(move || {
        if public_only_outcome(&session.get()) == GuardOutcome::Redirect {
            navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || public_only_outcome(&session.get()) == GuardOutcome::Render
            fallback=|| view! { <div class="guard-loading"><p>"Loading..."</p></div> }
        >
            {children()}
        </Show>
    }
}
