//! Authenticated landing page.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Landing route inside the admin chrome: identity summary plus shortcuts
/// into the user-management flows.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let identity = move || {
        session
            .get()
            .session
            .map(|s| format!("Signed in as {} ({})", s.username, s.role))
            .unwrap_or_default()
    };

    view! {
        <div class="home-page">
            <h2>"Welcome"</h2>
            <p class="home-page__identity">{identity}</p>
            <ul class="home-page__links">
                <li>
                    <a href="/manage-users">"Manage Users"</a>
                </li>
                <li>
                    <a href="/new-user">"New User"</a>
                </li>
            </ul>
        </div>
    }
}
