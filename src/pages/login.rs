//! Login page: username + password against the cookie-session backend.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Both fields are required before a request goes out; validation failures
/// never reach the network layer.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Login form. Submission is disabled while the initial restore or another
/// auth round trip is in flight; the error line shows either the local
/// validation notice or the store's fixed auth message.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !session.get_untracked().can_submit() {
            return;
        }
        let (username_value, password_value) = match validate_login_input(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                notice.set(message.to_owned());
                return;
            }
        };
        notice.set(String::new());
        let generation = session.try_update(SessionState::begin_mutation).unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = match crate::net::api::login(&username_value, &password_value).await {
                Ok(found) => Some(found),
                Err(err) => {
                    log::warn!("login failed: {err}");
                    None
                }
            };
            session.update(|s| s.apply_login(generation, outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (username_value, password_value, generation);
    };

    let error_line = move || {
        if !notice.get().is_empty() {
            return notice.get();
        }
        session.get().error.map(|e| e.to_string()).unwrap_or_default()
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Login"</h1>
                <p class="login-card__subtitle">
                    "Enter your username and password to access your account."
                </p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Username"
                        <input
                            class="login-input"
                            type="text"
                            placeholder="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || !session.get().can_submit()
                    >
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !error_line().is_empty()>
                    <p class="login-message">{error_line}</p>
                </Show>
            </div>
        </div>
    }
}
