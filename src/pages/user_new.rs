//! Create-user form page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::types::RegisterPayload;
use crate::net::types::UserDraft;
use crate::pages::user_form::{UserFormFields, validate_new_user};
use crate::state::session::SessionState;

/// Registration form; on success the admin lands back on the user table.
#[component]
pub fn NewUserPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let draft = RwSignal::new(UserDraft::default());
    let password = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft_value = draft.get();
        let password_value = password.get();
        if let Err(message) = validate_new_user(&draft_value, &password_value) {
            notice.set(message.to_owned());
            return;
        }
        busy.set(true);
        notice.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let payload = RegisterPayload { draft: draft_value, password: password_value };
                match crate::net::api::register_user(&payload).await {
                    Ok(()) => {
                        navigate("/manage-users", NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("create user failed: {err}");
                        if err.is_session_expired() {
                            session.update(SessionState::apply_expired);
                        }
                        notice.set("Failed to create user.".to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft_value, password_value, &navigate, session);
            busy.set(false);
        }
    };

    view! {
        <div class="user-form-page">
            <div class="user-form-card">
                <h2>"New User"</h2>
                <form class="user-form" on:submit=on_submit>
                    <UserFormFields draft=draft password=password/>
                    <Show when=move || !notice.get().is_empty()>
                        <p class="user-form__notice">{move || notice.get()}</p>
                    </Show>
                    <div class="user-form__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Submit"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
