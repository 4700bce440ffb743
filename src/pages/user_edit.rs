//! Edit-user form page.
//!
//! Fetches the record for the route's id, prefills the shared form, and
//! PATCHes the draft back on submit.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::UserDraft;
#[cfg(feature = "hydrate")]
use crate::net::types::draft_from_user;
use crate::pages::user_form::{UserFormFields, validate_draft};
use crate::state::session::SessionState;

#[component]
pub fn EditUserPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let route_user_id = move || params.read_untracked().get("id").unwrap_or_default();

    let draft = RwSignal::new(UserDraft::default());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let saved = RwSignal::new(false);
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        let fetch_id = route_user_id();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_user(&fetch_id).await {
                Ok(user) => {
                    draft.set(draft_from_user(&user));
                    loading.set(false);
                }
                Err(err) => {
                    log::warn!("user fetch failed: {err}");
                    if err.is_session_expired() {
                        session.update(SessionState::apply_expired);
                    }
                    notice.set("Failed to fetch user details.".to_owned());
                    loading.set(false);
                }
            }
        });
    }

    // Leave for the table once the PATCH lands.
    Effect::new(move || {
        if saved.get() {
            navigate("/manage-users", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || loading.get() {
            return;
        }
        let draft_value = draft.get();
        if let Err(message) = validate_draft(&draft_value) {
            notice.set(message.to_owned());
            return;
        }
        busy.set(true);
        notice.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let patch_id = route_user_id();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_user(&patch_id, &draft_value).await {
                    Ok(_) => saved.set(true),
                    Err(err) => {
                        log::warn!("user update failed: {err}");
                        if err.is_session_expired() {
                            session.update(SessionState::apply_expired);
                        }
                        notice.set("Failed to update user.".to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&draft_value, session, route_user_id);
            busy.set(false);
        }
    };

    view! {
        <div class="user-form-page">
            <div class="user-form-card">
                <h2>"Edit User"</h2>
                <Show
                    when=move || !loading.get()
                    fallback=move || view! { <p class="user-form__loading">"Loading..."</p> }
                >
                    <form class="user-form" on:submit=on_submit>
                        <UserFormFields draft=draft/>
                        <div class="user-form__actions">
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                "Save Changes"
                            </button>
                        </div>
                    </form>
                </Show>
                <Show when=move || !notice.get().is_empty()>
                    <p class="user-form__notice">{move || notice.get()}</p>
                </Show>
            </div>
        </div>
    }
}
