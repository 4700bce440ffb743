//! Manage-users page: the admin table with edit and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is fetched on mount and refetched after every delete; the
//! backend stays authoritative and nothing is cached across navigations.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::users::{UsersState, division_label};

#[cfg(any(test, feature = "hydrate"))]
const FETCH_USERS_FAILED: &str = "Failed to fetch users.";
#[cfg(any(test, feature = "hydrate"))]
const DELETE_USER_FAILED: &str = "Failed to delete user.";

fn edit_user_route(user_id: &str) -> String {
    format!("/edit-user/{user_id}")
}

/// Fetch the full user list into page state. A session-expired failure
/// also drops the store's identity so the auth guard can take over.
#[cfg(feature = "hydrate")]
async fn load_users(users: RwSignal<UsersState>, session: RwSignal<SessionState>) {
    match crate::net::api::fetch_all_users().await {
        Ok(items) => users.update(|s| {
            s.items = items;
            s.loading = false;
            s.error = None;
        }),
        Err(err) => {
            log::warn!("user list fetch failed: {err}");
            if err.is_session_expired() {
                session.update(SessionState::apply_expired);
            }
            users.update(|s| {
                s.loading = false;
                s.error = Some(FETCH_USERS_FAILED.to_owned());
            });
        }
    }
}

/// User management table with per-row edit links and delete confirmation.
#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let users = RwSignal::new(UsersState { loading: true, ..UsersState::default() });
    let delete_user_id = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(load_users(users, session));
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    let on_delete_cancel = Callback::new(move |()| delete_user_id.set(None));

    view! {
        <div class="users-page">
            <Show when=move || users.get().error.is_some()>
                <p class="users-page__error">{move || users.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !users.get().loading
                fallback=move || view! { <p class="users-page__loading">"Loading..."</p> }
            >
                <table class="users-table">
                    <caption class="users-table__caption">"A list of all users."</caption>
                    <thead>
                        <tr>
                            <th>"User ID"</th>
                            <th>"Username"</th>
                            <th>"Division Name"</th>
                            <th>"Email ID"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            users
                                .get()
                                .items
                                .into_iter()
                                .map(|user| {
                                    let delete_id = user.id.clone();
                                    view! {
                                        <tr>
                                            <td class="users-table__id">{user.id.clone()}</td>
                                            <td>{user.username.clone()}</td>
                                            <td>{division_label(&user)}</td>
                                            <td>{user.email.clone()}</td>
                                            <td class="users-table__actions">
                                                <a class="btn btn--primary" href=edit_user_route(&user.id)>
                                                    "Edit"
                                                </a>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| {
                                                        delete_user_id.set(Some(delete_id.clone()));
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
            <Show when=move || delete_user_id.get().is_some()>
                <DeleteUserDialog user_id=delete_user_id on_cancel=on_delete_cancel users=users/>
            </Show>
        </div>
    }
}

/// Confirmation dialog for removing a user record.
#[component]
fn DeleteUserDialog(
    user_id: RwSignal<Option<String>>,
    on_cancel: Callback<()>,
    users: RwSignal<UsersState>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let submit = Callback::new(move |()| {
        let Some(id) = user_id.get_untracked() else {
            return;
        };
        users.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_user(&id).await {
                Ok(()) => load_users(users, session).await,
                Err(err) => {
                    log::warn!("delete user failed: {err}");
                    if err.is_session_expired() {
                        session.update(SessionState::apply_expired);
                    }
                    users.update(|s| {
                        s.loading = false;
                        s.error = Some(DELETE_USER_FAILED.to_owned());
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, session);
        on_cancel.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete User"</h2>
                <p class="dialog__danger">"This will permanently delete this user account."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
