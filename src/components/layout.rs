//! Authenticated page chrome: sidebar, header, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every admin route renders inside this layout, which in turn sits behind
//! `RequireAuth`, so pages never run without a session. The header title is
//! derived from the nav tree; logout is the only session mutation outside
//! the login page.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::sidebar::Sidebar;
use crate::state::session::SessionState;
use crate::util::guard::RequireAuth;
use crate::util::nav::page_title;

/// Shared chrome for authenticated routes.
#[component]
pub fn AppLayout(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let pathname = use_location().pathname;

    let username = move || {
        session
            .get()
            .session
            .map(|s| s.username)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        if !session.get_untracked().can_submit() {
            return;
        }
        let generation = session.try_update(SessionState::begin_mutation).unwrap_or_default();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let backend_ok = crate::net::api::logout().await.is_ok();
            session.update(|s| s.apply_logout(generation, backend_ok));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = generation;
    };

    view! {
        <RequireAuth>
            <div class="layout">
                <Sidebar/>
                <div class="layout__main">
                    <header class="layout__header">
                        <h1 class="layout__title">{move || page_title(&pathname.get())}</h1>
                        <div class="layout__actions">
                            <span class="layout__user">{username}</span>
                            <button
                                class="btn layout__logout"
                                on:click=on_logout
                                disabled=move || session.get().busy
                            >
                                "Logout"
                            </button>
                        </div>
                    </header>
                    <main class="layout__content">{children()}</main>
                </div>
            </div>
        </RequireAuth>
    }
}
