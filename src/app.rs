//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::AppLayout;
use crate::pages::{
    home::HomePage, login::LoginPage, user_edit::EditUserPage, user_new::NewUserPage,
    users::UsersPage,
};
use crate::state::session::SessionState;
use crate::util::guard::RedirectIfAuth;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the single session store and kicks off the one-shot cookie
/// restore before any guarded route renders its children.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // One restore per application load. The captured generation lets an
    // explicit login/logout that races past a slow restore win.
    #[cfg(feature = "hydrate")]
    {
        let generation = session.get_untracked().generation();
        leptos::task::spawn_local(async move {
            let found = crate::net::api::fetch_current_user().await;
            session.update(|s| s.apply_restore(generation, found));
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/userboard.css"/>
        <Title text="Userboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("login")
                    view=|| {
                        view! {
                            <RedirectIfAuth>
                                <LoginPage/>
                            </RedirectIfAuth>
                        }
                    }
                />
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <AppLayout>
                                <HomePage/>
                            </AppLayout>
                        }
                    }
                />
                <Route
                    path=StaticSegment("manage-users")
                    view=|| {
                        view! {
                            <AppLayout>
                                <UsersPage/>
                            </AppLayout>
                        }
                    }
                />
                <Route
                    path=StaticSegment("new-user")
                    view=|| {
                        view! {
                            <AppLayout>
                                <NewUserPage/>
                            </AppLayout>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("edit-user"), ParamSegment("id"))
                    view=|| {
                        view! {
                            <AppLayout>
                                <EditUserPage/>
                            </AppLayout>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
