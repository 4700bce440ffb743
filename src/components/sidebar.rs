//! Navigation sidebar driven by the static nav tree.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::nav::{NAV_ITEMS, NavItem};

/// Left navigation rail. Submenus render expanded; the router intercepts
/// the anchor clicks for client-side navigation.
#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    let entries = NAV_ITEMS
        .iter()
        .map(|item| {
            view! {
                <li class="sidebar__item">
                    {if item.submenu.is_empty() {
                        nav_link(item, pathname).into_any()
                    } else {
                        view! {
                            <span class="sidebar__group">
                                <span class="sidebar__icon" aria-hidden="true">{item.icon}</span>
                                {item.title}
                            </span>
                            <ul class="sidebar__submenu">
                                {item.submenu
                                    .iter()
                                    .map(|sub| view! { <li class="sidebar__item">{nav_link(sub, pathname)}</li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                        .into_any()
                    }}
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <aside class="sidebar">
            <div class="sidebar__logo">"Userboard"</div>
            <nav class="sidebar__nav">
                <ul class="sidebar__list">{entries}</ul>
            </nav>
        </aside>
    }
}

fn nav_link(item: &'static NavItem, pathname: Memo<String>) -> impl IntoView {
    view! {
        <a
            class="sidebar__link"
            class=("sidebar__link--active", move || pathname.get() == item.href)
            href=item.href
        >
            <span class="sidebar__icon" aria-hidden="true">{item.icon}</span>
            <span class="sidebar__label">{item.title}</span>
        </a>
    }
}
