use allyconnect_core::Viewer;
use allyconnect_core::content::{NavLink, UnreadCounts};
use leptos::prelude::*;

use super::Avatar;
use crate::icons::*;

#[component]
pub fn Header(
    brand: String,
    search_placeholder: String,
    nav_links: Vec<NavLink>,
    unread: UnreadCounts,
    /// Signed-in user; guests get the sign-in buttons
    #[prop(default = None)]
    viewer: Option<Viewer>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let desktop_links = nav_links
        .iter()
        .map(|link| view! { <a href=link.href.clone() class="nav-link">{link.label.clone()}</a> })
        .collect_view();
    let mobile_links = nav_links
        .into_iter()
        .map(|link| view! { <a href=link.href class="nav-link">{link.label}</a> })
        .collect_view();

    let actions = match viewer {
        Some(viewer) => view! { <ViewerActions viewer=viewer unread=unread /> }.into_any(),
        None => view! {
            <a href="/login" class="btn btn-ghost">"Sign In"</a>
            <a href="/signup" class="btn btn-primary">"Get Started"</a>
        }
        .into_any(),
    };

    view! {
        <header class="header">
            <div class="container">
                <div class="header-inner">
                    <a href="/" class="brand">{brand}</a>
                    <nav class="nav-links">{desktop_links}</nav>
                    <div class="search">
                        <Icon path=ICON_SEARCH size="16" />
                        <input type="search" placeholder=search_placeholder />
                    </div>
                    <div class="header-actions">
                        {actions}
                        <button
                            class="icon-btn menu-toggle"
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || {
                                if menu_open.get() {
                                    view! { <Icon path=ICON_CLOSE /> }.into_any()
                                } else {
                                    view! { <Icon path=ICON_MENU /> }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>
                <div class=move || if menu_open.get() { "mobile-menu" } else { "mobile-menu is-hidden" }>
                    <div class="search">
                        <Icon path=ICON_SEARCH size="16" />
                        <input type="search" placeholder="Search..." />
                    </div>
                    {mobile_links}
                </div>
            </div>
        </header>
    }
}

#[component]
fn ViewerActions(viewer: Viewer, unread: UnreadCounts) -> impl IntoView {
    let (user_menu_open, set_user_menu_open) = signal(false);
    let create_opportunity = viewer
        .role
        .can_post_opportunities()
        .then(|| view! { <button class="btn btn-outline">"Create Opportunity"</button> });
    let fallback = viewer.avatar_fallback().to_string();

    view! {
        <div class="quick-actions">
            <button class="btn btn-outline">"Post Doubt"</button>
            {create_opportunity}
        </div>
        <button class="icon-btn" aria-label="Notifications">
            <Icon path=ICON_BELL />
            {(unread.notifications > 0)
                .then(|| view! { <span class="counter">{unread.notifications}</span> })}
        </button>
        <a href="/messages" class="icon-btn" aria-label="Messages">
            <Icon path=ICON_MESSAGE />
            {(unread.messages > 0)
                .then(|| view! { <span class="counter secondary">{unread.messages}</span> })}
        </a>
        <div style="position: relative;">
            <button
                class="icon-btn"
                aria-label="Account"
                on:click=move |_| set_user_menu_open.update(|open| *open = !*open)
            >
                <Avatar name=viewer.name src=viewer.avatar fallback=fallback size="avatar-sm" />
            </button>
            <Show when=move || user_menu_open.get()>
                <div class="card user-menu">
                    <a href="/profile">"Profile"</a>
                    <a href="/messages">"Messages"</a>
                    <a href="/logout" class="danger">"Sign out"</a>
                </div>
            </Show>
        </div>
    }
}
