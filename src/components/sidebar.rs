//! Sidebar Component
//!
//! View navigation, signed-in user, theme toggle and logout. Slides in as a
//! drawer on narrow screens.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::services;
use crate::shell::View;
use crate::store::AppStateStoreFields;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let nav_item = move |view: View| {
        let class = move || if store.view().get() == view { "nav-item active" } else { "nav-item" };
        view! {
            <a
                href="#"
                class=class
                on:click=move |ev| {
                    ev.prevent_default();
                    ctx.spawn(move |svc| async move { services::view::switch_view(&svc, view).await });
                }
            >
                <i class=view.icon_class()></i>
                <span>{view.title()}</span>
            </a>
        }
    };

    view! {
        <Show when=move || store.sidebar_open().get()>
            <div class="sidebar-backdrop" on:click=move |_| store.sidebar_open().set(false)></div>
        </Show>
        <aside class=move || if store.sidebar_open().get() { "sidebar open" } else { "sidebar" }>
            <div class="sidebar-header">
                <i class="fas fa-list-check"></i>
                <span>"Task Manager"</span>
            </div>
            <nav class="sidebar-nav">
                {View::ALL.into_iter().map(nav_item).collect_view()}
            </nav>
            <div class="sidebar-footer">
                <div class="user-info">
                    <i class="fas fa-user-circle"></i>
                    <span class="user-name">
                        {move || store.user().get().map(|u| u.username).unwrap_or_default()}
                    </span>
                </div>
                <div class="sidebar-actions">
                    <button class="btn btn-outline" title="Toggle theme" on:click=move |_| ctx.toggle_theme()>
                        <i class=move || store.theme().get().toggle_icon_class()></i>
                    </button>
                    <button
                        class="btn btn-outline"
                        title="Logout"
                        on:click=move |_| ctx.spawn(|svc| async move { services::auth::logout(&svc) })
                    >
                        <i class="fas fa-sign-out-alt"></i>
                    </button>
                </div>
            </div>
        </aside>
    }
}
