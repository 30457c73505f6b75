//! Main Screen Component
//!
//! Sidebar plus the active view, with the header action for that view and
//! the two editors.

use leptos::prelude::*;

use crate::components::{CategoryList, CategoryModal, DashboardView, Sidebar, TaskList, TaskModal};
use crate::context::AppContext;
use crate::services;
use crate::shell::View;
use crate::store::{AppStateStoreFields, ModalState};

#[component]
pub fn MainScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let new_task = move |_: web_sys::MouseEvent| {
        store.task_modal().set(ModalState::Create);
        // category select needs a fresh list
        ctx.spawn(|svc| async move {
            services::categories::load_categories(&svc).await;
        });
    };
    let new_category = move |_: web_sys::MouseEvent| store.category_modal().set(ModalState::Create);

    view! {
        <div class="main-screen">
            <Sidebar />
            <main class="main-content">
                <header class="content-header">
                    <button
                        class="btn btn-outline sidebar-toggle"
                        title="Menu"
                        on:click=move |_| store.sidebar_open().update(|open| *open = !*open)
                    >
                        <i class="fas fa-bars"></i>
                    </button>
                    <h2>{move || store.view().get().title()}</h2>
                    {move || match store.view().get() {
                        View::Categories => view! {
                            <button class="btn btn-primary" on:click=new_category>
                                <i class="fas fa-plus"></i>
                                " New Category"
                            </button>
                        }.into_any(),
                        _ => view! {
                            <button class="btn btn-primary" on:click=new_task>
                                <i class="fas fa-plus"></i>
                                " New Task"
                            </button>
                        }.into_any(),
                    }}
                </header>

                {move || match store.view().get() {
                    View::Dashboard => view! { <DashboardView /> }.into_any(),
                    View::Tasks => view! { <TaskList /> }.into_any(),
                    View::Categories => view! { <CategoryList /> }.into_any(),
                }}
            </main>

            <TaskModal />
            <CategoryModal />
        </div>
    }
}
