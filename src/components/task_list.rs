//! Task List View Component

use leptos::prelude::*;

use crate::components::{FilterBar, TaskCard};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="view tasks-view">
            <FilterBar />
            <div class="tasks-list">
                {move || {
                    let tasks = store.tasks().get();
                    if tasks.is_empty() {
                        view! { <p class="text-muted">"No tasks match the current filters."</p> }.into_any()
                    } else {
                        tasks.into_iter().map(|task| view! { <TaskCard task=task /> }).collect_view().into_any()
                    }
                }}
            </div>
        </section>
    }
}
