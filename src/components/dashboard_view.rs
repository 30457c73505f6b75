//! Dashboard View Component
//!
//! Counters from `/tasks/stats` and the five most recent tasks.

use leptos::prelude::*;

use crate::components::TaskCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn StatCard(icon: &'static str, label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-icon"><i class=icon></i></div>
            <div class="stat-info">
                <div class="stat-value">{move || value.get()}</div>
                <div class="stat-label">{label}</div>
            </div>
        </div>
    }
}

#[component]
pub fn DashboardView() -> impl IntoView {
    let store = use_app_store();
    let stats = store.stats();
    let count = move |pick: fn(&crate::models::TaskStats) -> u32| {
        Signal::derive(move || stats.with(|s| pick(s).to_string()))
    };

    view! {
        <section class="view dashboard-view">
            <div class="stats-grid">
                <StatCard icon="fas fa-tasks" label="Total tasks" value=count(|s| s.total_tasks) />
                <StatCard icon="fas fa-clock" label="Pending" value=count(|s| s.pending_tasks) />
                <StatCard icon="fas fa-spinner" label="In progress" value=count(|s| s.in_progress_tasks) />
                <StatCard icon="fas fa-check-circle" label="Completed" value=count(|s| s.completed_tasks) />
                <StatCard
                    icon="fas fa-percentage"
                    label="Completion rate"
                    value=Signal::derive(move || format!("{}%", stats.with(|s| s.completion_rate)))
                />
                <StatCard icon="fas fa-fire" label="Urgent" value=count(|s| s.urgent_priority_tasks) />
            </div>

            <div class="recent-tasks">
                <h3>"Recent tasks"</h3>
                {move || {
                    let tasks = store.recent_tasks().get();
                    if tasks.is_empty() {
                        view! { <p class="text-muted">"No tasks yet."</p> }.into_any()
                    } else {
                        tasks
                            .into_iter()
                            .map(|task| view! { <TaskCard task=task compact=true /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}
