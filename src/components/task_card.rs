//! Task Card Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::format::format_date;
use crate::models::{Task, DEFAULT_CATEGORY_COLOR};
use crate::services;

/// One task with its badges and dates.
///
/// `compact` cards (dashboard) only offer edit.
#[component]
pub fn TaskCard(task: Task, #[prop(optional)] compact: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = task.id;

    let edit = move |_: web_sys::MouseEvent| ctx.spawn(move |svc| async move { services::tasks::edit_task(&svc, id).await });
    let delete = move |_: web_sys::MouseEvent| ctx.spawn(move |svc| async move { services::tasks::delete_task(&svc, id).await });

    let category_badge = task.category_name.clone().map(|name| {
        let color = task.category_color.clone().unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string());
        let style = format!("background-color: {}20; color: {}", color, color);
        view! { <span class="task-badge" style=style>{name}</span> }
    });
    let due = task
        .due_date
        .as_deref()
        .map(|due| view! { <div class="text-small text-muted">"Due: " {format_date(Some(due))}</div> });
    let updated = (task.updated_at != task.created_at).then(|| format!(" | Updated: {}", format_date(Some(task.updated_at.as_str()))));

    view! {
        <div class="task-card">
            <div class="task-header">
                <div class="task-title">{task.title.clone()}</div>
                <div class="task-actions">
                    <button class="btn btn-outline" title="Edit" on:click=edit>
                        <i class="fas fa-edit"></i>
                    </button>
                    {(!compact).then(|| view! {
                        <button class="btn btn-danger" title="Delete" on:click=delete>
                            <i class="fas fa-trash"></i>
                        </button>
                    })}
                </div>
            </div>
            {task.description.clone().filter(|d| !d.is_empty()).map(|d| view! { <div class="task-description">{d}</div> })}
            <div class="task-meta">
                <span class=format!("task-badge priority-{}", task.priority.as_str())>{task.priority.label()}</span>
                <span class=format!("task-badge status-{}", task.status.as_str())>{task.status.label()}</span>
                {category_badge}
            </div>
            {due}
            {(!compact).then(|| view! {
                <div class="text-xs text-muted mt-1">
                    "Created: " {format_date(Some(task.created_at.as_str()))} {updated}
                </div>
            })}
        </div>
    }
}
