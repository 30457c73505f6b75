//! Tasks Service
//!
//! Task list loading and mutations. Every successful mutation reloads the
//! list with the active filter plus the dashboard statistics and recent tasks.

use std::ops::ControlFlow;

use super::{categories, dashboard, Services};
use crate::api;
use crate::error::ApiOutcome;
use crate::filter::TaskFilter;
use crate::models::TaskDraft;
use crate::shell::{LoadingGuard, Toast};

pub const LOAD_TASKS_FAILED: &str = "Failed to load tasks";
pub const DELETE_TASK_PROMPT: &str = "Are you sure you want to delete this task?";

/// Replace the cached task list with a fresh snapshot.
///
/// Breaks when the session expired, so callers skip the loads after it.
pub async fn load_tasks(svc: &Services, filter: &TaskFilter) -> ControlFlow<()> {
    let _loading = LoadingGuard::new(&*svc.shell);
    match api::list_tasks(&svc.api, filter, None).await {
        ApiOutcome::Ok(tasks) => {
            tracing::debug!(count = tasks.len(), "loaded tasks");
            svc.shell.render_tasks(tasks);
        }
        ApiOutcome::AuthExpired => return ControlFlow::Break(()),
        ApiOutcome::Failed(_) => svc.shell.notify(Toast::error(LOAD_TASKS_FAILED)),
    }
    ControlFlow::Continue(())
}

async fn reload_after_change(svc: &Services) {
    let filter = svc.shell.task_filter();
    if load_tasks(svc, &filter).await.is_continue() {
        dashboard::init(svc).await;
    }
}

pub async fn create_task(svc: &Services, draft: &TaskDraft) {
    let _loading = LoadingGuard::new(&*svc.shell);
    match api::create_task(&svc.api, draft).await {
        ApiOutcome::Ok(resp) => {
            svc.shell.notify(Toast::success(resp.message));
            svc.shell.close_task_modal();
            reload_after_change(svc).await;
        }
        ApiOutcome::AuthExpired => {}
        ApiOutcome::Failed(err) => svc.shell.notify(Toast::error(err.to_string())),
    }
}

pub async fn update_task(svc: &Services, id: u32, draft: &TaskDraft) {
    let _loading = LoadingGuard::new(&*svc.shell);
    match api::update_task(&svc.api, id, draft).await {
        ApiOutcome::Ok(resp) => {
            svc.shell.notify(Toast::success(resp.message));
            svc.shell.close_task_modal();
            reload_after_change(svc).await;
        }
        ApiOutcome::AuthExpired => {}
        ApiOutcome::Failed(err) => svc.shell.notify(Toast::error(err.to_string())),
    }
}

/// Ask first; a declined prompt sends nothing
pub async fn delete_task(svc: &Services, id: u32) {
    if !svc.shell.confirm(DELETE_TASK_PROMPT).await {
        return;
    }

    let _loading = LoadingGuard::new(&*svc.shell);
    match api::delete_task(&svc.api, id).await {
        ApiOutcome::Ok(resp) => {
            svc.shell.notify(Toast::success(resp.message));
            svc.shell.close_task_modal();
            reload_after_change(svc).await;
        }
        ApiOutcome::AuthExpired => {}
        ApiOutcome::Failed(err) => svc.shell.notify(Toast::error(err.to_string())),
    }
}

/// Fetch the latest copy of a task and open it in the editor, with the
/// category list loaded for its select
pub async fn edit_task(svc: &Services, id: u32) {
    let _loading = LoadingGuard::new(&*svc.shell);
    match api::get_task(&svc.api, id).await {
        ApiOutcome::Ok(task) => {
            if categories::load_categories(svc).await.is_continue() {
                svc.shell.open_task_editor(task);
            }
        }
        ApiOutcome::AuthExpired => {}
        ApiOutcome::Failed(err) => svc.shell.notify(Toast::error(err.to_string())),
    }
}
