//! Dashboard Service
//!
//! Statistics counters and the recent-tasks list. Failures here are only
//! logged; the dashboard keeps whatever it showed before.

use std::ops::ControlFlow;

use super::Services;
use crate::api;
use crate::error::ApiOutcome;
use crate::filter::TaskFilter;

/// Recent tasks shown on the dashboard, whatever the backend returns
pub const RECENT_TASKS_LIMIT: usize = 5;

/// Stats, then recent tasks; stops once the session has expired
pub async fn init(svc: &Services) -> ControlFlow<()> {
    if load_stats(svc).await.is_break() {
        return ControlFlow::Break(());
    }
    load_recent_tasks(svc).await
}

pub async fn load_stats(svc: &Services) -> ControlFlow<()> {
    match api::task_stats(&svc.api).await {
        ApiOutcome::Ok(stats) => svc.shell.render_stats(stats),
        ApiOutcome::AuthExpired => return ControlFlow::Break(()),
        ApiOutcome::Failed(err) => tracing::error!("failed to load statistics: {}", err),
    }
    ControlFlow::Continue(())
}

pub async fn load_recent_tasks(svc: &Services) -> ControlFlow<()> {
    let limit = RECENT_TASKS_LIMIT as u32;
    match api::list_tasks(&svc.api, &TaskFilter::default(), Some(limit)).await {
        ApiOutcome::Ok(mut tasks) => {
            tasks.truncate(RECENT_TASKS_LIMIT);
            svc.shell.render_recent_tasks(tasks);
        }
        ApiOutcome::AuthExpired => return ControlFlow::Break(()),
        ApiOutcome::Failed(err) => tracing::error!("failed to load recent tasks: {}", err),
    }
    ControlFlow::Continue(())
}
