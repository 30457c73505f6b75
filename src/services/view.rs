//! View Controller
//!
//! Switches the main panel and loads the data it shows.

use super::{categories, dashboard, tasks, Services};
use crate::shell::View;

pub async fn switch_view(svc: &Services, view: View) {
    tracing::debug!(view = view.title(), "switching view");
    svc.shell.set_view(view);
    match view {
        View::Dashboard => {
            dashboard::init(svc).await;
        }
        View::Tasks => {
            let filter = svc.shell.task_filter();
            if tasks::load_tasks(svc, &filter).await.is_continue() {
                categories::load_categories(svc).await;
            }
        }
        View::Categories => {
            categories::load_categories(svc).await;
        }
    }
}
