//! Categories Service

use std::ops::ControlFlow;

use super::Services;
use crate::api;
use crate::error::ApiOutcome;
use crate::models::CategoryDraft;
use crate::shell::{LoadingGuard, Toast};

pub const LOAD_CATEGORIES_FAILED: &str = "Failed to load categories";
pub const DELETE_CATEGORY_PROMPT: &str = "Are you sure you want to delete this category?";

pub async fn load_categories(svc: &Services) -> ControlFlow<()> {
    match api::list_categories(&svc.api).await {
        ApiOutcome::Ok(categories) => {
            tracing::debug!(count = categories.len(), "loaded categories");
            svc.shell.render_categories(categories);
        }
        ApiOutcome::AuthExpired => return ControlFlow::Break(()),
        ApiOutcome::Failed(_) => svc.shell.notify(Toast::error(LOAD_CATEGORIES_FAILED)),
    }
    ControlFlow::Continue(())
}

pub async fn create_category(svc: &Services, draft: &CategoryDraft) {
    let _loading = LoadingGuard::new(&*svc.shell);
    match api::create_category(&svc.api, draft).await {
        ApiOutcome::Ok(resp) => {
            svc.shell.notify(Toast::success(resp.message));
            svc.shell.close_category_modal();
            load_categories(svc).await;
        }
        ApiOutcome::AuthExpired => {}
        ApiOutcome::Failed(err) => svc.shell.notify(Toast::error(err.to_string())),
    }
}

pub async fn update_category(svc: &Services, id: u32, draft: &CategoryDraft) {
    let _loading = LoadingGuard::new(&*svc.shell);
    match api::update_category(&svc.api, id, draft).await {
        ApiOutcome::Ok(resp) => {
            svc.shell.notify(Toast::success(resp.message));
            svc.shell.close_category_modal();
            load_categories(svc).await;
        }
        ApiOutcome::AuthExpired => {}
        ApiOutcome::Failed(err) => svc.shell.notify(Toast::error(err.to_string())),
    }
}

/// Ask first; a declined prompt sends nothing
pub async fn delete_category(svc: &Services, id: u32) {
    if !svc.shell.confirm(DELETE_CATEGORY_PROMPT).await {
        return;
    }

    let _loading = LoadingGuard::new(&*svc.shell);
    match api::delete_category(&svc.api, id).await {
        ApiOutcome::Ok(resp) => {
            svc.shell.notify(Toast::success(resp.message));
            svc.shell.close_category_modal();
            load_categories(svc).await;
        }
        ApiOutcome::AuthExpired => {}
        ApiOutcome::Failed(err) => svc.shell.notify(Toast::error(err.to_string())),
    }
}
