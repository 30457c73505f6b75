//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::future::Future;
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::filter::TaskFilter;
use crate::services::{self, Services};
use crate::store::{AppStateStoreFields, AppStore, StoreShell};
use crate::theme::ThemePreference;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    services: StoredValue<Services>,
    shell: StoredValue<Arc<StoreShell>>,
    theme: StoredValue<ThemePreference>,
    pub store: AppStore,
}

impl AppContext {
    pub fn new(services: Services, shell: Arc<StoreShell>, theme: ThemePreference, store: AppStore) -> Self {
        Self {
            services: StoredValue::new(services),
            shell: StoredValue::new(shell),
            theme: StoredValue::new(theme),
            store,
        }
    }

    /// Run a service operation in the background
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(Services) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let services = self.services.get_value();
        spawn_local(op(services));
    }

    /// Replace the filter set and reload the task list with it
    pub fn apply_filter(&self, filter: TaskFilter) {
        self.store.filter().set(filter);
        self.spawn(move |svc| async move {
            services::tasks::load_tasks(&svc, &filter).await;
        });
    }

    /// Answer the confirm dialog
    pub fn answer_confirm(&self, answer: bool) {
        self.shell.with_value(|shell| shell.resolve_confirm(answer));
    }

    pub fn toggle_theme(&self) {
        let current = self.store.theme().get_untracked();
        let next = self.theme.with_value(|pref| pref.toggle(current));
        next.apply();
        self.store.theme().set(next);
    }
}
