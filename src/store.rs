//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. [`StoreShell`]
//! is the view side of the services: every shell call lands in a store field.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use futures::channel::oneshot;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::filter::TaskFilter;
use crate::models::{Category, Task, TaskStats, User};
use crate::shell::{Screen, Shell, Toast, View};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

/// Create/edit modal state
#[derive(Debug, Clone, PartialEq)]
pub enum ModalState<T> {
    Closed,
    Create,
    Edit(T),
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        ModalState::Closed
    }
}

impl<T> ModalState<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn editing(&self) -> Option<&T> {
        match self {
            ModalState::Edit(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
    pub id: u32,
    pub toast: Toast,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub screen: Screen,
    pub auth_tab: AuthTab,
    pub view: View,
    /// Signed-in user shown in the sidebar
    pub user: Option<User>,
    /// Task list as last loaded, already filtered by the backend
    pub tasks: Vec<Task>,
    pub categories: Vec<Category>,
    pub stats: TaskStats,
    pub recent_tasks: Vec<Task>,
    pub task_modal: ModalState<Task>,
    pub category_modal: ModalState<Category>,
    /// Selected filter controls; never persisted
    pub filter: TaskFilter,
    pub filters_collapsed: bool,
    /// Nesting depth of running actions; overlay shows while non-zero
    pub loading: u32,
    pub toasts: Vec<ToastEntry>,
    pub next_toast_id: u32,
    /// Question awaiting an answer in the confirm dialog
    pub confirm_prompt: Option<String>,
    pub theme: Theme,
    /// Sidebar drawer on narrow screens
    pub sidebar_open: bool,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Push a toast and schedule its removal
pub fn store_push_toast(store: &AppStore, toast: Toast) {
    let id = store.next_toast_id().get_untracked();
    store.next_toast_id().set(id.wrapping_add(1));
    let duration = toast.kind.duration_ms();
    store.toasts().write().push(ToastEntry { id, toast });

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(duration).await;
        store_dismiss_toast(&store, id);
    });
}

/// Remove a toast by ID; unknown IDs are ignored
pub fn store_dismiss_toast(store: &AppStore, id: u32) {
    store.toasts().write().retain(|entry| entry.id != id);
}

// ========================
// Shell Implementation
// ========================

type ConfirmReply = Arc<Mutex<Option<oneshot::Sender<bool>>>>;

/// Shell backed by the reactive store
#[derive(Clone)]
pub struct StoreShell {
    store: AppStore,
    pending_confirm: ConfirmReply,
}

impl StoreShell {
    pub fn new(store: AppStore) -> Self {
        Self {
            store,
            pending_confirm: Arc::new(Mutex::new(None)),
        }
    }

    /// Answer the open confirm dialog
    pub fn resolve_confirm(&self, answer: bool) {
        self.store.confirm_prompt().set(None);
        let sender = self
            .pending_confirm
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(sender) = sender {
            let _ = sender.send(answer);
        }
    }
}

#[async_trait(?Send)]
impl Shell for StoreShell {
    fn show_auth_screen(&self) {
        self.store.screen().set(Screen::Auth);
        self.store.user().set(None);
        self.store.task_modal().set(ModalState::Closed);
        self.store.category_modal().set(ModalState::Closed);
    }

    fn show_main_screen(&self, user: &User) {
        self.store.user().set(Some(user.clone()));
        self.store.screen().set(Screen::Main);
    }

    fn show_login_tab(&self) {
        self.store.auth_tab().set(AuthTab::Login);
    }

    fn notify(&self, toast: Toast) {
        store_push_toast(&self.store, toast);
    }

    fn begin_loading(&self) {
        self.store.loading().update(|depth| *depth += 1);
    }

    fn end_loading(&self) {
        self.store.loading().update(|depth| *depth = depth.saturating_sub(1));
    }

    fn set_view(&self, view: View) {
        self.store.view().set(view);
        self.store.sidebar_open().set(false);
    }

    fn task_filter(&self) -> TaskFilter {
        self.store.filter().get_untracked()
    }

    fn render_tasks(&self, tasks: Vec<Task>) {
        self.store.tasks().set(tasks);
    }

    fn render_categories(&self, categories: Vec<Category>) {
        self.store.categories().set(categories);
    }

    fn render_stats(&self, stats: TaskStats) {
        self.store.stats().set(stats);
    }

    fn render_recent_tasks(&self, tasks: Vec<Task>) {
        self.store.recent_tasks().set(tasks);
    }

    fn open_task_editor(&self, task: Task) {
        self.store.task_modal().set(ModalState::Edit(task));
    }

    fn close_task_modal(&self) {
        self.store.task_modal().set(ModalState::Closed);
    }

    fn close_category_modal(&self) {
        self.store.category_modal().set(ModalState::Closed);
    }

    async fn confirm(&self, message: &str) -> bool {
        let (sender, receiver) = oneshot::channel();
        // an unanswered earlier prompt is dropped and reads as declined
        *self
            .pending_confirm
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(sender);
        self.store.confirm_prompt().set(Some(message.to_string()));
        receiver.await.unwrap_or(false)
    }
}
