//! View Shell
//!
//! The surface services drive to change what the user sees. The app backs it
//! with the reactive store; tests back it with a recorder.

use async_trait::async_trait;

use crate::filter::TaskFilter;
use crate::models::{Category, Task, TaskStats, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Login / register tabs
    #[default]
    Auth,
    Main,
}

/// Panel shown inside the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Tasks,
    Categories,
}

impl View {
    pub const ALL: [View; 3] = [View::Dashboard, View::Tasks, View::Categories];

    pub fn title(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Tasks => "Tasks",
            View::Categories => "Categories",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            View::Dashboard => "fas fa-chart-line",
            View::Tasks => "fas fa-list-check",
            View::Categories => "fas fa-tags",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// Errors linger longer
    pub fn duration_ms(self) -> u32 {
        match self {
            ToastKind::Error => 8_000,
            _ => 5_000,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            ToastKind::Success => "fas fa-check-circle",
            ToastKind::Error => "fas fa-exclamation-triangle",
            ToastKind::Info => "fas fa-info-circle",
        }
    }
}

/// Transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Info, message: message.into() }
    }

    /// First non-blank line as headline, remaining non-blank lines as details
    pub fn headline_and_details(&self) -> (String, Option<String>) {
        let mut lines = self.message.lines().filter(|l| !l.trim().is_empty());
        let headline = lines.next().unwrap_or_default().to_string();
        let details = lines.collect::<Vec<_>>().join("\n");
        (headline, (!details.is_empty()).then_some(details))
    }
}

#[async_trait(?Send)]
pub trait Shell: Send + Sync {
    fn show_auth_screen(&self);
    fn show_main_screen(&self, user: &User);
    /// Switch the auth screen to its login tab
    fn show_login_tab(&self);
    fn notify(&self, toast: Toast);

    fn begin_loading(&self);
    fn end_loading(&self);

    fn set_view(&self, view: View);
    /// Filter set currently selected in the task list controls
    fn task_filter(&self) -> TaskFilter;

    fn render_tasks(&self, tasks: Vec<Task>);
    fn render_categories(&self, categories: Vec<Category>);
    fn render_stats(&self, stats: TaskStats);
    fn render_recent_tasks(&self, tasks: Vec<Task>);

    /// Open the task modal prefilled with `task`
    fn open_task_editor(&self, task: Task);
    fn close_task_modal(&self);
    fn close_category_modal(&self);

    /// Ask the user to confirm a destructive action
    async fn confirm(&self, message: &str) -> bool;
}

/// Holds the loading indicator up until dropped
pub struct LoadingGuard<'a> {
    shell: &'a dyn Shell,
}

impl<'a> LoadingGuard<'a> {
    pub fn new(shell: &'a dyn Shell) -> Self {
        shell.begin_loading();
        Self { shell }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.shell.end_loading();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_and_details() {
        let toast = Toast::error("Validation failed\n\ntitle is required\n  \nbad date");
        let (headline, details) = toast.headline_and_details();
        assert_eq!(headline, "Validation failed");
        assert_eq!(details.as_deref(), Some("title is required\nbad date"));
    }

    #[test]
    fn test_single_line_has_no_details() {
        let (headline, details) = Toast::success("Saved").headline_and_details();
        assert_eq!(headline, "Saved");
        assert_eq!(details, None);
    }

    #[test]
    fn test_durations() {
        assert_eq!(ToastKind::Error.duration_ms(), 8_000);
        assert_eq!(ToastKind::Success.duration_ms(), 5_000);
        assert_eq!(ToastKind::Info.duration_ms(), 5_000);
    }
}
