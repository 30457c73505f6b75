//! UI Components
//!
//! Leptos components for the two screens, the editors and the overlays.

mod auth_screen;
mod category_list;
mod category_modal;
mod confirm_dialog;
mod dashboard_view;
mod filter_bar;
mod loading_overlay;
mod main_screen;
mod modal;
mod sidebar;
mod task_card;
mod task_list;
mod task_modal;
mod toast_stack;

pub use auth_screen::AuthScreen;
pub use category_list::CategoryList;
pub use category_modal::CategoryModal;
pub use confirm_dialog::ConfirmDialog;
pub use dashboard_view::DashboardView;
pub use filter_bar::FilterBar;
pub use loading_overlay::LoadingOverlay;
pub use main_screen::MainScreen;
pub use modal::Modal;
pub use sidebar::Sidebar;
pub use task_card::TaskCard;
pub use task_list::TaskList;
pub use task_modal::TaskModal;
pub use toast_stack::ToastStack;
