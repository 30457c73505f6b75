//! Task Manager App
//!
//! Root component: wires the backend client, session and store together,
//! restores a persisted session, and switches between the auth and main
//! screens.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{ApiClient, GlooTransport};
use crate::components::{AuthScreen, ConfirmDialog, LoadingOverlay, MainScreen, ToastStack};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::services::{self, Services};
use crate::session::SessionStore;
use crate::shell::{Screen, Shell};
use crate::storage::BrowserStorage;
use crate::store::{AppState, AppStateStoreFields, StoreShell};
use crate::theme::ThemePreference;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let storage = BrowserStorage::shared();
    let theme = ThemePreference::new(storage.clone(), config.keys.theme.clone());
    let initial_theme = theme.load();
    initial_theme.apply();

    let store = Store::new(AppState::new(initial_theme));
    let shell = Arc::new(StoreShell::new(store));
    let session = SessionStore::new(storage, config.keys.clone());
    let api = ApiClient::new(
        config.api_base_url.clone(),
        Arc::new(GlooTransport),
        session.clone(),
        shell.clone() as Arc<dyn Shell>,
    );
    let app_services = Services::new(api, session, shell.clone());

    // Provide context to all children
    provide_context(store);
    let ctx = AppContext::new(app_services, shell, theme, store);
    provide_context(ctx);

    tracing::info!(api = %config.api_base_url, "task manager starting");
    ctx.spawn(|svc| async move {
        services::auth::check_authentication(&svc).await;
    });

    view! {
        <Show
            when=move || store.screen().get() == Screen::Main
            fallback=|| view! { <AuthScreen /> }
        >
            <MainScreen />
        </Show>
        <ToastStack />
        <ConfirmDialog />
        <LoadingOverlay />
    }
}
