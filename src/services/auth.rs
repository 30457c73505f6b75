//! Auth Service
//!
//! Login, registration, logout and startup session restore.

use super::{dashboard, Services};
use crate::api;
use crate::error::ApiOutcome;
use crate::session::PersistedSession;
use crate::shell::{LoadingGuard, Toast, View};

pub const LOGGED_OUT_MESSAGE: &str = "Logged out";

pub async fn login(svc: &Services, username: &str, password: &str) {
    let _loading = LoadingGuard::new(&*svc.shell);
    match api::login(&svc.api, username, password).await {
        ApiOutcome::Ok(resp) => {
            tracing::info!(user = %resp.user.username, "logged in");
            svc.session
                .set_session(resp.user.clone(), &resp.access_token, &resp.refresh_token);
            svc.shell.show_main_screen(&resp.user);
            svc.shell.set_view(View::Dashboard);
            svc.shell.notify(Toast::success(resp.message));
            dashboard::init(svc).await;
        }
        ApiOutcome::AuthExpired => {}
        ApiOutcome::Failed(err) => svc.shell.notify(Toast::error(err.to_string())),
    }
}

/// Create an account, then send the user to the login tab. No auto-login.
pub async fn register(svc: &Services, username: &str, email: &str, password: &str) {
    let _loading = LoadingGuard::new(&*svc.shell);
    match api::register(&svc.api, username, email, password).await {
        ApiOutcome::Ok(resp) => {
            svc.shell.notify(Toast::success(resp.message));
            svc.shell.show_login_tab();
        }
        ApiOutcome::AuthExpired => {}
        ApiOutcome::Failed(err) => svc.shell.notify(Toast::error(err.to_string())),
    }
}

pub fn logout(svc: &Services) {
    svc.session.clear_session();
    svc.shell.show_auth_screen();
    svc.shell.notify(Toast::success(LOGGED_OUT_MESSAGE));
}

/// Restore a persisted session at startup. Returns whether one was restored.
pub async fn check_authentication(svc: &Services) -> bool {
    match svc.session.restore() {
        PersistedSession::Restored(user) => {
            tracing::debug!(user = %user.username, "restored session");
            svc.shell.show_main_screen(&user);
            svc.shell.set_view(View::Dashboard);
            dashboard::init(svc).await;
            true
        }
        PersistedSession::Corrupt => {
            logout(svc);
            false
        }
        PersistedSession::Absent => {
            svc.shell.show_auth_screen();
            false
        }
    }
}
