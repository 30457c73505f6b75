//! Domain Services
//!
//! One module per screen area. Each operation calls the backend, pushes the
//! result into the shell, and turns every failure into a notification, so
//! none of them return errors.

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod tasks;
pub mod view;

use std::sync::Arc;

use crate::api::ApiClient;
use crate::session::SessionStore;
use crate::shell::Shell;

/// Everything an operation needs, passed explicitly instead of globals
#[derive(Clone)]
pub struct Services {
    pub api: ApiClient,
    pub session: SessionStore,
    pub shell: Arc<dyn Shell>,
}

impl Services {
    pub fn new(api: ApiClient, session: SessionStore, shell: Arc<dyn Shell>) -> Self {
        Self { api, session, shell }
    }
}
