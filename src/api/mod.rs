//! Backend API Client
//!
//! Every backend call goes through [`ApiClient::request`], which attaches the
//! bearer token, decodes JSON, and handles a rejected session once for the
//! whole app. Endpoint bindings are organized by resource.

mod auth;
mod category;
mod task;
mod transport;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, ApiOutcome};
use crate::session::SessionStore;
use crate::shell::{Shell, Toast};

pub use auth::*;
pub use category::*;
pub use task::*;
pub use transport::{GlooTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport};

pub const LOGIN_PATH: &str = "/auth/login";
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// The login endpoint reports bad credentials with 401, which must reach the form
fn is_login_path(path: &str) -> bool {
    path.contains(LOGIN_PATH)
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    session: SessionStore,
    shell: Arc<dyn Shell>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
        session: SessionStore,
        shell: Arc<dyn Shell>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            session,
            shell,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Issue one request and classify the reply.
    ///
    /// 401/422 on anything but login clears the session, returns to the auth
    /// screen and yields `AuthExpired`. Other failures yield `Failed` with the
    /// backend's `error` + `details` message.
    pub async fn request(&self, method: HttpMethod, path: &str, body: Option<Value>) -> ApiOutcome<Value> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = self.session.access_token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        let request = HttpRequest {
            method,
            url: self.url(path),
            headers,
            body: body.map(|b| b.to_string()),
        };

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(%method, path, "API request error: {}", err);
                return ApiOutcome::Failed(err);
            }
        };

        if response.is_success() {
            return match serde_json::from_str(&response.body) {
                Ok(value) => ApiOutcome::Ok(value),
                Err(e) => {
                    tracing::error!(%method, path, status = response.status, "malformed JSON: {}", e);
                    ApiOutcome::Failed(ApiError::Decode(e.to_string()))
                }
            };
        }

        if response.is_auth_failure() && !is_login_path(path) {
            tracing::warn!(%method, path, status = response.status, "session rejected by backend");
            self.session.clear_session();
            self.shell.show_auth_screen();
            self.shell.notify(Toast::error(SESSION_EXPIRED_MESSAGE));
            return ApiOutcome::AuthExpired;
        }

        let err = ApiError::from_response(response.status, &response.body);
        tracing::error!(%method, path, status = response.status, "API request error: {}", err);
        ApiOutcome::Failed(err)
    }

    /// `request` plus decoding into the endpoint's response type
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> ApiOutcome<T> {
        self.request(method, path, body).await.and_then(|value| {
            serde_json::from_value(value).map_err(|e| {
                tracing::error!(%method, path, "unexpected response shape: {}", e);
                ApiError::Decode(e.to_string())
            })
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiOutcome<T> {
        self.send(HttpMethod::Get, path, None).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiOutcome<T> {
        match encode(body) {
            Ok(value) => self.send(HttpMethod::Post, path, Some(value)).await,
            Err(err) => ApiOutcome::Failed(err),
        }
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiOutcome<T> {
        match encode(body) {
            Ok(value) => self.send(HttpMethod::Put, path, Some(value)).await,
            Err(err) => ApiOutcome::Failed(err),
        }
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiOutcome<T> {
        self.send(HttpMethod::Delete, path, None).await
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}
