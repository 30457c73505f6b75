//! Auth Endpoints
//!
//! Bindings for login and registration.

use super::{ApiClient, LOGIN_PATH};
use crate::error::ApiOutcome;
use crate::models::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

pub const REGISTER_PATH: &str = "/auth/register";

pub async fn login(api: &ApiClient, username: &str, password: &str) -> ApiOutcome<LoginResponse> {
    api.post(LOGIN_PATH, &LoginRequest { username, password }).await
}

pub async fn register(api: &ApiClient, username: &str, email: &str, password: &str) -> ApiOutcome<MessageResponse> {
    api.post(REGISTER_PATH, &RegisterRequest { username, email, password }).await
}
