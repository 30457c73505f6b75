//! Category Endpoints
//!
//! Bindings for the `/categories` resource.

use super::ApiClient;
use crate::error::ApiOutcome;
use crate::models::{Category, CategoryDraft, CategoryListResponse, MessageResponse};

pub async fn list_categories(api: &ApiClient) -> ApiOutcome<Vec<Category>> {
    api.get::<CategoryListResponse>("/categories/")
        .await
        .map(|r| r.categories)
}

pub async fn create_category(api: &ApiClient, draft: &CategoryDraft) -> ApiOutcome<MessageResponse> {
    api.post("/categories/", draft).await
}

pub async fn update_category(api: &ApiClient, id: u32, draft: &CategoryDraft) -> ApiOutcome<MessageResponse> {
    api.put(&format!("/categories/{}", id), draft).await
}

pub async fn delete_category(api: &ApiClient, id: u32) -> ApiOutcome<MessageResponse> {
    api.delete(&format!("/categories/{}", id)).await
}
