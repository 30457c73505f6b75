//! Task Endpoints
//!
//! Bindings for the `/tasks` resource.

use super::ApiClient;
use crate::error::ApiOutcome;
use crate::filter::TaskFilter;
use crate::models::{
    CreatedTaskResponse, MessageResponse, StatsResponse, Task, TaskDraft, TaskListResponse, TaskResponse, TaskStats,
};

/// `/tasks/` with an optional query; the trailing slash is part of the route
pub fn tasks_path(filter: &TaskFilter, limit: Option<u32>) -> String {
    let query = filter.query_string(limit);
    if query.is_empty() {
        "/tasks/".to_string()
    } else {
        format!("/tasks/?{}", query)
    }
}

pub async fn list_tasks(api: &ApiClient, filter: &TaskFilter, limit: Option<u32>) -> ApiOutcome<Vec<Task>> {
    api.get::<TaskListResponse>(&tasks_path(filter, limit))
        .await
        .map(|r| r.tasks)
}

pub async fn get_task(api: &ApiClient, id: u32) -> ApiOutcome<Task> {
    api.get::<TaskResponse>(&format!("/tasks/{}", id)).await.map(|r| r.task)
}

pub async fn create_task(api: &ApiClient, draft: &TaskDraft) -> ApiOutcome<CreatedTaskResponse> {
    api.post("/tasks/", draft).await
}

pub async fn update_task(api: &ApiClient, id: u32, draft: &TaskDraft) -> ApiOutcome<MessageResponse> {
    api.put(&format!("/tasks/{}", id), draft).await
}

pub async fn delete_task(api: &ApiClient, id: u32) -> ApiOutcome<MessageResponse> {
    api.delete(&format!("/tasks/{}", id)).await
}

pub async fn task_stats(api: &ApiClient) -> ApiOutcome<TaskStats> {
    api.get::<StatsResponse>("/tasks/stats").await.map(|r| r.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    #[test]
    fn test_tasks_path() {
        assert_eq!(tasks_path(&TaskFilter::default(), None), "/tasks/");
        assert_eq!(tasks_path(&TaskFilter::default(), Some(5)), "/tasks/?limit=5");
        let completed = TaskFilter {
            status: Some(TaskStatus::Completed),
            ..TaskFilter::default()
        };
        assert_eq!(tasks_path(&completed, None), "/tasks/?status=completed");
    }
}
