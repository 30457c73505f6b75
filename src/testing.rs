//! Test Doubles
//!
//! Stand-ins for the browser: a scripted transport, an in-memory backend
//! speaking the REST contract, and a shell that records what it was told.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::api::{ApiClient, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::config::StorageKeys;
use crate::error::ApiError;
use crate::filter::TaskFilter;
use crate::models::{Category, Priority, Task, TaskStats, TaskStatus, User, DEFAULT_CATEGORY_COLOR};
use crate::services::Services;
use crate::session::SessionStore;
use crate::shell::{Screen, Shell, Toast, View};
use crate::storage::MemoryStorage;

pub const BASE_URL: &str = "http://backend.test/api";

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ========================
// Harness
// ========================

pub struct Harness {
    pub services: Services,
    pub shell: Arc<RecordingShell>,
    pub storage: Arc<MemoryStorage>,
}

pub fn harness(transport: Arc<dyn HttpTransport>) -> Harness {
    let storage = Arc::new(MemoryStorage::default());
    let session = SessionStore::new(storage.clone(), StorageKeys::default());
    let shell = Arc::new(RecordingShell::default());
    let api = ApiClient::new(BASE_URL, transport, session.clone(), shell.clone());
    Harness {
        services: Services::new(api, session, shell.clone()),
        shell,
        storage,
    }
}

// ========================
// Scripted Transport
// ========================

/// Replays queued responses in order and keeps every request it saw
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push_raw(status, &body.to_string());
    }

    pub fn push_raw(&self, status: u16, body: &str) {
        lock(&self.replies).push_back(Ok(HttpResponse { status, body: body.to_string() }));
    }

    pub fn push_err(&self, err: ApiError) {
        lock(&self.replies).push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        lock(&self.requests).push(request);
        lock(&self.replies)
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".into())))
    }
}

// ========================
// Fake Backend
// ========================

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: HttpMethod,
    /// Path relative to the API base, query included
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct BackendState {
    tasks: Vec<Task>,
    categories: Vec<Category>,
    next_task_id: u32,
    next_category_id: u32,
    tokens_revoked: bool,
    revoke_after_next: bool,
    fail_next: Option<u16>,
    requests: Vec<RecordedRequest>,
}

/// In-memory implementation of the REST backend for a single user `alice`
#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<BackendState>,
}

const TIMESTAMP: &str = "2025-01-01T09:00:00";

fn reply(status: u16, body: Value) -> HttpResponse {
    HttpResponse { status, body: body.to_string() }
}

fn error(status: u16, message: &str) -> HttpResponse {
    reply(status, json!({ "error": message }))
}

fn str_field<'a>(body: &'a Value, key: &str) -> &'a str {
    body.get(key).and_then(Value::as_str).unwrap_or_default()
}

fn count(tasks: &[Task], pred: impl Fn(&Task) -> bool) -> u32 {
    tasks.iter().filter(|t| pred(t)).count() as u32
}

fn parse_id(raw: &str) -> Option<u32> {
    raw.parse().ok()
}

fn id_field(body: &Value, key: &str) -> Option<u32> {
    body.get(key).and_then(Value::as_u64).map(|id| id as u32)
}

impl FakeBackend {
    pub const ACCESS_TOKEN: &'static str = "fake-access-token";
    pub const REFRESH_TOKEN: &'static str = "fake-refresh-token";

    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn user() -> User {
        User {
            id: 1,
            username: "alice".into(),
            email: "alice@example.com".into(),
        }
    }

    pub fn seed_task(&self, title: &str, status: &str, priority: &str, category_id: Option<u32>) -> u32 {
        let body = json!({
            "title": title,
            "status": status,
            "priority": priority,
            "category_id": category_id,
        });
        let mut state = lock(&self.state);
        let task = Self::task_from_body(&state, None, &body);
        Self::insert_task(&mut state, task)
    }

    pub fn seed_category(&self, name: &str) -> u32 {
        let mut state = lock(&self.state);
        state.next_category_id += 1;
        let id = state.next_category_id;
        state.categories.push(Category {
            id,
            name: name.to_string(),
            description: None,
            color: DEFAULT_CATEGORY_COLOR.to_string(),
            task_count: 0,
            created_at: Some(TIMESTAMP.to_string()),
        });
        id
    }

    pub fn task_count(&self) -> usize {
        lock(&self.state).tasks.len()
    }

    /// Every bearer token is rejected from now on
    pub fn revoke_tokens(&self) {
        lock(&self.state).tokens_revoked = true;
    }

    /// Tokens stop working once the next request has been answered
    pub fn revoke_after_next(&self) {
        lock(&self.state).revoke_after_next = true;
    }

    /// The next request fails with `status`, whatever it is
    pub fn fail_next(&self, status: u16) {
        lock(&self.state).fail_next = Some(status);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.state).requests.clone()
    }

    fn insert_task(state: &mut BackendState, mut task: Task) -> u32 {
        state.next_task_id += 1;
        task.id = state.next_task_id;
        let id = task.id;
        // newest first, like the real listing
        state.tasks.insert(0, task);
        id
    }

    fn task_from_body(state: &BackendState, existing: Option<&Task>, body: &Value) -> Task {
        let status = TaskStatus::parse(str_field(body, "status")).unwrap_or_default();
        let category_id = id_field(body, "category_id");
        let category = category_id.and_then(|id| state.categories.iter().find(|c| c.id == id));
        let description = str_field(body, "description");
        Task {
            id: existing.map(|t| t.id).unwrap_or_default(),
            title: str_field(body, "title").trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            priority: Priority::parse(str_field(body, "priority")).unwrap_or_default(),
            status,
            category_id,
            category_name: category.map(|c| c.name.clone()),
            category_color: category.map(|c| c.color.clone()),
            due_date: body.get("due_date").and_then(Value::as_str).map(str::to_string),
            completed_at: (status == TaskStatus::Completed).then(|| TIMESTAMP.to_string()),
            created_at: existing
                .map(|t| t.created_at.clone())
                .unwrap_or_else(|| TIMESTAMP.to_string()),
            updated_at: TIMESTAMP.to_string(),
        }
    }

    fn stats(state: &BackendState) -> TaskStats {
        let tasks = &state.tasks;
        let total = tasks.len() as u32;
        let completed = count(tasks, |t| t.status == TaskStatus::Completed);
        TaskStats {
            total_tasks: total,
            pending_tasks: count(tasks, |t| t.status == TaskStatus::Pending),
            in_progress_tasks: count(tasks, |t| t.status == TaskStatus::InProgress),
            completed_tasks: completed,
            completion_rate: if total == 0 {
                0.0
            } else {
                (f64::from(completed) * 1000.0 / f64::from(total)).round() / 10.0
            },
            high_priority_tasks: count(tasks, |t| t.priority == Priority::High),
            urgent_priority_tasks: count(tasks, |t| t.priority == Priority::Urgent),
        }
    }

    fn route(state: &mut BackendState, request: &HttpRequest, path: &str, body: &Value) -> HttpResponse {
        let (route, query) = path.split_once('?').unwrap_or((path, ""));
        let segments: Vec<&str> = route.trim_matches('/').split('/').collect();
        let method = request.method;

        match (method, segments.as_slice()) {
            (HttpMethod::Post, ["auth", "login"]) => return Self::login(body),
            (HttpMethod::Post, ["auth", "register"]) => return Self::register(body),
            _ => {}
        }

        let expected = format!("Bearer {}", Self::ACCESS_TOKEN);
        if state.tokens_revoked || request.header("Authorization") != Some(expected.as_str()) {
            return reply(401, json!({ "msg": "Token has expired" }));
        }

        match (method, segments.as_slice()) {
            (HttpMethod::Get, ["tasks"]) => Self::list_tasks(state, query),
            (HttpMethod::Get, ["tasks", "stats"]) => reply(200, json!({ "stats": Self::stats(state) })),
            (HttpMethod::Post, ["tasks"]) => Self::create_task(state, body),
            (HttpMethod::Get, ["tasks", id]) => match state.tasks.iter().find(|t| Some(t.id) == parse_id(id)) {
                Some(task) => reply(200, json!({ "task": task })),
                None => error(404, "Task not found"),
            },
            (HttpMethod::Put, ["tasks", id]) => Self::update_task(state, parse_id(id), body),
            (HttpMethod::Delete, ["tasks", id]) => {
                let before = state.tasks.len();
                state.tasks.retain(|t| Some(t.id) != parse_id(id));
                if state.tasks.len() == before {
                    error(404, "Task not found")
                } else {
                    reply(200, json!({ "message": "Task deleted" }))
                }
            }
            (HttpMethod::Get, ["categories"]) => {
                let categories: Vec<Category> = state
                    .categories
                    .iter()
                    .map(|c| Category {
                        task_count: state.tasks.iter().filter(|t| t.category_id == Some(c.id)).count() as u32,
                        ..c.clone()
                    })
                    .collect();
                reply(200, json!({ "categories": categories }))
            }
            (HttpMethod::Post, ["categories"]) => Self::save_category(state, None, body),
            (HttpMethod::Put, ["categories", id]) => match parse_id(id) {
                Some(id) if state.categories.iter().any(|c| c.id == id) => Self::save_category(state, Some(id), body),
                _ => error(404, "Category not found"),
            },
            (HttpMethod::Delete, ["categories", id]) => Self::delete_category(state, parse_id(id)),
            _ => error(404, "Resource not found"),
        }
    }

    fn login(body: &Value) -> HttpResponse {
        let (username, password) = (str_field(body, "username"), str_field(body, "password"));
        if username.is_empty() || password.is_empty() {
            return error(400, "Username and password are required");
        }
        if username != "alice" || password != "secret" {
            return error(401, "Invalid username or password");
        }
        reply(
            200,
            json!({
                "message": "Login successful",
                "access_token": Self::ACCESS_TOKEN,
                "refresh_token": Self::REFRESH_TOKEN,
                "user": Self::user(),
            }),
        )
    }

    fn register(body: &Value) -> HttpResponse {
        let username = str_field(body, "username");
        if username == Self::user().username {
            return error(409, "Username already taken");
        }
        reply(
            201,
            json!({
                "message": "Registration complete",
                "user": { "id": 2, "username": username, "email": str_field(body, "email") },
            }),
        )
    }

    fn list_tasks(state: &BackendState, query: &str) -> HttpResponse {
        let mut filter = TaskFilter::default();
        for (key, value) in query.split('&').filter_map(|pair| pair.split_once('=')) {
            match key {
                "status" => filter.status = TaskStatus::parse(value),
                "priority" => filter.priority = Priority::parse(value),
                "category_id" => filter.category_id = value.parse().ok(),
                // limit is ignored, the client trims
                _ => {}
            }
        }

        let tasks: Vec<&Task> = state
            .tasks
            .iter()
            .filter(|t| filter.status.map_or(true, |s| t.status == s))
            .filter(|t| filter.priority.map_or(true, |p| t.priority == p))
            .filter(|t| filter.category_id.map_or(true, |c| t.category_id == Some(c)))
            .collect();
        reply(200, json!({ "tasks": tasks }))
    }

    fn validate_task(body: &Value) -> Option<HttpResponse> {
        if str_field(body, "title").trim().is_empty() {
            return Some(reply(
                400,
                json!({ "error": "Validation failed", "details": "Task title is required" }),
            ));
        }
        None
    }

    fn create_task(state: &mut BackendState, body: &Value) -> HttpResponse {
        if let Some(rejected) = Self::validate_task(body) {
            return rejected;
        }
        let task = Self::task_from_body(state, None, body);
        let id = Self::insert_task(state, task);
        let created = state.tasks.iter().find(|t| t.id == id);
        reply(201, json!({ "message": "Task created", "task": created }))
    }

    fn update_task(state: &mut BackendState, id: Option<u32>, body: &Value) -> HttpResponse {
        let Some(index) = state.tasks.iter().position(|t| Some(t.id) == id) else {
            return error(404, "Task not found");
        };
        if let Some(rejected) = Self::validate_task(body) {
            return rejected;
        }
        let updated = Self::task_from_body(state, Some(&state.tasks[index]), body);
        state.tasks[index] = updated;
        reply(200, json!({ "message": "Task updated", "task": state.tasks[index] }))
    }

    fn save_category(state: &mut BackendState, id: Option<u32>, body: &Value) -> HttpResponse {
        let name = str_field(body, "name").trim().to_string();
        if name.is_empty() {
            return error(400, "Category name is required");
        }
        if state.categories.iter().any(|c| c.name == name && Some(c.id) != id) {
            return error(409, "Category already exists");
        }
        let description = str_field(body, "description");
        let color = match str_field(body, "color") {
            "" => DEFAULT_CATEGORY_COLOR.to_string(),
            color => color.to_string(),
        };

        match id.and_then(|id| state.categories.iter_mut().find(|c| c.id == id)) {
            Some(category) => {
                category.name = name;
                category.description = (!description.is_empty()).then(|| description.to_string());
                category.color = color;
                reply(200, json!({ "message": "Category updated", "category": category }))
            }
            None => {
                state.next_category_id += 1;
                let category = Category {
                    id: state.next_category_id,
                    name,
                    description: (!description.is_empty()).then(|| description.to_string()),
                    color,
                    task_count: 0,
                    created_at: Some(TIMESTAMP.to_string()),
                };
                let body = json!({ "message": "Category created", "category": category });
                state.categories.push(category);
                reply(201, body)
            }
        }
    }

    fn delete_category(state: &mut BackendState, id: Option<u32>) -> HttpResponse {
        let Some(id) = id.filter(|id| state.categories.iter().any(|c| c.id == *id)) else {
            return error(404, "Category not found");
        };
        let in_use = state.tasks.iter().filter(|t| t.category_id == Some(id)).count();
        if in_use > 0 {
            return error(409, &format!("Category has {} tasks and cannot be deleted", in_use));
        }
        state.categories.retain(|c| c.id != id);
        reply(200, json!({ "message": "Category deleted" }))
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let Some(path) = request.url.strip_prefix(BASE_URL).map(str::to_string) else {
            return Err(ApiError::Network(format!("unknown host: {}", request.url)));
        };
        let body = request
            .body
            .as_deref()
            .and_then(|raw| serde_json::from_str::<Value>(raw).ok());

        let mut state = lock(&self.state);
        state.requests.push(RecordedRequest {
            method: request.method,
            path: path.clone(),
            body: body.clone(),
        });
        if let Some(status) = state.fail_next.take() {
            return Ok(error(status, "Internal server error"));
        }
        let response = Self::route(&mut state, &request, &path, &body.unwrap_or(Value::Null));
        if std::mem::take(&mut state.revoke_after_next) {
            state.tokens_revoked = true;
        }
        Ok(response)
    }
}

// ========================
// Recording Shell
// ========================

/// Everything the services told the shell, newest state last
#[derive(Debug, Clone, Default)]
pub struct ShellState {
    pub screen: Screen,
    pub view: View,
    pub main_user: Option<User>,
    pub login_tab_shown: u32,
    pub toasts: Vec<Toast>,
    /// Outstanding begin_loading calls
    pub loading_depth: i32,
    pub tasks: Vec<Task>,
    pub categories: Vec<Category>,
    pub stats: Option<TaskStats>,
    pub recent_tasks: Option<Vec<Task>>,
    pub editing_task: Option<Task>,
    pub task_modal_closed: u32,
    pub category_modal_closed: u32,
    pub filter: TaskFilter,
    pub confirm_answer: bool,
    pub confirm_prompts: Vec<String>,
}

#[derive(Default)]
pub struct RecordingShell {
    state: Mutex<ShellState>,
}

impl RecordingShell {
    pub fn snapshot(&self) -> ShellState {
        lock(&self.state).clone()
    }

    pub fn set_filter(&self, filter: TaskFilter) {
        lock(&self.state).filter = filter;
    }

    pub fn answer_confirm(&self, answer: bool) {
        lock(&self.state).confirm_answer = answer;
    }

    fn with(&self, f: impl FnOnce(&mut ShellState)) {
        f(&mut lock(&self.state));
    }
}

#[async_trait(?Send)]
impl Shell for RecordingShell {
    fn show_auth_screen(&self) {
        self.with(|s| {
            s.screen = Screen::Auth;
            s.main_user = None;
        });
    }

    fn show_main_screen(&self, user: &User) {
        self.with(|s| {
            s.screen = Screen::Main;
            s.main_user = Some(user.clone());
        });
    }

    fn show_login_tab(&self) {
        self.with(|s| s.login_tab_shown += 1);
    }

    fn notify(&self, toast: Toast) {
        self.with(|s| s.toasts.push(toast));
    }

    fn begin_loading(&self) {
        self.with(|s| s.loading_depth += 1);
    }

    fn end_loading(&self) {
        self.with(|s| s.loading_depth -= 1);
    }

    fn set_view(&self, view: View) {
        self.with(|s| s.view = view);
    }

    fn task_filter(&self) -> TaskFilter {
        lock(&self.state).filter
    }

    fn render_tasks(&self, tasks: Vec<Task>) {
        self.with(|s| s.tasks = tasks);
    }

    fn render_categories(&self, categories: Vec<Category>) {
        self.with(|s| s.categories = categories);
    }

    fn render_stats(&self, stats: TaskStats) {
        self.with(|s| s.stats = Some(stats));
    }

    fn render_recent_tasks(&self, tasks: Vec<Task>) {
        self.with(|s| s.recent_tasks = Some(tasks));
    }

    fn open_task_editor(&self, task: Task) {
        self.with(|s| s.editing_task = Some(task));
    }

    fn close_task_modal(&self) {
        self.with(|s| {
            s.editing_task = None;
            s.task_modal_closed += 1;
        });
    }

    fn close_category_modal(&self) {
        self.with(|s| s.category_modal_closed += 1);
    }

    async fn confirm(&self, message: &str) -> bool {
        let mut state = lock(&self.state);
        state.confirm_prompts.push(message.to_string());
        state.confirm_answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_backend_rejects_missing_token() {
        let backend = FakeBackend::new();
        let response = backend
            .send(HttpRequest {
                method: HttpMethod::Get,
                url: format!("{}/tasks/", BASE_URL),
                headers: Vec::new(),
                body: None,
            })
            .await
            .unwrap();
        assert_eq!(response.status, 401);
    }

    #[test]
    fn test_stats_rounding() {
        let backend = FakeBackend::new();
        backend.seed_task("a", "completed", "low", None);
        backend.seed_task("b", "pending", "low", None);
        backend.seed_task("c", "pending", "urgent", None);
        let stats = FakeBackend::stats(&lock(&backend.state));
        assert_eq!(stats.completion_rate, 33.3);
        assert_eq!(stats.urgent_priority_tasks, 1);
    }
}
