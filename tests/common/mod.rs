#![allow(dead_code)]

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, Method, Request, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::json;
use tokio::sync::Notify;
use tower::ServiceExt;
use url::Url;

use inbox_panel::config::PanelConfig;
use inbox_panel::dom::MemoryPage;
use inbox_panel::domain::{ListKind, NotificationId};
use inbox_panel::http::{ApiError, ApiRequest, RawResponse, Transport};
use inbox_panel::NotificationPanelController;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const TEST_ENDPOINT_BASE: &str = "http://localhost/notifications";
pub const TEST_CSRF_HEADER: &str = "X-CSRF-TOKEN";
pub const TEST_CSRF_TOKEN: &str = "test-csrf-token";

// ---------------------------------------------------------------------------
// StubServer: in-memory stand-in for the notification endpoints
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub path: String,
    pub csrf: Option<String>,
    pub accept: Option<String>,
}

#[derive(Default)]
struct StubState {
    // id -> read
    notifications: BTreeMap<String, bool>,
    failures: VecDeque<(StatusCode, String)>,
    requests: Vec<RecordedRequest>,
}

impl StubState {
    /// Records the request and returns an early response for a bad CSRF
    /// token or a queued failure.
    fn intercept(&mut self, uri: &Uri, headers: &HeaderMap) -> Option<Response> {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };
        let csrf = header(TEST_CSRF_HEADER);
        self.requests.push(RecordedRequest {
            path: uri.path().to_string(),
            csrf: csrf.clone(),
            accept: header("accept"),
        });

        if csrf.as_deref() != Some(TEST_CSRF_TOKEN) {
            return Some(
                (StatusCode::FORBIDDEN, Json(json!({ "error": "forbidden" }))).into_response(),
            );
        }

        self.failures
            .pop_front()
            .map(|(status, body)| (status, body).into_response())
    }
}

#[derive(Clone, Default)]
pub struct StubServer {
    state: Arc<Mutex<StubState>>,
}

impl StubServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unread(self, ids: &[&str]) -> Self {
        {
            let mut state = self.lock();
            for id in ids {
                state.notifications.insert(id.to_string(), false);
            }
        }
        self
    }

    pub fn with_read(self, ids: &[&str]) -> Self {
        {
            let mut state = self.lock();
            for id in ids {
                state.notifications.insert(id.to_string(), true);
            }
        }
        self
    }

    /// The next request that passes the CSRF check gets this response.
    pub fn fail_next(&self, status: StatusCode, body: &str) {
        self.lock()
            .failures
            .push_back((status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    pub fn is_read(&self, id: &str) -> Option<bool> {
        self.lock().notifications.get(id).copied()
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/notifications/mark-read/:id", post(mark_read))
            .route("/notifications/mark-all-read", post(mark_all_read))
            .route("/notifications/delete/:id", post(delete))
            .with_state(self.clone())
    }

    fn lock(&self) -> MutexGuard<'_, StubState> {
        self.state.lock().expect("stub state poisoned")
    }
}

async fn mark_read(
    State(server): State<StubServer>,
    Path(id): Path<String>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let mut state = server.lock();
    if let Some(response) = state.intercept(&uri, &headers) {
        return response;
    }
    match state.notifications.get_mut(&id) {
        Some(read) => {
            *read = true;
            Json(json!({ "success": true, "id": id })).into_response()
        }
        None => (StatusCode::NOT_FOUND, "not_found").into_response(),
    }
}

async fn mark_all_read(
    State(server): State<StubServer>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let mut state = server.lock();
    if let Some(response) = state.intercept(&uri, &headers) {
        return response;
    }
    let mut marked = 0;
    for read in state.notifications.values_mut().filter(|read| !**read) {
        *read = true;
        marked += 1;
    }
    Json(json!({ "success": true, "marked": marked })).into_response()
}

async fn delete(
    State(server): State<StubServer>,
    Path(id): Path<String>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let mut state = server.lock();
    if let Some(response) = state.intercept(&uri, &headers) {
        return response;
    }
    match state.notifications.remove(&id) {
        Some(_) => Json(json!({ "success": true, "id": id })).into_response(),
        None => (StatusCode::NOT_FOUND, "not_found").into_response(),
    }
}

// ---------------------------------------------------------------------------
// Transports
// ---------------------------------------------------------------------------

/// Drives an axum router in-process with `oneshot`.
#[derive(Clone)]
pub struct RouterTransport {
    router: Router,
}

impl RouterTransport {
    pub fn new(router: Router) -> Self {
        Self { router }
    }
}

impl Transport for RouterTransport {
    async fn post(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(request.url.path())
            .header("host", "localhost");
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let http_request = builder
            .body(Body::empty())
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let response = self
            .router
            .clone()
            .oneshot(http_request)
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let status = response.status().as_u16();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?
            .to_bytes();

        Ok(RawResponse {
            status,
            body: String::from_utf8_lossy(&body_bytes).into_owned(),
        })
    }
}

/// Fails every request the way a dropped connection does.
pub struct OfflineTransport;

impl Transport for OfflineTransport {
    async fn post(&self, _request: ApiRequest) -> Result<RawResponse, ApiError> {
        Err(ApiError::Transport("connection refused".to_string()))
    }
}

/// Holds requests until the gate is opened. With a path suffix, only
/// matching requests wait.
pub struct GatedTransport {
    inner: RouterTransport,
    gate: Arc<Notify>,
    path_suffix: Option<String>,
}

impl GatedTransport {
    pub fn new(router: Router, gate: Arc<Notify>) -> Self {
        Self {
            inner: RouterTransport::new(router),
            gate,
            path_suffix: None,
        }
    }

    pub fn only(router: Router, gate: Arc<Notify>, path_suffix: &str) -> Self {
        Self {
            path_suffix: Some(path_suffix.to_string()),
            ..Self::new(router, gate)
        }
    }
}

impl Transport for GatedTransport {
    async fn post(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let gated = self
            .path_suffix
            .as_deref()
            .map_or(true, |suffix| request.url.path().ends_with(suffix));
        if gated {
            self.gate.notified().await;
        }
        self.inner.post(request).await
    }
}

/// Keeps a copy of every request before forwarding it.
#[derive(Clone)]
pub struct CapturingTransport {
    inner: RouterTransport,
    sent: Arc<Mutex<Vec<ApiRequest>>>,
}

impl CapturingTransport {
    pub fn new(router: Router) -> Self {
        Self {
            inner: RouterTransport::new(router),
            sent: Arc::default(),
        }
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.lock().expect("capture poisoned").clone()
    }
}

impl Transport for CapturingTransport {
    async fn post(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        self.sent
            .lock()
            .expect("capture poisoned")
            .push(request.clone());
        self.inner.post(request).await
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub fn config() -> PanelConfig {
    inbox_panel::telemetry::init();
    let base = Url::parse(TEST_ENDPOINT_BASE).expect("valid test endpoint");
    PanelConfig::new(base).with_csrf(TEST_CSRF_HEADER, TEST_CSRF_TOKEN)
}

pub fn controller(
    page: MemoryPage,
    server: &StubServer,
) -> NotificationPanelController<MemoryPage, RouterTransport> {
    NotificationPanelController::new(page, RouterTransport::new(server.router()), &config())
}

pub fn id(raw: &str) -> NotificationId {
    NotificationId::parse(raw).expect("non-empty test id")
}

pub fn ids(page: &MemoryPage, list: ListKind) -> Vec<String> {
    page.cards(list)
        .into_iter()
        .map(|card| card.id.to_string())
        .collect()
}
