// mtc-portal/tests/common/mod.rs
// In-process mock of the tuition-center backend

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use mtc_client::{MemorySession, MtcApi, OneshotHttpClient, SessionProvider};

#[derive(Default)]
pub struct MockState {
    pub report_calls: AtomicUsize,
    pub center_calls: AtomicUsize,
    pub record_calls: AtomicUsize,
    pub tutor_posts: AtomicUsize,
    /// Answer every authenticated route with 401
    pub reject_auth: AtomicBool,
    /// Answer `/api/centers` with 500
    pub centers_down: AtomicBool,
    pub failing_tutors: Mutex<HashSet<String>>,
    pub report: Mutex<Value>,
    pub recorded: Mutex<Vec<Value>>,
    pub last_query: Mutex<HashMap<String, String>>,
    pub last_auth: Mutex<Option<String>>,
}

impl MockState {
    pub fn set_report(&self, report: Value) {
        *self.report.lock().unwrap() = report;
    }

    pub fn fail_tutor(&self, tutor_id: &str) {
        self.failing_tutors.lock().unwrap().insert(tutor_id.to_string());
    }

    pub fn recorded(&self) -> Vec<Value> {
        self.recorded.lock().unwrap().clone()
    }

    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Not authorized, token failed" })),
    )
        .into_response()
}

fn remember_auth(state: &MockState, headers: &HeaderMap) -> bool {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let present = auth.is_some();
    *state.last_auth.lock().unwrap() = auth;
    present && !state.reject_auth.load(Ordering::SeqCst)
}

async fn report(
    State(state): State<Arc<MockState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.report_calls.fetch_add(1, Ordering::SeqCst);
    *state.last_query.lock().unwrap() = query;
    let body = state.report.lock().unwrap().clone();
    Json(body).into_response()
}

async fn record(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    state.record_calls.fetch_add(1, Ordering::SeqCst);
    let tutor_id = body["tutorId"].as_str().unwrap_or_default().to_string();
    if state.failing_tutors.lock().unwrap().contains(&tutor_id) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Database write failed for this tutor" })),
        )
            .into_response();
    }
    state.recorded.lock().unwrap().push(body);
    Json(json!({ "message": "Hadiya payment recorded" })).into_response()
}

async fn centers(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    state.center_calls.fetch_add(1, Ordering::SeqCst);
    if !remember_auth(&state, &headers) {
        return unauthorized();
    }
    if state.centers_down.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "boom" })),
        )
            .into_response();
    }
    Json(json!([
        { "_id": "c1", "name": "Central" },
        { "_id": "c2", "name": "Riverside" }
    ]))
    .into_response()
}

async fn create_tutor(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Response {
    state.tutor_posts.fetch_add(1, Ordering::SeqCst);
    if !remember_auth(&state, &headers) {
        return unauthorized();
    }
    body["_id"] = json!("665f00000000000000000001");
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn get_tutor(Path(id): Path<String>) -> Response {
    if id == "missing" {
        return (StatusCode::NOT_FOUND, Json(json!({ "message": "Tutor not found" })))
            .into_response();
    }
    Json(json!({
        "_id": id,
        "name": "Khadija",
        "phone": "9123456780",
        "assignedCenter": { "_id": "c1", "name": "Central" },
        "subjects": ["Urdu", "English"],
        "sessionType": "arabic",
        "sessionTiming": "after_fajr",
        "assignedHadiyaAmount": 3500
    }))
    .into_response()
}

pub fn router(state: Arc<MockState>) -> Router {
    Router::new()
        .route("/api/hadiya/report", get(report))
        .route("/api/hadiya/record", post(record))
        .route("/api/centers", get(centers))
        .route("/api/tutors", post(create_tutor))
        .route("/api/tutors/{id}", get(get_tutor))
        .with_state(state)
}

/// Mock backend plus a client wired to it through `session`
pub fn mock_api(
    session: Arc<dyn SessionProvider>,
) -> (Arc<MockState>, MtcApi<OneshotHttpClient>) {
    let state = Arc::new(MockState::default());
    let client = OneshotHttpClient::new(router(state.clone())).with_session(session);
    (state, MtcApi::new(client))
}

pub fn admin_session() -> Arc<MemorySession> {
    Arc::new(MemorySession::new(Some("admin-jwt".into())))
}

/// Report row in the backend's wire shape
pub fn tutor_row(id: &str, name: &str, assigned: u32, records: Value) -> Value {
    json!({
        "tutorId": id,
        "tutorName": name,
        "assignedCenter": { "_id": "c1", "name": "Central" },
        "assignedHadiyaAmount": assigned,
        "hadiyaRecords": records
    })
}
