//! Shared stub backend for integration tests.
//!
//! Spins an in-process axum server that mimics the CuidaRecife API closely
//! enough to exercise the client end-to-end: scripted 401s, a refresh
//! endpoint with call counting, and echoing health/medication routes.

// Each test binary includes this module and uses a different slice of it.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};

use mobile::config::{ApiConfig, ApiEnv};
use mobile::services::api::ApiClient;

/// Scripted backend state, shared with the test body for assertions.
pub struct StubState {
    /// Access token the protected routes currently accept
    pub valid_access_token: Mutex<String>,
    /// Refresh token the refresh route currently accepts
    pub valid_refresh_token: Mutex<String>,
    /// Monotonic generation used to mint rotated pairs (T2/R2, T3/R3, ...)
    pub rotations: AtomicUsize,
    pub refresh_calls: AtomicUsize,
    pub refresh_succeeds: AtomicBool,
    /// Artificial latency for the refresh route, to hold it in flight
    pub refresh_delay: Mutex<Duration>,
    pub today_calls: AtomicUsize,
    /// Serve invalid JSON with a 200 from the today route
    pub today_returns_garbage: AtomicBool,
    pub logout_calls: AtomicUsize,
    pub logout_fails: AtomicBool,
    /// Serve a plain-text 500 from the pharmacies route
    pub pharmacies_fail: AtomicBool,
    /// Authorization headers observed on the today and pharmacies routes
    pub seen_auth: Mutex<Vec<Option<String>>>,
    /// Query parameters observed on the last history/pharmacies request
    pub last_query: Mutex<HashMap<String, String>>,
    /// Prescription stored by the save route, served by the get route
    pub prescription: Mutex<Option<Value>>,
}

impl StubState {
    fn new() -> Self {
        Self {
            valid_access_token: Mutex::new("T1".to_string()),
            valid_refresh_token: Mutex::new("R1".to_string()),
            rotations: AtomicUsize::new(0),
            refresh_calls: AtomicUsize::new(0),
            refresh_succeeds: AtomicBool::new(true),
            refresh_delay: Mutex::new(Duration::ZERO),
            today_calls: AtomicUsize::new(0),
            today_returns_garbage: AtomicBool::new(false),
            logout_calls: AtomicUsize::new(0),
            logout_fails: AtomicBool::new(false),
            pharmacies_fail: AtomicBool::new(false),
            seen_auth: Mutex::new(Vec::new()),
            last_query: Mutex::new(HashMap::new()),
            prescription: Mutex::new(None),
        }
    }

    /// The bearer header value the protected routes accept right now.
    pub fn expected_bearer(&self) -> String {
        format!("Bearer {}", self.valid_access_token.lock())
    }

    /// The most recently observed Authorization header.
    pub fn last_auth(&self) -> Option<String> {
        self.seen_auth.lock().last().cloned().flatten()
    }
}

/// In-process stub backend plus a client factory pointed at it.
pub struct TestApp {
    pub base_url: String,
    pub state: Arc<StubState>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let state = Arc::new(StubState::new());
        let router = stub_router(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// A client configured against this stub backend.
    pub fn client(&self) -> ApiClient {
        ApiClient::with_config(ApiConfig {
            env: ApiEnv::Development,
            base_url: self.base_url.clone(),
            request_timeout: Duration::from_secs(5),
        })
    }
}

fn stub_router(state: Arc<StubState>) -> Router {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
        .route("/auth/logout", post(logout))
        .route("/chat", post(chat))
        .route("/vision/analyze-image", post(analyze_image))
        .route("/prescription/verify", post(verify_prescription))
        .route("/health/glucose", post(save_glucose).get(glucose_history))
        .route("/health/pressure", post(save_pressure).get(pressure_history))
        .route(
            "/health/prescription",
            post(save_prescription).get(get_prescription),
        )
        .route("/medications/extract-from-image", post(extract_medications))
        .route("/medications/today", get(today_medications))
        .route("/medications/:id/dose", post(record_dose))
        .route("/medications/:id/dose/:dose_id", delete(delete_dose))
        .route("/medications/:id/forgotten", post(mark_forgotten))
        .route("/pharmacies", get(pharmacies))
        .with_state(state)
}

fn error_body(message: &str) -> Json<Value> {
    Json(json!({ "error": message }))
}

async fn register(Json(body): Json<Value>) -> impl IntoResponse {
    if body["email"].as_str().unwrap_or_default().is_empty() {
        return (StatusCode::BAD_REQUEST, error_body("Email é obrigatório"));
    }
    (
        StatusCode::CREATED,
        Json(json!({ "message": "User created", "userId": "u1" })),
    )
}

async fn login(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> impl IntoResponse {
    if body["email"] == "maria@example.com" && body["password"] == "pw" {
        *state.valid_access_token.lock() = "T1".to_string();
        *state.valid_refresh_token.lock() = "R1".to_string();
        (
            StatusCode::OK,
            Json(json!({
                "accessToken": "T1",
                "refreshToken": "R1",
                "user": { "id": "u1", "name": "Maria", "email": "maria@example.com" }
            })),
        )
    } else {
        (StatusCode::UNAUTHORIZED, error_body("Invalid credentials"))
    }
}

async fn refresh(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> impl IntoResponse {
    state.refresh_calls.fetch_add(1, Ordering::SeqCst);

    let delay = *state.refresh_delay.lock();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let presented = body["refreshToken"].as_str().unwrap_or_default();
    let expected = state.valid_refresh_token.lock().clone();
    if !state.refresh_succeeds.load(Ordering::SeqCst) || presented != expected {
        return (StatusCode::UNAUTHORIZED, error_body("Invalid refresh token"));
    }

    let generation = state.rotations.fetch_add(1, Ordering::SeqCst) + 2;
    let access = format!("T{}", generation);
    let refresh = format!("R{}", generation);
    *state.valid_access_token.lock() = access.clone();
    *state.valid_refresh_token.lock() = refresh.clone();

    (
        StatusCode::OK,
        Json(json!({ "accessToken": access, "refreshToken": refresh })),
    )
}

async fn logout(State(state): State<Arc<StubState>>) -> impl IntoResponse {
    state.logout_calls.fetch_add(1, Ordering::SeqCst);
    if state.logout_fails.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, error_body("Internal error"));
    }
    (StatusCode::OK, Json(json!({ "message": "Logged out" })))
}

async fn chat(Json(body): Json<Value>) -> Json<Value> {
    let turns = body["history"].as_array().map(Vec::len).unwrap_or(0);
    Json(json!({
        "reply": format!("Echo({}): {}", turns, body["message"].as_str().unwrap_or_default())
    }))
}

async fn analyze_image(Json(body): Json<Value>) -> Json<Value> {
    let len = body["image"].as_str().unwrap_or_default().len();
    Json(json!({ "extractedText": format!("texto extraído ({} bytes)", len) }))
}

async fn verify_prescription(Json(body): Json<Value>) -> Json<Value> {
    let count = body["medications"].as_array().map(Vec::len).unwrap_or(0);
    Json(json!({ "analysisResult": format!("{} medicamentos analisados", count) }))
}

async fn save_glucose(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "message": "Glicemia registrada",
        "reading": {
            "id": "g1",
            "value": body["value"],
            "measuredAt": body["measuredAt"],
            "mealContext": body.get("mealContext").cloned().unwrap_or(Value::Null),
        }
    }))
}

async fn glucose_history(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    *state.last_query.lock() = params;
    Json(json!({
        "readings": [
            { "id": "g1", "value": 110, "measuredAt": "2025-06-12T08:30:00Z", "mealContext": "before" }
        ]
    }))
}

async fn save_pressure(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "message": "Pressão registrada",
        "reading": {
            "id": "bp1",
            "systolic": body["systolic"],
            "diastolic": body["diastolic"],
            "measuredAt": body["measuredAt"],
        }
    }))
}

async fn pressure_history(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    *state.last_query.lock() = params;
    Json(json!({
        "readings": [
            { "id": "bp1", "systolic": 120, "diastolic": 80, "measuredAt": "2025-06-12T08:30:00Z" }
        ]
    }))
}

async fn save_prescription(
    State(state): State<Arc<StubState>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut stored = body;
    stored["id"] = json!("p1");
    *state.prescription.lock() = Some(stored.clone());
    Json(json!({ "message": "Receita salva", "prescription": stored }))
}

async fn get_prescription(State(state): State<Arc<StubState>>) -> Json<Value> {
    let stored = state.prescription.lock().clone();
    Json(json!({ "prescription": stored.unwrap_or(Value::Null) }))
}

async fn extract_medications(Json(body): Json<Value>) -> Json<Value> {
    let len = body["image"].as_str().unwrap_or_default().len();
    Json(json!({
        "medications": [
            {
                "name": "Losartana",
                "dosage": "50mg",
                "instructions": "1 comprimido pela manhã",
                "timesPerDay": 1,
                "times": ["08:00"],
                "isFree": true
            }
        ],
        "extractedText": format!("texto extraído ({} bytes)", len)
    }))
}

async fn today_medications(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    state.today_calls.fetch_add(1, Ordering::SeqCst);

    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.seen_auth.lock().push(auth.clone());

    if state.today_returns_garbage.load(Ordering::SeqCst) {
        return (StatusCode::OK, "not json").into_response();
    }

    if auth.as_deref() != Some(state.expected_bearer().as_str()) {
        return (StatusCode::UNAUTHORIZED, error_body("Token expired")).into_response();
    }

    Json(json!({
        "medications": [
            {
                "id": "med-1",
                "name": "Metformina",
                "dosage": "850mg",
                "instructions": "Após o almoço",
                "timesPerDay": 2,
                "times": ["08:00", "20:00"],
                "isFree": true,
                "dosesTakenToday": 1,
                "dosesRequired": 2,
                "isComplete": false,
                "doseLogs": [
                    { "id": "dose-1", "scheduledTime": "08:00", "takenAt": "2025-06-12T08:05:00Z" }
                ]
            }
        ]
    }))
    .into_response()
}

async fn record_dose(Path(id): Path<String>, Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "message": format!("Dose registrada para {}", id),
        "doseLog": {
            "id": "dose-2",
            "scheduledTime": body.get("scheduledTime").cloned().unwrap_or(Value::Null),
            "takenAt": "2025-06-12T20:02:00Z",
        }
    }))
}

async fn delete_dose(Path((id, dose_id)): Path<(String, String)>) -> Json<Value> {
    Json(json!({ "message": format!("Dose {} de {} removida", dose_id, id) }))
}

async fn mark_forgotten(Path(id): Path<String>, Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "message": format!("Dose esquecida para {}", id),
        "doseLog": {
            "id": "dose-3",
            "scheduledTime": body.get("scheduledTime").cloned().unwrap_or(Value::Null),
            "takenAt": "2025-06-12T22:00:00Z",
        }
    }))
}

async fn pharmacies(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.seen_auth.lock().push(auth);

    if state.pharmacies_fail.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
    }

    let has_location = params.contains_key("lat") && params.contains_key("lng");
    *state.last_query.lock() = params;

    Json(json!({
        "count": 1,
        "hasUserLocation": has_location,
        "data": [
            {
                "id": "ph-1",
                "name": "Farmácia Popular Boa Vista",
                "address": "Rua da Aurora, 100",
                "neighborhood": "Boa Vista",
                "cep": "50050-000",
                "phone": "(81) 3222-0000",
                "latitude": -8.0578,
                "longitude": -34.8829,
                "distance": if has_location { json!(1.42) } else { Value::Null },
                "fullAddress": "Rua da Aurora, 100, Boa Vista, Recife"
            }
        ]
    }))
    .into_response()
}
