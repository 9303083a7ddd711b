//! # API Client
//!
//! Main HTTP client for backend API communication: the single chokepoint for
//! all outbound calls. It owns the session token pair, attaches bearer auth,
//! and performs the silent refresh-and-retry when an access token expires.

use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::RwLock;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use shared::dto::auth::{ErrorResponse, RefreshRequest, RefreshResponse};

use crate::config::ApiConfig;

/// Result of every API operation: a populated success payload or a
/// human-readable error string, never both.
pub type ApiResult<T> = Result<T, String>;

/// The held access/refresh token pair.
///
/// Replaced as a whole on login and on refresh, so a request never observes
/// a half-rotated pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// One in-flight refresh, awaited by every caller that observed a 401 while
/// it was running.
type SharedRefresh = Shared<BoxFuture<'static, bool>>;

/// HTTP client for communicating with the backend API server.
///
/// Cheaply clonable; every clone shares the same connection pool, held
/// tokens and refresh latch. Constructed once by the application's
/// composition root and handed to every consumer.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientState>,
}

struct ClientState {
    http: Client,
    config: ApiConfig,
    tokens: RwLock<Option<SessionTokens>>,
    refresh_latch: tokio::sync::Mutex<Option<SharedRefresh>>,
}

impl ApiClient {
    /// Create a client configured from environment variables.
    pub fn new() -> Self {
        Self::with_config(ApiConfig::from_env())
    }

    /// Create a client with an explicit configuration.
    ///
    /// The underlying HTTP client carries the configured timeout so a hung
    /// request cannot stall a screen forever.
    pub fn with_config(config: ApiConfig) -> Self {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            inner: Arc::new(ClientState {
                http,
                config,
                tokens: RwLock::new(None),
                refresh_latch: tokio::sync::Mutex::new(None),
            }),
        }
    }

    /// The resolved configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    pub(crate) fn http(&self) -> &Client {
        &self.inner.http
    }

    /// Absolute URL for an endpoint path.
    pub(crate) fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.inner.config.base_url, endpoint)
    }

    /// Install a token pair as the held session state.
    pub fn set_tokens(&self, access_token: String, refresh_token: String) {
        *self.inner.tokens.write() = Some(SessionTokens {
            access_token,
            refresh_token,
        });
    }

    /// Drop the held session state.
    pub fn clear_tokens(&self) {
        *self.inner.tokens.write() = None;
    }

    /// The currently held access token, if any.
    pub fn access_token(&self) -> Option<String> {
        self.inner.tokens.read().as_ref().map(|t| t.access_token.clone())
    }

    /// The currently held refresh token, if any.
    pub fn refresh_token(&self) -> Option<String> {
        self.inner.tokens.read().as_ref().map(|t| t.refresh_token.clone())
    }

    /// Issue a request through the auth pipeline.
    ///
    /// The builder must not carry an `Authorization` header yet: the current
    /// access token is attached at send time, so the retry after a refresh
    /// picks up the rotated token.
    ///
    /// - Transport failures return `Err("Network error: ...")` with no retry.
    /// - A 401 while a refresh token is held triggers (or joins) one refresh
    ///   and, on success, re-issues the original request exactly once; the
    ///   second response is final even if it is again a 401.
    /// - Any remaining non-2xx response surfaces the body's `error` field,
    ///   falling back to a generic message.
    /// - A 2xx response with a malformed body is converted into an error
    ///   string rather than propagating a parse panic.
    pub(crate) async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        // JSON-bodied builders always clone; kept as Option so a non-clonable
        // request degrades to "no retry" instead of failing outright.
        let retry = request.try_clone();

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let response = if response.status() == StatusCode::UNAUTHORIZED
            && self.refresh_token().is_some()
        {
            match (self.refresh_access_token().await, retry) {
                (true, Some(retry)) => self
                    .authorize(retry)
                    .send()
                    .await
                    .map_err(|e| format!("Network error: {}", e))?,
                _ => response,
            }
        } else {
            response
        };

        let status = response.status();
        if !status.is_success() {
            let message = error_message(response).await;
            tracing::warn!(status = status.as_u16(), error = %message, "Request failed");
            return Err(message);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    /// Add the bearer header when a session is held.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.access_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Mint a new token pair from the held refresh token.
    ///
    /// At most one refresh call is in flight at a time: the first caller to
    /// observe a 401 installs a shared future, later callers clone and await
    /// the same outcome, and the latch is cleared once the attempt settles
    /// so the next 401 starts a fresh one.
    pub(crate) async fn refresh_access_token(&self) -> bool {
        let Some(refresh_token) = self.refresh_token() else {
            return false;
        };

        let refresh = {
            let mut latch = self.inner.refresh_latch.lock().await;
            match latch.as_ref() {
                Some(in_flight) => in_flight.clone(),
                None => {
                    let state = Arc::clone(&self.inner);
                    let fresh: SharedRefresh = async move {
                        let refreshed = perform_refresh(&state, refresh_token).await;
                        *state.refresh_latch.lock().await = None;
                        refreshed
                    }
                    .boxed()
                    .shared();
                    *latch = Some(fresh.clone());
                    fresh
                }
            }
        };

        refresh.await
    }
}

/// Post the refresh token and rotate the held pair on success.
///
/// Any failure (transport error, non-2xx, malformed body) leaves the held
/// tokens untouched; the triggering request's original 401 stands.
async fn perform_refresh(state: &ClientState, refresh_token: String) -> bool {
    let request = RefreshRequest { refresh_token };

    let response = match state
        .http
        .post(format!("{}/auth/refresh", state.config.base_url))
        .json(&request)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, "Token refresh network error");
            return false;
        }
    };

    if !response.status().is_success() {
        tracing::warn!(status = response.status().as_u16(), "Token refresh rejected");
        return false;
    }

    match response.json::<RefreshResponse>().await {
        Ok(rotated) => {
            *state.tokens.write() = Some(SessionTokens {
                access_token: rotated.access_token,
                refresh_token: rotated.refresh_token,
            });
            tracing::debug!("Session token pair rotated");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "Token refresh parse error");
            false
        }
    }
}

/// Extract the backend's error message from a non-2xx response, falling back
/// to a generic message when the body carries no parsable `error` field.
async fn error_message(response: reqwest::Response) -> String {
    match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => "Request failed".to_string(),
    }
}

// Implement ApiService trait for ApiClient
#[async_trait::async_trait]
impl crate::core::service::ApiService for ApiClient {
    fn set_tokens(&self, access_token: String, refresh_token: String) {
        ApiClient::set_tokens(self, access_token, refresh_token);
    }

    fn clear_tokens(&self) {
        ApiClient::clear_tokens(self);
    }

    fn access_token(&self) -> Option<String> {
        ApiClient::access_token(self)
    }

    async fn register(
        &self,
        request: shared::dto::auth::RegisterRequest,
    ) -> Result<shared::dto::auth::RegisterResponse, String> {
        crate::services::api::auth::register(self, request).await
    }

    async fn login(
        &self,
        email: String,
        password: String,
    ) -> Result<shared::dto::auth::AuthTokens, String> {
        crate::services::api::auth::login(self, email, password).await
    }

    async fn logout(&self) {
        crate::services::api::auth::logout(self).await
    }

    async fn send_chat_message(
        &self,
        message: String,
        history: Option<Vec<shared::dto::chat::ChatTurn>>,
    ) -> Result<shared::dto::chat::ChatResponse, String> {
        crate::services::api::chat::send_chat_message(self, message, history).await
    }

    async fn analyze_image(
        &self,
        base64_image: String,
    ) -> Result<shared::dto::vision::AnalyzeImageResponse, String> {
        crate::services::api::vision::analyze_image(self, base64_image).await
    }

    async fn verify_prescription(
        &self,
        request: shared::dto::vision::VerifyPrescriptionRequest,
    ) -> Result<shared::dto::vision::VerifyPrescriptionResponse, String> {
        crate::services::api::vision::verify_prescription(self, request).await
    }

    async fn save_glucose_reading(
        &self,
        request: shared::dto::health::SaveGlucoseRequest,
    ) -> Result<shared::dto::health::SaveGlucoseResponse, String> {
        crate::services::api::health::save_glucose_reading(self, request).await
    }

    async fn get_glucose_history(
        &self,
        limit: u32,
    ) -> Result<shared::dto::health::GlucoseHistoryResponse, String> {
        crate::services::api::health::get_glucose_history(self, limit).await
    }

    async fn save_pressure_reading(
        &self,
        request: shared::dto::health::SavePressureRequest,
    ) -> Result<shared::dto::health::SavePressureResponse, String> {
        crate::services::api::health::save_pressure_reading(self, request).await
    }

    async fn get_pressure_history(
        &self,
        limit: u32,
    ) -> Result<shared::dto::health::PressureHistoryResponse, String> {
        crate::services::api::health::get_pressure_history(self, limit).await
    }

    async fn save_prescription(
        &self,
        request: shared::dto::health::SavePrescriptionRequest,
    ) -> Result<shared::dto::health::SavePrescriptionResponse, String> {
        crate::services::api::health::save_prescription(self, request).await
    }

    async fn get_prescription(
        &self,
    ) -> Result<shared::dto::health::PrescriptionResponse, String> {
        crate::services::api::health::get_prescription(self).await
    }

    async fn extract_medications_from_image(
        &self,
        base64_image: String,
    ) -> Result<shared::dto::medications::ExtractMedicationsResponse, String> {
        crate::services::api::medications::extract_medications_from_image(self, base64_image).await
    }

    async fn get_today_medications(
        &self,
    ) -> Result<shared::dto::medications::TodayMedicationsResponse, String> {
        crate::services::api::medications::get_today_medications(self).await
    }

    async fn record_dose(
        &self,
        medication_id: &str,
        request: Option<shared::dto::medications::RecordDoseRequest>,
    ) -> Result<shared::dto::medications::DoseResponse, String> {
        crate::services::api::medications::record_dose(self, medication_id, request).await
    }

    async fn delete_dose(
        &self,
        medication_id: &str,
        dose_id: &str,
    ) -> Result<shared::dto::medications::DeleteDoseResponse, String> {
        crate::services::api::medications::delete_dose(self, medication_id, dose_id).await
    }

    async fn mark_forgotten(
        &self,
        medication_id: &str,
        request: Option<shared::dto::medications::MarkForgottenRequest>,
    ) -> Result<shared::dto::medications::DoseResponse, String> {
        crate::services::api::medications::mark_forgotten(self, medication_id, request).await
    }

    async fn get_pharmacies(
        &self,
        location: Option<shared::dto::pharmacy::Coordinates>,
    ) -> Result<shared::dto::pharmacy::PharmaciesResponse, String> {
        crate::services::api::pharmacy::get_pharmacies(self, location).await
    }
}
