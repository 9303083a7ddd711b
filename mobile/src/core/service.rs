//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::dto::auth::{AuthTokens, RegisterRequest, RegisterResponse};
use shared::dto::chat::{ChatResponse, ChatTurn};
use shared::dto::health::{
    GlucoseHistoryResponse, PressureHistoryResponse, PrescriptionResponse, SaveGlucoseRequest,
    SaveGlucoseResponse, SavePrescriptionRequest, SavePrescriptionResponse, SavePressureRequest,
    SavePressureResponse,
};
use shared::dto::medications::{
    DeleteDoseResponse, DoseResponse, ExtractMedicationsResponse, MarkForgottenRequest,
    RecordDoseRequest, TodayMedicationsResponse,
};
use shared::dto::pharmacy::{Coordinates, PharmaciesResponse};
use shared::dto::vision::{AnalyzeImageResponse, VerifyPrescriptionRequest, VerifyPrescriptionResponse};

/// Trait for API service operations
///
/// This trait allows for dependency injection and mocking in tests: the
/// session holder and the screens depend on `Arc<dyn ApiService>` rather
/// than the concrete client.
///
/// Every operation returns either a populated success payload or a
/// human-readable error string, never both.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Install a token pair as the held session state
    fn set_tokens(&self, access_token: String, refresh_token: String);

    /// Drop the held session state
    fn clear_tokens(&self);

    /// The currently held access token, if any
    fn access_token(&self) -> Option<String>;

    /// Register a new account
    async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, String>;

    /// Login with email and password; installs the returned token pair on success
    async fn login(&self, email: String, password: String) -> Result<AuthTokens, String>;

    /// Best-effort backend notification, then clear held tokens unconditionally
    async fn logout(&self);

    /// Send a message to the help assistant
    async fn send_chat_message(
        &self,
        message: String,
        history: Option<Vec<ChatTurn>>,
    ) -> Result<ChatResponse, String>;

    /// Run OCR over a prescription photo
    async fn analyze_image(&self, base64_image: String) -> Result<AnalyzeImageResponse, String>;

    /// Ask the assistant to review a scanned prescription
    async fn verify_prescription(
        &self,
        request: VerifyPrescriptionRequest,
    ) -> Result<VerifyPrescriptionResponse, String>;

    /// Store a glucose reading
    async fn save_glucose_reading(
        &self,
        request: SaveGlucoseRequest,
    ) -> Result<SaveGlucoseResponse, String>;

    /// Most recent glucose readings, newest first
    async fn get_glucose_history(&self, limit: u32) -> Result<GlucoseHistoryResponse, String>;

    /// Store a blood-pressure reading
    async fn save_pressure_reading(
        &self,
        request: SavePressureRequest,
    ) -> Result<SavePressureResponse, String>;

    /// Most recent blood-pressure readings, newest first
    async fn get_pressure_history(&self, limit: u32) -> Result<PressureHistoryResponse, String>;

    /// Store the patient's prescription
    async fn save_prescription(
        &self,
        request: SavePrescriptionRequest,
    ) -> Result<SavePrescriptionResponse, String>;

    /// The patient's current prescription, if one has been saved
    async fn get_prescription(&self) -> Result<PrescriptionResponse, String>;

    /// Extract the medication list from a prescription photo
    async fn extract_medications_from_image(
        &self,
        base64_image: String,
    ) -> Result<ExtractMedicationsResponse, String>;

    /// Today's medications with per-dose progress
    async fn get_today_medications(&self) -> Result<TodayMedicationsResponse, String>;

    /// Record a dose as taken
    async fn record_dose(
        &self,
        medication_id: &str,
        request: Option<RecordDoseRequest>,
    ) -> Result<DoseResponse, String>;

    /// Remove a recorded dose
    async fn delete_dose(
        &self,
        medication_id: &str,
        dose_id: &str,
    ) -> Result<DeleteDoseResponse, String>;

    /// Mark a scheduled dose as forgotten
    async fn mark_forgotten(
        &self,
        medication_id: &str,
        request: Option<MarkForgottenRequest>,
    ) -> Result<DoseResponse, String>;

    /// Nearby pharmacies, ranked by distance when a location is given
    async fn get_pharmacies(
        &self,
        location: Option<Coordinates>,
    ) -> Result<PharmaciesResponse, String>;
}
