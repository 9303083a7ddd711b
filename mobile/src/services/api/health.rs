//! # Health Tracking Endpoints
//!
//! Glucose readings, blood-pressure readings, and the patient's
//! prescription record.

use shared::dto::health::{
    GlucoseHistoryResponse, PressureHistoryResponse, PrescriptionResponse, SaveGlucoseRequest,
    SaveGlucoseResponse, SavePrescriptionRequest, SavePrescriptionResponse, SavePressureRequest,
    SavePressureResponse,
};

use super::client::{ApiClient, ApiResult};

/// Store a glucose reading.
pub async fn save_glucose_reading(
    client: &ApiClient,
    request: SaveGlucoseRequest,
) -> ApiResult<SaveGlucoseResponse> {
    client
        .execute(client.http().post(client.url("/health/glucose")).json(&request))
        .await
}

/// Most recent glucose readings, newest first.
pub async fn get_glucose_history(
    client: &ApiClient,
    limit: u32,
) -> ApiResult<GlucoseHistoryResponse> {
    client
        .execute(
            client
                .http()
                .get(client.url("/health/glucose"))
                .query(&[("limit", limit)]),
        )
        .await
}

/// Store a blood-pressure reading.
pub async fn save_pressure_reading(
    client: &ApiClient,
    request: SavePressureRequest,
) -> ApiResult<SavePressureResponse> {
    client
        .execute(client.http().post(client.url("/health/pressure")).json(&request))
        .await
}

/// Most recent blood-pressure readings, newest first.
pub async fn get_pressure_history(
    client: &ApiClient,
    limit: u32,
) -> ApiResult<PressureHistoryResponse> {
    client
        .execute(
            client
                .http()
                .get(client.url("/health/pressure"))
                .query(&[("limit", limit)]),
        )
        .await
}

/// Store the patient's prescription.
pub async fn save_prescription(
    client: &ApiClient,
    request: SavePrescriptionRequest,
) -> ApiResult<SavePrescriptionResponse> {
    client
        .execute(client.http().post(client.url("/health/prescription")).json(&request))
        .await
}

/// The patient's current prescription; `prescription` is null until one
/// has been saved.
pub async fn get_prescription(client: &ApiClient) -> ApiResult<PrescriptionResponse> {
    client
        .execute(client.http().get(client.url("/health/prescription")))
        .await
}
