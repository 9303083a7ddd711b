//! # Medication Tracking Endpoints
//!
//! The daily medication view and its dose log: extraction from a photo,
//! today's schedule, and recording, deleting or forgetting doses.

use shared::dto::medications::{
    DeleteDoseResponse, DoseResponse, ExtractMedicationsRequest, ExtractMedicationsResponse,
    MarkForgottenRequest, RecordDoseRequest, TodayMedicationsResponse,
};

use super::client::{ApiClient, ApiResult};

/// Extract the medication list from a prescription photo (base64-encoded).
#[tracing::instrument(skip(client, base64_image))]
pub async fn extract_medications_from_image(
    client: &ApiClient,
    base64_image: String,
) -> ApiResult<ExtractMedicationsResponse> {
    let request = ExtractMedicationsRequest { image: base64_image };

    client
        .execute(
            client
                .http()
                .post(client.url("/medications/extract-from-image"))
                .json(&request),
        )
        .await
}

/// Today's medications with per-dose progress.
pub async fn get_today_medications(client: &ApiClient) -> ApiResult<TodayMedicationsResponse> {
    client
        .execute(client.http().get(client.url("/medications/today")))
        .await
}

/// Record a dose as taken. An absent request body records "taken now".
pub async fn record_dose(
    client: &ApiClient,
    medication_id: &str,
    request: Option<RecordDoseRequest>,
) -> ApiResult<DoseResponse> {
    let request = request.unwrap_or_default();
    let url = client.url(&format!("/medications/{}/dose", medication_id));

    client.execute(client.http().post(url).json(&request)).await
}

/// Remove a recorded dose.
pub async fn delete_dose(
    client: &ApiClient,
    medication_id: &str,
    dose_id: &str,
) -> ApiResult<DeleteDoseResponse> {
    let url = client.url(&format!("/medications/{}/dose/{}", medication_id, dose_id));

    client.execute(client.http().delete(url)).await
}

/// Mark a scheduled dose as forgotten.
pub async fn mark_forgotten(
    client: &ApiClient,
    medication_id: &str,
    request: Option<MarkForgottenRequest>,
) -> ApiResult<DoseResponse> {
    let request = request.unwrap_or_default();
    let url = client.url(&format!("/medications/{}/forgotten", medication_id));

    client.execute(client.http().post(url).json(&request)).await
}
