//! # Vision Endpoints
//!
//! Prescription photo analysis: raw OCR and assistant verification.

use shared::dto::vision::{
    AnalyzeImageRequest, AnalyzeImageResponse, VerifyPrescriptionRequest,
    VerifyPrescriptionResponse,
};

use super::client::{ApiClient, ApiResult};

/// Run OCR over a prescription photo (base64-encoded).
#[tracing::instrument(skip(client, base64_image))]
pub async fn analyze_image(
    client: &ApiClient,
    base64_image: String,
) -> ApiResult<AnalyzeImageResponse> {
    let request = AnalyzeImageRequest { image: base64_image };

    client
        .execute(client.http().post(client.url("/vision/analyze-image")).json(&request))
        .await
}

/// Ask the assistant to review a scanned prescription.
pub async fn verify_prescription(
    client: &ApiClient,
    request: VerifyPrescriptionRequest,
) -> ApiResult<VerifyPrescriptionResponse> {
    client
        .execute(client.http().post(client.url("/prescription/verify")).json(&request))
        .await
}
