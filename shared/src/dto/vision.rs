use serde::{Deserialize, Serialize};

use super::health::MedicationEntry;

/// Analyze-image request (base64-encoded photo of a prescription)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyzeImageRequest {
    pub image: String,
}

/// Analyze-image success payload: raw OCR text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeImageResponse {
    pub extracted_text: String,
}

/// Verify-prescription request, built from the scanner flow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPrescriptionRequest {
    pub patient_name: String,
    pub return_in_days: u32,
    pub medications: Vec<MedicationEntry>,
}

/// Verify-prescription success payload: the assistant's written analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPrescriptionResponse {
    pub analysis_result: String,
}
