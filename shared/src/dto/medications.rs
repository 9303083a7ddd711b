//! Daily medication schedule and dose tracking DTOs.
//!
//! The backend expands the patient's prescription into a per-day view with
//! dose logs, so the client only renders what it receives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::health::MedicationEntry;

/// Extract-medications-from-image request (base64-encoded photo)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractMedicationsRequest {
    pub image: String,
}

/// Extract-medications-from-image success payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractMedicationsResponse {
    pub medications: Vec<MedicationEntry>,
    pub extracted_text: String,
}

/// A recorded dose, taken or marked as forgotten
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DoseLog {
    pub id: String,
    /// The "HH:MM" slot this dose was scheduled for, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
    pub taken_at: DateTime<Utc>,
}

/// One medication in the today view, with dose progress
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodayMedication {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    pub instructions: String,
    pub times_per_day: u32,
    pub times: Vec<String>,
    pub is_free: bool,
    pub doses_taken_today: u32,
    pub doses_required: u32,
    pub is_complete: bool,
    pub dose_logs: Vec<DoseLog>,
}

/// Today-medications success payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodayMedicationsResponse {
    pub medications: Vec<TodayMedication>,
}

/// Record-dose request; an empty body records "taken now"
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordDoseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taken_at: Option<DateTime<Utc>>,
}

/// Record-dose / mark-forgotten success payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DoseResponse {
    pub message: String,
    pub dose_log: DoseLog,
}

/// Delete-dose success payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteDoseResponse {
    pub message: String,
}

/// Mark-forgotten request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MarkForgottenRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
}
