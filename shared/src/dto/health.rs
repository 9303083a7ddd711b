//! Glucose, blood-pressure and prescription record DTOs.
//!
//! Readings are created by the patient from the tracking screens and stored
//! by the backend; history queries return the most recent readings first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a glucose reading was taken before or after a meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealContext {
    Before,
    After,
}

/// Save-glucose request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SaveGlucoseRequest {
    /// Capillary glucose in mg/dL
    pub value: u32,
    pub measured_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_context: Option<MealContext>,
}

/// A stored glucose reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GlucoseReading {
    pub id: String,
    pub value: u32,
    pub measured_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_context: Option<MealContext>,
}

/// Save-glucose success payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveGlucoseResponse {
    pub message: String,
    pub reading: GlucoseReading,
}

/// Glucose history success payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlucoseHistoryResponse {
    pub readings: Vec<GlucoseReading>,
}

/// Save-pressure request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SavePressureRequest {
    pub systolic: u32,
    pub diastolic: u32,
    pub measured_at: DateTime<Utc>,
}

/// A stored blood-pressure reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PressureReading {
    pub id: String,
    pub systolic: u32,
    pub diastolic: u32,
    pub measured_at: DateTime<Utc>,
}

/// Save-pressure success payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavePressureResponse {
    pub message: String,
    pub reading: PressureReading,
}

/// Pressure history success payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PressureHistoryResponse {
    pub readings: Vec<PressureReading>,
}

/// One medication on a prescription
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MedicationEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    pub instructions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times_per_day: Option<u32>,
    /// Scheduled times of day as "HH:MM" strings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<Vec<String>>,
    /// Available at no cost through the public pharmacy program
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free: Option<bool>,
}

/// Save-prescription request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SavePrescriptionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_in_days: Option<u32>,
    pub medications: Vec<MedicationEntry>,
}

/// The patient's current prescription
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_in_days: Option<u32>,
    pub medications: Vec<MedicationEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Save-prescription success payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavePrescriptionResponse {
    pub message: String,
    pub prescription: Prescription,
}

/// Get-prescription success payload; `prescription` is null until one is saved
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrescriptionResponse {
    pub prescription: Option<Prescription>,
}
