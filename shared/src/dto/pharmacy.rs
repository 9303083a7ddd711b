use serde::{Deserialize, Serialize};

/// User location sent with the pharmacy lookup, when available
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A pharmacy from the directory, with distance computed by the backend
/// when the request carried a user location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pharmacy {
    pub id: String,
    pub name: String,
    pub address: String,
    pub neighborhood: String,
    pub cep: Option<String>,
    pub phone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Distance from the user in km, null without a user location
    pub distance: Option<f64>,
    pub full_address: String,
}

/// Pharmacy lookup success payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PharmaciesResponse {
    pub count: u32,
    pub has_user_location: bool,
    pub data: Vec<Pharmacy>,
}
