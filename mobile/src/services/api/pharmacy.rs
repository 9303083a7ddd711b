//! # Pharmacy Locator Endpoint
//!
//! Fetches the pharmacy directory; when the device location is available it
//! is passed along so the backend can rank by distance.

use shared::dto::pharmacy::{Coordinates, PharmaciesResponse};

use super::client::{ApiClient, ApiResult};

/// Nearby pharmacies, ranked by distance when a location is given.
pub async fn get_pharmacies(
    client: &ApiClient,
    location: Option<Coordinates>,
) -> ApiResult<PharmaciesResponse> {
    let mut request = client.http().get(client.url("/pharmacies"));

    if let Some(location) = location {
        request = request.query(&[("lat", location.lat), ("lng", location.lng)]);
    }

    client.execute(request).await
}
