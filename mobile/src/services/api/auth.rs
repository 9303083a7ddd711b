//! # Authentication Endpoints
//!
//! Registration, login and logout. Token refresh is not exposed here: it is
//! driven by the client itself when a request observes a 401.

use shared::dto::auth::{AuthTokens, LoginRequest, LogoutRequest, RegisterRequest, RegisterResponse};

use super::client::{ApiClient, ApiResult};

/// Register a new account.
pub async fn register(client: &ApiClient, request: RegisterRequest) -> ApiResult<RegisterResponse> {
    client
        .execute(client.http().post(client.url("/auth/register")).json(&request))
        .await
}

/// Login with email and password.
///
/// On success the returned token pair is installed as the client's held
/// session; this is the only operation with that side effect.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: String, password: String) -> ApiResult<AuthTokens> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest { email, password };
    let result: ApiResult<AuthTokens> = client
        .execute(client.http().post(client.url("/auth/login")).json(&request))
        .await;

    match &result {
        Ok(tokens) => {
            client.set_tokens(tokens.access_token.clone(), tokens.refresh_token.clone());
            tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful");
        }
        Err(error) => {
            tracing::warn!(
                error = %error,
                duration_ms = start.elapsed().as_millis(),
                "Login failed"
            );
        }
    }

    result
}

/// Notify the backend and drop the held session.
///
/// The network call is best-effort: held tokens are cleared even when the
/// backend rejects the call or is unreachable, and a second logout with no
/// session held simply skips the network call.
pub async fn logout(client: &ApiClient) {
    if let Some(refresh_token) = client.refresh_token() {
        let request = LogoutRequest { refresh_token };
        let result: ApiResult<serde_json::Value> = client
            .execute(client.http().post(client.url("/auth/logout")).json(&request))
            .await;

        if let Err(error) = result {
            tracing::warn!(error = %error, "Logout request failed, clearing session anyway");
        }
    }

    client.clear_tokens();
}
