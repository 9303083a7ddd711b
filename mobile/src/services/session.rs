//! # Session Holder
//!
//! Thin lifecycle wrapper around the API client: restores a persisted
//! session at startup, persists the token pair and user profile after a
//! successful login, and clears everything on logout. Screens read the
//! cached profile from here instead of talking to storage directly.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::auth::{RegisterRequest, UserInfo};

use crate::core::service::ApiService;
use crate::services::storage::KeyValueStore;

/// Fixed storage keys, one per persisted item. Cleared together on logout.
pub mod keys {
    pub const ACCESS_TOKEN: &str = "@CuidaRecife:accessToken";
    pub const REFRESH_TOKEN: &str = "@CuidaRecife:refreshToken";
    pub const USER: &str = "@CuidaRecife:user";
}

/// Owns the persisted session and the cached user profile.
///
/// Constructed once at startup next to the [`ApiClient`] it wraps; screens
/// share it behind an `Arc`.
///
/// [`ApiClient`]: crate::services::api::ApiClient
pub struct SessionManager {
    api: Arc<dyn ApiService>,
    store: Arc<dyn KeyValueStore>,
    user: RwLock<Option<UserInfo>>,
}

impl SessionManager {
    pub fn new(api: Arc<dyn ApiService>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            api,
            store,
            user: RwLock::new(None),
        }
    }

    /// Restore a persisted session at startup.
    ///
    /// Returns `true` when a complete session (both tokens and a readable
    /// profile) was found and installed into the client. Anything less,
    /// including storage errors, degrades to signed-out.
    pub async fn load_stored_auth(&self) -> bool {
        let access = self.store.get(keys::ACCESS_TOKEN).await;
        let refresh = self.store.get(keys::REFRESH_TOKEN).await;
        let profile = self.store.get(keys::USER).await;

        match (access, refresh, profile) {
            (Ok(Some(access)), Ok(Some(refresh)), Ok(Some(profile))) => {
                match serde_json::from_str::<UserInfo>(&profile) {
                    Ok(user) => {
                        self.api.set_tokens(access, refresh);
                        *self.user.write() = Some(user);
                        true
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Stored profile unreadable, treating as signed out");
                        false
                    }
                }
            }
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                tracing::warn!(error = %e, "Error loading stored auth");
                false
            }
            _ => false,
        }
    }

    /// Login and persist the session.
    ///
    /// The client installs the token pair itself; this additionally writes
    /// tokens and profile to storage so the session survives a restart.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserInfo, String> {
        let tokens = self.api.login(email.to_string(), password.to_string()).await?;

        let user = tokens
            .user
            .clone()
            .ok_or_else(|| "Login response missing user profile".to_string())?;

        self.persist(&tokens.access_token, &tokens.refresh_token, &user).await;
        *self.user.write() = Some(user.clone());

        Ok(user)
    }

    /// Register a new account, then login with the same credentials.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        neighborhood: Option<String>,
    ) -> Result<UserInfo, String> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            neighborhood,
        };
        self.api.register(request).await?;

        // Auto-login after successful registration
        self.login(email, password).await
    }

    /// End the session: best-effort backend notification via the client,
    /// then remove everything persisted on the device.
    pub async fn logout(&self) {
        self.api.logout().await;

        for key in [keys::ACCESS_TOKEN, keys::REFRESH_TOKEN, keys::USER] {
            if let Err(e) = self.store.remove(key).await {
                tracing::warn!(key, error = %e, "Failed to clear stored session key");
            }
        }

        *self.user.write() = None;
    }

    /// The signed-in user's profile, if any.
    pub fn current_user(&self) -> Option<UserInfo> {
        self.user.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    /// Write the session to storage. Failures are logged, not fatal: the
    /// in-memory session stays valid, it just will not survive a restart.
    async fn persist(&self, access_token: &str, refresh_token: &str, user: &UserInfo) {
        let profile = match serde_json::to_string(user) {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize user profile");
                return;
            }
        };

        for (key, value) in [
            (keys::ACCESS_TOKEN, access_token),
            (keys::REFRESH_TOKEN, refresh_token),
            (keys::USER, profile.as_str()),
        ] {
            if let Err(e) = self.store.set(key, value).await {
                tracing::warn!(key, error = %e, "Failed to persist session key");
            }
        }
    }
}
