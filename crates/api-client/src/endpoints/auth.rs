//! Session lifecycle API endpoints
//!
//! Login, logout, and session validation. This is the one facade that
//! touches the session token: a successful login stores it, logout clears
//! it, and a failed validation clears it before the failure propagates.

use crate::client::SkillswapClient;
use crate::endpoints::users::UserProfile;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};

/// Auth API interface
#[derive(Clone)]
pub struct AuthApi {
    client: SkillswapClient,
}

impl AuthApi {
    /// Create a new auth API interface
    pub(crate) fn new(client: SkillswapClient) -> Self {
        Self { client }
    }

    /// Log in with email and password
    ///
    /// POST /sessions (unauthenticated). On success the returned token is
    /// stored into the client's session, so subsequent authenticated calls
    /// pick it up without any further wiring.
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<SessionResponse> {
        let response: SessionResponse = self.client.post("sessions", credentials).await?;
        self.client.set_auth_token(Some(response.token.clone()));
        Ok(response)
    }

    /// Log out
    ///
    /// Clears the session token. Purely client-side: the backend keeps no
    /// session record to tear down.
    pub fn logout(&self) {
        self.client.set_auth_token(None);
    }

    /// Validate the current session
    ///
    /// GET /users/me (authenticated). On any failure, transport or HTTP
    /// alike, the stored token is cleared before the error propagates.
    pub async fn validate(&self) -> ApiResult<UserProfile> {
        match self.client.get_auth("users/me").await {
            Ok(profile) => Ok(profile),
            Err(err) => {
                self.client.set_auth_token(None);
                Err(err)
            }
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response: the new session token plus the logged-in profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: UserProfile,
}
