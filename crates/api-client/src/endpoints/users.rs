//! User profile API endpoints
//!
//! Maps to the `/users` resource.

use crate::client::SkillswapClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};

/// Users API interface
#[derive(Clone)]
pub struct UsersApi {
    client: SkillswapClient,
}

impl UsersApi {
    /// Create a new users API interface
    pub(crate) fn new(client: SkillswapClient) -> Self {
        Self { client }
    }

    /// Get the current user's profile
    ///
    /// GET /users/me
    pub async fn me(&self) -> ApiResult<UserProfile> {
        self.client.get_auth("users/me").await
    }

    /// Get another user's public profile
    ///
    /// GET /users/{id}
    pub async fn get(&self, id: i64) -> ApiResult<UserProfile> {
        self.client.get_auth(&format!("users/{id}")).await
    }

    /// Update the current user's profile
    ///
    /// PATCH /users/me
    pub async fn update_me(&self, changes: &UpdateProfile) -> ApiResult<UserProfile> {
        self.client.patch_auth("users/me", changes).await
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// A user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    pub bio: Option<String>,
    /// IDs of the skills this user offers
    pub skill_ids: Vec<i64>,
    pub created_at: String,
}

/// Update profile request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfile {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub skill_ids: Option<Vec<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_deserialize() {
        let json = r#"{
            "id": 3,
            "email": "mara@example.com",
            "display_name": "Mara",
            "bio": null,
            "skill_ids": [5, 8],
            "created_at": "2023-11-05T09:00:00Z"
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, 3);
        assert_eq!(profile.skill_ids, vec![5, 8]);
        assert!(profile.bio.is_none());
    }

    #[test]
    fn update_profile_skips_nothing_by_default() {
        let changes = UpdateProfile::default();
        let json = serde_json::to_value(&changes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"display_name": null, "bio": null, "skill_ids": null})
        );
    }
}
