//! Endorsement API endpoints
//!
//! Maps to the `/endorsements` resource: one user vouching for another
//! user's skill.

use crate::client::SkillswapClient;
use crate::error::ApiResult;
use crate::query::Query;
use serde::{Deserialize, Serialize};

/// Endorsements API interface
#[derive(Clone)]
pub struct EndorsementsApi {
    client: SkillswapClient,
}

impl EndorsementsApi {
    /// Create a new endorsements API interface
    pub(crate) fn new(client: SkillswapClient) -> Self {
        Self { client }
    }

    /// List endorsements with filters
    ///
    /// GET /endorsements
    pub async fn list(&self, filters: &EndorsementFilters) -> ApiResult<Vec<Endorsement>> {
        self.client.get_auth(&filters.query_path()).await
    }

    /// Create an endorsement
    ///
    /// POST /endorsements
    pub async fn create(&self, endorsement: &CreateEndorsement) -> ApiResult<Endorsement> {
        self.client.post_auth("endorsements", endorsement).await
    }

    /// Withdraw an endorsement
    ///
    /// DELETE /endorsements/{id}; resolves to `()` even when the server
    /// sends no response body.
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete_auth(&format!("endorsements/{id}")).await
    }

    /// List the endorsements a given user has received
    ///
    /// GET /users/{id}/endorsements
    pub async fn for_user(&self, user_id: i64) -> ApiResult<Vec<Endorsement>> {
        self.client
            .get_auth(&format!("users/{user_id}/endorsements"))
            .await
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Filters for listing endorsements
///
/// Declared query order: `user_id`, then `skill_id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndorsementFilters {
    /// Filter by the endorsed user
    pub user_id: Option<i64>,
    /// Filter by the endorsed skill
    pub skill_id: Option<i64>,
}

impl EndorsementFilters {
    /// Create new filters with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by endorsed user
    pub fn with_user(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Filter by endorsed skill
    pub fn with_skill(mut self, skill_id: i64) -> Self {
        self.skill_id = Some(skill_id);
        self
    }

    fn query_path(&self) -> String {
        let mut query = Query::new();
        if let Some(user_id) = self.user_id {
            query.append_display("user_id", user_id);
        }
        if let Some(skill_id) = self.skill_id {
            query.append_display("skill_id", skill_id);
        }
        query.into_path("endorsements")
    }
}

/// An endorsement of a user's skill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endorsement {
    pub id: i64,
    /// The endorsed user
    pub user_id: i64,
    pub skill_id: i64,
    /// The endorsing user
    pub endorsed_by: i64,
    pub comment: Option<String>,
    pub created_at: String,
}

/// Create endorsement request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEndorsement {
    pub user_id: i64,
    pub skill_id: i64,
    pub comment: Option<String>,
}
