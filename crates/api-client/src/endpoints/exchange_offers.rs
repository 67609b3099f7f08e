//! Exchange offer API endpoints
//!
//! Maps to the `/exchange_offers` resource:
//! - List offers with filters
//! - Get a single offer by ID
//! - Create, update, delete offers
//! - List the current user's own offers

use crate::client::SkillswapClient;
use crate::error::ApiResult;
use crate::query::Query;
use serde::{Deserialize, Serialize};

/// Exchange offers API interface
#[derive(Clone)]
pub struct ExchangeOffersApi {
    client: SkillswapClient,
}

impl ExchangeOffersApi {
    /// Create a new exchange offers API interface
    pub(crate) fn new(client: SkillswapClient) -> Self {
        Self { client }
    }

    /// List exchange offers with filters
    ///
    /// GET /exchange_offers
    pub async fn list(&self, filters: &ExchangeOfferFilters) -> ApiResult<Vec<ExchangeOffer>> {
        self.client.get_auth(&filters.query_path()).await
    }

    /// Get a single exchange offer by ID
    ///
    /// GET /exchange_offers/{id}
    pub async fn get(&self, id: i64) -> ApiResult<ExchangeOffer> {
        self.client.get_auth(&format!("exchange_offers/{id}")).await
    }

    /// Create a new exchange offer
    ///
    /// POST /exchange_offers
    pub async fn create(&self, offer: &CreateExchangeOffer) -> ApiResult<ExchangeOffer> {
        self.client.post_auth("exchange_offers", offer).await
    }

    /// Update an existing exchange offer
    ///
    /// PATCH /exchange_offers/{id}
    pub async fn update(&self, id: i64, changes: &UpdateExchangeOffer) -> ApiResult<ExchangeOffer> {
        self.client
            .patch_auth(&format!("exchange_offers/{id}"), changes)
            .await
    }

    /// Delete an exchange offer
    ///
    /// DELETE /exchange_offers/{id}; resolves to `()` even when the server
    /// sends no response body.
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client
            .delete_auth(&format!("exchange_offers/{id}"))
            .await
    }

    /// List the current user's own exchange offers
    ///
    /// GET /users/me/exchange_offers
    pub async fn mine(&self) -> ApiResult<Vec<ExchangeOffer>> {
        self.client.get_auth("users/me/exchange_offers").await
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Filters for listing exchange offers
///
/// Declared query order: `search_text`, then `is_active`. The search text
/// is passed through exactly as supplied (no trimming; whitespace-only
/// values still filter) and `false` is a value like any other.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExchangeOfferFilters {
    /// Free-text search over offer titles and descriptions
    pub search_text: Option<String>,
    /// Filter by active/inactive state
    pub is_active: Option<bool>,
}

impl ExchangeOfferFilters {
    /// Create new filters with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by search text (not trimmed)
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    /// Filter by active state
    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = Some(active);
        self
    }

    fn query_path(&self) -> String {
        let mut query = Query::new();
        if let Some(ref text) = self.search_text {
            query.append("search_text", text);
        }
        if let Some(active) = self.is_active {
            query.append_display("is_active", active);
        }
        query.into_path("exchange_offers")
    }
}

/// An exchange offer: one user's proposal to trade skill time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeOffer {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Skill the offering user teaches
    pub offered_skill_id: i64,
    /// Skill the offering user wants in return
    pub requested_skill_id: Option<i64>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: Option<String>,
}

/// Create exchange offer request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExchangeOffer {
    pub title: String,
    pub description: Option<String>,
    pub offered_skill_id: i64,
    pub requested_skill_id: Option<i64>,
}

/// Update exchange offer request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateExchangeOffer {
    pub title: Option<String>,
    pub description: Option<String>,
    pub requested_skill_id: Option<i64>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filters_yields_bare_collection_path() {
        let filters = ExchangeOfferFilters::new();
        assert_eq!(filters.query_path(), "exchange_offers");
    }

    #[test]
    fn search_text_is_not_trimmed_and_percent_encoded() {
        let filters = ExchangeOfferFilters::new()
            .with_search_text("  ")
            .with_active(false);
        assert_eq!(
            filters.query_path(),
            "exchange_offers?search_text=%20%20&is_active=false"
        );
    }

    #[test]
    fn false_is_serialized_not_dropped() {
        let filters = ExchangeOfferFilters::new().with_active(false);
        assert_eq!(filters.query_path(), "exchange_offers?is_active=false");
    }

    #[test]
    fn search_text_comes_before_is_active() {
        let filters = ExchangeOfferFilters::new()
            .with_active(true)
            .with_search_text("guitar");
        assert_eq!(
            filters.query_path(),
            "exchange_offers?search_text=guitar&is_active=true"
        );
    }

    #[test]
    fn offer_deserialize() {
        let json = r#"{
            "id": 12,
            "user_id": 3,
            "title": "Guitar lessons for Spanish practice",
            "description": "Weekly one hour sessions",
            "offered_skill_id": 5,
            "requested_skill_id": 9,
            "is_active": true,
            "created_at": "2024-03-01T10:00:00Z",
            "updated_at": null
        }"#;

        let offer: ExchangeOffer = serde_json::from_str(json).unwrap();
        assert_eq!(offer.id, 12);
        assert_eq!(offer.offered_skill_id, 5);
        assert!(offer.is_active);
    }
}
