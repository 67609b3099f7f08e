//! Mind content API endpoints
//!
//! Maps to the `/mind_content` resource: curated articles and exercises for
//! mindset and learning-habit work.

use crate::client::SkillswapClient;
use crate::error::ApiResult;
use crate::query::Query;
use serde::{Deserialize, Serialize};

/// Mind content API interface
#[derive(Clone)]
pub struct MindContentApi {
    client: SkillswapClient,
}

impl MindContentApi {
    /// Create a new mind content API interface
    pub(crate) fn new(client: SkillswapClient) -> Self {
        Self { client }
    }

    /// List mind content with filters
    ///
    /// GET /mind_content
    pub async fn list(&self, filters: &MindContentFilters) -> ApiResult<Vec<MindContent>> {
        self.client.get_auth(&filters.query_path()).await
    }

    /// Get a single content item by ID
    ///
    /// GET /mind_content/{id}
    pub async fn get(&self, id: i64) -> ApiResult<MindContent> {
        self.client.get_auth(&format!("mind_content/{id}")).await
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Filters for listing mind content
///
/// Declared query order: `search`, then `category`. The search term is
/// trimmed before encoding and dropped entirely when it trims to empty;
/// both values are form-encoded, so spaces become `+`. The category is
/// passed through untrimmed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MindContentFilters {
    /// Free-text search over titles and summaries
    pub search: Option<String>,
    /// Filter by content category
    pub category: Option<String>,
}

impl MindContentFilters {
    /// Create new filters with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by a search term (trimmed before encoding)
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Filter by category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    fn query_path(&self) -> String {
        let mut query = Query::new();
        if let Some(ref search) = self.search {
            let trimmed = search.trim();
            if !trimmed.is_empty() {
                query.append_form("search", trimmed);
            }
        }
        if let Some(ref category) = self.category {
            query.append_form("category", category);
        }
        query.into_path("mind_content")
    }
}

/// A mind content item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MindContent {
    pub id: i64,
    pub title: String,
    pub summary: Option<String>,
    /// Full article body, present on single-item fetches
    pub body: Option<String>,
    pub category: String,
    pub published_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filters_yields_bare_collection_path() {
        let filters = MindContentFilters::new();
        assert_eq!(filters.query_path(), "mind_content");
    }

    #[test]
    fn search_is_trimmed_and_plus_encoded() {
        let filters = MindContentFilters::new().with_search("  spaced out search  ");
        assert_eq!(
            filters.query_path(),
            "mind_content?search=spaced+out+search"
        );
    }

    #[test]
    fn whitespace_only_search_is_dropped() {
        let filters = MindContentFilters::new().with_search("   ");
        assert_eq!(filters.query_path(), "mind_content");
    }

    #[test]
    fn search_comes_before_category() {
        let filters = MindContentFilters::new()
            .with_category("focus habits")
            .with_search("deep work");
        assert_eq!(
            filters.query_path(),
            "mind_content?search=deep+work&category=focus+habits"
        );
    }

    #[test]
    fn content_deserialize() {
        let json = r#"{
            "id": 7,
            "title": "Spaced repetition in ten minutes a day",
            "summary": "A starter routine.",
            "body": null,
            "category": "memory",
            "published_at": "2024-01-20T12:00:00Z"
        }"#;

        let content: MindContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.id, 7);
        assert_eq!(content.category, "memory");
        assert!(content.body.is_none());
    }
}
