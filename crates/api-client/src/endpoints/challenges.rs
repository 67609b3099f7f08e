//! Practice challenge API endpoints
//!
//! Maps to the `/practice_challenges` resource:
//! - Browse challenge templates with filters
//! - Submit a challenge completion
//! - List the current user's completion history

use crate::client::SkillswapClient;
use crate::error::ApiResult;
use crate::query::Query;
use serde::{Deserialize, Serialize};

/// Practice challenges API interface
#[derive(Clone)]
pub struct ChallengesApi {
    client: SkillswapClient,
}

impl ChallengesApi {
    /// Create a new challenges API interface
    pub(crate) fn new(client: SkillswapClient) -> Self {
        Self { client }
    }

    /// List challenge templates with filters
    ///
    /// GET /practice_challenges/templates
    pub async fn templates(
        &self,
        filters: &ChallengeTemplateFilters,
    ) -> ApiResult<Vec<ChallengeTemplate>> {
        self.client.get_auth(&filters.query_path()).await
    }

    /// Submit a completed challenge
    ///
    /// POST /practice_challenges/complete
    pub async fn complete(&self, submission: &ChallengeSubmission) -> ApiResult<ChallengeCompletion> {
        self.client
            .post_auth("practice_challenges/complete", submission)
            .await
    }

    /// List the current user's completion history
    ///
    /// GET /users/me/practice_challenges
    pub async fn history(&self) -> ApiResult<Vec<ChallengeCompletion>> {
        self.client.get_auth("users/me/practice_challenges").await
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Filters for listing challenge templates
///
/// Declared query order: `associated_skill_id`, then `difficulty`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChallengeTemplateFilters {
    /// Filter by the skill the challenge exercises
    pub associated_skill_id: Option<i64>,
    /// Filter by difficulty: "easy", "medium", "hard"
    pub difficulty: Option<String>,
}

impl ChallengeTemplateFilters {
    /// Create new filters with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by associated skill
    pub fn with_skill(mut self, skill_id: i64) -> Self {
        self.associated_skill_id = Some(skill_id);
        self
    }

    /// Filter by difficulty
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    fn query_path(&self) -> String {
        let mut query = Query::new();
        if let Some(skill_id) = self.associated_skill_id {
            query.append_display("associated_skill_id", skill_id);
        }
        if let Some(ref difficulty) = self.difficulty {
            query.append("difficulty", difficulty);
        }
        query.into_path("practice_challenges/templates")
    }
}

/// A challenge template users can attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeTemplate {
    pub id: i64,
    pub title: String,
    pub prompt: String,
    pub difficulty: String,
    pub associated_skill_id: i64,
    /// Suggested time box in minutes, when the template declares one
    pub time_box_minutes: Option<u32>,
    pub created_at: String,
}

/// A challenge completion submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeSubmission {
    pub challenge_id: i64,
    /// The user's written solution or reflection
    pub solution: String,
    /// Self-reported minutes spent
    pub minutes_spent: Option<u32>,
}

/// A recorded challenge completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeCompletion {
    pub id: i64,
    pub challenge_id: i64,
    pub user_id: i64,
    /// Points awarded for this completion
    pub points: Option<i64>,
    pub completed_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filters_yields_bare_templates_path() {
        let filters = ChallengeTemplateFilters::new();
        assert_eq!(filters.query_path(), "practice_challenges/templates");
    }

    #[test]
    fn difficulty_alone() {
        let filters = ChallengeTemplateFilters::new().with_difficulty("medium");
        assert_eq!(
            filters.query_path(),
            "practice_challenges/templates?difficulty=medium"
        );
    }

    #[test]
    fn skill_id_alone() {
        let filters = ChallengeTemplateFilters::new().with_skill(10);
        assert_eq!(
            filters.query_path(),
            "practice_challenges/templates?associated_skill_id=10"
        );
    }

    #[test]
    fn skill_id_comes_before_difficulty() {
        let filters = ChallengeTemplateFilters::new()
            .with_difficulty("hard")
            .with_skill(20);
        assert_eq!(
            filters.query_path(),
            "practice_challenges/templates?associated_skill_id=20&difficulty=hard"
        );
    }

    #[test]
    fn template_deserialize() {
        let json = r#"{
            "id": 4,
            "title": "Explain ownership to a beginner",
            "prompt": "Write a short explanation with one worked example.",
            "difficulty": "medium",
            "associated_skill_id": 10,
            "time_box_minutes": 25,
            "created_at": "2024-02-10T08:30:00Z"
        }"#;

        let template: ChallengeTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(template.id, 4);
        assert_eq!(template.difficulty, "medium");
        assert_eq!(template.time_box_minutes, Some(25));
    }

    #[test]
    fn completion_deserialize_without_points() {
        let json = r#"{
            "id": 99,
            "challenge_id": 4,
            "user_id": 3,
            "completed_at": "2024-02-11T19:00:00Z"
        }"#;

        let completion: ChallengeCompletion = serde_json::from_str(json).unwrap();
        assert_eq!(completion.challenge_id, 4);
        assert_eq!(completion.points, None);
    }
}
