//! Recommendation provider abstraction
//!
//! The render controller only sees this trait, so the HTTP client can be
//! swapped for a mock in tests or for another transport later.

use crate::{
    error::AppResult,
    models::{RecommendationQuery, RecommendationResponse},
};

pub mod http;

pub use http::{HttpRecommendationProvider, RequestFilters};

/// Successful outcome of one recommendation request
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationOutcome {
    /// At least one record, in service order
    Found(RecommendationResponse),
    /// The service answered but had nothing to recommend
    Empty(RecommendationResponse),
}

impl RecommendationOutcome {
    pub fn classify(response: RecommendationResponse) -> Self {
        if response.recommendations.is_empty() {
            RecommendationOutcome::Empty(response)
        } else {
            RecommendationOutcome::Found(response)
        }
    }

    pub fn response(&self) -> &RecommendationResponse {
        match self {
            RecommendationOutcome::Found(response) | RecommendationOutcome::Empty(response) => {
                response
            }
        }
    }
}

/// Trait for recommendation sources
///
/// One call issues exactly one request: no retry, no caching, no
/// de-duplication. Failures of any kind surface as `AppError::RequestFailed`.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationProvider: Send + Sync {
    async fn fetch_recommendations(
        &self,
        query: &RecommendationQuery,
    ) -> AppResult<RecommendationOutcome>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecommendationRecord;

    fn record(title: &str) -> RecommendationRecord {
        RecommendationRecord {
            title: title.to_string(),
            genres: None,
            styles: None,
            platform: None,
            description: None,
            similarity: 50.0,
        }
    }

    #[test]
    fn test_classify_empty() {
        let response = RecommendationResponse {
            input: "Goblin".to_string(),
            input_description: None,
            input_platform: None,
            recommendations: Vec::new(),
        };

        let outcome = RecommendationOutcome::classify(response.clone());
        assert_eq!(outcome, RecommendationOutcome::Empty(response));
    }

    #[test]
    fn test_classify_found() {
        let response = RecommendationResponse {
            input: "Goblin".to_string(),
            input_description: None,
            input_platform: None,
            recommendations: vec![record("Hotel Del Luna")],
        };

        let outcome = RecommendationOutcome::classify(response);
        assert!(matches!(outcome, RecommendationOutcome::Found(_)));
        assert_eq!(outcome.response().recommendations.len(), 1);
    }
}
