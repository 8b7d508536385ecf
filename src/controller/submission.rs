use uuid::Uuid;

use crate::models::RecommendationQuery;

/// Identifies one submit-to-render cycle in logs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubmissionId(pub Uuid);

impl SubmissionId {
    /// Creates a new random submission ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A query captured at submit time, waiting for its response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: SubmissionId,
    pub query: RecommendationQuery,
}

impl Submission {
    pub fn new(query: RecommendationQuery) -> Self {
        Self {
            id: SubmissionId::new(),
            query,
        }
    }

    /// Tracing span carrying the submission ID and query
    pub fn span(&self) -> tracing::Span {
        tracing::info_span!(
            "submission",
            submission_id = %self.id,
            query = %self.query,
        )
    }
}
