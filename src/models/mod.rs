use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

pub mod catalog;

pub use catalog::TitleCatalog;

/// Title submitted by the user, trimmed at capture.
///
/// An empty query is valid input; the recommendation service decides what
/// to answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationQuery {
    title: String,
}

impl RecommendationQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            title: raw.trim().to_string(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
    }
}

impl Display for RecommendationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

// ============================================================================
// Recommendation Service Types
// ============================================================================

/// Reads `null` the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Raw response from GET /recommend
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RecommendationResponse {
    /// Catalog title the service matched the query to
    #[serde(default, deserialize_with = "null_as_default")]
    pub input: String,
    #[serde(default)]
    pub input_description: Option<String>,
    #[serde(default)]
    pub input_platform: Option<String>,
    /// Ranked by the service; order is preserved for display
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendations: Vec<RecommendationRecord>,
}

/// One recommendation entry, untrusted and not yet normalized
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RecommendationRecord {
    pub title: String,
    /// Comma-delimited, e.g. "Romance, Comedy"
    #[serde(default)]
    pub genres: Option<String>,
    /// Shown as a single tag, never split
    #[serde(default)]
    pub styles: Option<String>,
    /// Comma- or pipe-delimited, e.g. "Netflix|Viki"
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// 0-100, not validated here
    pub similarity: f64,
}

/// View model for one rendered card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayCard {
    pub title: String,
    pub genre_tokens: Vec<String>,
    pub style_token: String,
    pub platform_tokens: Vec<String>,
    pub description: String,
    pub similarity: f64,
}

/// What the results region currently displays
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Populated(Vec<DisplayCard>),
    Empty,
    Failed(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Loading => "loading",
            ViewState::Populated(_) => "populated",
            ViewState::Empty => "empty",
            ViewState::Failed(_) => "failed",
        }
    }
}
