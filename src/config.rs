use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::services::suggestions::DEFAULT_SUGGESTION_LIMIT;

/// How the results region is written to stdout
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Sanitized plain text
    #[default]
    Text,
    /// Escaped HTML markup of the results region
    Html,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Recommendation service base URL
    #[serde(default = "default_recommender_api_url")]
    pub recommender_api_url: String,

    /// Maximum number of suggestions shown while typing
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Optional `limit` forwarded to the recommendation service
    #[serde(default)]
    pub results_limit: Option<u32>,

    /// Optional comma-separated platform filter, e.g. "netflix,viki"
    #[serde(default)]
    pub platform_filter: Option<String>,

    /// Only return titles on the filtered platforms
    #[serde(default)]
    pub only_platform: bool,

    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_recommender_api_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = Self::from_vars(std::env::vars())?;
        Ok(config)
    }

    /// Load configuration from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| AppError::Config(format!("Failed to load config: {}", e)))
    }
}
