use crate::models::{DisplayCard, RecommendationRecord};

/// Genres are comma-separated
pub const GENRE_DELIMITERS: &[char] = &[','];

/// Platforms may be separated by commas or pipes
pub const PLATFORM_DELIMITERS: &[char] = &[',', '|'];

/// Splits a delimiter-separated field into trimmed tokens.
///
/// Absent or empty input gives no tokens. Empty pieces between adjacent
/// delimiters are kept as empty tokens.
pub fn split_tokens(raw: Option<&str>, delimiters: &[char]) -> Vec<String> {
    match raw {
        None | Some("") => Vec::new(),
        Some(raw) => raw
            .split(delimiters)
            .map(|piece| piece.trim().to_string())
            .collect(),
    }
}

impl From<&RecommendationRecord> for DisplayCard {
    fn from(record: &RecommendationRecord) -> Self {
        Self {
            title: record.title.clone(),
            genre_tokens: split_tokens(record.genres.as_deref(), GENRE_DELIMITERS),
            style_token: record.styles.clone().unwrap_or_default(),
            platform_tokens: split_tokens(record.platform.as_deref(), PLATFORM_DELIMITERS),
            description: record.description.clone().unwrap_or_default(),
            similarity: record.similarity,
        }
    }
}
