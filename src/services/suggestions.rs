use std::sync::Arc;

use crate::models::TitleCatalog;

/// Number of suggestions shown below the search box
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Returns up to `limit` catalog titles containing `partial`, case-insensitively.
///
/// Matches keep catalog order. Blank input yields no suggestions.
pub fn suggest<'a>(partial: &str, catalog: &'a TitleCatalog, limit: usize) -> Vec<&'a str> {
    let needle = partial.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    catalog
        .iter()
        .filter(|title| title.to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}

/// Suggestion Matcher bound to a catalog and a fixed limit
#[derive(Debug, Clone)]
pub struct SuggestionMatcher {
    catalog: Arc<TitleCatalog>,
    limit: usize,
}

impl SuggestionMatcher {
    pub fn new(catalog: Arc<TitleCatalog>, limit: usize) -> Self {
        Self { catalog, limit }
    }

    pub fn suggest(&self, partial: &str) -> Vec<String> {
        let matches: Vec<String> = suggest(partial, &self.catalog, self.limit)
            .into_iter()
            .map(str::to_string)
            .collect();

        tracing::trace!(partial = %partial, matches = matches.len(), "Suggestions computed");

        matches
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for SuggestionMatcher {
    fn default() -> Self {
        Self::new(Arc::new(TitleCatalog::builtin()), DEFAULT_SUGGESTION_LIMIT)
    }
}
