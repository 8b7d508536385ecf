use crate::services::SuggestionMatcher;

/// Query text plus the suggestion list shown beneath it
#[derive(Debug, Clone)]
pub struct SearchBox {
    matcher: SuggestionMatcher,
    text: String,
    suggestions: Vec<String>,
}

impl SearchBox {
    pub fn new(matcher: SuggestionMatcher) -> Self {
        Self {
            matcher,
            text: String::new(),
            suggestions: Vec::new(),
        }
    }

    /// User changed the query text
    pub fn input(&mut self, text: &str) -> &[String] {
        self.text = text.to_string();
        self.suggestions = self.matcher.suggest(text);
        &self.suggestions
    }

    /// User picked suggestion `index` (0-based).
    ///
    /// The query text becomes the exact catalog title and the list is
    /// cleared. Returns `None` and changes nothing when out of range.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        let chosen = self.suggestions.get(index)?.clone();
        self.text = chosen;
        self.suggestions.clear();
        Some(&self.text)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TitleCatalog;
    use std::sync::Arc;

    fn search_box() -> SearchBox {
        let catalog: TitleCatalog = ["Reply 1988", "Reply 1997", "Signal"].into_iter().collect();
        SearchBox::new(SuggestionMatcher::new(Arc::new(catalog), 5))
    }

    #[test]
    fn test_input_updates_text_and_suggestions() {
        let mut search_box = search_box();
        let suggestions = search_box.input("rep").to_vec();
        assert_eq!(suggestions, vec!["Reply 1988", "Reply 1997"]);
        assert_eq!(search_box.text(), "rep");
    }

    #[test]
    fn test_blank_input_clears_suggestions() {
        let mut search_box = search_box();
        search_box.input("rep");
        assert!(search_box.input("  ").is_empty());
        assert!(search_box.suggestions().is_empty());
    }

    #[test]
    fn test_select_replaces_text_with_catalog_title() {
        let mut search_box = search_box();
        search_box.input("REPLY 19");
        assert_eq!(search_box.select(1), Some("Reply 1997"));
        assert_eq!(search_box.text(), "Reply 1997");
        assert!(search_box.suggestions().is_empty());
    }

    #[test]
    fn test_select_out_of_range_changes_nothing() {
        let mut search_box = search_box();
        search_box.input("sig");
        assert_eq!(search_box.select(3), None);
        assert_eq!(search_box.text(), "sig");
        assert_eq!(search_box.suggestions(), &["Signal".to_string()]);
    }
}
