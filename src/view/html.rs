use std::io::Write;

use askama::Template;

use crate::error::{AppError, AppResult};
use crate::models::DisplayCard;
use crate::view::{ResultsView, EMPTY_NOTICE};

#[derive(Template)]
#[template(
    source = r#"<section id="recommendation-page"{% if scroll %} data-scroll="true" tabindex="-1"{% endif %}>
  <div id="loading" class="{% if loading %}loading{% else %}loading hidden{% endif %}"></div>
  <div id="recommendations-grid">
    {% if has_error %}
    <p class="error">Error: {{ error }}</p>
    {% else if empty %}
    <p>{{ empty_notice }}</p>
    {% else %}
    {% for card in cards %}
    <div class="drama-card">
      <h3 class="drama-title">{{ card.title }}</h3>
      <div class="drama-genres">
        <span class="genre-tag">{{ card.style_token }}</span>
        {% for genre in card.genre_tokens %}<span class="genre-tag">{{ genre }}</span>{% endfor %}
      </div>
      <div class="drama-platforms">
        {% for platform in card.platform_tokens %}<span class="platform-chip">{{ platform }}</span>{% endfor %}
      </div>
      <p class="drama-description">{{ card.description }}</p>
      <p>Compatibility: <strong>{{ card.similarity }}%</strong></p>
    </div>
    {% endfor %}
    {% endif %}
  </div>
</section>"#,
    ext = "html"
)]
struct ResultsRegionTemplate<'a> {
    /// Marks the region as the scroll target of the last update
    scroll: bool,
    loading: bool,
    cards: &'a [DisplayCard],
    empty: bool,
    empty_notice: &'a str,
    has_error: bool,
    error: &'a str,
}

/// Results region rendered as auto-escaped HTML markup.
///
/// Every `commit` writes a fresh rendering of the whole region.
pub struct HtmlView<W: Write> {
    out: W,
    loading: bool,
    cards: Vec<DisplayCard>,
    empty: bool,
    error: Option<String>,
    scroll_requested: bool,
}

impl<W: Write> HtmlView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            loading: false,
            cards: Vec::new(),
            empty: false,
            error: None,
            scroll_requested: false,
        }
    }

    pub fn render(&self) -> AppResult<String> {
        let template = ResultsRegionTemplate {
            scroll: self.scroll_requested,
            loading: self.loading,
            cards: &self.cards,
            empty: self.empty,
            empty_notice: EMPTY_NOTICE,
            has_error: self.error.is_some(),
            error: self.error.as_deref().unwrap_or_default(),
        };
        template
            .render()
            .map_err(|e| AppError::Render(format!("Failed to render results template: {}", e)))
    }

    /// Whether a scroll to the results region is pending
    pub fn scroll_requested(&self) -> bool {
        self.scroll_requested
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultsView for HtmlView<W> {
    fn clear(&mut self) {
        self.cards.clear();
        self.empty = false;
        self.error = None;
        self.scroll_requested = false;
    }

    fn show_loading(&mut self) {
        self.loading = true;
    }

    fn hide_loading(&mut self) {
        self.loading = false;
    }

    fn append_card(&mut self, card: &DisplayCard) {
        self.cards.push(card.clone());
    }

    fn show_empty(&mut self) {
        self.empty = true;
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn scroll_to_results(&mut self) {
        self.scroll_requested = true;
    }

    fn commit(&mut self) {
        let markup = match self.render() {
            Ok(markup) => markup,
            Err(e) => {
                tracing::error!(error = %e, "Results region not rendered");
                return;
            }
        };
        if let Err(e) = writeln!(self.out, "{}", markup).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "Failed to write results markup");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str) -> DisplayCard {
        DisplayCard {
            title: title.to_string(),
            genre_tokens: vec!["Romance".to_string(), "Comedy".to_string()],
            style_token: "Office".to_string(),
            platform_tokens: vec!["Netflix".to_string()],
            description: "A blind date gone wrong.".to_string(),
            similarity: 92.5,
        }
    }

    #[test]
    fn test_renders_cards_in_order() {
        let mut view = HtmlView::new(Vec::new());
        view.append_card(&card("Business Proposal"));
        view.append_card(&card("Love Alarm"));

        let markup = view.render().unwrap();
        let first = markup.find("Business Proposal").unwrap();
        let second = markup.find("Love Alarm").unwrap();
        assert!(first < second);
        assert_eq!(markup.matches(r#"class="drama-card""#).count(), 2);
        assert!(markup.contains(r#"<span class="platform-chip">Netflix</span>"#));
        assert!(markup.contains("<strong>92.5%</strong>"));
        assert!(markup.contains(r#"class="loading hidden""#));
    }

    #[test]
    fn test_escapes_server_text() {
        let mut view = HtmlView::new(Vec::new());
        let mut hostile = card("<script>alert(1)</script>");
        hostile.genre_tokens = vec!["<img src=x onerror=alert(1)>".to_string()];
        view.append_card(&hostile);

        let markup = view.render().unwrap();
        assert!(!markup.contains("<script>"));
        assert!(!markup.contains("<img"));
        assert!(markup.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_error_replaces_results() {
        let mut view = HtmlView::new(Vec::new());
        view.show_error("Title <not> found");

        let markup = view.render().unwrap();
        assert!(markup.contains("Error: Title &lt;not&gt; found"));
        assert!(!markup.contains("drama-card"));
    }

    #[test]
    fn test_empty_notice() {
        let mut view = HtmlView::new(Vec::new());
        view.show_loading();
        view.show_empty();

        let markup = view.render().unwrap();
        assert!(markup.contains(EMPTY_NOTICE));
        assert!(markup.contains(r#"class="loading""#));
    }

    #[test]
    fn test_commit_writes_markup() {
        let mut view = HtmlView::new(Vec::new());
        view.append_card(&card("Signal"));
        view.scroll_to_results();
        view.commit();

        assert!(view.scroll_requested());
        let written = String::from_utf8(view.into_inner()).unwrap();
        assert!(written.starts_with(r#"<section id="recommendation-page" data-scroll="true""#));
        assert!(written.contains("Signal"));
    }

    #[test]
    fn test_scroll_marker_cleared_with_results() {
        let mut view = HtmlView::new(Vec::new());
        view.append_card(&card("Signal"));
        view.scroll_to_results();
        assert!(view.render().unwrap().contains(r#"data-scroll="true""#));

        view.clear();
        view.show_error("Title not found");

        let markup = view.render().unwrap();
        assert!(markup.starts_with(r#"<section id="recommendation-page">"#));
        assert!(!markup.contains("data-scroll"));
    }
}
