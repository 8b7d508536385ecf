use crate::models::DisplayCard;
use crate::view::ResultsView;

/// Headless results region that keeps everything it was told to show
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryView {
    pub loading_visible: bool,
    pub cards: Vec<DisplayCard>,
    pub empty_notice_visible: bool,
    pub error: Option<String>,
    pub scroll_count: usize,
    pub commit_count: usize,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn card_titles(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.title.as_str()).collect()
    }
}

impl ResultsView for MemoryView {
    fn clear(&mut self) {
        self.cards.clear();
        self.empty_notice_visible = false;
        self.error = None;
    }

    fn show_loading(&mut self) {
        self.loading_visible = true;
    }

    fn hide_loading(&mut self) {
        self.loading_visible = false;
    }

    fn append_card(&mut self, card: &DisplayCard) {
        self.cards.push(card.clone());
    }

    fn show_empty(&mut self) {
        self.empty_notice_visible = true;
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn scroll_to_results(&mut self) {
        self.scroll_count += 1;
    }

    fn commit(&mut self) {
        self.commit_count += 1;
    }
}
