//! Results region abstraction
//!
//! The render controller owns one `ResultsView` and is the only thing that
//! drives it. Implementations decide how a loading indicator, cards, the
//! empty notice and error messages look.

use crate::models::DisplayCard;

pub mod html;
pub mod memory;
pub mod search_box;
pub mod terminal;

pub use html::HtmlView;
pub use memory::MemoryView;
pub use search_box::SearchBox;
pub use terminal::TerminalView;

/// Notice shown when the service has nothing to recommend
pub const EMPTY_NOTICE: &str = "No recommendations found.";

/// Write-only sink for the results region
pub trait ResultsView {
    /// Remove rendered cards, notices and errors
    fn clear(&mut self);

    fn show_loading(&mut self);

    fn hide_loading(&mut self);

    fn append_card(&mut self, card: &DisplayCard);

    fn show_empty(&mut self);

    fn show_error(&mut self, message: &str);

    fn scroll_to_results(&mut self);

    /// End of one batch of updates; buffered views flush here
    fn commit(&mut self) {}
}
