use std::io::Write;

use crate::models::DisplayCard;
use crate::view::{ResultsView, EMPTY_NOTICE};

/// Drops control characters so server text cannot move the cursor or
/// inject escape sequences. Bidi and zero-width format characters go too,
/// since they reorder or hide what the terminal shows.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|&c| !c.is_control() && !is_format_char(c))
        .collect()
}

fn is_format_char(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'
            | '\u{061C}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
    )
}

/// Results region printed as plain text
pub struct TerminalView<W: Write> {
    out: W,
    loading: bool,
    /// Cards written since the last `clear`
    cards: usize,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            loading: false,
            cards: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }

    fn render_card(card: &DisplayCard) -> Vec<String> {
        let mut tags = vec![format!("[{}]", sanitize(&card.style_token))];
        tags.extend(card.genre_tokens.iter().map(|g| format!("[{}]", sanitize(g))));

        let platforms: Vec<String> = card.platform_tokens.iter().map(|p| sanitize(p)).collect();

        let mut lines = vec![sanitize(&card.title), format!("  {}", tags.join(" "))];
        if !platforms.is_empty() {
            lines.push(format!("  Platforms: {}", platforms.join(", ")));
        }
        lines.push(format!("  {}", sanitize(&card.description)));
        lines.push(format!("  Compatibility: {}%", card.similarity));
        lines
    }
}

impl<W: Write> ResultsView for TerminalView<W> {
    fn clear(&mut self) {
        self.cards = 0;
    }

    fn show_loading(&mut self) {
        self.loading = true;
        self.write_line("Loading recommendations...");
    }

    fn hide_loading(&mut self) {
        self.loading = false;
    }

    fn append_card(&mut self, card: &DisplayCard) {
        self.cards += 1;
        for line in Self::render_card(card) {
            self.write_line(&line);
        }
        self.write_line("");
    }

    fn show_empty(&mut self) {
        self.write_line(EMPTY_NOTICE);
    }

    fn show_error(&mut self, message: &str) {
        let line = format!("Error: {}", sanitize(message));
        self.write_line(&line);
    }

    fn scroll_to_results(&mut self) {
        let noun = if self.cards == 1 { "recommendation" } else { "recommendations" };
        let line = format!("-- {} {} above --", self.cards, noun);
        self.write_line(&line);
    }

    fn commit(&mut self) {
        if let Err(e) = self.out.flush() {
            tracing::warn!(error = %e, "Failed to flush terminal");
        }
    }
}
