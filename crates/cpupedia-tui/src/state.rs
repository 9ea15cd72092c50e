//! Application state composition.
//!
//! State is split between `TuiState` (the main view) and `Option<Overlay>`
//! (modal panels), combined in `AppState`, so overlay handlers can borrow
//! both halves without conflicts.
//!
//! The content store is owned here and never mutated; the filtered topic
//! list is derived on demand from the query, never cached.

use std::time::{Duration, Instant};

use cpupedia_core::config::{Accent, Config};
use cpupedia_core::content::ContentStore;
use cpupedia_core::search::filter_topics;
use cpupedia_types::Topic;
use ratatui::style::Color;

use crate::overlays::Overlay;
use crate::page::PageLayout;

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(config: &Config, store: ContentStore) -> Self {
        Self {
            tui: TuiState::new(config, store),
            overlay: None,
        }
    }
}

/// Main view state (everything except overlays).
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Read-only encyclopedia content.
    pub store: ContentStore,
    /// Search query editing state.
    pub search: SearchState,
    /// Topic list cursor.
    pub browse: BrowseState,
    /// Page scroll offset.
    pub scroll: ScrollState,
    /// Pre-built page lines and section positions; rebuilt each frame.
    pub page: PageLayout,
    /// Body viewport (width, height) in cells, set each frame.
    pub viewport: (usize, usize),
    /// Accent color from config.
    pub accent: Color,
    /// Transient status message (e.g. "Copied to clipboard").
    pub status: Option<StatusFlash>,
}

impl TuiState {
    pub fn new(config: &Config, store: ContentStore) -> Self {
        Self {
            should_quit: false,
            store,
            search: SearchState::default(),
            browse: BrowseState::default(),
            scroll: ScrollState::default(),
            page: PageLayout::default(),
            viewport: (0, 0),
            accent: accent_color(config.accent),
            status: None,
        }
    }

    /// The topics currently displayed, in store order.
    pub fn filtered_topics(&self) -> Vec<&Topic> {
        filter_topics(&self.search.query, &self.store.topics)
    }

    /// The topic under the list cursor, if any.
    pub fn cursor_topic(&self) -> Option<&Topic> {
        self.filtered_topics().get(self.browse.cursor).copied()
    }

    pub fn flash(&mut self, message: impl Into<String>) {
        self.status = Some(StatusFlash::new(message));
    }
}

/// Maps the config accent to a terminal color.
fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Cyan => Color::Cyan,
        Accent::Magenta => Color::Magenta,
        Accent::Green => Color::Green,
        Accent::Yellow => Color::Yellow,
        Accent::Blue => Color::Blue,
    }
}

// ============================================================================
// SearchState
// ============================================================================

/// The current search query and its edit operations.
///
/// Every edit replaces the query unconditionally; there is no validation and
/// no invalid input.
#[derive(Debug, Default)]
pub struct SearchState {
    pub query: String,
}

impl SearchState {
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn backspace(&mut self) {
        self.query.pop();
    }

    /// Deletes the last word plus the whitespace behind it.
    pub fn delete_word_back(&mut self) {
        let trimmed = self.query.trim_end().len();
        self.query.truncate(trimmed);
        let cut = self
            .query
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());
        self.query.truncate(cut);
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }
}

// ============================================================================
// BrowseState
// ============================================================================

/// Cursor into the filtered topic list.
#[derive(Debug, Default)]
pub struct BrowseState {
    pub cursor: usize,
}

impl BrowseState {
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Keeps the cursor inside the filtered list after it shrinks.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}

// ============================================================================
// ScrollState
// ============================================================================

/// Page scroll offset in lines, 0 = top.
#[derive(Debug, Default)]
pub struct ScrollState {
    pub offset: usize,
}

impl ScrollState {
    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize, total: usize, viewport: usize) {
        self.offset = (self.offset + lines).min(Self::max_offset(total, viewport));
    }

    pub fn scroll_to(&mut self, line: usize, total: usize, viewport: usize) {
        self.offset = line.min(Self::max_offset(total, viewport));
    }

    pub fn clamp(&mut self, total: usize, viewport: usize) {
        self.offset = self.offset.min(Self::max_offset(total, viewport));
    }

    fn max_offset(total: usize, viewport: usize) -> usize {
        total.saturating_sub(viewport)
    }
}

// ============================================================================
// StatusFlash
// ============================================================================

/// A short-lived status line message.
#[derive(Debug)]
pub struct StatusFlash {
    pub message: String,
    shown_at: Instant,
}

impl StatusFlash {
    const TTL: Duration = Duration::from_secs(2);

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn expired(&self) -> bool {
        self.shown_at.elapsed() >= Self::TTL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_word_back_removes_last_word() {
        let mut search = SearchState {
            query: "open isa".to_string(),
        };
        search.delete_word_back();
        assert_eq!(search.query, "open ");
        search.delete_word_back();
        assert_eq!(search.query, "");
    }

    #[test]
    fn delete_word_back_eats_trailing_whitespace_first() {
        let mut search = SearchState {
            query: "risc   ".to_string(),
        };
        search.delete_word_back();
        assert_eq!(search.query, "");
    }

    #[test]
    fn cursor_clamps_into_shrunk_list() {
        let mut browse = BrowseState { cursor: 5 };
        browse.clamp(2);
        assert_eq!(browse.cursor, 1);
        browse.clamp(0);
        assert_eq!(browse.cursor, 0);
    }

    #[test]
    fn cursor_stops_at_list_edges() {
        let mut browse = BrowseState::default();
        browse.move_up();
        assert_eq!(browse.cursor, 0);
        browse.move_down(2);
        browse.move_down(2);
        assert_eq!(browse.cursor, 1);
    }

    #[test]
    fn scroll_is_bounded_by_content() {
        let mut scroll = ScrollState::default();
        scroll.scroll_down(100, 30, 10);
        assert_eq!(scroll.offset, 20);
        scroll.scroll_up(5);
        assert_eq!(scroll.offset, 15);
        scroll.clamp(10, 10);
        assert_eq!(scroll.offset, 0);
    }
}
