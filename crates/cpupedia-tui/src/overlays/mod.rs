//! Modal overlays.
//!
//! Overlays temporarily take over keyboard input. Each one is self-contained:
//! it owns its state, key handler and render function.
//!
//! - `detail.rs`: the topic detail panel (the "selected topic" state)
//! - `help.rs`: key binding reference
//! - `render_utils.rs`: shared panel chrome

pub mod detail;
pub mod help;
pub mod render_utils;

use crossterm::event::KeyEvent;
pub use detail::DetailState;
pub use help::HelpState;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::effects::UiEffect;
use crate::state::TuiState;

/// Transition returned by overlay key handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    pub fn stay() -> Self {
        Self {
            transition: OverlayTransition::Stay,
            effects: Vec::new(),
        }
    }

    pub fn close() -> Self {
        Self {
            transition: OverlayTransition::Close,
            effects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

/// The active modal overlay, if any.
#[derive(Debug)]
pub enum Overlay {
    /// Topic detail panel; holding this variant is what "a topic is
    /// selected" means.
    Detail(DetailState),
    Help(HelpState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        match self {
            Overlay::Detail(d) => d.render(frame, area, tui.accent),
            Overlay::Help(h) => h.render(frame, area, tui.accent),
        }
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Detail(d) => d.handle_key(tui, key),
            Overlay::Help(h) => h.handle_key(tui, key),
        }
    }
}
