//! Topic detail panel.
//!
//! Holds a clone of the topic chosen from the filtered list. The panel is
//! the "selected topic"; closing it clears the selection.

use cpupedia_types::Topic;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::render_utils::{KeyHint, overlay_area, render_hints, render_panel, render_separator};
use super::OverlayUpdate;
use crate::common::wrap_text;
use crate::effects::UiEffect;
use crate::state::TuiState;

/// Widest the detail text column gets, regardless of terminal size.
const MAX_PANEL_WIDTH: u16 = 72;

#[derive(Debug)]
pub struct DetailState {
    pub topic: Topic,
    scroll: usize,
}

impl DetailState {
    pub fn open(topic: Topic) -> Self {
        Self { topic, scroll: 0 }
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc | KeyCode::Enter => OverlayUpdate::close(),
            KeyCode::Char('c') if !ctrl => {
                let text = format!("{}\n\n{}", self.topic.title, self.topic.long);
                OverlayUpdate::stay().with_effects(vec![UiEffect::CopyToClipboard { text }])
            }
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                OverlayUpdate::stay()
            }
            KeyCode::Down => {
                let width = panel_width(tui.viewport.0 as u16);
                let lines = wrap_text(&self.topic.long, text_width(width));
                if self.scroll + 1 < lines.len() {
                    self.scroll += 1;
                }
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, accent: Color) {
        let width = panel_width(area.width);
        let wrapped = wrap_text(&self.topic.long, text_width(width));

        // text + separator + refs + hints + borders
        let height = (wrapped.len() as u16 + 5).min(area.height.saturating_sub(2)).max(7);
        let panel = overlay_area(area, width, height);
        let inner = render_panel(frame, panel, &self.topic.title, accent);

        let text_height = inner.height.saturating_sub(3) as usize;
        let max_scroll = wrapped.len().saturating_sub(text_height);
        let offset = self.scroll.min(max_scroll);

        let visible: Vec<Line> = wrapped
            .iter()
            .skip(offset)
            .take(text_height)
            .map(|l| Line::from(l.clone()))
            .collect();
        let text_area = Rect::new(inner.x, inner.y, inner.width, text_height as u16);
        frame.render_widget(Paragraph::new(visible), text_area);

        render_separator(frame, inner, text_height as u16);

        let refs_row = Rect::new(
            inner.x,
            inner.y + text_height as u16 + 1,
            inner.width,
            1,
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "References: Example Source",
                Style::default().fg(Color::DarkGray),
            ))),
            refs_row,
        );

        render_hints(
            frame,
            inner,
            &[
                KeyHint::new("Esc", "close"),
                KeyHint::new("c", "copy"),
                KeyHint::new("↑↓", "scroll"),
            ],
            accent,
        );
    }
}

fn panel_width(area_width: u16) -> u16 {
    area_width.saturating_sub(4).min(MAX_PANEL_WIDTH).max(20)
}

/// Interior text width: panel minus borders and one cell of padding.
fn text_width(panel_width: u16) -> usize {
    panel_width.saturating_sub(4) as usize
}
