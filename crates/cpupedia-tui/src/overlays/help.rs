//! Key binding reference panel.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::render_utils::{KeyHint, overlay_area, render_hints, render_panel};
use super::OverlayUpdate;
use crate::state::TuiState;

const BINDINGS: &[(&str, &str)] = &[
    ("type", "filter topics"),
    ("↑ / ↓", "move topic cursor"),
    ("Enter / click", "open topic detail"),
    ("c", "copy topic text (in detail)"),
    ("Esc", "close panel / clear search / quit"),
    ("Backspace", "delete (Alt: word)"),
    ("Ctrl+U", "clear search"),
    ("Ctrl+E", "jump to topics"),
    ("Ctrl+T", "jump to timeline"),
    ("PgUp / PgDn / Home / End", "scroll page"),
    ("Ctrl+H", "toggle this help"),
    ("Ctrl+C / Ctrl+Q", "quit"),
];

#[derive(Debug, Default)]
pub struct HelpState;

impl HelpState {
    pub fn handle_key(&mut self, _tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc | KeyCode::Enter => OverlayUpdate::close(),
            KeyCode::Char('h') if ctrl => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, accent: Color) {
        let key_col = BINDINGS
            .iter()
            .map(|(key, _)| key.chars().count())
            .max()
            .unwrap_or(0);

        let height = (BINDINGS.len() as u16 + 3).min(area.height.saturating_sub(2));
        let panel = overlay_area(area, 48, height);
        let inner = render_panel(frame, panel, "Key Bindings", accent);

        let rows: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(format!(" {key:>key_col$}  "), Style::default().fg(accent)),
                    Span::styled(*action, Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect();

        let body = Rect::new(
            inner.x,
            inner.y,
            inner.width,
            inner.height.saturating_sub(1),
        );
        frame.render_widget(Paragraph::new(rows), body);

        render_hints(frame, inner, &[KeyHint::new("Esc", "close")], accent);
    }
}
