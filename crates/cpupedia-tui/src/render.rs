//! Pure view functions.
//!
//! Everything here takes `&AppState`, draws to a ratatui frame and never
//! mutates state. The reducer keeps layout-affecting values (viewport size,
//! page lines, scroll offset) up to date via the per-loop `Frame` event, so
//! rendering is a straight read.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::common::{Scrollbar, truncate_with_ellipsis};
use crate::state::{AppState, TuiState};

/// Hero header rows (title, subtitle, call to action).
pub const HEADER_HEIGHT: u16 = 3;
/// Search input row.
pub const SEARCH_HEIGHT: u16 = 1;
/// Separator row under the search input.
pub const SEPARATOR_HEIGHT: u16 = 1;
/// Status line at the bottom.
pub const STATUS_HEIGHT: u16 = 1;
/// Horizontal body margin on each side.
pub const MARGIN: u16 = 1;
/// Column reserved for the scrollbar.
pub const SCROLLBAR_WIDTH: u16 = 1;

/// First terminal row of the scrollable body (used for mouse routing).
pub const BODY_TOP: u16 = HEADER_HEIGHT + SEARCH_HEIGHT + SEPARATOR_HEIGHT;

/// Body viewport (width, height) for a terminal of the given size.
pub fn body_size(width: u16, height: u16) -> (usize, usize) {
    let w = width.saturating_sub(MARGIN * 2 + SCROLLBAR_WIDTH);
    let h = height.saturating_sub(HEADER_HEIGHT + SEARCH_HEIGHT + SEPARATOR_HEIGHT + STATUS_HEIGHT);
    (w as usize, h as usize)
}

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_HEIGHT),
            Constraint::Length(SEPARATOR_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    render_header(state, frame, chunks[0]);
    render_search_line(state, frame, chunks[1]);
    render_separator(frame, chunks[2]);
    render_body(state, frame, chunks[3]);
    render_status_line(state, frame, chunks[4]);

    if let Some(overlay) = &app.overlay {
        overlay.render(frame, area, state);
    }
}

fn render_header(state: &TuiState, frame: &mut Frame, area: Rect) {
    let width = area.width.saturating_sub(MARGIN * 2) as usize;
    let lines = vec![
        Line::from(Span::styled(
            truncate_with_ellipsis(&state.store.hero.title, width),
            Style::default()
                .fg(state.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_with_ellipsis(&state.store.hero.subtitle, width),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled(
                format!("▸ {}", state.store.hero.cta),
                Style::default().fg(state.accent),
            ),
            Span::styled(" (Ctrl+E)", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    let inner = Rect::new(area.x + MARGIN, area.y, area.width.saturating_sub(MARGIN * 2), area.height);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_search_line(state: &TuiState, frame: &mut Frame, area: Rect) {
    let max_width = area.width.saturating_sub(MARGIN + 3) as usize;

    let mut spans = vec![Span::styled("> ", Style::default().fg(Color::DarkGray))];
    if state.search.is_empty() {
        spans.push(Span::styled("█", Style::default().fg(state.accent)));
        spans.push(Span::styled(
            "Search topics...",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            truncate_with_ellipsis(&state.search.query, max_width),
            Style::default().fg(state.accent),
        ));
        spans.push(Span::styled("█", Style::default().fg(state.accent)));
    }

    let inner = Rect::new(area.x + MARGIN, area.y, area.width.saturating_sub(MARGIN), area.height);
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}

fn render_body(state: &TuiState, frame: &mut Frame, area: Rect) {
    let viewport = area
        .height
        .min(u16::try_from(state.viewport.1).unwrap_or(u16::MAX)) as usize;
    let total = state.page.lines.len();
    let offset = state.scroll.offset.min(total.saturating_sub(viewport));

    let visible: Vec<Line> = state
        .page
        .lines
        .iter()
        .skip(offset)
        .take(viewport)
        .cloned()
        .collect();

    let body = Rect::new(
        area.x + MARGIN,
        area.y,
        area.width.saturating_sub(MARGIN * 2 + SCROLLBAR_WIDTH),
        area.height,
    );
    frame.render_widget(Paragraph::new(visible), body);

    frame.render_widget(Scrollbar::new(total, viewport, offset), area);
}

fn render_status_line(state: &TuiState, frame: &mut Frame, area: Rect) {
    let left = if let Some(flash) = &state.status {
        Span::styled(
            flash.message.clone(),
            Style::default().fg(state.accent),
        )
    } else {
        let count = state.filtered_topics().len();
        Span::styled(
            format!("{count} topic{}", if count == 1 { "" } else { "s" }),
            Style::default().fg(Color::DarkGray),
        )
    };

    let hints = "Enter read · Ctrl+E topics · Ctrl+T timeline · Ctrl+H help";
    let width = area.width.saturating_sub(MARGIN * 2) as usize;
    let left_width = left.content.width();

    let mut spans = vec![left];
    if left_width + 2 + hints.width() <= width {
        let padding = width - left_width - hints.width();
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    }

    let inner = Rect::new(area.x + MARGIN, area.y, area.width.saturating_sub(MARGIN * 2), area.height);
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}
