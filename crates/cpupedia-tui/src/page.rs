//! Scrollable page body: highlights, topics and timeline sections.
//!
//! The page is pre-rendered into styled lines once per frame; the renderer
//! slices the visible window out of it and the mouse handler maps click rows
//! back to topics through the recorded card positions.

use cpupedia_core::content::ContentStore;
use cpupedia_types::Topic;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::common::truncate_with_ellipsis;

/// Position of one topic card inside the page.
#[derive(Debug, Clone, Copy)]
pub struct TopicRow {
    /// First page line of the card.
    pub top: usize,
    /// Number of clickable lines (title + teaser).
    pub height: usize,
    /// Index into the filtered topic list.
    pub index: usize,
}

/// Pre-rendered page lines plus the section and card positions needed for
/// scrolling and mouse routing.
#[derive(Debug, Default)]
pub struct PageLayout {
    pub lines: Vec<Line<'static>>,
    pub topic_rows: Vec<TopicRow>,
    /// Line the topics section starts at (the call-to-action jump target).
    pub topics_at: usize,
    /// Line the timeline section starts at.
    pub timeline_at: usize,
}

impl PageLayout {
    /// Maps a page line back to the filtered-topic index of the card on it.
    pub fn topic_at_line(&self, line: usize) -> Option<usize> {
        self.topic_rows
            .iter()
            .find(|row| line >= row.top && line < row.top + row.height)
            .map(|row| row.index)
    }
}

/// Builds the page for the current query/cursor at the given width.
pub fn build_page(
    store: &ContentStore,
    filtered: &[&Topic],
    cursor: usize,
    accent: Color,
    width: usize,
) -> PageLayout {
    let mut page = PageLayout::default();

    build_highlights(&mut page, store, accent, width);

    page.topics_at = page.lines.len();
    build_topics(&mut page, store, filtered, cursor, accent, width);

    page.timeline_at = page.lines.len();
    build_timeline(&mut page, store, accent, width);

    page
}

fn build_highlights(page: &mut PageLayout, store: &ContentStore, accent: Color, width: usize) {
    for highlight in &store.highlights {
        page.lines.push(Line::from(vec![
            Span::styled(
                format!("[{}]", highlight.tag),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                truncate_with_ellipsis(&highlight.title, width.saturating_sub(highlight.tag.len() + 3)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        page.lines.push(dim_line(&highlight.desc, width, 2));
        page.lines.push(Line::default());
    }
}

fn build_topics(
    page: &mut PageLayout,
    store: &ContentStore,
    filtered: &[&Topic],
    cursor: usize,
    accent: Color,
    width: usize,
) {
    page.lines.push(section_header("Topics", accent));
    page.lines.push(Line::default());

    if filtered.is_empty() {
        let label = if store.topics.is_empty() {
            "  No topics"
        } else {
            "  No topics match"
        };
        page.lines.push(Line::from(Span::styled(
            label,
            Style::default().fg(Color::DarkGray),
        )));
        page.lines.push(Line::default());
        return;
    }

    for (index, topic) in filtered.iter().enumerate() {
        let top = page.lines.len();
        let is_cursor = index == cursor;

        let (marker, title_style) = if is_cursor {
            (
                "▶ ",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().add_modifier(Modifier::BOLD))
        };
        page.lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(accent)),
            Span::styled(
                truncate_with_ellipsis(&topic.title, width.saturating_sub(2)),
                title_style,
            ),
        ]));
        page.lines.push(dim_line(&topic.short, width, 4));
        page.lines.push(Line::default());

        page.topic_rows.push(TopicRow {
            top,
            height: 2,
            index,
        });
    }
}

fn build_timeline(page: &mut PageLayout, store: &ContentStore, accent: Color, width: usize) {
    if store.timeline.is_empty() {
        return;
    }

    page.lines.push(section_header("CPU Timeline", accent));
    page.lines.push(Line::default());

    for event in &store.timeline {
        page.lines.push(Line::from(vec![
            Span::styled(
                format!("  {:>4}  ", event.year),
                Style::default().fg(accent),
            ),
            Span::styled(
                truncate_with_ellipsis(&event.title, width.saturating_sub(8)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        page.lines.push(dim_line(&event.note, width, 8));
    }
}

fn section_header(title: &str, accent: Color) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

fn dim_line(text: &str, width: usize, indent: usize) -> Line<'static> {
    Line::from(vec![
        Span::raw(" ".repeat(indent)),
        Span::styled(
            truncate_with_ellipsis(text, width.saturating_sub(indent)),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}
