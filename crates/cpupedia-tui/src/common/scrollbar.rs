//! Vertical scrollbar with a fixed-size thumb.
//!
//! The thumb length is computed once from the content/viewport ratio, so it
//! does not change size while scrolling, and the thumb touches the bottom of
//! the track exactly at maximum scroll.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

const THUMB: &str = "█";
const TRACK: &str = "│";

#[derive(Debug, Clone)]
pub struct Scrollbar {
    total_lines: usize,
    viewport_height: usize,
    offset: usize,
}

impl Scrollbar {
    pub fn new(total_lines: usize, viewport_height: usize, offset: usize) -> Self {
        Self {
            total_lines,
            viewport_height,
            offset,
        }
    }

    /// Hidden entirely when the content fits in the viewport.
    fn visible(&self) -> bool {
        self.total_lines > self.viewport_height
    }
}

impl Widget for Scrollbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.visible() || area.height == 0 {
            return;
        }

        let track_len = area.height as usize;
        let max_offset = self.total_lines - self.viewport_height;

        // Thumb length proportional to the visible fraction, at least one cell.
        let thumb_len = (track_len * self.viewport_height / self.total_lines).clamp(1, track_len);

        // Spread the remaining track over the scroll range.
        let slack = track_len - thumb_len;
        let thumb_top = (self.offset.min(max_offset) * slack + max_offset / 2) / max_offset.max(1);

        let x = area.x + area.width.saturating_sub(1);
        for step in 0..track_len {
            let symbol = if step >= thumb_top && step < thumb_top + thumb_len {
                THUMB
            } else {
                TRACK
            };
            buf.set_string(
                x,
                area.y + step as u16,
                symbol,
                Style::default().fg(Color::DarkGray),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_when_content_fits() {
        assert!(!Scrollbar::new(10, 20, 0).visible());
        assert!(!Scrollbar::new(20, 20, 0).visible());
    }

    #[test]
    fn visible_when_content_overflows() {
        assert!(Scrollbar::new(100, 20, 0).visible());
    }
}
