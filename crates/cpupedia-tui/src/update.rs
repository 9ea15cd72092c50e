//! The reducer: `update()` folds one `UiEvent` into `AppState` and returns
//! the effects the runtime must execute. No terminal I/O happens here, which
//! is what makes the whole interaction layer testable with plain key events.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use cpupedia_core::search::filter_topics;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::overlays::{DetailState, HelpState, Overlay, OverlayTransition};
use crate::page::build_page;
use crate::render;
use crate::state::{AppState, TuiState};

/// Lines scrolled per mouse wheel notch.
const WHEEL_STEP: usize = 3;

/// Applies one event to the state.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            if app.tui.status.as_ref().is_some_and(|f| f.expired()) {
                app.tui.status = None;
            }
            Vec::new()
        }
        UiEvent::Frame { width, height } => {
            refresh_layout(&mut app.tui, width, height);
            Vec::new()
        }
        UiEvent::Terminal(event) => handle_terminal_event(app, event),
        UiEvent::ClipboardCopied => {
            app.tui.flash("Copied to clipboard");
            Vec::new()
        }
        UiEvent::ClipboardFailed { error } => {
            tracing::warn!(error, "clipboard copy failed");
            app.tui.flash("Clipboard unavailable");
            Vec::new()
        }
    }
}

/// Recomputes the derived layout for the current terminal size: viewport,
/// clamped cursor, pre-rendered page and clamped scroll, in that order.
fn refresh_layout(tui: &mut TuiState, width: u16, height: u16) {
    tui.viewport = render::body_size(width, height);

    let filtered = filter_topics(&tui.search.query, &tui.store.topics);
    tui.browse.clamp(filtered.len());
    tui.page = build_page(
        &tui.store,
        &filtered,
        tui.browse.cursor,
        tui.accent,
        tui.viewport.0,
    );
    tui.scroll.clamp(tui.page.lines.len(), tui.viewport.1);
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Mouse(mouse) => {
            handle_mouse(app, mouse);
            Vec::new()
        }
        // Resizes are picked up by the next Frame event.
        _ => Vec::new(),
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Quit works everywhere, even under an overlay.
    if ctrl && matches!(key.code, KeyCode::Char('c' | 'q')) {
        app.tui.should_quit = true;
        return Vec::new();
    }

    if let Some(overlay) = &mut app.overlay {
        let update = overlay.handle_key(&app.tui, key);
        if matches!(update.transition, OverlayTransition::Close) {
            app.overlay = None;
        }
        return update.effects;
    }

    handle_main_key(app, key)
}

fn handle_main_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let tui = &mut app.tui;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('h') if ctrl => {
            app.overlay = Some(Overlay::Help(HelpState));
        }
        KeyCode::Char('u') if ctrl => {
            tui.search.clear();
            reclamp_cursor(tui);
        }
        KeyCode::Char('e') if ctrl => {
            let target = tui.page.topics_at;
            tui.scroll.scroll_to(target, tui.page.lines.len(), tui.viewport.1);
        }
        KeyCode::Char('t') if ctrl => {
            let target = tui.page.timeline_at;
            tui.scroll.scroll_to(target, tui.page.lines.len(), tui.viewport.1);
        }
        KeyCode::Char(c) if !ctrl && !alt => {
            tui.search.push_char(c);
            reclamp_cursor(tui);
        }
        KeyCode::Backspace if alt => {
            tui.search.delete_word_back();
            reclamp_cursor(tui);
        }
        KeyCode::Backspace => {
            tui.search.backspace();
            reclamp_cursor(tui);
        }
        KeyCode::Up => {
            tui.browse.move_up();
            scroll_cursor_into_view(tui);
        }
        KeyCode::Down => {
            let len = filter_topics(&tui.search.query, &tui.store.topics).len();
            tui.browse.move_down(len);
            scroll_cursor_into_view(tui);
        }
        KeyCode::Enter => {
            if let Some(topic) = tui.cursor_topic().cloned() {
                app.overlay = Some(Overlay::Detail(DetailState::open(topic)));
            }
        }
        KeyCode::Esc => {
            if tui.search.is_empty() {
                tui.should_quit = true;
            } else {
                tui.search.clear();
                reclamp_cursor(tui);
            }
        }
        KeyCode::PageUp => tui.scroll.scroll_up(tui.viewport.1),
        KeyCode::PageDown => {
            tui.scroll
                .scroll_down(tui.viewport.1, tui.page.lines.len(), tui.viewport.1);
        }
        KeyCode::Home => tui.scroll.scroll_to(0, tui.page.lines.len(), tui.viewport.1),
        KeyCode::End => {
            let total = tui.page.lines.len();
            tui.scroll.scroll_to(total, total, tui.viewport.1);
        }
        _ => {}
    }

    Vec::new()
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    let tui = &mut app.tui;
    match mouse.kind {
        MouseEventKind::ScrollUp => tui.scroll.scroll_up(WHEEL_STEP),
        MouseEventKind::ScrollDown => {
            tui.scroll
                .scroll_down(WHEEL_STEP, tui.page.lines.len(), tui.viewport.1);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            // Body clicks are inert while a modal panel is up.
            if app.overlay.is_some() {
                return;
            }
            let viewport = u16::try_from(tui.viewport.1).unwrap_or(u16::MAX);
            if mouse.row < render::BODY_TOP
                || mouse.row >= render::BODY_TOP.saturating_add(viewport)
            {
                return;
            }
            let line = tui.scroll.offset + (mouse.row - render::BODY_TOP) as usize;
            if let Some(index) = tui.page.topic_at_line(line) {
                tui.browse.cursor = index;
                // A click both selects the card and opens it, like Enter.
                if let Some(topic) = tui.cursor_topic().cloned() {
                    app.overlay = Some(Overlay::Detail(DetailState::open(topic)));
                }
            }
        }
        _ => {}
    }
}

fn reclamp_cursor(tui: &mut TuiState) {
    let len = filter_topics(&tui.search.query, &tui.store.topics).len();
    tui.browse.clamp(len);
}

/// Scrolls just enough to keep the cursor card inside the viewport.
fn scroll_cursor_into_view(tui: &mut TuiState) {
    let Some(row) = tui.page.topic_rows.get(tui.browse.cursor).copied() else {
        return;
    };
    let viewport = tui.viewport.1;
    if row.top < tui.scroll.offset {
        tui.scroll.offset = row.top;
    } else if viewport > 0 && row.top + row.height > tui.scroll.offset + viewport {
        tui.scroll.offset = row.top + row.height - viewport;
    }
}

#[cfg(test)]
mod tests {
    use cpupedia_core::config::Config;
    use cpupedia_core::content::ContentStore;

    use super::*;

    fn app() -> AppState {
        let mut app = AppState::new(&Config::default(), ContentStore::builtin());
        // Simulate one loop iteration on an 80x24 terminal.
        update(&mut app, UiEvent::Frame { width: 80, height: 24 });
        app
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        press_mod(app, code, KeyModifiers::NONE)
    }

    fn press_mod(app: &mut AppState, code: KeyCode, modifiers: KeyModifiers) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, modifiers))),
        )
    }

    fn type_str(app: &mut AppState, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_filters_the_topic_list() {
        let mut app = app();
        assert_eq!(app.tui.filtered_topics().len(), 2);

        type_str(&mut app, "open");
        let filtered = app.tui.filtered_topics();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "riscv");
    }

    #[test]
    fn no_match_query_leaves_list_empty_without_quitting() {
        let mut app = app();
        type_str(&mut app, "zzz-no-match");
        assert!(app.tui.filtered_topics().is_empty());
        assert!(!app.tui.should_quit);
    }

    #[test]
    fn enter_opens_detail_and_esc_closes_it() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.overlay, Some(Overlay::Detail(_))));

        press(&mut app, KeyCode::Esc);
        assert!(app.overlay.is_none());
        // Esc was consumed by the overlay, not the main view.
        assert!(!app.tui.should_quit);
    }

    #[test]
    fn enter_on_empty_list_opens_nothing() {
        let mut app = app();
        type_str(&mut app, "zzz-no-match");
        press(&mut app, KeyCode::Enter);
        assert!(app.overlay.is_none());
    }

    #[test]
    fn esc_clears_query_before_quitting() {
        let mut app = app();
        type_str(&mut app, "risc");

        press(&mut app, KeyCode::Esc);
        assert!(app.tui.search.is_empty());
        assert!(!app.tui.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.tui.should_quit);
    }

    #[test]
    fn ctrl_c_quits_even_with_overlay_open() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press_mod(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.tui.should_quit);
    }

    #[test]
    fn cursor_clamps_when_the_filter_narrows() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        assert_eq!(app.tui.browse.cursor, 1);

        // Only "What is a CPU?" matches; the cursor must follow the list.
        type_str(&mut app, "arithmetic");
        assert_eq!(app.tui.filtered_topics().len(), 1);
        assert_eq!(app.tui.browse.cursor, 0);
    }

    #[test]
    fn copy_key_in_detail_emits_clipboard_effect() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);

        let effects = press(&mut app, KeyCode::Char('c'));
        assert_eq!(effects.len(), 1);
        let UiEffect::CopyToClipboard { text } = &effects[0];
        assert!(text.starts_with("What is a CPU?"));
    }

    #[test]
    fn clipboard_result_sets_a_status_flash() {
        let mut app = app();
        update(&mut app, UiEvent::ClipboardCopied);
        assert_eq!(
            app.tui.status.as_ref().map(|f| f.message.as_str()),
            Some("Copied to clipboard")
        );
    }

    #[test]
    fn typing_while_detail_open_does_not_edit_the_query() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('x'));
        assert!(app.tui.search.is_empty());
    }

    #[test]
    fn ctrl_t_jumps_to_the_timeline() {
        let mut app = app();
        assert_eq!(app.tui.scroll.offset, 0);
        press_mod(&mut app, KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert!(app.tui.scroll.offset > 0);
        assert!(app.tui.scroll.offset <= app.tui.page.timeline_at);
    }

    fn click_at(app: &mut AppState, row: u16) {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row,
            modifiers: KeyModifiers::NONE,
        };
        update(app, UiEvent::Terminal(Event::Mouse(click)));
    }

    #[test]
    fn click_on_a_topic_card_opens_its_detail() {
        let mut app = app();
        let second = app.tui.page.topic_rows[1];

        click_at(&mut app, render::BODY_TOP + u16::try_from(second.top).unwrap());
        assert_eq!(app.tui.browse.cursor, 1);
        match &app.overlay {
            Some(Overlay::Detail(detail)) => assert_eq!(detail.topic.id, "riscv"),
            other => panic!("expected detail overlay, got {other:?}"),
        }
    }

    #[test]
    fn click_on_a_blank_line_opens_nothing() {
        let mut app = app();
        let second = app.tui.page.topic_rows[1];
        let blank = second.top + second.height;

        click_at(&mut app, render::BODY_TOP + u16::try_from(blank).unwrap());
        assert_eq!(app.tui.browse.cursor, 0);
        assert!(app.overlay.is_none());
    }

    #[test]
    fn click_below_the_body_is_ignored() {
        let mut app = app();
        // Short terminal: viewport is 6 rows, status line sits right below.
        update(&mut app, UiEvent::Frame { width: 80, height: 12 });
        // Scroll so the second card is the first line past the viewport.
        let second = app.tui.page.topic_rows[1];
        app.tui.scroll.offset = second.top - app.tui.viewport.1;

        let status_row = render::BODY_TOP + u16::try_from(app.tui.viewport.1).unwrap();
        click_at(&mut app, status_row);
        assert_eq!(app.tui.browse.cursor, 0);
        assert!(app.overlay.is_none());
    }

    #[test]
    fn click_behind_an_open_panel_is_ignored() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);

        let second = app.tui.page.topic_rows[1];
        click_at(&mut app, render::BODY_TOP + u16::try_from(second.top).unwrap());
        assert_eq!(app.tui.browse.cursor, 0);
        match &app.overlay {
            Some(Overlay::Detail(detail)) => assert_eq!(detail.topic.id, "cpu-def"),
            other => panic!("expected detail overlay, got {other:?}"),
        }
    }

    #[test]
    fn help_overlay_toggles_with_ctrl_h() {
        let mut app = app();
        press_mod(&mut app, KeyCode::Char('h'), KeyModifiers::CONTROL);
        assert!(matches!(app.overlay, Some(Overlay::Help(_))));
        press_mod(&mut app, KeyCode::Char('h'), KeyModifiers::CONTROL);
        assert!(app.overlay.is_none());
    }
}
