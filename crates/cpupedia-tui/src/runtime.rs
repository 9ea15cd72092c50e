//! The event loop.
//!
//! Owns the terminal and the state, and wires the three pure pieces
//! together: collect events, fold them through `update()`, execute the
//! returned effects, draw. Effect results are fed back into the inbox as
//! events so the reducer sees them on the next iteration.

use std::collections::VecDeque;
use std::io::Stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use cpupedia_core::config::Config;
use cpupedia_core::content::ContentStore;
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::render;
use crate::state::AppState;
use crate::terminal::{enable_mouse_capture, install_panic_hook, restore_terminal, setup_terminal};
use crate::update::update;

/// Poll timeout once the UI has been idle for a while. Keeps an idle app
/// from spinning at the frame rate.
const IDLE_POLL: Duration = Duration::from_millis(250);
/// Consecutive input-free iterations before switching to the idle poll.
const IDLE_AFTER: u32 = 60;

pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    app: AppState,
    inbox: VecDeque<UiEvent>,
    tick_rate: Duration,
    idle_frames: u32,
}

impl TuiRuntime {
    pub fn new(config: &Config, store: ContentStore) -> Result<Self> {
        install_panic_hook();
        let terminal = setup_terminal()?;
        if config.mouse {
            enable_mouse_capture()?;
        }

        Ok(Self {
            terminal,
            app: AppState::new(config, store),
            inbox: VecDeque::new(),
            tick_rate: Duration::from_millis(config.tick_rate_ms.max(1)),
            idle_frames: 0,
        })
    }

    /// Runs the loop until the reducer sets the quit flag.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("tui started");

        while !self.app.tui.should_quit {
            let size = self.terminal.size().context("Failed to read terminal size")?;
            self.inbox.push_back(UiEvent::Frame {
                width: size.width,
                height: size.height,
            });

            self.collect_terminal_events()?;
            self.inbox.push_back(UiEvent::Tick);
            self.drain_inbox();

            let app = &self.app;
            self.terminal
                .draw(|frame| render::render(app, frame))
                .context("Failed to draw frame")?;
        }

        tracing::info!("tui exiting");
        Ok(())
    }

    /// Blocks up to one tick for input, then drains whatever else is pending
    /// so a paste or a fast scroll is applied in a single frame.
    fn collect_terminal_events(&mut self) -> Result<()> {
        let timeout = if self.idle_frames >= IDLE_AFTER {
            IDLE_POLL
        } else {
            self.tick_rate
        };

        let mut saw_input = false;
        if event::poll(timeout).context("Failed to poll terminal events")? {
            loop {
                let ev = event::read().context("Failed to read terminal event")?;
                self.inbox.push_back(UiEvent::Terminal(ev));
                saw_input = true;
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if saw_input {
            self.idle_frames = 0;
        } else {
            self.idle_frames = self.idle_frames.saturating_add(1);
        }
        Ok(())
    }

    fn drain_inbox(&mut self) {
        while let Some(event) = self.inbox.pop_front() {
            let effects = update(&mut self.app, event);
            for effect in effects {
                self.execute_effect(effect);
            }
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::CopyToClipboard { text } => {
                let result = arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text));
                let event = match result {
                    Ok(()) => UiEvent::ClipboardCopied,
                    Err(err) => UiEvent::ClipboardFailed {
                        error: err.to_string(),
                    },
                };
                self.inbox.push_back(event);
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        if let Err(err) = restore_terminal() {
            tracing::error!(error = %err, "failed to restore terminal");
        }
    }
}
