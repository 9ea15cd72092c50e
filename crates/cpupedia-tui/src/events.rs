//! UI event types consumed by the reducer.

/// Events fed to `update()` by the runtime.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick, emitted once per loop iteration after input events.
    /// Drives time-based state like status flash expiry.
    Tick,
    /// Emitted once per loop iteration with the current terminal size, before
    /// other events, so layout state is fresh when they are handled.
    Frame { width: u16, height: u16 },
    /// Raw terminal input (keys, mouse, resize).
    Terminal(crossterm::event::Event),
    /// A clipboard copy effect finished successfully.
    ClipboardCopied,
    /// A clipboard copy effect failed.
    ClipboardFailed { error: String },
}
