//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O itself. Quitting is a state flag, not an effect, so the
//! only effect left in this application is the clipboard write.

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Copy text to the system clipboard. Completion arrives back in the
    /// reducer as `UiEvent::ClipboardCopied` / `ClipboardFailed`.
    CopyToClipboard { text: String },
}
