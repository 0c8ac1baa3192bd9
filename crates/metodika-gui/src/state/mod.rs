//! Application state management
//!
//! Contains all runtime state types for the GUI application.

mod selection;
mod session;

pub use selection::Selection;
pub use session::SessionState;

/// Top-level application state: the selection state machine plus the
/// session input buffers.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub selection: Selection,
    pub session: SessionState,
}
