//! Transient per-session input buffers. Never persisted.

use metodika_model::{CategoryFilter, SortKey};

/// Search, filter, sort and draft inputs for the current session.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Free-text search box contents.
    pub search_query: String,
    /// Selected category button ("Все" by default).
    pub category: CategoryFilter,
    /// Selected sort dropdown entry.
    pub sort_key: SortKey,
    /// Draft text in the comment editor.
    pub comment_draft: String,
}
