//! # Undo/Redo History
//!
//! Linear log of full editor snapshots with a pointer at the current one.
//!
//! ## Design
//!
//! - Index 0 is the state the session started (or was last loaded) with
//! - Recording an edit drops every entry after the current index, then
//!   appends and moves the pointer to the new last entry
//! - Undo/redo only move the pointer; at either end they do nothing
//! - Snapshots are reference-counted so cloned states share them
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = History::new(EditorState::default());
//! history.record(next_state);
//! assert!(history.undo());
//! assert!(history.redo());
//! ```

use crate::state::EditorState;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct History {
    /// Recorded snapshots (oldest first)
    snapshots: Vec<Arc<EditorState>>,

    /// Position of the current snapshot
    current_index: usize,

    /// Maximum number of snapshots kept (0 = unlimited)
    max_entries: usize,
}

impl History {
    /// Create a history holding only `initial`
    pub fn new(initial: EditorState) -> Self {
        Self::with_max_entries(initial, 0)
    }

    /// Create a history that keeps at most `max_entries` snapshots
    pub fn with_max_entries(initial: EditorState, max_entries: usize) -> Self {
        Self {
            snapshots: vec![Arc::new(initial)],
            current_index: 0,
            max_entries,
        }
    }

    /// Record a new snapshot, discarding any redo entries
    pub fn record(&mut self, snapshot: EditorState) {
        self.snapshots.truncate(self.current_index + 1);
        self.snapshots.push(Arc::new(snapshot));

        // Trim from the front if over the limit
        if self.max_entries > 0 && self.snapshots.len() > self.max_entries {
            let overflow = self.snapshots.len() - self.max_entries;
            self.snapshots.drain(..overflow);
        }

        self.current_index = self.snapshots.len() - 1;
    }

    /// Step back one snapshot. Returns false at the start of history.
    pub fn undo(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one snapshot. Returns false at the end of history.
    pub fn redo(&mut self) -> bool {
        if self.current_index + 1 < self.snapshots.len() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    /// Replace the whole log with a single snapshot
    pub fn reset(&mut self, snapshot: EditorState) {
        self.snapshots.clear();
        self.snapshots.push(Arc::new(snapshot));
        self.current_index = 0;
    }

    /// Snapshot at the current index
    pub fn current(&self) -> &EditorState {
        &self.snapshots[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true; the log always holds at least one snapshot
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current_index + 1 < self.snapshots.len()
    }

    pub fn snapshots(&self) -> impl Iterator<Item = &EditorState> {
        self.snapshots.iter().map(|s| s.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(page: &str) -> EditorState {
        EditorState {
            funnel_page_id: page.to_string(),
            ..EditorState::default()
        }
    }

    #[test]
    fn test_history_creation() {
        let history = History::new(EditorState::default());
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_index(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_advances_index() {
        let mut history = History::new(state("0"));
        history.record(state("1"));
        history.record(state("2"));

        assert_eq!(history.len(), 3);
        assert_eq!(history.current_index(), 2);
        assert_eq!(history.current().funnel_page_id, "2");
    }

    #[test]
    fn test_undo_redo_move_pointer() {
        let mut history = History::new(state("0"));
        history.record(state("1"));

        assert!(history.undo());
        assert_eq!(history.current().funnel_page_id, "0");
        assert!(history.can_redo());

        assert!(history.redo());
        assert_eq!(history.current().funnel_page_id, "1");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_boundaries_are_noops() {
        let mut history = History::new(state("0"));
        assert!(!history.undo());
        assert_eq!(history.current_index(), 0);

        history.record(state("1"));
        assert!(!history.redo());
        assert_eq!(history.current_index(), 1);
    }

    #[test]
    fn test_record_after_undo_truncates() {
        let mut history = History::new(state("0"));
        for page in ["1", "2", "3"] {
            history.record(state(page));
        }

        history.undo();
        history.undo();
        assert_eq!(history.current_index(), 1);

        history.record(state("branch"));
        assert_eq!(history.len(), 3);
        assert_eq!(history.current_index(), 2);
        assert!(!history.can_redo());

        let pages: Vec<_> = history.snapshots().map(|s| s.funnel_page_id.as_str()).collect();
        assert_eq!(pages, vec!["0", "1", "branch"]);
    }

    #[test]
    fn test_reset_leaves_single_entry() {
        let mut history = History::new(state("0"));
        history.record(state("1"));
        history.record(state("2"));

        history.reset(state("loaded"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_index(), 0);
        assert_eq!(history.current().funnel_page_id, "loaded");
    }

    #[test]
    fn test_max_entries_enforced() {
        let mut history = History::with_max_entries(state("0"), 2);
        for page in ["1", "2", "3"] {
            history.record(state(page));
        }

        assert_eq!(history.len(), 2);
        assert_eq!(history.current_index(), 1);
        assert_eq!(history.current().funnel_page_id, "3");

        assert!(history.undo());
        assert_eq!(history.current().funnel_page_id, "2");
        assert!(!history.undo());
    }
}
