use serde::{Deserialize, Serialize};

/// What happens to the selection when an element other than the
/// selected one is updated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionPolicy {
    /// Clear the selection (compatible with existing builder UIs)
    #[default]
    ResetOnUnrelatedUpdate,

    /// Keep the current selection
    Preserve,
}

/// Editor session options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Maximum number of history snapshots (0 = unlimited)
    #[serde(default)]
    pub max_history: usize,

    /// Record a snapshot even when a structural edit matched nothing
    #[serde(default = "default_record_noop_edits")]
    pub record_noop_edits: bool,

    #[serde(default)]
    pub selection_policy: SelectionPolicy,
}

fn default_record_noop_edits() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_history: 0,
            record_noop_edits: default_record_noop_edits(),
            selection_policy: SelectionPolicy::default(),
        }
    }
}
