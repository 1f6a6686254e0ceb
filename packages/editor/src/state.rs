//! # Editor State
//!
//! [`EditorState`] is one snapshot of a session: the tree, the selection,
//! the viewport flags and the page identity. [`BuilderState`] pairs the
//! live snapshot with its [`History`] and is advanced one
//! [`EditorAction`] at a time.
//!
//! ## Transitions
//!
//! ```text
//! AddElement / UpdateElement / DeleteElement  → edit tree, record
//! ChangeClickedElement / SetFunnelPageId      → edit state, record
//! ChangeDevice / TogglePreviewMode / ...Live  → edit state only
//! LoadData                                    → fresh state, history reset
//! Undo / Redo                                 → move pointer, restore
//! ```
//!
//! The root is never removed or turned into anything but a body
//! container: such deletes and updates are logged and left unmatched.
//!
//! Undo and redo restore the document-facing fields of a snapshot
//! (elements, selection, page id) and keep the current viewport fields,
//! so device and mode changes are never reverted.

use crate::action::EditorAction;
use crate::config::{EditorConfig, SelectionPolicy};
use crate::element::{Device, Element, ROOT_ID};
use crate::history::History;
use crate::tree::{self, TreeEdit};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Snapshot of one editing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    /// Top-level elements, starting with the root
    pub elements: Vec<Element>,

    /// Active element, or [`Element::empty`] when nothing is selected
    pub selected_element: Element,

    pub device: Device,

    /// Editing affordances hidden
    pub preview_mode: bool,

    /// Rendered as the published page
    pub live_mode: bool,

    /// Persisted page this session edits (empty until set)
    pub funnel_page_id: String,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            elements: vec![Element::root()],
            selected_element: Element::empty(),
            device: Device::Desktop,
            preview_mode: false,
            live_mode: false,
            funnel_page_id: String::new(),
        }
    }
}

impl EditorState {
    /// Id of the selected element, if any
    pub fn selected_id(&self) -> Option<&str> {
        if self.selected_element.is_empty() {
            None
        } else {
            Some(&self.selected_element.id)
        }
    }

    /// Take the recorded fields from `snapshot`, keep the viewport
    fn restore(&mut self, snapshot: &EditorState) {
        self.elements = snapshot.elements.clone();
        self.selected_element = snapshot.selected_element.clone();
        self.funnel_page_id = snapshot.funnel_page_id.clone();
    }
}

/// Live editor state plus its undo/redo history
#[derive(Debug, Clone, PartialEq)]
pub struct BuilderState {
    pub editor: EditorState,
    pub history: History,
    config: EditorConfig,
}

impl BuilderState {
    /// Initial state: root only, nothing selected, single history entry
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let editor = EditorState::default();
        let history = History::with_max_entries(editor.clone(), config.max_history);
        Self {
            editor,
            history,
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Apply one action in place
    pub fn apply(&mut self, action: EditorAction) {
        let name = action.name();

        match action {
            EditorAction::AddElement {
                container_id,
                element,
            } => {
                let edit = tree::insert(&self.editor.elements, &container_id, &element);
                if !edit.matched {
                    warn!(container_id = %container_id, element_id = %element.id, "No container matched; element not added");
                }
                self.commit(edit);
            }

            EditorAction::UpdateElement { element } => {
                if element.id == ROOT_ID && !(element.is_root() && element.is_container()) {
                    warn!(element_id = %element.id, "Root must stay a body container; update rejected");
                    let edit = self.unchanged();
                    self.commit(edit);
                    return;
                }

                let edit = tree::update(&self.editor.elements, &element);
                if !edit.matched {
                    warn!(element_id = %element.id, "No element matched update");
                }
                if !edit.matched && !self.config.record_noop_edits {
                    return;
                }

                if self.editor.selected_element.id == element.id {
                    self.editor.selected_element = element;
                } else if self.config.selection_policy == SelectionPolicy::ResetOnUnrelatedUpdate {
                    self.editor.selected_element = Element::empty();
                }
                self.commit(edit);
            }

            EditorAction::DeleteElement { element } => {
                if element.id == ROOT_ID {
                    warn!(element_id = %element.id, "Root cannot be deleted");
                    let edit = self.unchanged();
                    self.commit(edit);
                    return;
                }

                let edit = tree::remove(&self.editor.elements, &element.id);
                if !edit.matched {
                    warn!(element_id = %element.id, "No element matched delete");
                }
                self.commit(edit);
            }

            EditorAction::ChangeClickedElement { element } => {
                self.editor.selected_element = element.unwrap_or_else(Element::empty);
                self.record();
            }

            EditorAction::ChangeDevice { device } => {
                self.editor.device = device;
            }

            EditorAction::TogglePreviewMode => {
                self.editor.preview_mode = !self.editor.preview_mode;
            }

            EditorAction::ToggleLiveMode { value } => {
                self.editor.live_mode = value.unwrap_or(!self.editor.live_mode);
            }

            EditorAction::LoadData {
                elements,
                with_live,
            } => {
                self.editor = EditorState {
                    elements: elements.unwrap_or_else(|| vec![Element::root()]),
                    live_mode: with_live,
                    ..EditorState::default()
                };
                self.history.reset(self.editor.clone());
            }

            EditorAction::SetFunnelPageId { funnel_page_id } => {
                self.editor.funnel_page_id = funnel_page_id;
                self.record();
            }

            EditorAction::Undo => {
                if self.history.undo() {
                    self.editor.restore(self.history.current());
                }
            }

            EditorAction::Redo => {
                if self.history.redo() {
                    self.editor.restore(self.history.current());
                }
            }
        }

        debug!(
            action = name,
            history_len = self.history.len(),
            current_index = self.history.current_index(),
            "Applied editor action"
        );
    }

    /// Install a structural edit, honouring `record_noop_edits`
    fn commit(&mut self, edit: TreeEdit) {
        if !edit.matched && !self.config.record_noop_edits {
            return;
        }
        self.editor.elements = edit.elements;
        self.record();
    }

    /// Unmatched edit over the current tree
    fn unchanged(&self) -> TreeEdit {
        TreeEdit {
            elements: self.editor.elements.clone(),
            matched: false,
        }
    }

    fn record(&mut self) {
        self.history.record(self.editor.clone());
    }
}

impl Default for BuilderState {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure transition: `(state, action) -> state'`
pub fn reduce(state: &BuilderState, action: EditorAction) -> BuilderState {
    let mut next = state.clone();
    next.apply(action);
    next
}
