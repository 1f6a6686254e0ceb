//! # Editor Actions
//!
//! Every change to a session is described by one [`EditorAction`].
//!
//! ## Recording
//!
//! Structural edits, selection changes and page id changes are recorded
//! into history and can be undone. Viewport changes (device, preview,
//! live) are applied without a snapshot. `LoadData` replaces history
//! instead of appending to it.

use crate::element::{Device, Element, ElementId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum EditorAction {
    /// Append `element` to the container `container_id`
    AddElement {
        container_id: ElementId,
        element: Element,
    },

    /// Replace the element with the same id
    UpdateElement { element: Element },

    /// Remove the element with the same id and its descendants
    DeleteElement { element: Element },

    /// Select an element, or clear the selection with `None`
    ChangeClickedElement {
        #[serde(default)]
        element: Option<Element>,
    },

    ChangeDevice { device: Device },

    TogglePreviewMode,

    /// Set live mode to `value`, or flip it when absent
    ToggleLiveMode {
        #[serde(default)]
        value: Option<bool>,
    },

    /// Start over from a saved tree (or the default one)
    LoadData {
        #[serde(default)]
        elements: Option<Vec<Element>>,
        #[serde(default)]
        with_live: bool,
    },

    SetFunnelPageId { funnel_page_id: String },

    Undo,

    Redo,
}

impl EditorAction {
    /// Whether applying this action appends a history snapshot
    pub fn records_history(&self) -> bool {
        matches!(
            self,
            EditorAction::AddElement { .. }
                | EditorAction::UpdateElement { .. }
                | EditorAction::DeleteElement { .. }
                | EditorAction::ChangeClickedElement { .. }
                | EditorAction::SetFunnelPageId { .. }
        )
    }

    /// Stable label for logs
    pub fn name(&self) -> &'static str {
        match self {
            EditorAction::AddElement { .. } => "AddElement",
            EditorAction::UpdateElement { .. } => "UpdateElement",
            EditorAction::DeleteElement { .. } => "DeleteElement",
            EditorAction::ChangeClickedElement { .. } => "ChangeClickedElement",
            EditorAction::ChangeDevice { .. } => "ChangeDevice",
            EditorAction::TogglePreviewMode => "TogglePreviewMode",
            EditorAction::ToggleLiveMode { .. } => "ToggleLiveMode",
            EditorAction::LoadData { .. } => "LoadData",
            EditorAction::SetFunnelPageId { .. } => "SetFunnelPageId",
            EditorAction::Undo => "Undo",
            EditorAction::Redo => "Redo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_serialization() {
        let action = EditorAction::AddElement {
            container_id: "__body".to_string(),
            element: Element::root(),
        };

        let json = serde_json::to_string(&action).unwrap();
        let deserialized: EditorAction = serde_json::from_str(&json).unwrap();

        assert_eq!(action, deserialized);
    }

    #[test]
    fn test_action_wire_format() {
        let action: EditorAction = serde_json::from_value(json!({
            "type": "SetFunnelPageId",
            "funnelPageId": "page-1"
        }))
        .unwrap();
        assert_eq!(
            action,
            EditorAction::SetFunnelPageId {
                funnel_page_id: "page-1".to_string()
            }
        );

        let action: EditorAction = serde_json::from_value(json!({ "type": "Undo" })).unwrap();
        assert_eq!(action, EditorAction::Undo);

        let action: EditorAction =
            serde_json::from_value(json!({ "type": "ChangeDevice", "device": "Mobile" })).unwrap();
        assert_eq!(action, EditorAction::ChangeDevice { device: Device::Mobile });
    }

    #[test]
    fn test_optional_payloads_default() {
        let action: EditorAction =
            serde_json::from_value(json!({ "type": "LoadData" })).unwrap();
        assert_eq!(
            action,
            EditorAction::LoadData {
                elements: None,
                with_live: false
            }
        );

        let action: EditorAction =
            serde_json::from_value(json!({ "type": "ToggleLiveMode" })).unwrap();
        assert_eq!(action, EditorAction::ToggleLiveMode { value: None });
    }

    #[test]
    fn test_recording_classification() {
        assert!(EditorAction::SetFunnelPageId {
            funnel_page_id: "p".to_string()
        }
        .records_history());
        assert!(EditorAction::ChangeClickedElement { element: None }.records_history());
        assert!(!EditorAction::TogglePreviewMode.records_history());
        assert!(!EditorAction::ChangeDevice {
            device: Device::Tablet
        }
        .records_history());
        assert!(!EditorAction::Undo.records_history());
        assert!(!EditorAction::LoadData {
            elements: None,
            with_live: true
        }
        .records_history());
    }
}
