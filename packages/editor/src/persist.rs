//! # Saved Pages
//!
//! Helpers for the loader and saver that sit around a session. A page's
//! content is stored as the JSON array of its top-level elements:
//!
//! ```text
//! Load → decode_elements → LoadData → edit → encode_elements → Save
//! ```

use crate::action::EditorAction;
use crate::element::Element;
use crate::errors::EditorError;
use crate::tree;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parse and validate a saved element array
pub fn decode_elements(source: &str) -> Result<Vec<Element>, EditorError> {
    let elements: Vec<Element> = serde_json::from_str(source)?;
    tree::validate(&elements)?;
    Ok(elements)
}

/// Serialize elements in their saved form
pub fn encode_elements(elements: &[Element]) -> Result<String, EditorError> {
    Ok(serde_json::to_string(elements)?)
}

/// Read a saved element array from disk
pub fn load_elements(path: &Path) -> Result<Vec<Element>, EditorError> {
    let source = std::fs::read_to_string(path)?;
    decode_elements(&source)
}

/// Write elements to disk in their saved form
pub fn save_elements(path: &Path, elements: &[Element]) -> Result<(), EditorError> {
    let source = serde_json::to_string_pretty(elements)?;
    std::fs::write(path, source)?;
    Ok(())
}

/// Persisted page record, as handed over by the page store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelPage {
    pub id: String,

    #[serde(default)]
    pub funnel_id: String,

    pub name: String,

    #[serde(default)]
    pub path_name: String,

    /// Encoded elements; `None` for a page that was never edited
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub order: u32,

    #[serde(default)]
    pub visits: u64,
}

impl FunnelPage {
    /// `LoadData` that seeds a session with this page's tree
    pub fn load_action(&self, with_live: bool) -> Result<EditorAction, EditorError> {
        let elements = match &self.content {
            Some(content) => Some(decode_elements(content)?),
            None => None,
        };

        Ok(EditorAction::LoadData {
            elements,
            with_live,
        })
    }

    pub fn set_id_action(&self) -> EditorAction {
        EditorAction::SetFunnelPageId {
            funnel_page_id: self.id.clone(),
        }
    }

    /// Store `elements` as this page's content
    pub fn store_elements(&mut self, elements: &[Element]) -> Result<(), EditorError> {
        self.content = Some(encode_elements(elements)?);
        Ok(())
    }
}
