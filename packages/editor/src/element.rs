//! # Element Tree Model
//!
//! The page is a tree of [`Element`]s. Every node is either a container
//! (owns an ordered list of children) or a leaf (owns an opaque payload
//! such as a link target or media URL). Children are owned by their parent;
//! there are no back-pointers.
//!
//! ## Wire shape
//!
//! ```text
//! { "id": "__body", "type": "__body", "name": "Body",
//!   "styles": { "backgroundColor": "white" },
//!   "content": [ ...children... ] }          ← container
//!
//! { "id": "btn1", "type": "link", "name": "Link",
//!   "styles": {},
//!   "content": { "innerText": "Click", "href": "#" } }   ← leaf
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier supplied by the caller when an element is created
pub type ElementId = String;

/// Opaque presentation properties (never interpreted by the editor)
pub type Styles = BTreeMap<String, serde_json::Value>;

/// Opaque type-specific fields of a leaf element
pub type LeafPayload = BTreeMap<String, serde_json::Value>;

/// Id and tag of the single root element
pub const ROOT_ID: &str = "__body";

/// Builder primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    #[serde(rename = "__body")]
    Body,
    #[serde(rename = "container")]
    Container,
    #[serde(rename = "section")]
    Section,
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "link")]
    Link,
    #[serde(rename = "button")]
    Button,
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "video")]
    Video,
    #[serde(rename = "2Col")]
    TwoColumns,
    #[serde(rename = "3Col")]
    ThreeColumns,
    #[serde(rename = "contactForm")]
    ContactForm,
    #[serde(rename = "paymentForm")]
    PaymentForm,
}

impl ElementKind {
    /// Wire name of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Body => "__body",
            ElementKind::Container => "container",
            ElementKind::Section => "section",
            ElementKind::Text => "text",
            ElementKind::Link => "link",
            ElementKind::Button => "button",
            ElementKind::Image => "image",
            ElementKind::Video => "video",
            ElementKind::TwoColumns => "2Col",
            ElementKind::ThreeColumns => "3Col",
            ElementKind::ContactForm => "contactForm",
            ElementKind::PaymentForm => "paymentForm",
        }
    }
}

/// Either child elements or a leaf payload.
///
/// Untagged on the wire: an array is children, an object is a leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Children(Vec<Element>),
    Leaf(LeafPayload),
}

impl Default for Content {
    fn default() -> Self {
        Content::Children(Vec::new())
    }
}

/// A node in the page tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,

    /// `None` is the null tag used by the "nothing selected" sentinel
    #[serde(rename = "type")]
    pub kind: Option<ElementKind>,

    pub name: String,

    #[serde(default)]
    pub styles: Styles,

    #[serde(default)]
    pub content: Content,
}

impl Element {
    /// Create an empty container
    pub fn container(id: impl Into<ElementId>, kind: ElementKind, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: Some(kind),
            name: name.into(),
            styles: Styles::new(),
            content: Content::Children(Vec::new()),
        }
    }

    /// Create a leaf with the given payload
    pub fn leaf(
        id: impl Into<ElementId>,
        kind: ElementKind,
        name: impl Into<String>,
        payload: LeafPayload,
    ) -> Self {
        Self {
            id: id.into(),
            kind: Some(kind),
            name: name.into(),
            styles: Styles::new(),
            content: Content::Leaf(payload),
        }
    }

    /// The page body every session starts with
    pub fn root() -> Self {
        let mut styles = Styles::new();
        styles.insert("backgroundColor".to_string(), "white".into());

        Self {
            id: ROOT_ID.to_string(),
            kind: Some(ElementKind::Body),
            name: "Body".to_string(),
            styles,
            content: Content::Children(Vec::new()),
        }
    }

    /// The "nothing selected" sentinel
    pub fn empty() -> Self {
        Self {
            id: String::new(),
            kind: None,
            name: String::new(),
            styles: Styles::new(),
            content: Content::Children(Vec::new()),
        }
    }

    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.content = Content::Children(children);
        self
    }

    /// True for the selection sentinel
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.kind.is_none()
    }

    pub fn is_root(&self) -> bool {
        self.kind == Some(ElementKind::Body)
    }

    pub fn is_container(&self) -> bool {
        matches!(self.content, Content::Children(_))
    }

    /// Child elements, or `None` for a leaf
    pub fn children(&self) -> Option<&[Element]> {
        match &self.content {
            Content::Children(children) => Some(children),
            Content::Leaf(_) => None,
        }
    }

    /// Leaf payload, or `None` for a container
    pub fn payload(&self) -> Option<&LeafPayload> {
        match &self.content {
            Content::Leaf(payload) => Some(payload),
            Content::Children(_) => None,
        }
    }
}

/// Viewport simulation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Device {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Device::Desktop => "Desktop",
            Device::Tablet => "Tablet",
            Device::Mobile => "Mobile",
        };
        f.write_str(name)
    }
}
