//! # Funnel Editor
//!
//! Core editing engine for the page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ toolbars / sidebars / canvas (external)     │
//! └─────────────────────────────────────────────┘
//!          ↓ dispatch(action)      ↑ state()
//! ┌─────────────────────────────────────────────┐
//! │ session: EditorSession / SharedSession      │
//! │  - Serialize dispatches                     │
//! │  - Publish new state to subscribers         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ state: BuilderState::apply (reducer)        │
//! │  - tree: insert / update / remove           │
//! │  - history: record / undo / redo            │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Tree is owned top-down**: children live inside their parent, no back-pointers
//! 2. **Edits are pure**: every mutation rebuilds the touched branch
//! 3. **Unmatched ids are no-ops**: never errors, reported via [`TreeEdit::matched`]
//! 4. **History holds snapshots**: undo/redo move a pointer, new edits drop the redo branch
//! 5. **Viewport is not history**: device and mode toggles are never undone
//!
//! ## Usage
//!
//! ```rust
//! use funnel_editor::{EditorAction, EditorSession, Element, ElementKind, ROOT_ID};
//!
//! let mut session = EditorSession::new("builder");
//!
//! session.dispatch(EditorAction::AddElement {
//!     container_id: ROOT_ID.to_string(),
//!     element: Element::container("hero", ElementKind::Container, "Container"),
//! });
//! assert_eq!(session.history().len(), 2);
//!
//! session.dispatch(EditorAction::Undo);
//! assert_eq!(session.editor().elements, vec![Element::root()]);
//! ```

mod action;
mod config;
mod element;
mod errors;
mod history;
mod persist;
mod session;
mod shared;
mod state;

pub mod tree;

pub use action::EditorAction;
pub use config::{EditorConfig, SelectionPolicy};
pub use element::{Content, Device, Element, ElementId, ElementKind, LeafPayload, Styles, ROOT_ID};
pub use errors::{EditorError, TreeError};
pub use history::History;
pub use persist::{decode_elements, encode_elements, load_elements, save_elements, FunnelPage};
pub use session::{EditorSession, Listener, SubscriptionId};
pub use shared::SharedSession;
pub use state::{reduce, BuilderState, EditorState};
pub use tree::TreeEdit;
