//! # Edit Session
//!
//! An EditorSession is the handle passed to every consumer of one
//! builder instance: renderers and side panels read [`EditorSession::state`],
//! toolbars call [`EditorSession::dispatch`]. Subscribers are notified
//! synchronously after each action has been fully applied.

use crate::action::EditorAction;
use crate::config::EditorConfig;
use crate::element::Element;
use crate::history::History;
use crate::state::{BuilderState, EditorState};
use tracing::{debug, instrument};

/// Callback invoked with the new state after every dispatch
pub type Listener = Box<dyn Fn(&BuilderState) + Send>;

/// Handle returned by [`EditorSession::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Single editing session
pub struct EditorSession {
    /// Unique session identifier
    pub id: String,

    state: BuilderState,

    listeners: Vec<(SubscriptionId, Listener)>,

    next_subscription: u64,

    /// Number of actions dispatched so far
    version: u64,

    /// Elements as of the last load or save
    saved_elements: Vec<Element>,
}

impl EditorSession {
    /// Create new edit session
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_config(id, EditorConfig::default())
    }

    pub fn with_config(id: impl Into<String>, config: EditorConfig) -> Self {
        let state = BuilderState::with_config(config);
        let saved_elements = state.editor.elements.clone();

        Self {
            id: id.into(),
            state,
            listeners: Vec::new(),
            next_subscription: 0,
            version: 0,
            saved_elements,
        }
    }

    /// Apply an action and notify subscribers
    #[instrument(skip(self, action), fields(session = %self.id, action = action.name()))]
    pub fn dispatch(&mut self, action: EditorAction) {
        let is_load = matches!(action, EditorAction::LoadData { .. });

        self.state.apply(action);
        self.version += 1;

        if is_load {
            self.saved_elements = self.state.editor.elements.clone();
        }

        debug!(listeners = self.listeners.len(), version = self.version, "Publishing state");
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }

    /// Current editor state and history
    pub fn state(&self) -> &BuilderState {
        &self.state
    }

    pub fn editor(&self) -> &EditorState {
        &self.state.editor
    }

    pub fn history(&self) -> &History {
        &self.state.history
    }

    /// Register a listener. It must not dispatch into this session.
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    /// Get number of dispatched actions
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether the tree differs from the last load or save
    pub fn is_dirty(&self) -> bool {
        self.state.editor.elements != self.saved_elements
    }

    /// Record that the current tree has been persisted
    pub fn mark_saved(&mut self) {
        self.saved_elements = self.state.editor.elements.clone();
    }
}
