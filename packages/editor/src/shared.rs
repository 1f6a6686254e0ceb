//! Thread-safe session handle.
//!
//! All dispatches go through one mutex, so each action is applied in full
//! before the next one starts.

use crate::action::EditorAction;
use crate::session::{EditorSession, Listener, SubscriptionId};
use crate::state::BuilderState;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<EditorSession>>,
}

impl SharedSession {
    pub fn new(session: EditorSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn dispatch(&self, action: EditorAction) {
        self.lock().dispatch(action);
    }

    /// Clone of the current state
    pub fn snapshot(&self) -> BuilderState {
        self.lock().state().clone()
    }

    /// Read the current state without cloning it
    pub fn with_state<R>(&self, f: impl FnOnce(&BuilderState) -> R) -> R {
        f(self.lock().state())
    }

    pub fn subscribe(&self, listener: Listener) -> SubscriptionId {
        self.lock().subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.lock().unsubscribe(id)
    }

    fn lock(&self) -> MutexGuard<'_, EditorSession> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
