//! Signal-backed implementations of the menu's collaborators.

use leptos::prelude::*;
use poststride_ui::{ModalHost, ModalKind, SessionStore, User};

/// Client-side session. Starts signed out; nothing is persisted.
#[derive(Debug, Clone, Copy)]
pub struct LocalSession {
    user: RwSignal<Option<User>>,
}

impl LocalSession {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
        }
    }
}

impl SessionStore for LocalSession {
    // Tracked read: menus re-render when the user changes.
    fn current_user(&self) -> Option<User> {
        self.user.get()
    }

    fn log_out(&self) {
        self.user.set(None);
    }
}

/// The modal currently presented, if any.
#[derive(Debug, Clone, Copy)]
pub struct ModalSignal {
    active: RwSignal<Option<ModalKind>>,
}

impl ModalSignal {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
        }
    }

    pub fn active(&self) -> Option<ModalKind> {
        self.active.get()
    }

    pub fn close(&self) {
        self.active.set(None);
    }
}

impl ModalHost for ModalSignal {
    fn open_modal(&self, kind: ModalKind) {
        self.active.set(Some(kind));
    }
}
