//! Boundary types for the external auth provider.
//!
//! No real authentication happens here. The host wires a provider (or the
//! stub below) and hands the resulting `Session` into the pipeline and
//! submission functions explicitly; nothing in this crate reads ambient
//! session state.

use serde::{Deserialize, Serialize};

/// Identity of the currently signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub email: String,
    /// Optional display name; most providers only supply id + email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Session {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Session {
            id: id.into(),
            email: email.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The name shown on tickets this user submits: the display name when
    /// present, otherwise the email local part (text before '@').
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            if !name.trim().is_empty() {
                return name.clone();
            }
        }
        self.email
            .split('@')
            .next()
            .unwrap_or(&self.email)
            .to_string()
    }
}

/// Snapshot of the auth provider's state, as delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Session>,
    pub is_loading: bool,
}

type AuthCallback = Box<dyn Fn(&AuthState)>;

/// In-process stand-in for the external auth provider.
///
/// Starts in the loading state with no user. `login` and `logout` update
/// the state and notify every subscribed callback with the new snapshot.
pub struct StubAuth {
    state: AuthState,
    listeners: Vec<AuthCallback>,
}

impl StubAuth {
    pub fn new() -> Self {
        StubAuth {
            state: AuthState {
                user: None,
                is_loading: true,
            },
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Register a callback invoked on every state change.
    pub fn on_state_changed(&mut self, callback: impl Fn(&AuthState) + 'static) {
        self.listeners.push(Box::new(callback));
    }

    pub fn login(&mut self, session: Session) {
        self.state = AuthState {
            user: Some(session),
            is_loading: false,
        };
        self.notify();
    }

    pub fn logout(&mut self) {
        self.state = AuthState {
            user: None,
            is_loading: false,
        };
        self.notify();
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.state);
        }
    }
}

impl Default for StubAuth {
    fn default() -> Self {
        Self::new()
    }
}
