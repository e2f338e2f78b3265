//! Session state types.

use dritter_api::User;

/// The session lifecycle as a tagged union.
///
/// `Authenticated` carries the user, so "authenticated but no user" is
/// unrepresentable by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Before `initialize` has been called
    Uninitialized,
    /// The one-time startup probe is running
    Initializing,
    /// No valid session
    Unauthenticated,
    /// A user is logged in
    Authenticated { user: User },
}

impl SessionState {
    /// The current user, when authenticated.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated { user } => Some(user),
            _ => None,
        }
    }

    /// Whether a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}

/// Independent in-flight markers for the session actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InFlight {
    pub login: bool,
    pub register: bool,
    pub update_profile: bool,
    pub refresh: bool,
}

impl InFlight {
    /// Whether any action is in flight.
    pub fn any(&self) -> bool {
        self.login || self.register || self.update_profile || self.refresh
    }
}

/// A point-in-time copy of the session, for guards and UI.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub in_flight: InFlight,
    pub last_error: Option<String>,
}

impl SessionSnapshot {
    /// Whether a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Whether the session is still settling: the startup probe has not
    /// finished, or some action is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(
            self.state,
            SessionState::Uninitialized | SessionState::Initializing
        ) || self.in_flight.any()
    }

    /// The current user, when authenticated.
    pub fn user(&self) -> Option<&User> {
        self.state.user()
    }
}
