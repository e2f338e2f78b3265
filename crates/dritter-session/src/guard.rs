//! Route guarding over a session snapshot.

use crate::SessionSnapshot;

/// Login entry point unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of guarding a protected route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still settling; show a loading indicator
    Loading,
    /// Render the protected content
    Allow,
    /// Send the visitor to login, remembering where they wanted to go
    RedirectToLogin { return_to: String },
}

/// Decide whether a protected route may render.
pub fn evaluate_route(snapshot: &SessionSnapshot, requested: &str) -> GuardDecision {
    if snapshot.is_loading() {
        GuardDecision::Loading
    } else if snapshot.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectToLogin {
            return_to: requested.to_string(),
        }
    }
}
