//! Session lifecycle for the Dritter client.
//!
//! This crate provides:
//! - `SessionManager`: an owned, constructible session store driving the
//!   login/register/logout/refresh/update-profile lifecycle
//! - `SessionState`: the tagged session state, making "authenticated but
//!   no user" unrepresentable
//! - `evaluate_route`: the route-guard decision over a session snapshot

mod error;
mod guard;
mod manager;
mod state;

pub use error::{SessionError, SessionResult};
pub use guard::{evaluate_route, GuardDecision, LOGIN_PATH};
pub use manager::SessionManager;
pub use state::{InFlight, SessionSnapshot, SessionState};
