//! The session store: owns the current user and drives the auth lifecycle.

use crate::{InFlight, SessionError, SessionResult, SessionSnapshot, SessionState};
use dritter_api::{AuthApi, LoginRequest, RegisterRequest, Role, UpdateProfileRequest, User};
use dritter_storage::TokenStore;
use std::sync::{Arc, Mutex};

struct Inner {
    state: SessionState,
    in_flight: InFlight,
    last_error: Option<String>,
}

/// Owned session store.
///
/// Construct one at the composition root and hand it to whatever drives the
/// UI. Every fallible action funnels its error message into `last_error`
/// and still returns the error, so callers can react locally without
/// duplicating display logic.
pub struct SessionManager {
    auth: AuthApi,
    tokens: Arc<TokenStore>,
    inner: Mutex<Inner>,
}

impl SessionManager {
    /// Create a session store over the auth service and token store.
    pub fn new(auth: AuthApi, tokens: Arc<TokenStore>) -> Self {
        Self {
            auth,
            tokens,
            inner: Mutex::new(Inner {
                state: SessionState::Uninitialized,
                in_flight: InFlight::default(),
                last_error: None,
            }),
        }
    }

    fn update<R>(&self, f: impl FnOnce(&mut Inner) -> R) -> R {
        let mut inner = self.inner.lock().unwrap();
        f(&mut inner)
    }

    /// Best-effort startup probe, run exactly once.
    ///
    /// A stored token is exchanged for the current user; any failure clears
    /// the token and lands unauthenticated without surfacing an error.
    pub async fn initialize(&self) {
        let already_started = self.update(|inner| {
            if inner.state != SessionState::Uninitialized {
                return true;
            }
            inner.state = SessionState::Initializing;
            false
        });
        if already_started {
            return;
        }

        if self.tokens.has_access_token() {
            match self.auth.current_user().await {
                Ok(me) => {
                    let user = User::from(me);
                    tracing::info!(user_id = user.id, "Session restored from stored token");
                    self.update(|inner| inner.state = SessionState::Authenticated { user });
                    return;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to initialize session, clearing token");
                    self.tokens.clear_access_token();
                }
            }
        }

        self.update(|inner| inner.state = SessionState::Unauthenticated);
    }

    /// Log in with credentials, then fetch the full profile.
    pub async fn login(&self, credentials: &LoginRequest) -> SessionResult<User> {
        self.update(|inner| {
            inner.in_flight.login = true;
            inner.last_error = None;
        });

        let result = self.login_inner(credentials).await;

        // Flag cleared on every path before the error is surfaced
        self.update(|inner| inner.in_flight.login = false);

        result.map_err(|e| self.record_error(e))
    }

    async fn login_inner(&self, credentials: &LoginRequest) -> SessionResult<User> {
        let response = self.auth.login(credentials).await?;
        self.tokens.set_access_token(&response.access_token)?;

        // The login response only identifies the user; fetch the profile
        let user = User::from(self.auth.current_user().await?);
        tracing::info!(user_id = user.id, "Login successful");

        self.update(|inner| {
            inner.state = SessionState::Authenticated { user: user.clone() }
        });
        Ok(user)
    }

    /// Register a new account, then auto-login with the same credentials.
    /// Registration by itself does not authenticate.
    pub async fn register(&self, data: &RegisterRequest) -> SessionResult<User> {
        self.update(|inner| {
            inner.in_flight.register = true;
            inner.last_error = None;
        });

        let result = self.register_inner(data).await;

        self.update(|inner| inner.in_flight.register = false);

        result.map_err(|e| self.record_error(e))
    }

    async fn register_inner(&self, data: &RegisterRequest) -> SessionResult<User> {
        let response = self.auth.register(data).await?;
        tracing::info!(user_id = response.data.id, "Registration successful, logging in");

        self.login(&LoginRequest {
            email: data.email.clone(),
            password: data.password.clone(),
        })
        .await
    }

    /// Drop the session locally. No network call: the server-side refresh
    /// cookie is invalidated by the server on its own terms.
    pub fn logout(&self) {
        self.tokens.clear_access_token();
        self.update(|inner| {
            inner.state = SessionState::Unauthenticated;
            inner.last_error = None;
        });
        tracing::info!("Logged out");
    }

    /// Explicitly refresh the access token. Failure forces a logout.
    pub async fn refresh_token(&self) -> SessionResult<()> {
        self.update(|inner| inner.in_flight.refresh = true);

        let result = async {
            let response = self.auth.refresh_token().await?;
            self.tokens.set_access_token(&response.access_token)?;
            Ok(())
        }
        .await;

        self.update(|inner| inner.in_flight.refresh = false);

        if let Err(e) = &result {
            tracing::warn!(error = %e, "Token refresh failed, logging out");
            self.logout();
        }
        result
    }

    /// Update the authenticated user's profile, replacing the local user
    /// with the server's copy. Fails fast without a user.
    pub async fn update_profile(&self, update: &UpdateProfileRequest) -> SessionResult<User> {
        let user_id = match self.update(|inner| inner.state.user().map(|u| u.id)) {
            Some(id) => id,
            None => return Err(self.record_error(SessionError::NotAuthenticated)),
        };

        self.update(|inner| {
            inner.in_flight.update_profile = true;
            inner.last_error = None;
        });

        let result = self.auth.update_profile(user_id, update).await;

        self.update(|inner| inner.in_flight.update_profile = false);

        match result {
            Ok(response) => {
                let user = response.data;
                self.update(|inner| {
                    inner.state = SessionState::Authenticated { user: user.clone() }
                });
                Ok(user)
            }
            Err(e) => Err(self.record_error(SessionError::from(e))),
        }
    }

    /// Reset `last_error`, typically before a form retries.
    pub fn clear_error(&self) {
        self.update(|inner| inner.last_error = None);
    }

    fn record_error(&self, error: SessionError) -> SessionError {
        let message = error.to_string();
        self.update(|inner| inner.last_error = Some(message));
        error
    }

    /// Point-in-time copy of the session.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.update(|inner| SessionSnapshot {
            state: inner.state.clone(),
            in_flight: inner.in_flight,
            last_error: inner.last_error.clone(),
        })
    }

    /// Whether a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.update(|inner| inner.state.is_authenticated())
    }

    /// The current user, when authenticated.
    pub fn user(&self) -> Option<User> {
        self.update(|inner| inner.state.user().cloned())
    }

    /// The last action error, as shown to the user.
    pub fn last_error(&self) -> Option<String> {
        self.update(|inner| inner.last_error.clone())
    }

    /// Whether the current user holds exactly the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.update(|inner| inner.state.user().is_some_and(|u| u.role == role))
    }

    /// Whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// Whether the current user is a moderator or an admin.
    pub fn is_moderator(&self) -> bool {
        self.update(|inner| {
            inner
                .state
                .user()
                .is_some_and(|u| matches!(u.role, Role::Moderator | Role::Admin))
        })
    }
}
