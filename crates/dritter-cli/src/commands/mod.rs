//! CLI command implementations.

mod auth;
mod password;
mod posts;
mod users;

pub use auth::{login, logout, profile_show, profile_update, register, status};
pub use password::password_check;
pub use posts::{posts_create, posts_delete, posts_list, posts_show, posts_update};
pub use users::{users_create, users_delete, users_list, users_show, users_update};

use crate::output::{self, OutputFormat};
use anyhow::Result;
use dritter_api::Services;
use dritter_core::{Config, Paths};
use dritter_session::{evaluate_route, GuardDecision, SessionManager};
use dritter_storage::{FileTokenStorage, TokenStore};
use std::sync::Arc;
use std::time::Duration;

/// Everything a command needs: config, wired services, and the session.
pub struct Context {
    pub config: Config,
    pub services: Services,
    pub session: SessionManager,
}

impl Context {
    /// Wire up services against the configured backends and restore any
    /// persisted session.
    pub async fn init(paths: &Paths, config: Config) -> Result<Self> {
        tracing::debug!(base_dir = %paths.base_dir().display(), "Initializing client context");
        paths.ensure_dirs()?;

        let tokens = Arc::new(TokenStore::new(Box::new(FileTokenStorage::new(
            paths.base_dir(),
        ))));

        let services = Services::connect(
            &config.users_api_url()?,
            &config.posts_api_url()?,
            Duration::from_secs(config.request_timeout_secs),
            tokens.clone(),
        )?;

        let session = SessionManager::new(services.auth.clone(), tokens);
        session.initialize().await;
        tracing::debug!(
            authenticated = session.is_authenticated(),
            "Session restored"
        );

        Ok(Self {
            config,
            services,
            session,
        })
    }
}

/// Guard a protected command: authenticated sessions pass, everything else
/// prints a login hint and stops.
fn require_auth(ctx: &Context, route: &str, format: &OutputFormat) -> bool {
    match evaluate_route(&ctx.session.snapshot(), route) {
        GuardDecision::Allow => true,
        GuardDecision::Loading | GuardDecision::RedirectToLogin { .. } => {
            output::print_error("Not logged in. Run 'dritter login' first.", format);
            false
        }
    }
}

/// Guard an admin command on top of the auth guard.
fn require_admin(ctx: &Context, route: &str, format: &OutputFormat) -> bool {
    if !require_auth(ctx, route, format) {
        return false;
    }
    if !ctx.session.is_admin() {
        output::print_error("Admin access required", format);
        return false;
    }
    true
}
