//! Admin user-management commands.

use super::{require_admin, Context};
use crate::output::{self, OutputFormat};
use anyhow::Result;
use dritter_api::{CreateUserRequest, Role, UpdateProfileRequest, User};

fn role_name(role: Role) -> &'static str {
    match role {
        Role::Admin => "admin",
        Role::User => "user",
        Role::Moderator => "moderator",
    }
}

fn parse_role(value: &str) -> Option<Role> {
    match value {
        "admin" => Some(Role::Admin),
        "user" => Some(Role::User),
        "moderator" => Some(Role::Moderator),
        _ => None,
    }
}

fn print_user(user: &User, format: &OutputFormat) {
    output::print_json_or(user, format, || {
        output::print_row("ID", &user.id.to_string());
        output::print_row("Name", &user.name);
        output::print_row("Email", &user.email);
        output::print_row("Role", role_name(user.role));
    });
}

/// List all users.
pub async fn users_list(ctx: &Context, format: &OutputFormat) -> Result<()> {
    if !require_admin(ctx, "/admin", format) {
        return Ok(());
    }

    match ctx.services.admin.list_users().await {
        Ok(response) => match format {
            OutputFormat::Text => {
                output::print_heading(&format!("Users ({})", response.count));
                for user in &response.data {
                    println!(
                        "  {:<6} {:<24} {:<30} {}",
                        user.id,
                        user.name,
                        user.email,
                        role_name(user.role)
                    );
                }
            }
            OutputFormat::Json => {
                if let Ok(json) = serde_json::to_string_pretty(&response.data) {
                    println!("{}", json);
                }
            }
        },
        Err(e) => output::print_error(&e.to_string(), format),
    }

    Ok(())
}

/// Show one user.
pub async fn users_show(ctx: &Context, id: i64, format: &OutputFormat) -> Result<()> {
    if !require_admin(ctx, "/admin", format) {
        return Ok(());
    }

    match ctx.services.admin.get_user(id).await {
        Ok(response) => print_user(&response.data, format),
        Err(e) => output::print_error(&e.to_string(), format),
    }

    Ok(())
}

/// Create a user with an explicit role.
pub async fn users_create(
    ctx: &Context,
    name: String,
    email: String,
    role: Option<String>,
    format: &OutputFormat,
) -> Result<()> {
    if !require_admin(ctx, "/admin", format) {
        return Ok(());
    }

    let role = match role.as_deref() {
        Some(value) => match parse_role(value) {
            Some(role) => Some(role),
            None => {
                output::print_error("Role must be one of: admin, user, moderator", format);
                return Ok(());
            }
        },
        None => None,
    };

    let password = rpassword::prompt_password("Password for new user: ")?;
    if password.len() < 8 {
        output::print_error("Password must be at least 8 characters", format);
        return Ok(());
    }

    match ctx
        .services
        .admin
        .create_user(&CreateUserRequest {
            name,
            email,
            password,
            role,
        })
        .await
    {
        Ok(response) => {
            output::print_success(&response.message, format);
            print_user(&response.data, format);
        }
        Err(e) => output::print_error(&e.to_string(), format),
    }

    Ok(())
}

/// Update another user, including their role.
pub async fn users_update(
    ctx: &Context,
    id: i64,
    name: Option<String>,
    email: Option<String>,
    role: Option<String>,
    format: &OutputFormat,
) -> Result<()> {
    if !require_admin(ctx, "/admin", format) {
        return Ok(());
    }

    let role = match role.as_deref() {
        Some(value) => match parse_role(value) {
            Some(role) => Some(role),
            None => {
                output::print_error("Role must be one of: admin, user, moderator", format);
                return Ok(());
            }
        },
        None => None,
    };

    if name.is_none() && email.is_none() && role.is_none() {
        output::print_error("Nothing to update: pass --name, --email, and/or --role", format);
        return Ok(());
    }

    let update = UpdateProfileRequest {
        name,
        email,
        role,
        ..Default::default()
    };

    match ctx.services.admin.update_user(id, &update).await {
        Ok(response) => {
            output::print_success(&response.message, format);
            print_user(&response.data, format);
        }
        Err(e) => output::print_error(&e.to_string(), format),
    }

    Ok(())
}

/// Delete a user.
pub async fn users_delete(ctx: &Context, id: i64, format: &OutputFormat) -> Result<()> {
    if !require_admin(ctx, "/admin", format) {
        return Ok(());
    }

    match ctx.services.admin.delete_user(id).await {
        Ok(response) => output::print_success(&response.message, format),
        Err(e) => output::print_error(&e.to_string(), format),
    }

    Ok(())
}
