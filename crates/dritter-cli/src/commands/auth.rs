//! Authentication and profile commands.

use super::{require_auth, Context};
use crate::output::{self, OutputFormat};
use anyhow::Result;
use dritter_api::{LoginRequest, RegisterRequest, UpdateProfileRequest, User};
use std::io::{self, Write};

/// Prompt for a line of input on stdout/stdin.
fn prompt_line(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

fn validate_name(name: &str) -> Result<(), &'static str> {
    let len = name.chars().count();
    if len < 2 {
        Err("Name must be at least 2 characters")
    } else if len > 50 {
        Err("Name must be at most 50 characters")
    } else {
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<(), &'static str> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err("Enter a valid email address"),
    }
}

fn validate_new_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        Err("Password must be at least 8 characters")
    } else {
        Ok(())
    }
}

fn print_user(user: &User, format: &OutputFormat) {
    output::print_json_or(user, format, || {
        output::print_row("ID", &user.id.to_string());
        output::print_row("Name", &user.name);
        output::print_row("Email", &user.email);
        output::print_row("Role", &format!("{:?}", user.role).to_lowercase());
    });
}

/// Login with email and password.
pub async fn login(ctx: &Context, format: &OutputFormat) -> Result<()> {
    if let Some(user) = ctx.session.user() {
        output::print_success(&format!("Already logged in as {}", user.email), format);
        return Ok(());
    }

    let email = prompt_line("Email")?;
    if email.is_empty() {
        output::print_error("Email is required", format);
        return Ok(());
    }

    let password = rpassword::prompt_password("Password: ")?;
    if password.is_empty() {
        output::print_error("Password is required", format);
        return Ok(());
    }

    println!("Logging in...");

    match ctx.session.login(&LoginRequest { email, password }).await {
        Ok(user) => {
            output::print_success(&format!("Logged in as {}", user.email), format);
        }
        Err(e) => {
            output::print_error(&e.to_string(), format);
        }
    }

    Ok(())
}

/// Register a new account, then log in with it.
pub async fn register(ctx: &Context, format: &OutputFormat) -> Result<()> {
    if let Some(user) = ctx.session.user() {
        output::print_success(&format!("Already logged in as {}", user.email), format);
        return Ok(());
    }

    let name = prompt_line("Name")?;
    if let Err(message) = validate_name(&name) {
        output::print_error(message, format);
        return Ok(());
    }

    let email = prompt_line("Email")?;
    if let Err(message) = validate_email(&email) {
        output::print_error(message, format);
        return Ok(());
    }

    let password = rpassword::prompt_password("Password: ")?;
    if let Err(message) = validate_new_password(&password) {
        output::print_error(message, format);
        return Ok(());
    }

    let score = password_policy::strength(&password, Some(&name), Some(&email));
    let label = password_policy::StrengthLabel::from_score(score);
    println!("Password strength: {} ({}/100)", label, score);

    println!("Creating account...");

    match ctx
        .session
        .register(&RegisterRequest { name, email, password })
        .await
    {
        Ok(user) => {
            output::print_success(&format!("Registered and logged in as {}", user.email), format);
        }
        Err(e) => {
            output::print_error(&e.to_string(), format);
        }
    }

    Ok(())
}

/// Logout and clear the stored session.
pub async fn logout(ctx: &Context, format: &OutputFormat) -> Result<()> {
    ctx.session.logout();
    output::print_success("Logged out successfully", format);
    Ok(())
}

/// Check authentication status.
pub async fn status(ctx: &Context, format: &OutputFormat) -> Result<()> {
    match ctx.session.user() {
        Some(user) => match format {
            OutputFormat::Text => {
                println!("Server:   {}", ctx.config.users_api_url);
                println!("Auth:     logged in");
                print_user(&user, format);
            }
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "server": ctx.config.users_api_url,
                        "logged_in": true,
                        "user": user,
                    })
                );
            }
        },
        None => match format {
            OutputFormat::Text => {
                println!("Server:   {}", ctx.config.users_api_url);
                println!("Auth:     not logged in");
            }
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "server": ctx.config.users_api_url,
                        "logged_in": false,
                    })
                );
            }
        },
    }
    Ok(())
}

/// Show the authenticated user's profile.
pub async fn profile_show(ctx: &Context, format: &OutputFormat) -> Result<()> {
    if !require_auth(ctx, "/profile", format) {
        return Ok(());
    }
    // require_auth passed, so a user is present
    if let Some(user) = ctx.session.user() {
        print_user(&user, format);
    }
    Ok(())
}

/// Update the authenticated user's profile.
pub async fn profile_update(
    ctx: &Context,
    name: Option<String>,
    email: Option<String>,
    change_password: bool,
    format: &OutputFormat,
) -> Result<()> {
    if !require_auth(ctx, "/profile", format) {
        return Ok(());
    }

    if let Some(name) = &name {
        if let Err(message) = validate_name(name) {
            output::print_error(message, format);
            return Ok(());
        }
    }
    if let Some(email) = &email {
        if let Err(message) = validate_email(email) {
            output::print_error(message, format);
            return Ok(());
        }
    }

    let mut update = UpdateProfileRequest {
        name,
        email,
        ..Default::default()
    };

    if change_password {
        // The server verifies the current password before accepting a new one
        let current = rpassword::prompt_password("Current password: ")?;
        let new = rpassword::prompt_password("New password: ")?;
        if let Err(message) = validate_new_password(&new) {
            output::print_error(message, format);
            return Ok(());
        }
        update.current_password = Some(current);
        update.password = Some(new);
    }

    match ctx.session.update_profile(&update).await {
        Ok(user) => {
            output::print_success("Profile updated", format);
            print_user(&user, format);
        }
        Err(e) => {
            output::print_error(&e.to_string(), format);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_bounds() {
        assert!(validate_name("Jo").is_ok());
        assert!(validate_name("J").is_err());
        assert!(validate_name(&"x".repeat(50)).is_ok());
        assert!(validate_name(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_email_shape() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@domain.com").is_err());
        assert!(validate_email("local@").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_validate_new_password_length() {
        assert!(validate_new_password("12345678").is_ok());
        assert!(validate_new_password("1234567").is_err());
    }
}
