//! Password strength checking.

use crate::output::OutputFormat;
use anyhow::Result;
use password_policy::{Severity, StrengthLabel};

/// Evaluate a password against the policy and print the rule checklist.
pub async fn password_check(
    password: Option<String>,
    name: Option<String>,
    email: Option<String>,
    format: &OutputFormat,
) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => rpassword::prompt_password("Password: ")?,
    };

    let checks = password_policy::evaluate(&password, name.as_deref(), email.as_deref());
    let score = password_policy::strength(&password, name.as_deref(), email.as_deref());
    let label = StrengthLabel::from_score(score);
    let severity = Severity::from_score(score);

    match format {
        OutputFormat::Text => {
            for check in &checks {
                let mark = if check.valid { "ok" } else { "--" };
                println!("  [{}] {}", mark, check.label);
            }
            println!();
            println!("Score:    {}/100", score);
            println!("Strength: {}", label);
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "score": score,
                "label": label.to_string(),
                "severity": severity,
                "checks": checks,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
