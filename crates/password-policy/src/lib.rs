//! Password policy evaluation for the Dritter client.
//!
//! Pure functions scoring a candidate password against a fixed rule set.
//! The rule tables (weak-password list, sequential-character strings) are
//! shared with the users service; keep them byte-for-byte in sync rather
//! than generalizing them.

use serde::Serialize;

/// Common weak passwords, matched case-insensitively against the full
/// candidate. Synchronized with the users-service validator.
pub const COMMON_WEAK_PASSWORDS: [&str; 15] = [
    "password",
    "password123",
    "123456",
    "123456789",
    "qwerty",
    "abc123",
    "password1",
    "admin",
    "admin123",
    "welcome",
    "welcome123",
    "letmein",
    "monkey",
    "dragon",
    "passw0rd",
];

/// Source strings for the sequential-character rule: digits, the alphabet,
/// and the three physical keyboard rows. Every 3-character window of these,
/// forward or reversed, is a forbidden run.
const SEQUENCES: [&str; 5] = [
    "0123456789",
    "abcdefghijklmnopqrstuvwxyz",
    "qwertyuiop",
    "asdfghjkl",
    "zxcvbnm",
];

/// Outcome of a single policy rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleCheck {
    /// Display label for the rule
    pub label: &'static str,
    /// Whether the candidate satisfies the rule
    pub valid: bool,
    /// Message shown when the rule is not satisfied
    pub message: &'static str,
}

/// Strength classification bands. Boundary semantics are inclusive upper
/// bounds: 0, ≤30, ≤60, ≤85, else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthLabel {
    None,
    VeryWeak,
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    /// Classify a 0–100 score.
    pub fn from_score(score: u8) -> Self {
        if score == 0 {
            Self::None
        } else if score <= 30 {
            Self::VeryWeak
        } else if score <= 60 {
            Self::Weak
        } else if score <= 85 {
            Self::Medium
        } else {
            Self::Strong
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::None => "",
            Self::VeryWeak => "Very weak",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        };
        f.write_str(text)
    }
}

/// Display severity for a score, for progress-bar styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Success,
}

impl Severity {
    /// Map a 0–100 score onto a severity.
    pub fn from_score(score: u8) -> Self {
        if score <= 30 {
            Self::Error
        } else if score <= 60 {
            Self::Warning
        } else if score <= 85 {
            Self::Info
        } else {
            Self::Success
        }
    }
}

/// Check whether the password contains any 3-character run (or its reverse)
/// drawn from the sequence tables, case-insensitively.
pub fn has_sequential_characters(password: &str) -> bool {
    let lowered = password.to_lowercase();

    for sequence in SEQUENCES {
        let bytes = sequence.as_bytes();
        for window in bytes.windows(3) {
            let forward = std::str::from_utf8(window).expect("sequence tables are ASCII");
            if lowered.contains(forward) {
                return true;
            }
            let reversed: String = forward.chars().rev().collect();
            if lowered.contains(&reversed) {
                return true;
            }
        }
    }
    false
}

/// Check whether any character repeats 3+ times consecutively.
pub fn has_repeated_characters(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[0] == w[2])
}

/// Check whether the password contains the user's name, case-insensitively.
pub fn contains_name(password: &str, name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    password.to_lowercase().contains(&name.to_lowercase())
}

/// Check whether the password contains the local part of the user's email
/// (text before `@`), case-insensitively.
pub fn contains_email_local_part(password: &str, email: &str) -> bool {
    if email.is_empty() {
        return false;
    }
    let local = email.split('@').next().unwrap_or("").to_lowercase();
    password.to_lowercase().contains(&local)
}

/// Evaluate all policy rules against a candidate password.
///
/// The two contextual rules (name, email) are appended only when the
/// corresponding context is provided. Order defines display order.
pub fn evaluate(password: &str, name: Option<&str>, email: Option<&str>) -> Vec<RuleCheck> {
    let lowered = password.to_lowercase();

    let mut checks = vec![
        RuleCheck {
            label: "At least 8 characters",
            valid: password.chars().count() >= 8,
            message: "Password must be at least 8 characters long",
        },
        RuleCheck {
            label: "Lowercase letter",
            valid: password.chars().any(|c| c.is_ascii_lowercase()),
            message: "Password must contain at least one lowercase letter",
        },
        RuleCheck {
            label: "Uppercase letter",
            valid: password.chars().any(|c| c.is_ascii_uppercase()),
            message: "Password must contain at least one uppercase letter",
        },
        RuleCheck {
            label: "Number",
            valid: password.chars().any(|c| c.is_ascii_digit()),
            message: "Password must contain at least one number",
        },
        RuleCheck {
            label: "Not a common password",
            valid: !COMMON_WEAK_PASSWORDS.contains(&lowered.as_str()),
            message: "Password is too common and easily guessed. Choose a stronger password.",
        },
        RuleCheck {
            label: "No sequential characters",
            valid: !has_sequential_characters(password),
            message: "Password must not contain sequential characters (e.g. 123, abc).",
        },
        RuleCheck {
            label: "No repeated characters",
            valid: !has_repeated_characters(password),
            message: "Password must not contain more than 2 identical consecutive characters.",
        },
    ];

    if let Some(name) = name {
        checks.push(RuleCheck {
            label: "Does not contain your name",
            valid: !contains_name(password, name),
            message: "Password must not contain your name.",
        });
    }

    if let Some(email) = email {
        checks.push(RuleCheck {
            label: "Does not contain your email username",
            valid: !contains_email_local_part(password, email),
            message: "Password must not contain your email username.",
        });
    }

    checks
}

/// Strength score in 0–100: the rounded share of satisfied rules.
/// An empty password scores 0 without evaluating anything.
pub fn strength(password: &str, name: Option<&str>, email: Option<&str>) -> u8 {
    if password.is_empty() {
        return 0;
    }

    let checks = evaluate(password, name, email);
    let valid = checks.iter().filter(|c| c.valid).count();
    let total = checks.len();

    ((valid as f64 / total as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_score_without_context() {
        // Satisfies all 7 context-free rules
        let password = "Xk9#mPw2Qr5z";
        let checks = evaluate(password, None, None);
        assert_eq!(checks.len(), 7);
        assert!(checks.iter().all(|c| c.valid), "{checks:?}");
        assert_eq!(strength(password, None, None), 100);
        assert_eq!(StrengthLabel::from_score(100), StrengthLabel::Strong);
    }

    #[test]
    fn test_empty_password_scores_zero() {
        assert_eq!(strength("", None, None), 0);
        assert_eq!(StrengthLabel::from_score(0), StrengthLabel::None);
        assert_eq!(StrengthLabel::None.to_string(), "");
    }

    #[test]
    fn test_common_weak_passwords_fail_rule_five() {
        for weak in COMMON_WEAK_PASSWORDS {
            let checks = evaluate(weak, None, None);
            assert!(!checks[4].valid, "{weak} should hit the weak list");
        }
        // Case-insensitive exact match
        let checks = evaluate("PASSW0RD", None, None);
        assert!(!checks[4].valid);
        // Superstring is not an exact match
        let checks = evaluate("passw0rdX!", None, None);
        assert!(checks[4].valid);
    }

    #[test]
    fn test_sequential_characters() {
        assert!(has_sequential_characters("abc12345"));
        assert!(has_sequential_characters("xx123xx"));
        assert!(has_sequential_characters("QWErty"));
        assert!(has_sequential_characters("jklm"));
        // Reversed runs count too
        assert!(has_sequential_characters("cba"));
        assert!(has_sequential_characters("987"));
        assert!(!has_sequential_characters("Xk9#mPw2"));
        // Two-character fragments are allowed
        assert!(!has_sequential_characters("ab12qw"));
    }

    #[test]
    fn test_sequential_rule_interacts_with_basics() {
        // From the property list: fails the sequential rule, passes 1-4
        let checks = evaluate("abc12345", None, None);
        assert!(checks[0].valid); // length
        assert!(checks[1].valid); // lowercase
        assert!(!checks[2].valid); // no uppercase
        assert!(checks[3].valid); // digit
        assert!(!checks[5].valid); // sequential "abc" (and "123")
    }

    #[test]
    fn test_repeated_characters() {
        assert!(has_repeated_characters("aaa"));
        assert!(has_repeated_characters("xAAAx"));
        assert!(has_repeated_characters("x111"));
        assert!(!has_repeated_characters("aa"));
        assert!(!has_repeated_characters("aabaa"));
        // Case-sensitive: aA is not a repeat
        assert!(!has_repeated_characters("aAaAaA"));
    }

    #[test]
    fn test_name_containment() {
        assert!(contains_name("Maria1234", "Maria"));
        assert!(contains_name("xmariax", "MARIA"));
        assert!(!contains_name("Xk9#mPw2", "Maria"));
        assert!(!contains_name("anything", ""));

        let checks = evaluate("Maria1234", Some("Maria"), None);
        assert_eq!(checks.len(), 8);
        assert!(!checks[7].valid);
    }

    #[test]
    fn test_email_local_part_containment() {
        assert!(contains_email_local_part(
            "johnny47!",
            "johnny@example.com"
        ));
        assert!(contains_email_local_part("xJOHNNYx", "johnny@example.com"));
        assert!(!contains_email_local_part("Xk9#mPw2", "johnny@example.com"));
        assert!(!contains_email_local_part("anything", ""));

        let checks = evaluate("Xk9#mPw2", Some("Ana"), Some("ana.paula@example.com"));
        assert_eq!(checks.len(), 9);
        assert!(checks[7].valid);
        assert!(checks[8].valid);
    }

    #[test]
    fn test_evaluate_is_pure() {
        let a = evaluate("Maria1234", Some("Maria"), Some("maria@example.com"));
        let b = evaluate("Maria1234", Some("Maria"), Some("maria@example.com"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_strength_band_boundaries() {
        assert_eq!(StrengthLabel::from_score(1), StrengthLabel::VeryWeak);
        assert_eq!(StrengthLabel::from_score(30), StrengthLabel::VeryWeak);
        assert_eq!(StrengthLabel::from_score(31), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(60), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(61), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(85), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(86), StrengthLabel::Strong);

        assert_eq!(Severity::from_score(30), Severity::Error);
        assert_eq!(Severity::from_score(60), Severity::Warning);
        assert_eq!(Severity::from_score(85), Severity::Info);
        assert_eq!(Severity::from_score(100), Severity::Success);
    }

    #[test]
    fn test_strength_rounding() {
        // 6 of 7 rules: round(600/7) = 86
        let password = "Wmpq#k!u"; // length ok, lower, upper, no digit, not common, no seq, no repeat
        let checks = evaluate(password, None, None);
        let valid = checks.iter().filter(|c| c.valid).count();
        assert_eq!(valid, 6, "{checks:?}");
        assert_eq!(strength(password, None, None), 86);
    }
}
