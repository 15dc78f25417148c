//! Password strength meter shown under the login password field.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Empty,
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    /// Meter fill, 0 to 4.
    pub fn score(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::Empty => "",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Fair => "Fair",
            PasswordStrength::Good => "Good",
            PasswordStrength::Strong => "Strong",
        }
    }
}

/// Rate a password by length alone.
pub fn password_strength(password: &str) -> PasswordStrength {
    match password.chars().count() {
        0 => PasswordStrength::Empty,
        1..=5 => PasswordStrength::Weak,
        6..=7 => PasswordStrength::Fair,
        8..=11 => PasswordStrength::Good,
        _ => PasswordStrength::Strong,
    }
}
