//! The login form.

use serde::{Deserialize, Serialize};

use medidash_contracts::{error::MedidashResult, validate::ValidationReport};

use crate::rule::{evaluate, FieldRule, RuleKind};

/// Shortest password the form accepts before asking the auth gate.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> MedidashResult<ValidationReport> {
        let rules = [
            FieldRule::required("email", "Email is required"),
            FieldRule::new("email", RuleKind::Email, "Email is invalid"),
            FieldRule::required("password", "Password is required"),
            FieldRule::new(
                "password",
                RuleKind::MinLength(MIN_PASSWORD_LEN),
                format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            ),
        ];
        Ok(evaluate(&rules, &serde_json::to_value(self)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_credentials_pass() {
        assert!(LoginForm::new("doctor@hospital.com", "password123")
            .validate()
            .unwrap()
            .passed);
    }

    #[test]
    fn blank_form_reports_required() {
        let report = LoginForm::default().validate().unwrap();
        assert_eq!(report.error_for("email"), Some("Email is required"));
        assert_eq!(report.error_for("password"), Some("Password is required"));
    }

    #[test]
    fn format_and_length() {
        let report = LoginForm::new("doctor", "12345").validate().unwrap();
        assert_eq!(report.error_for("email"), Some("Email is invalid"));
        assert_eq!(
            report.error_for("password"),
            Some("Password must be at least 6 characters")
        );
    }
}
