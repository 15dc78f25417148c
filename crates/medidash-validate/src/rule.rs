//! The field rule engine.
//!
//! `evaluate` walks an ordered rule list over a JSON payload. Rules for a
//! field are tried in order and the first failure wins, so a "required"
//! rule listed first masks the format rules after it. Every field is
//! checked; the caller sees all inline errors in one pass.
//!
//! Field names are the payload's JSON keys (camelCase for the forms).

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use medidash_contracts::{
    calendar::local_date,
    validate::{FieldError, ValidationReport},
};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex"));

/// What a rule checks.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleKind {
    /// Present, non-null, and (for strings) not blank.
    Required,
    /// A string of the form `x@y.z`.
    Email,
    /// A string with at least this many characters.
    MinLength(usize),
    /// A number strictly greater than the bound.
    GreaterThan(f64),
    /// A number greater than or equal to the bound.
    AtLeast(f64),
    /// A number less than or equal to the bound.
    AtMost(f64),
    /// A date strictly later than the given calendar date.
    After(NaiveDate),
}

/// One check on one field, with the message shown when it fails.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub field: String,
    pub message: String,
    pub kind: RuleKind,
}

impl FieldRule {
    pub fn new(field: impl Into<String>, kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            kind,
        }
    }

    pub fn required(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, RuleKind::Required, message)
    }

    /// True if `value` satisfies this rule.
    ///
    /// Only `Required` fails on an absent value; the other kinds leave that
    /// to whichever `Required` rule precedes them.
    fn passes(&self, value: Option<&Value>) -> bool {
        let Some(value) = value else {
            return !matches!(self.kind, RuleKind::Required);
        };
        match &self.kind {
            RuleKind::Required => match value {
                Value::String(s) => !s.trim().is_empty(),
                _ => true,
            },
            RuleKind::Email => value.as_str().is_some_and(|s| EMAIL_PATTERN.is_match(s)),
            RuleKind::MinLength(min) => value.as_str().is_some_and(|s| s.chars().count() >= *min),
            RuleKind::GreaterThan(bound) => value.as_f64().is_some_and(|n| n > *bound),
            RuleKind::AtLeast(bound) => value.as_f64().is_some_and(|n| n >= *bound),
            RuleKind::AtMost(bound) => value.as_f64().is_some_and(|n| n <= *bound),
            RuleKind::After(day) => value
                .as_str()
                .and_then(parse_day)
                .is_some_and(|d| d > *day),
        }
    }
}

/// Read a calendar date from either `YYYY-MM-DD` or an RFC 3339 timestamp.
fn parse_day(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|ts| local_date(ts.with_timezone(&Utc)))
    })
}

/// Look up a top-level key, treating JSON `null` as absent.
fn field<'v>(payload: &'v Value, name: &str) -> Option<&'v Value> {
    payload.get(name).filter(|v| !v.is_null())
}

/// Check `payload` against `rules` and collect one failure per field.
pub fn evaluate(rules: &[FieldRule], payload: &Value) -> ValidationReport {
    let mut failed: HashSet<&str> = HashSet::new();
    let mut failures = Vec::new();

    for rule in rules {
        if failed.contains(rule.field.as_str()) {
            continue;
        }
        if !rule.passes(field(payload, &rule.field)) {
            debug!(field = %rule.field, kind = ?rule.kind, "field rule failed");
            failed.insert(rule.field.as_str());
            failures.push(FieldError {
                field: rule.field.clone(),
                message: rule.message.clone(),
            });
        }
    }

    ValidationReport::from_failures(failures)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn required_masks_later_rules_on_the_same_field() {
        let rules = vec![
            FieldRule::required("email", "Email is required"),
            FieldRule::new("email", RuleKind::Email, "Email is invalid"),
        ];
        let report = evaluate(&rules, &json!({ "email": "  " }));
        assert!(!report.passed);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.error_for("email"), Some("Email is required"));

        let report = evaluate(&rules, &json!({ "email": "not-an-email" }));
        assert_eq!(report.error_for("email"), Some("Email is invalid"));
    }

    #[test]
    fn null_and_missing_are_absent() {
        let rules = vec![FieldRule::required("dateOfBirth", "Date of birth is required")];
        assert!(!evaluate(&rules, &json!({ "dateOfBirth": null })).passed);
        assert!(!evaluate(&rules, &json!({})).passed);
        assert!(evaluate(&rules, &json!({ "dateOfBirth": "1985-03-15" })).passed);
    }

    #[test]
    fn non_required_rules_pass_on_absent_values() {
        let rules = vec![
            FieldRule::new("email", RuleKind::Email, "bad"),
            FieldRule::new("price", RuleKind::GreaterThan(0.0), "bad"),
            FieldRule::new("expiryDate", RuleKind::After(NaiveDate::MIN), "bad"),
        ];
        assert!(evaluate(&rules, &json!({})).passed);
    }

    #[test]
    fn email_pattern() {
        let rules = vec![FieldRule::new("email", RuleKind::Email, "Email is invalid")];
        assert!(evaluate(&rules, &json!({ "email": "doctor@hospital.com" })).passed);
        assert!(!evaluate(&rules, &json!({ "email": "doctor@hospital" })).passed);
        assert!(!evaluate(&rules, &json!({ "email": 42 })).passed);
    }

    #[test]
    fn numeric_bounds() {
        let rules = vec![
            FieldRule::new("price", RuleKind::GreaterThan(0.0), "Price must be greater than 0"),
            FieldRule::new("stock", RuleKind::AtLeast(0.0), "Stock cannot be negative"),
        ];
        let report = evaluate(&rules, &json!({ "price": 0, "stock": 0 }));
        assert_eq!(report.error_for("price"), Some("Price must be greater than 0"));
        assert_eq!(report.error_for("stock"), None);

        let report = evaluate(&rules, &json!({ "price": 0.01, "stock": -1 }));
        assert_eq!(report.error_for("price"), None);
        assert_eq!(report.error_for("stock"), Some("Stock cannot be negative"));
    }

    #[test]
    fn at_most_is_inclusive() {
        let rules = vec![FieldRule::new("stock", RuleKind::AtMost(100.0), "Stock is too large")];
        assert!(evaluate(&rules, &json!({ "stock": 100 })).passed);
        assert!(evaluate(&rules, &json!({})).passed);
        let report = evaluate(&rules, &json!({ "stock": 101 }));
        assert_eq!(report.error_for("stock"), Some("Stock is too large"));
        assert!(!evaluate(&rules, &json!({ "stock": "many" })).passed);
    }

    #[test]
    fn min_length_counts_characters() {
        let rules = vec![FieldRule::new("password", RuleKind::MinLength(6), "too short")];
        assert!(!evaluate(&rules, &json!({ "password": "12345" })).passed);
        assert!(evaluate(&rules, &json!({ "password": "123456" })).passed);
    }

    #[test]
    fn after_is_strict() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let rules = vec![FieldRule::new("expiryDate", RuleKind::After(today), "Expiry date must be in the future")];
        assert!(!evaluate(&rules, &json!({ "expiryDate": "2026-03-10" })).passed);
        assert!(evaluate(&rules, &json!({ "expiryDate": "2026-03-11" })).passed);
        assert!(!evaluate(&rules, &json!({ "expiryDate": "soon" })).passed);
    }

    #[test]
    fn failures_keep_rule_order() {
        let rules = vec![
            FieldRule::required("name", "Name is required"),
            FieldRule::required("phone", "Phone is required"),
        ];
        let report = evaluate(&rules, &json!({}));
        let fields: Vec<&str> = report.failures.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "phone"]);
    }
}
