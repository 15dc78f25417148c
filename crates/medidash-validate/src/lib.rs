//! # medidash-validate
//!
//! Field-level validation for the three input forms: patient registration,
//! medicine entry, and login.
//!
//! Each form is serialized to JSON and checked against an ordered list of
//! `FieldRule`s by `rule::evaluate`. Failures come back as a
//! `ValidationReport` of inline messages; nothing here ever touches the
//! store. A form is only converted into a store input once its report
//! passes.

pub mod login;
pub mod medicine_form;
pub mod patient_form;
pub mod rule;

pub use login::LoginForm;
pub use medicine_form::MedicineForm;
pub use patient_form::PatientForm;
pub use rule::{evaluate, FieldRule, RuleKind};

/// Trim `item` and append it unless it is empty or already present.
///
/// Backs the tag-style inputs (allergies, side effects, contraindications).
pub(crate) fn push_unique(list: &mut Vec<String>, item: &str) -> bool {
    let item = item.trim();
    if item.is_empty() || list.iter().any(|existing| existing == item) {
        return false;
    }
    list.push(item.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::push_unique;

    #[test]
    fn push_unique_trims_and_skips_duplicates() {
        let mut tags = Vec::new();
        assert!(push_unique(&mut tags, "  Penicillin "));
        assert!(!push_unique(&mut tags, "Penicillin"));
        assert!(!push_unique(&mut tags, "   "));
        assert_eq!(tags, vec!["Penicillin"]);
    }
}
