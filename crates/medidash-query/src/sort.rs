//! Sort direction shared by the list views.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use medidash_contracts::error::MedidashError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Apply the direction to an ascending comparison.
    ///
    /// `Desc` reverses the result, so equal keys stay `Equal` and a stable
    /// sort keeps their original relative order in both directions.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = MedidashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(MedidashError::InvalidValue {
                field: "sort direction".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Compare two names the way the list pages do: case-insensitively.
pub(crate) fn cmp_name(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desc_reverses_but_keeps_equal() {
        assert_eq!(SortDirection::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Desc.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(SortDirection::Asc.apply(Ordering::Less), Ordering::Less);
    }

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert_eq!(" asc ".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert!("up".parse::<SortDirection>().is_err());
    }

    #[test]
    fn names_compare_without_case() {
        assert_eq!(cmp_name("anita", "Anita"), Ordering::Equal);
        assert_eq!(cmp_name("amlodipine", "Azithromycin"), Ordering::Less);
    }
}
