//! Staff users and the display theme preference.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

string_enum! {
    pub enum Role as "role" {
        Doctor => "doctor",
        Nurse => "nurse",
        Admin => "admin",
    }
}

/// A signed-in staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
}

string_enum! {
    /// The persisted display theme. The only state that survives a restart.
    #[derive(Default)]
    pub enum Theme as "theme" {
        #[default]
        Light => "light",
        Dark => "dark",
    }
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}
