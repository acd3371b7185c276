use serde::Deserialize;

use crate::services::auth::Role;

/// Row of the read-only users table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct UserRecord {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) role: Role,
    #[serde(default = "default_active")]
    pub(crate) active: bool,
}

fn default_active() -> bool {
    true
}

impl UserRecord {
    pub(crate) fn new(name: &str, email: &str, role: Role, active: bool) -> Self {
        Self {
            name: name.to_owned(),
            email: email.to_owned(),
            role,
            active,
        }
    }

    /// Case-insensitive match on name, email or role label.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&needle)
            || self.email.to_lowercase().contains(&needle)
            || self.role.label().to_lowercase().contains(&needle)
    }
}

/// Read-only view model for the users table.
#[derive(Debug, Clone)]
pub(crate) struct UsersViewModel<'a> {
    pub(crate) rows: Vec<&'a UserRecord>,
    pub(crate) total: usize,
    pub(crate) filter: &'a str,
}
