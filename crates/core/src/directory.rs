//! User directory filters.

use memoraid_types::{AccountStatus, Role, User};

/// Client-side filter over the full user list. `None` matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub role: Option<Role>,
    pub status: Option<AccountStatus>,
    /// Compared case-insensitively against `care_level`.
    pub level: Option<String>,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        let role_match = self.role.map_or(true, |role| user.role == role);
        let status_match = self.status.map_or(true, |status| user.status == status);
        let level_match = match &self.level {
            None => true,
            Some(level) => user
                .care_level
                .as_deref()
                .is_some_and(|care| !care.is_empty() && care.eq_ignore_ascii_case(level)),
        };
        role_match && status_match && level_match
    }

    pub fn apply<'a>(&'a self, users: &'a [User]) -> impl Iterator<Item = &'a User> + 'a {
        users.iter().filter(move |u| self.matches(u))
    }
}
