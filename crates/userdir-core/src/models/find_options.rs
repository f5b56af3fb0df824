use crate::User;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Field a user listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserSortField {
    #[default]
    Id,
    Name,
}

impl UserSortField {
    /// Column name in the SQL backends
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
        }
    }

    fn compare(&self, a: &User, b: &User) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Name => a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)),
        }
    }
}

/// Pagination and ordering options for `find_users`.
/// The total count reported alongside a page is unaffected by these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindOptions {
    /// Maximum number of records to return; `None` returns all
    pub limit: Option<u32>,
    /// Records to skip before the page starts
    pub offset: u32,
    pub sort_by: UserSortField,
    pub descending: bool,
}

impl FindOptions {
    /// Canonical ordering and windowing, shared by every backend so they
    /// page identically: sort field with ascending id as tie-break,
    /// reversed wholesale when descending, then offset/limit.
    pub fn apply(&self, mut users: Vec<User>) -> Vec<User> {
        users.sort_by(|a, b| self.sort_by.compare(a, b));
        if self.descending {
            users.reverse();
        }
        users
            .into_iter()
            .skip(self.offset as usize)
            .take(self.limit.map_or(usize::MAX, |limit| limit as usize))
            .collect()
    }
}
