use crate::{User, UserStatus};

use serde::{Deserialize, Serialize};

/// Partial changeset for a user.
/// Only fields which are set are applied; an absent field leaves the prior
/// value in place (absence is distinguishable from an explicit value).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

impl UserUpdate {
    /// Replace exactly the fields present in this changeset
    pub fn apply(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(status) = self.status {
            user.status = status;
        }
    }

    /// True when the changeset would modify nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.status.is_none()
    }
}
