use crate::User;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exact-match constraints restricting the users a lookup returns.
/// Present fields are conjunctive; an absent field places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserFilter {
    pub fn by_id(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn by_name(name: String) -> Self {
        Self {
            name: Some(name),
            ..Self::default()
        }
    }

    /// Whether `user` satisfies every present constraint
    pub fn matches(&self, user: &User) -> bool {
        if let Some(id) = self.id {
            if user.id != Some(id) {
                return false;
            }
        }
        if let Some(name) = &self.name {
            if user.name != *name {
                return false;
            }
        }
        true
    }
}
