//! User entity - identity record of the directory.

use crate::UserStatus;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A member of the user directory.
///
/// The store assigns `id` at creation time; it is immutable afterward.
/// The serialized field names and the omit-when-unset rules for `id` and
/// `oauthID` are a compatibility contract with existing consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    /// External identity-provider reference; immutable once set and not
    /// touched by the update path
    #[serde(
        rename = "oauthID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub oauth_id: Option<String>,
    pub status: UserStatus,
}

impl User {
    /// Create a new user awaiting an id from the store
    pub fn new(name: String, status: UserStatus) -> Self {
        Self {
            id: None,
            name,
            oauth_id: None,
            status,
        }
    }
}
