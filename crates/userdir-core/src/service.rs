//! The user directory service contract.

use crate::{FindOptions, Result as UserErrorResult, User, UserFilter, UserUpdate};

use async_trait::async_trait;
use uuid::Uuid;

// Operation names recorded on wrapped internal errors.
pub const OP_FIND_USER_BY_ID: &str = "find_user_by_id";
pub const OP_FIND_USER: &str = "find_user";
pub const OP_FIND_USERS: &str = "find_users";
pub const OP_CREATE_USER: &str = "create_user";
pub const OP_UPDATE_USER: &str = "update_user";
pub const OP_DELETE_USER: &str = "delete_user";

/// A service for managing user data.
///
/// Implementations must be safe to call concurrently through a shared
/// reference; each operation completes or fails independently, and the
/// caller cancels an operation by dropping its future. Backend failures
/// outside the domain model are wrapped into [`crate::UserError::Internal`]
/// with the originating operation name rather than surfaced raw.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Returns a single user by id.
    async fn find_user_by_id(&self, id: Uuid) -> UserErrorResult<User>;

    /// Returns the first user that matches `filter` under the canonical
    /// ordering (ascending id).
    async fn find_user(&self, filter: UserFilter) -> UserErrorResult<User>;

    /// Returns one page of users matching `filter` and the total count of
    /// matching users store-wide, independent of pagination.
    async fn find_users(
        &self,
        filter: UserFilter,
        options: FindOptions,
    ) -> UserErrorResult<(Vec<User>, usize)>;

    /// Creates a new user and writes the newly assigned id into `user`.
    async fn create_user(&self, user: &mut User) -> UserErrorResult<()>;

    /// Applies `update` to the user with `id` and returns the new state.
    /// Fields absent from the changeset retain their prior value.
    async fn update_user(&self, id: Uuid, update: UserUpdate) -> UserErrorResult<User>;

    /// Removes a user by id.
    async fn delete_user(&self, id: Uuid) -> UserErrorResult<()>;
}
