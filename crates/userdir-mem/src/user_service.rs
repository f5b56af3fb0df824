//! In-memory user directory backend, for tests and embedded use.

use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;
use userdir_core::{
    FindOptions, Result as UserErrorResult, User, UserError, UserFilter, UserService, UserUpdate,
};
use uuid::Uuid;

/// `UserService` backed by a process-local map.
///
/// Every operation holds the map lock for its full duration, so each call
/// completes or fails independently of concurrent callers.
#[derive(Debug, Default)]
pub struct InMemUserService {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemUserService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserService for InMemUserService {
    async fn find_user_by_id(&self, id: Uuid) -> UserErrorResult<User> {
        let users = self.users.read().await;
        users.get(&id).cloned().ok_or_else(|| UserError::not_found())
    }

    async fn find_user(&self, filter: UserFilter) -> UserErrorResult<User> {
        let options = FindOptions {
            limit: Some(1),
            ..FindOptions::default()
        };
        let (mut page, _) = self.find_users(filter, options).await?;
        if page.is_empty() {
            return Err(UserError::not_found());
        }
        Ok(page.remove(0))
    }

    async fn find_users(
        &self,
        filter: UserFilter,
        options: FindOptions,
    ) -> UserErrorResult<(Vec<User>, usize)> {
        let users = self.users.read().await;
        let matches: Vec<User> = users
            .values()
            .filter(|user| filter.matches(user))
            .cloned()
            .collect();
        let total = matches.len();
        Ok((options.apply(matches), total))
    }

    async fn create_user(&self, user: &mut User) -> UserErrorResult<()> {
        // A fresh id is assigned unconditionally; a caller-supplied id is
        // never trusted.
        let id = Uuid::new_v4();
        user.id = Some(id);

        let mut users = self.users.write().await;
        users.insert(id, user.clone());
        debug!("created user {id}");
        Ok(())
    }

    async fn update_user(&self, id: Uuid, update: UserUpdate) -> UserErrorResult<User> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or_else(|| UserError::not_found())?;
        update.apply(user);
        Ok(user.clone())
    }

    async fn delete_user(&self, id: Uuid) -> UserErrorResult<()> {
        let mut users = self.users.write().await;
        if users.remove(&id).is_none() {
            return Err(UserError::not_found());
        }
        debug!("deleted user {id}");
        Ok(())
    }
}
