//! SQLite-backed user directory.
//!
//! Uuids are stored as TEXT and converted at the row boundary. Queries use
//! runtime binds, so no offline query metadata or compile-time database is
//! required. Filters translate to `(?N IS NULL OR col = ?N)` so a single
//! statement covers every present/absent combination.

use std::str::FromStr;

use async_trait::async_trait;
use log::debug;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use userdir_core::service::{
    OP_CREATE_USER, OP_DELETE_USER, OP_FIND_USER, OP_FIND_USER_BY_ID, OP_FIND_USERS,
    OP_UPDATE_USER,
};
use userdir_core::{
    FindOptions, Result as UserErrorResult, User, UserError, UserFilter, UserService,
    UserSortField, UserStatus, UserUpdate,
};
use uuid::Uuid;

const SELECT_USER: &str = "SELECT id, name, oauth_id, status FROM users";
const FILTER_WHERE: &str = "WHERE (?1 IS NULL OR id = ?1) AND (?2 IS NULL OR name = ?2)";

pub struct SqliteUserService {
    pool: SqlitePool,
}

impl SqliteUserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn decode_user(row: &SqliteRow, op: &'static str) -> UserErrorResult<User> {
    let id: String = row.try_get("id").map_err(|e| UserError::internal(op, e))?;
    let id = Uuid::parse_str(&id).map_err(|e| UserError::internal(op, e))?;
    let name: String = row.try_get("name").map_err(|e| UserError::internal(op, e))?;
    let oauth_id: Option<String> = row
        .try_get("oauth_id")
        .map_err(|e| UserError::internal(op, e))?;
    let status: String = row
        .try_get("status")
        .map_err(|e| UserError::internal(op, e))?;
    // A stored row holding an unrecognized status literal is corruption,
    // not a caller error
    let status = UserStatus::from_str(&status).map_err(|e| UserError::internal(op, e))?;

    Ok(User {
        id: Some(id),
        name,
        oauth_id,
        status,
    })
}

fn order_clause(options: &FindOptions) -> String {
    let direction = if options.descending { "DESC" } else { "ASC" };
    match options.sort_by {
        UserSortField::Id => format!("ORDER BY id {direction}"),
        // Id is the tie-break; it follows the overall direction so the
        // ordering matches `FindOptions::apply` exactly
        UserSortField::Name => format!("ORDER BY name {direction}, id {direction}"),
    }
}

#[async_trait]
impl UserService for SqliteUserService {
    async fn find_user_by_id(&self, id: Uuid) -> UserErrorResult<User> {
        let id_str = id.to_string();

        let row = sqlx::query("SELECT id, name, oauth_id, status FROM users WHERE id = ?")
            .bind(&id_str)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserError::internal(OP_FIND_USER_BY_ID, e))?;

        match row {
            Some(row) => decode_user(&row, OP_FIND_USER_BY_ID),
            None => Err(UserError::not_found()),
        }
    }

    async fn find_user(&self, filter: UserFilter) -> UserErrorResult<User> {
        let id_filter = filter.id.map(|id| id.to_string());
        let sql = format!("{SELECT_USER} {FILTER_WHERE} ORDER BY id ASC LIMIT 1");

        let row = sqlx::query(&sql)
            .bind(&id_filter)
            .bind(&filter.name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserError::internal(OP_FIND_USER, e))?;

        match row {
            Some(row) => decode_user(&row, OP_FIND_USER),
            None => Err(UserError::not_found()),
        }
    }

    async fn find_users(
        &self,
        filter: UserFilter,
        options: FindOptions,
    ) -> UserErrorResult<(Vec<User>, usize)> {
        let id_filter = filter.id.map(|id| id.to_string());

        // Total reflects every match store-wide, not just the page below
        let count_sql = format!("SELECT COUNT(*) FROM users {FILTER_WHERE}");
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(&id_filter)
            .bind(&filter.name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| UserError::internal(OP_FIND_USERS, e))?;

        // LIMIT -1 is SQLite for "no limit"
        let limit = options.limit.map_or(-1_i64, i64::from);
        let offset = i64::from(options.offset);
        let sql = format!(
            "{SELECT_USER} {FILTER_WHERE} {} LIMIT ?3 OFFSET ?4",
            order_clause(&options)
        );

        let rows = sqlx::query(&sql)
            .bind(&id_filter)
            .bind(&filter.name)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| UserError::internal(OP_FIND_USERS, e))?;

        let users = rows
            .iter()
            .map(|row| decode_user(row, OP_FIND_USERS))
            .collect::<UserErrorResult<Vec<_>>>()?;

        Ok((users, total as usize))
    }

    async fn create_user(&self, user: &mut User) -> UserErrorResult<()> {
        // A fresh id is assigned unconditionally; a caller-supplied id is
        // never trusted.
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        sqlx::query("INSERT INTO users (id, name, oauth_id, status) VALUES (?, ?, ?, ?)")
            .bind(&id_str)
            .bind(&user.name)
            .bind(&user.oauth_id)
            .bind(user.status.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| UserError::internal(OP_CREATE_USER, e))?;

        user.id = Some(id);
        debug!("created user {id}");
        Ok(())
    }

    async fn update_user(&self, id: Uuid, update: UserUpdate) -> UserErrorResult<User> {
        let id_str = id.to_string();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| UserError::internal(OP_UPDATE_USER, e))?;

        let row = sqlx::query("SELECT id, name, oauth_id, status FROM users WHERE id = ?")
            .bind(&id_str)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| UserError::internal(OP_UPDATE_USER, e))?;

        let mut user = match row {
            Some(row) => decode_user(&row, OP_UPDATE_USER)?,
            None => return Err(UserError::not_found()),
        };

        update.apply(&mut user);

        // oauth_id is immutable and not part of the update path
        sqlx::query("UPDATE users SET name = ?, status = ? WHERE id = ?")
            .bind(&user.name)
            .bind(user.status.as_str())
            .bind(&id_str)
            .execute(&mut *tx)
            .await
            .map_err(|e| UserError::internal(OP_UPDATE_USER, e))?;

        tx.commit()
            .await
            .map_err(|e| UserError::internal(OP_UPDATE_USER, e))?;

        Ok(user)
    }

    async fn delete_user(&self, id: Uuid) -> UserErrorResult<()> {
        let id_str = id.to_string();

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(&id_str)
            .execute(&self.pool)
            .await
            .map_err(|e| UserError::internal(OP_DELETE_USER, e))?;

        if result.rows_affected() == 0 {
            return Err(UserError::not_found());
        }
        debug!("deleted user {id}");
        Ok(())
    }
}
