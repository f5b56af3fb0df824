pub mod connection;
pub mod error;
pub mod user_service;

pub use connection::database_settings::{DatabaseSettings, connect};
pub use error::{DbError, Result};
pub use user_service::SqliteUserService;
