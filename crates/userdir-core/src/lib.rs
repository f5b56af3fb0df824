pub mod error;
pub mod models;
pub mod service;

pub use error::error_location::ErrorLocation;
pub use error::{Result, UserError};
pub use models::find_options::{FindOptions, UserSortField};
pub use models::user::User;
pub use models::user_filter::UserFilter;
pub use models::user_status::UserStatus;
pub use models::user_update::UserUpdate;
pub use service::UserService;

#[cfg(test)]
mod tests;
