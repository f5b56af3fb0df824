pub mod find_options;
pub mod user;
pub mod user_filter;
pub mod user_status;
pub mod user_update;
