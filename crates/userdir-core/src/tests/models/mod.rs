mod find_options;
mod user;
mod user_status;
