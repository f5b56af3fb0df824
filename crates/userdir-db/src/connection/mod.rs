pub mod database_settings;
