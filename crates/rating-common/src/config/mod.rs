//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, CalendarConfig, ConfigError, DatabaseConfig, Environment,
};
