mod background_tasks;
mod config;
pub mod error;

pub use background_tasks::BackgroundTasks;
pub use config::AppConfig;
pub use error::ConfigError;
