use std::sync::Arc;

use chime_core::alarms::AlarmEngine;
use chime_core::context::{AppConfig, BackgroundTasks};
use tokio::sync::{Mutex, RwLock};

/// Holds all shared state for the CLI application.
/// This is a lightweight container - logic lives in the alarm engine.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<RwLock<AppConfig>>,
    /// Shared between the ticker task and the interaction loop
    pub engine: Arc<RwLock<AlarmEngine>>,
    pub tasks: Arc<Mutex<BackgroundTasks>>,
}

impl CliContext {
    pub fn new() -> Self {
        let config = AppConfig::load();
        let engine = AlarmEngine::from_config(&config);
        Self {
            config: Arc::new(RwLock::new(config)),
            engine: Arc::new(RwLock::new(engine)),
            tasks: Arc::new(Mutex::new(BackgroundTasks::default())),
        }
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}
