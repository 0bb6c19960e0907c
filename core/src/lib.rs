pub mod alarms;
pub mod clock;
pub mod context;

// Re-exports for convenience
pub use alarms::{Alarm, AlarmEngine, AlarmError};
pub use clock::ClockTicker;
pub use context::{AppConfig, BackgroundTasks, ConfigError};
