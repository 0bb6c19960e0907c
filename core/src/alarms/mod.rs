//! Alarm system
//!
//! This module provides:
//! - **Alarm**: a scheduled day-of-week + "HH:MM" entry with snooze state
//! - **Engine**: owns the alarm list and the firing state machine
//!
//! # Lifecycle
//!
//! 1. Alarm created from user input → appended to the engine's list
//! 2. Clock tick matches `(day, "HH:MM")` → engine enters firing state
//! 3. User snoozes (reschedule, bounded) or dismisses (remove) → idle

mod alarm;
mod engine;
pub mod error;

#[cfg(test)]
mod engine_tests;

pub use alarm::Alarm;
pub use engine::AlarmEngine;
pub use error::AlarmError;
