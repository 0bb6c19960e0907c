use chrono::{Local, Timelike};
use std::io::Write;

use crate::CliContext;

pub fn show_time() {
    let now = Local::now();
    println!(
        "Current Time: {:02}:{:02}:{:02}",
        now.hour(),
        now.minute(),
        now.second()
    );
}

/// Create an alarm from a raw `<day> <time>` line.
///
/// Input is accepted uncritically: a missing or non-numeric day token
/// falls back to -1 and a missing time to an empty string, producing an
/// alarm that can never match a tick.
pub async fn create_alarm(input: &str, ctx: &CliContext) {
    let mut tokens = input.split_whitespace();
    let day: i32 = tokens.next().and_then(|t| t.parse().ok()).unwrap_or(-1);
    let time = tokens.next().unwrap_or("").to_string();

    let mut engine = ctx.engine.write().await;
    engine.create(day, time.clone());
    println!("Alarm set for day {} at {}", day, time);
}

/// Print the alarm list with 1-based indices. Returns false when empty.
pub async fn list_alarms(ctx: &CliContext) -> bool {
    let engine = ctx.engine.read().await;
    if engine.alarms().is_empty() {
        println!("No alarms set.");
        return false;
    }

    println!("Current alarms:");
    for (index, alarm) in engine.alarms().iter().enumerate() {
        println!("{}. Day: {}, Time: {}", index + 1, alarm.day, alarm.time);
    }
    true
}

/// Delete the alarm at the given 1-based display number.
pub async fn delete_alarm(input: &str, ctx: &CliContext) {
    let Ok(index) = input.trim().parse::<usize>() else {
        println!("Invalid number.");
        return;
    };

    let mut engine = ctx.engine.write().await;
    match engine.delete_by_index(index) {
        Ok(alarm) => println!("Alarm at {} deleted successfully", alarm.time),
        Err(_) => println!("Invalid number."),
    }
}

/// Snooze the firing alarm to the current time plus the snooze interval.
pub async fn snooze_alarm(id: u64, ctx: &CliContext) {
    let now = Local::now().naive_local();
    let mut engine = ctx.engine.write().await;
    match engine.snooze(id, now) {
        Ok(new_time) => println!("Alarm snoozed to {}", new_time),
        Err(err) => println!("{}", err),
    }
}

/// Dismiss the firing alarm, removing it.
pub async fn dismiss_alarm(id: u64, ctx: &CliContext) {
    let mut engine = ctx.engine.write().await;
    match engine.dismiss(id) {
        Ok(alarm) => println!("Alarm at {} deleted successfully", alarm.time),
        Err(err) => println!("{}", err),
    }
}

pub fn exit() {
    println!("Exiting the application.");
    let _ = std::io::stdout().flush();
}
