use chime_core::alarms::Alarm;
use chime_core::clock::ClockTicker;
use std::sync::Arc;
use tokio::sync::mpsc::{self, Receiver};

use crate::CliContext;

/// Start the clock ticker and forward fired alarms to the interaction loop.
///
/// The task handle is stored in the context's background tasks so it can
/// be aborted on exit.
pub async fn init_ticker(ctx: &CliContext) -> Receiver<Alarm> {
    let tick_secs = ctx.config.read().await.tick_interval_secs;
    let (tx, rx) = mpsc::channel(8);

    let mut ticker = ClockTicker::new(Arc::clone(&ctx.engine), tick_secs);
    let handle = tokio::spawn(async move {
        loop {
            let alarm = ticker.next_fired().await;
            if tx.send(alarm).await.is_err() {
                break;
            }
        }
    });

    ctx.tasks.lock().await.ticker = Some(handle);
    rx
}
