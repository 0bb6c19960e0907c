use std::io::BufRead;

use tokio::sync::mpsc::{self, Receiver};

/// Bridge blocking stdin reads onto the async interaction loop.
///
/// The reader thread exits when stdin closes or the receiver is dropped.
pub fn stdin_lines() -> Receiver<String> {
    let (tx, rx) = mpsc::channel(16);

    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });

    rx
}
