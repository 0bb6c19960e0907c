use tokio::task::JoinHandle;

#[derive(Default)]
pub struct BackgroundTasks {
    pub ticker: Option<JoinHandle<()>>,
}

impl BackgroundTasks {
    pub async fn abort_all(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }
}
