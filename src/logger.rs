use std::path::PathBuf;

use chrono::Utc;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Append-only audit file with one line per generate call.
#[derive(Debug, Clone)]
pub struct RequestLog {
    path: PathBuf
}

impl RequestLog {

    pub fn new(path: impl Into<PathBuf>) -> Self {

        RequestLog { path: path.into() }

    }

    pub async fn record(&self, outcome: &str, prompt_type: &str, model: &str, latency_ms: u128) {

        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
        let log_entry = format!(
            "{} | {:8} | {:8} | {:30} | {:6} ms\n",
            timestamp, outcome, prompt_type, model, latency_ms
        );

        // never fail the request over the audit file
        if let Err(err) = self.append(log_entry.as_bytes()).await {
            tracing::warn!(path = %self.path.display(), error = %err, "failed to write request log");
        }

    }

    async fn append(&self, bytes: &[u8]) -> std::io::Result<()> {

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(bytes).await?;
        file.flush().await

    }

}
