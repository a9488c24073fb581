use std::sync::Arc;

use reqwest::Client;

use crate::config::Config;
use crate::models::Record;

/// Issues the outbound calls. One shared `Client` backs every request.
pub struct Sender {
    client: Client,
    config: Arc<Config>,
}

impl Sender {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn target(&self, path: &str) -> String {
        let base = self.config.endpoint_url.trim_end_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }

    /// Sends one record with a single PUT. The response body is not
    /// consumed; only the status is logged.
    pub async fn put_record(&self) -> Result<(), reqwest::Error> {
        let record = Record::new(&self.config.label, self.config.value);
        let response = self
            .client
            .put(self.target(&self.config.put_path))
            .json(&record)
            .send()
            .await?;

        tracing::info!(status = response.status().as_u16(), "record sent");
        Ok(())
    }

    /// Fires `burst_count` POSTs without awaiting each one before issuing
    /// the next. The counter is printed per iteration and `done` after the
    /// loop, so stdout order never depends on network completion order.
    /// The spawned tasks are joined before returning; each logs its
    /// response status or transport error.
    pub async fn run_burst(&self) {
        let mut handles = Vec::with_capacity(self.config.burst_count as usize);
        for counter in 0..self.config.burst_count {
            let client = self.client.clone();
            let url = self.target(&self.config.burst_path);
            let record = Record::new(&self.config.label, counter);
            handles.push(tokio::spawn(async move {
                match client.post(url).json(&record).send().await {
                    Ok(response) => {
                        tracing::info!(
                            counter = record.y,
                            status = response.status().as_u16(),
                            "record posted"
                        );
                    }
                    Err(err) => {
                        tracing::warn!(counter = record.y, error = %err, "post failed");
                    }
                }
            }));
            println!("{counter}");
        }
        println!("done");

        for handle in handles {
            let _ = handle.await;
        }
    }
}
