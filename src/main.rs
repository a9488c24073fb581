mod config;
mod models;
mod sender;

use std::{env, sync::Arc};

use tracing_subscriber::{EnvFilter, FmtSubscriber};
use uuid::Uuid;

use config::load_config;
use sender::Sender;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[tokio::main]
async fn main() {
    init_tracing();

    // Load config from file and env; env wins.
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "failed to load config");
            std::process::exit(1);
        }
    };

    let run_id = Uuid::new_v4();
    tracing::info!(%run_id, endpoint = %config.endpoint_url, "beacon agent starting");

    let sender = Sender::new(Arc::new(config));
    let mode = env::args().nth(1).unwrap_or_else(|| "put".to_string());
    match mode.as_str() {
        "put" => {
            if let Err(err) = sender.put_record().await {
                tracing::error!(error = %err, "put failed");
                std::process::exit(1);
            }
        }
        "burst" => sender.run_burst().await,
        other => {
            tracing::error!(mode = %other, "unknown mode, expected put or burst");
            std::process::exit(1);
        }
    }
}
