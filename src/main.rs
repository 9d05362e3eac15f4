#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use chimp_load_generator::{LoadConfig, LoadController, LoadRunner, Metrics};
use tracing::info;

fn init_tracing() {
    let fmt = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env());
    fmt.json().init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let config = LoadConfig::default();
    info!(config = %serde_json::to_string(&config)?, "starting load generator");
    let metrics = Metrics::new()?;
    let runner = LoadRunner::with_reserved(LoadController::default(), metrics, config)?;
    runner.run().await;
    Ok(())
}
