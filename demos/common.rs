use std::io;

use simpro::{ClientConfig, SimProClient};
use tracing_subscriber::EnvFilter;

/// Reads `SIMPRO_API_KEY`, `SIMPRO_API_CLIENT` and optional `SIMPRO_BASE_URL`.
pub fn client_from_env() -> Result<SimProClient, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = required_env("SIMPRO_API_KEY")?;
    let api_client = required_env("SIMPRO_API_CLIENT")?;
    let base_url = std::env::var("SIMPRO_BASE_URL").ok();

    Ok(SimProClient::new(ClientConfig {
        base_url,
        api_key,
        api_client,
        ..Default::default()
    })?)
}

pub fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}
