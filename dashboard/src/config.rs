use serde::{Deserialize, Serialize};
use std::fs;
use tracing::info;

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// base URL of the logger, eg. "http://192.168.4.1"
    pub device_url: String,
    /// per-request timeout, None lets reqwest wait indefinitely
    pub request_timeout_in_ms: Option<u64>,
}

pub fn read_config(path: &str) -> Result<Config, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Config file '{path}' not found - {e}"))?;

    let config: Config =
        serde_yaml::from_str(&content).map_err(|e| format!("Failed to parse YAML: {e}"))?;

    let config = normalize(config)?;
    info!("Talking to device at '{}'", config.device_url);
    Ok(config)
}

/// endpoint paths carry their own leading slash, so the base must not end in one
fn normalize(mut config: Config) -> Result<Config, String> {
    config.device_url = config.device_url.trim().trim_end_matches('/').to_string();
    if config.device_url.is_empty() {
        return Err("Configured device_url is empty".to_string());
    }
    if !config.device_url.starts_with("http://") && !config.device_url.starts_with("https://") {
        return Err(format!(
            "Configured device_url ('{}') is not a http(s) URL",
            config.device_url
        ));
    }
    Ok(config)
}
