use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid terminal config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Knobs a front end may pass in as JSON. Every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub hostname: String,
    pub username: String,
    pub platform: String,
    pub arch: String,
    pub kernel: String,
    /// `htop`/`btop` enter the repainting live view instead of printing once
    pub live_monitor: bool,
    pub refresh_interval_ms: u32,
    /// fixed seed for the simulator, entropy when absent
    pub seed: Option<u64>,
    /// static neofetch capture fetched at startup
    pub system_info_url: Option<String>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            hostname: "blog".to_string(),
            username: "srgls".to_string(),
            platform: "Ubuntu 24.04 LTS".to_string(),
            arch: "x86_64".to_string(),
            kernel: "6.8.0-1019-gke".to_string(),
            live_monitor: true,
            refresh_interval_ms: 500,
            seed: None,
            system_info_url: None,
        }
    }
}

impl TerminalConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
