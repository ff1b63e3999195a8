//! Application configuration model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration, read from `config.toml`.
///
/// Every field has a default, so a missing or partial file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Simulated latency of the login endpoint.
    pub login_delay_ms: u64,
    /// Simulated latency of the create endpoints.
    pub submit_delay_ms: u64,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Pins "today" for date filters (ISO date).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: 1500,
            submit_delay_ms: 2000,
            log_level: "info".to_string(),
            today: None,
        }
    }
}

impl AppConfig {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Disables every simulated delay.
    pub fn without_delays(mut self) -> Self {
        self.login_delay_ms = 0;
        self.submit_delay_ms = 0;
        self
    }
}
