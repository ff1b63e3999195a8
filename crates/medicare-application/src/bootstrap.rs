//! Wires the shell to the fixture-backed infrastructure.

use std::sync::Arc;

use anyhow::{Context, Result};
use medicare_core::clock::{Clock, FixedClock, SystemClock};
use medicare_core::config::AppConfig;
use medicare_core::policy::RolePolicy;
use medicare_infrastructure::{FixtureStore, SimulatedAuthGateway, SimulatedSubmitGateway};

use crate::shell::{Shell, ShellServices};

/// First identifier handed out by the simulated create endpoints; the
/// fixtures occupy 1 through 5.
const FIRST_CREATED_ID: u32 = 6;

pub struct AppBootstrap {
    pub shell: Shell,
    pub config: AppConfig,
}

impl AppBootstrap {
    /// Builds a shell over the built-in fixtures.
    ///
    /// `config.today` pins the clock; otherwise the local date is used.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let services = services_for(&config);
        let shell = Shell::new(services, RolePolicy::standard())
            .context("Failed to initialise the application shell")?;

        tracing::info!(
            "[Bootstrap] Shell ready (login delay {:?}, submit delay {:?})",
            config.login_delay(),
            config.submit_delay()
        );
        Ok(Self { shell, config })
    }
}

/// Simulated collaborators configured from `config`.
pub fn services_for(config: &AppConfig) -> ShellServices {
    let store = Arc::new(FixtureStore::new());
    let clock: Arc<dyn Clock> = match config.today {
        Some(date) => {
            tracing::info!("[Bootstrap] Clock pinned to {}", date);
            Arc::new(FixedClock(date))
        }
        None => Arc::new(SystemClock),
    };

    ShellServices {
        auth: Arc::new(SimulatedAuthGateway::new(config.login_delay())),
        patients: store.clone(),
        appointments: store.clone(),
        directory: store,
        patient_gateway: Arc::new(SimulatedSubmitGateway::new(
            config.submit_delay(),
            FIRST_CREATED_ID,
        )),
        appointment_gateway: Arc::new(SimulatedSubmitGateway::new(
            config.submit_delay(),
            FIRST_CREATED_ID,
        )),
        clock,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use medicare_core::session::Credentials;

    #[tokio::test]
    async fn test_bootstrap_with_pinned_date() {
        let config = AppConfig {
            today: NaiveDate::from_ymd_opt(2024, 1, 25),
            ..AppConfig::default()
        }
        .without_delays();

        let mut app = AppBootstrap::from_config(config).unwrap();
        assert_eq!(app.shell.today(), NaiveDate::from_ymd_opt(2024, 1, 25).unwrap());

        let role = app
            .shell
            .login(Credentials::new("receptionist@medicare.com", "pw"))
            .await
            .unwrap();
        assert_eq!(role.to_string(), "receptionist");
    }
}
