//! HTTP server configuration loaded via OrthoConfig.

use std::collections::HashMap;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use user_service::domain::FeatureToggles;
use user_service::outbound::persistence::PoolConfig;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_CONNECT_DEADLINE_SECS: u64 = 20;
const DEFAULT_CONNECT_POLL_INTERVAL_MS: u64 = 500;

/// Configuration values controlling the service at startup.
///
/// Layered from defaults, an optional configuration file, `USER_SERVICE_*`
/// environment variables, and CLI flags. Secret material (the database URL)
/// is expected to arrive through the loader like any other value; how it is
/// provisioned is outside this service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_SERVICE")]
pub struct AppConfig {
    /// Service name reported by the health endpoint.
    pub name: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// PostgreSQL connection URL; the in-memory fixture repository is used
    /// when absent.
    pub database_url: Option<String>,
    /// Maximum size of the database connection pool.
    pub max_connections: Option<u32>,
    /// Overall deadline for the startup connectivity poll, in seconds.
    pub connect_deadline_secs: Option<u64>,
    /// Delay between startup connectivity probes, in milliseconds.
    pub connect_poll_interval_ms: Option<u64>,
    /// Feature-toggle defaults, read-only for the process lifetime.
    #[ortho_config(skip_cli)]
    pub feature_toggles: Option<HashMap<String, bool>>,
}

impl AppConfig {
    /// Return the configured port, falling back to the default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Overall deadline for the startup connectivity poll.
    pub fn connect_deadline(&self) -> Duration {
        Duration::from_secs(
            self.connect_deadline_secs
                .unwrap_or(DEFAULT_CONNECT_DEADLINE_SECS),
        )
    }

    /// Delay between startup connectivity probes.
    pub fn connect_poll_interval(&self) -> Duration {
        Duration::from_millis(
            self.connect_poll_interval_ms
                .unwrap_or(DEFAULT_CONNECT_POLL_INTERVAL_MS),
        )
    }

    /// Build the pool configuration when a database URL is present.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        self.database_url.as_deref().map(|url| {
            PoolConfig::new(url)
                .with_max_size(self.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS))
        })
    }

    /// Build the immutable toggle set from configured defaults.
    pub fn toggles(&self) -> FeatureToggles {
        FeatureToggles::new(self.feature_toggles.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for configuration fallbacks.

    use super::*;
    use rstest::rstest;

    fn bare_config() -> AppConfig {
        AppConfig {
            name: None,
            port: None,
            database_url: None,
            max_connections: None,
            connect_deadline_secs: None,
            connect_poll_interval_ms: None,
            feature_toggles: None,
        }
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_configured() {
        let config = bare_config();

        assert_eq!(config.port(), 8080);
        assert_eq!(config.connect_deadline(), Duration::from_secs(20));
        assert_eq!(config.connect_poll_interval(), Duration::from_millis(500));
        assert!(config.pool_config().is_none());
    }

    #[rstest]
    fn configured_values_override_the_defaults() {
        let config = AppConfig {
            port: Some(12345),
            database_url: Some("postgres://localhost/users".to_owned()),
            max_connections: Some(4),
            connect_deadline_secs: Some(5),
            connect_poll_interval_ms: Some(50),
            ..bare_config()
        };

        assert_eq!(config.port(), 12345);
        assert_eq!(config.connect_deadline(), Duration::from_secs(5));
        assert_eq!(config.connect_poll_interval(), Duration::from_millis(50));
        let pool = config.pool_config().expect("pool config present");
        assert_eq!(pool.database_url(), "postgres://localhost/users");
    }

    #[rstest]
    fn toggle_defaults_feed_the_resolver() {
        let config = AppConfig {
            feature_toggles: Some(
                [("enableNewFeature".to_owned(), true)].into_iter().collect(),
            ),
            ..bare_config()
        };

        let toggles = config.toggles();
        assert!(toggles.is_enabled(
            "enableNewFeature",
            &user_service::domain::ToggleOverrides::default()
        ));
    }
}
