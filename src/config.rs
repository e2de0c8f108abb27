use config::{ConfigError, Environment};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const ENV_PREFIX: &str = "EASY_STAY";

/// Simulated latencies and where the session slot lives
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Delay applied by login and signup
    pub auth_latency: Duration,
    pub booking_latency: Duration,
    pub add_property_latency: Duration,
    /// Slot name the signed-in user is persisted under
    pub session_key: String,
    pub session_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_latency: Duration::from_millis(1000),
            booking_latency: Duration::from_millis(1500),
            add_property_latency: Duration::from_millis(1000),
            session_key: "easy_stay_user".to_string(),
            session_dir: PathBuf::from(".easy_stay"),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `EASY_STAY_*` environment variables
    pub fn from_env() -> Self {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    /// Values that fail to convert are reported and replaced by their default.
    pub fn from_environment(environment: Environment) -> Self {
        let defaults = Self::default();
        let settings = match config::Config::builder()
            .add_source(environment.try_parsing(true))
            .build()
        {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring environment configuration: {}", e);
                return defaults;
            }
        };

        Self {
            auth_latency: latency(&settings, "auth_latency_ms", defaults.auth_latency),
            booking_latency: latency(&settings, "booking_latency_ms", defaults.booking_latency),
            add_property_latency: latency(
                &settings,
                "add_property_latency_ms",
                defaults.add_property_latency,
            ),
            session_key: setting::<String>(&settings, "session_key")
                .filter(|key| !key.trim().is_empty())
                .unwrap_or(defaults.session_key),
            session_dir: setting::<String>(&settings, "session_dir")
                .map(PathBuf::from)
                .unwrap_or(defaults.session_dir),
        }
    }

    /// No artificial delays
    pub fn instant() -> Self {
        Self {
            auth_latency: Duration::ZERO,
            booking_latency: Duration::ZERO,
            add_property_latency: Duration::ZERO,
            ..Self::default()
        }
    }
}

fn setting<'de, T: serde::Deserialize<'de>>(settings: &config::Config, key: &str) -> Option<T> {
    match settings.get::<T>(key) {
        Ok(value) => Some(value),
        Err(ConfigError::NotFound(_)) => None,
        Err(e) => {
            warn!("Ignoring {}_{}: {}", ENV_PREFIX, key.to_uppercase(), e);
            None
        }
    }
}

fn latency(settings: &config::Config, key: &str, default: Duration) -> Duration {
    setting::<u64>(settings, key)
        .map(Duration::from_millis)
        .unwrap_or(default)
}
