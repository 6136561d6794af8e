use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use crate::domain::validation_constants::{cups, leaderboard, order_time};
use crate::domain::{CupPolicy, OrderTime};
use crate::views::LeaderboardSettings;
use crate::{Error, Result};

/// Directory searched for layered configuration files
pub const CONFIG_DIR: &str = "config";

/// Prefix for environment overrides, e.g. `DRINK_TALLY__LEDGER__CUP_MAX=0`
pub const ENV_PREFIX: &str = "DRINK_TALLY";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub ledger: LedgerSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub environment: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LedgerSettings {
    pub cup_min: u32,
    /// Zero disables the upper bound
    pub cup_max: u32,
    pub default_time: String,
    pub top_store_limit: usize,
    pub unknown_member_label: String,
    /// JSON document used to seed the in-memory stores
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Compact,
    Pretty,
    Full,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
}

impl Settings {
    pub fn new() -> std::result::Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        Self::load(&environment, Path::new(CONFIG_DIR))
    }

    /// Load settings for `environment`, reading optional files from `config_dir`
    pub fn load(environment: &str, config_dir: &Path) -> std::result::Result<Self, ConfigError> {
        let file = |name: &str| {
            File::with_name(&config_dir.join(name).to_string_lossy()).required(false)
        };

        let config = Config::builder()
            // Start with default values
            .set_default("application.environment", environment)?
            .set_default("ledger.cup_min", i64::from(cups::DEFAULT_MIN))?
            .set_default("ledger.cup_max", i64::from(cups::DEFAULT_MAX))?
            .set_default("ledger.default_time", order_time::DEFAULT)?
            .set_default("ledger.top_store_limit", leaderboard::TOP_STORE_LIMIT as i64)?
            .set_default(
                "ledger.unknown_member_label",
                leaderboard::UNKNOWN_MEMBER_LABEL,
            )?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "compact")?
            // Add configuration files if they exist
            .add_source(file("default"))
            .add_source(file(environment))
            .add_source(file("local"))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

impl LedgerSettings {
    pub fn cup_policy(&self) -> CupPolicy {
        CupPolicy::from_bounds(self.cup_min, self.cup_max)
    }

    /// The time stamped on fresh drafts
    pub fn default_time(&self) -> Result<OrderTime> {
        OrderTime::try_new(self.default_time.clone())
            .map_err(|_| Error::invalid_input("ledger.default_time"))
    }

    pub fn leaderboard(&self) -> LeaderboardSettings {
        LeaderboardSettings {
            top_store_limit: self.top_store_limit,
            unknown_member_label: self.unknown_member_label.clone(),
        }
    }
}
