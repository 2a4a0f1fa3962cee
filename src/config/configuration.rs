use config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub url: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "db.sqlite3".to_string(),
        }
    }
}

/// Row counts for a seeding run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedSettings {
    pub customers: usize,
    pub orders: usize,
    pub products: usize,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            customers: 100,
            orders: 1000,
            products: 10,
        }
    }
}

/// Parameters for the canned reports printed by the runner.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub customer_id: i32,
    pub revenue_days: i64,
    pub spend_threshold: i64,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            customer_id: 1,
            revenue_days: 30,
            spend_threshold: 500,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub seed: SeedSettings,
    pub report: ReportSettings,
}

impl Settings {
    /// Layers an optional `configuration.{yaml,toml,json}` file and `APP_*`
    /// environment variables (e.g. `APP_DATABASE__URL`) over the defaults.
    pub fn new() -> Result<Self, ConfigError> {
        let mut s = Config::default();
        s.merge(config::File::with_name("configuration").required(false))?;
        s.merge(config::Environment::with_prefix("APP").separator("__"))?;
        s.try_into()
    }
}
