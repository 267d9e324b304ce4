//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Financial engine tuning.
    #[serde(default)]
    pub finance: FinanceConfig,
}

/// Financial engine tuning knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct FinanceConfig {
    /// Maximum absolute register-close divergence that needs no justification.
    #[serde(default = "default_register_tolerance")]
    pub register_tolerance: Decimal,
    /// Default D+ business-day offset for bank settlements.
    #[serde(default = "default_settlement_offset_days")]
    pub settlement_offset_days: u32,
}

fn default_register_tolerance() -> Decimal {
    Decimal::new(500, 2) // 5.00
}

fn default_settlement_offset_days() -> u32 {
    1
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self {
            register_tolerance: default_register_tolerance(),
            settlement_offset_days: default_settlement_offset_days(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("NAVALHA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
