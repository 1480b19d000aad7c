use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use super::error::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct ProfitConfig {
    /// Flat earnings for completing any pickup-to-dropoff delivery.
    pub base_profit: f64,
    /// Earnings per unit of shortest-path distance between pickup and dropoff.
    pub distance_profit: f64,
    /// Incentive applied between distinct pickups so multi-pickup loops win.
    pub multi_pickup_bonus: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CostConfig {
    /// Operating cost per unit of travelled distance, charged against profit.
    pub travel_cost_per_unit: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub vertices: String,
    pub distances: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub profit: ProfitConfig,
    pub costs: CostConfig,
    pub data: DataConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            profit: ProfitConfig {
                base_profit: 15.0,
                distance_profit: 2.0,
                multi_pickup_bonus: 3.0,
            },
            costs: CostConfig {
                travel_cost_per_unit: 0.1,
            },
            data: DataConfig {
                vertices: "data/vertices.csv".to_string(),
                distances: "data/distances.csv".to_string(),
            },
        }
    }
}

/// Loads configuration from a file and environment variables.
pub fn load_config() -> Result<Config, Error> {
    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoad(format!("Failed to determine current directory: {}", e))
    })?;

    let config_file_path: PathBuf = base_path.join("crates").join("planner").join("Config.toml");

    if !config_file_path.exists() {
        return Err(Error::ConfigLoad(format!(
            "Configuration file not found at calculated path: {}",
            config_file_path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(File::from(config_file_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix("PLANNER")
                .try_parsing(true)
                .separator("_"),
        )
        .build()
        .map_err(|e| Error::ConfigLoad(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoad(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}
