//! Scenario manifest models and loaders for the Airfoil Lift Calculator.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// One lift-estimation scenario parsed from a manifest.
#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    pub name: String,
    pub elevation_m: QuantityConfig,
    pub temperature_c: QuantityConfig,
    pub relative_humidity: QuantityConfig,
    pub free_stream_m_s: QuantityConfig,
    pub planform_area_m2: f64,
    pub coefficients: CoefficientSourceConfig,
}

/// A scalar input that may be fixed or distributed.
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "type")]
pub enum QuantityConfig {
    #[serde(rename = "fixed")]
    Fixed { value: f64 },
    #[serde(rename = "uniform")]
    Uniform { low: f64, high: f64 },
    #[serde(rename = "gaussian")]
    Gaussian { mean: f64, std_dev: f64 },
}

/// Where a scenario's pressure coefficients come from.
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "type")]
pub enum CoefficientSourceConfig {
    /// The compiled-in 10°-AOA digitized-plot tables.
    #[serde(rename = "builtin")]
    Builtin,
    /// The all-angles table file; angle of attack becomes uncertain. When
    /// `path` is omitted the CLI's table flag supplies it.
    #[serde(rename = "table")]
    Table {
        #[serde(default)]
        path: Option<PathBuf>,
    },
}

/// Errors that can occur while loading scenario manifests.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load scenario configurations from a YAML file, a TOML file, or a
/// directory of TOML files (sorted by path).
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioConfig>, ConfigError> {
    load_records(path)
}

/// Find a scenario by case-insensitive name.
pub fn find_scenario<'a>(
    scenarios: &'a [ScenarioConfig],
    name: &str,
) -> Option<&'a ScenarioConfig> {
    scenarios.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
