//! The shipped scenario configurations and manifest conversion.
//!
//! Three configurations exercise the same pipeline; they differ only in
//! which inputs are fixed and which are distributed.

use std::path::Path;

use lift_coefficients::CoefficientTable;
use lift_config::{CoefficientSourceConfig, QuantityConfig, ScenarioConfig};
use lift_core::constants::TROPOSPHERE_CEILING_M;
use lift_uncertain::{UncertainError, UncertainScalar};

use crate::{CoefficientSource, EstimateConfig, EstimateError};

/// Name of the all-fixed scenario.
pub const DETERMINISTIC: &str = "deterministic";
/// Name of the scenario with uncertain ambient conditions.
pub const ENVIRONMENT_UNCERTAIN: &str = "environment-uncertain";
/// Name of the scenario with uncertain angle of attack.
pub const AOA_UNCERTAIN: &str = "aoa-uncertain";

/// Sea level, 15 °C, dry air, 30 m/s, builtin 10°-AOA tables. Every input
/// is fixed, so the output is a single reproducible number.
pub fn deterministic() -> EstimateConfig {
    EstimateConfig {
        name: DETERMINISTIC.to_string(),
        elevation_m: UncertainScalar::fixed(0.0),
        temperature_c: UncertainScalar::fixed(15.0),
        relative_humidity: UncertainScalar::fixed(0.0),
        free_stream_m_s: UncertainScalar::fixed(30.0),
        planform_area_m2: 0.23,
        coefficients: CoefficientSource::Builtin10Deg,
    }
}

/// Uncertain ambient conditions: elevation uniform over the troposphere,
/// temperature Gaussian(0 °C, 50 °C), humidity uniform over [0, 1]. The
/// temperature model deliberately admits physically implausible extremes;
/// it is carried over from the published inputs rather than truncated.
pub fn environment_uncertain() -> Result<EstimateConfig, UncertainError> {
    Ok(EstimateConfig {
        name: ENVIRONMENT_UNCERTAIN.to_string(),
        elevation_m: UncertainScalar::uniform(0.0, TROPOSPHERE_CEILING_M)?,
        temperature_c: UncertainScalar::gaussian(0.0, 50.0)?,
        relative_humidity: UncertainScalar::uniform(0.0, 1.0)?,
        free_stream_m_s: UncertainScalar::fixed(30.0),
        planform_area_m2: 0.23,
        coefficients: CoefficientSource::Builtin10Deg,
    })
}

/// Fixed ambient conditions, uncertain angle of attack: each station's
/// coefficient is a 3-sample empirical scalar drawn from the loaded
/// all-angles table.
pub fn aoa_uncertain(table: CoefficientTable) -> EstimateConfig {
    EstimateConfig {
        name: AOA_UNCERTAIN.to_string(),
        elevation_m: UncertainScalar::fixed(0.0),
        temperature_c: UncertainScalar::fixed(15.0),
        relative_humidity: UncertainScalar::fixed(0.0),
        free_stream_m_s: UncertainScalar::fixed(30.0),
        planform_area_m2: 0.23,
        coefficients: CoefficientSource::UncertainAoa(table),
    }
}

/// Build a runnable configuration from a parsed manifest entry.
///
/// A `table` coefficient source without an explicit path falls back to
/// `fallback_table` (the CLI's table flag).
pub fn from_manifest(
    manifest: &ScenarioConfig,
    fallback_table: &Path,
) -> Result<EstimateConfig, EstimateError> {
    let coefficients = match &manifest.coefficients {
        CoefficientSourceConfig::Builtin => CoefficientSource::Builtin10Deg,
        CoefficientSourceConfig::Table { path } => {
            let path = path.as_deref().unwrap_or(fallback_table);
            CoefficientSource::UncertainAoa(CoefficientTable::from_path(path)?)
        }
    };
    Ok(EstimateConfig {
        name: manifest.name.clone(),
        elevation_m: quantity(&manifest.elevation_m)?,
        temperature_c: quantity(&manifest.temperature_c)?,
        relative_humidity: quantity(&manifest.relative_humidity)?,
        free_stream_m_s: quantity(&manifest.free_stream_m_s)?,
        planform_area_m2: manifest.planform_area_m2,
        coefficients,
    })
}

fn quantity(config: &QuantityConfig) -> Result<UncertainScalar, UncertainError> {
    match config {
        QuantityConfig::Fixed { value } => Ok(UncertainScalar::fixed(*value)),
        QuantityConfig::Uniform { low, high } => UncertainScalar::uniform(*low, *high),
        QuantityConfig::Gaussian { mean, std_dev } => UncertainScalar::gaussian(*mean, *std_dev),
    }
}
