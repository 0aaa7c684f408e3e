//! Humid-air density from elevation, temperature, and relative humidity.
//!
//! Every stage is evaluated as [`UncertainScalar`] arithmetic, so uncertainty
//! in any input composes through the barometric pressure, the Magnus
//! saturation pressure, and the two-gas density formula.

use lift_core::constants::{
    G0, KELVIN_OFFSET, MAGNUS_DENOMINATOR_OFFSET, MAGNUS_NUMERATOR, MAGNUS_SCALE, MOLAR_MASS_AIR,
    P0_SEA_LEVEL, R_DRY, R_UNIVERSAL, R_VAPOR,
};
use lift_core::ranges::{self, Bounds};
use lift_uncertain::{Sampler, UncertainError, UncertainScalar};
use thiserror::Error;

/// Errors from the atmospheric model.
#[derive(Debug, Error)]
pub enum AtmosphereError {
    #[error("{quantity} {value} outside supported range [{min}, {max}]")]
    Domain {
        quantity: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error(transparent)]
    Arithmetic(#[from] UncertainError),
}

/// Ambient conditions feeding the density model.
#[derive(Debug, Clone)]
pub struct AtmosphericInputs {
    /// Elevation above sea level (m), troposphere only.
    pub elevation_m: UncertainScalar,
    /// Ambient temperature (°C).
    pub temperature_c: UncertainScalar,
    /// Relative humidity as a fraction in [0, 1].
    pub relative_humidity: UncertainScalar,
}

/// Derived pressures and density for one evaluation. Computed once, then
/// read-only.
#[derive(Debug, Clone)]
pub struct AtmosphericState {
    /// Barometric air pressure Pair (Pa).
    pub air_pressure_pa: UncertainScalar,
    /// Saturation vapor pressure Psat.
    pub saturation_pressure_pa: UncertainScalar,
    /// Water vapor pressure Pv = Psat · Rh.
    pub vapor_pressure_pa: UncertainScalar,
    /// Dry-air partial pressure Pd = Pair − Pv.
    pub dry_pressure_pa: UncertainScalar,
    /// Humid-air density ρ (kg/m³).
    pub density_kg_m3: UncertainScalar,
}

/// Compute the humid-air state from the given ambient conditions.
///
/// The formulas, with T in °C and h in m:
///
/// ```text
/// Pair = 101325 · exp(−g·M·h / (R·(T+273.15)))
/// Psat = 6.1078 · 10^(7.5·T / (T+237.3))
/// Pv   = Psat · Rh
/// Pd   = Pair − Pv
/// ρ    = Pd/(Rd·(T+273.15)) + Pv/(Rv·(T+273.15))
/// ```
///
/// The output density is `Fixed` exactly when all three inputs are `Fixed`.
/// A temperature at absolute zero surfaces as a division-by-zero arithmetic
/// error out of the Kelvin normalization rather than a silent NaN.
pub fn air_density(
    inputs: &AtmosphericInputs,
    sampler: &mut Sampler,
) -> Result<AtmosphericState, AtmosphereError> {
    check_domain("elevation", &inputs.elevation_m, ranges::ELEVATION_M)?;
    check_domain("temperature", &inputs.temperature_c, ranges::TEMPERATURE_C)?;
    check_domain("humidity", &inputs.relative_humidity, ranges::HUMIDITY)?;

    let t = &inputs.temperature_c;
    let t_kelvin = t.add(&UncertainScalar::fixed(KELVIN_OFFSET), sampler)?;

    // Pair = P0 · exp(−g·M·h / (R·T_K))
    let exponent = inputs
        .elevation_m
        .mul(&UncertainScalar::fixed(-G0 * MOLAR_MASS_AIR), sampler)?
        .div(
            &t_kelvin.mul(&UncertainScalar::fixed(R_UNIVERSAL), sampler)?,
            sampler,
        )?;
    let air_pressure_pa = exponent
        .exp(sampler)?
        .mul(&UncertainScalar::fixed(P0_SEA_LEVEL), sampler)?;

    // Magnus formula, exponent in °C.
    let magnus_exponent = t
        .mul(&UncertainScalar::fixed(MAGNUS_NUMERATOR), sampler)?
        .div(
            &t.add(&UncertainScalar::fixed(MAGNUS_DENOMINATOR_OFFSET), sampler)?,
            sampler,
        )?;
    let saturation_pressure_pa = UncertainScalar::fixed(10.0)
        .pow(&magnus_exponent, sampler)?
        .mul(&UncertainScalar::fixed(MAGNUS_SCALE), sampler)?;

    let vapor_pressure_pa = saturation_pressure_pa.mul(&inputs.relative_humidity, sampler)?;
    let dry_pressure_pa = air_pressure_pa.sub(&vapor_pressure_pa, sampler)?;

    // ρ = Pd/(Rd·T_K) + Pv/(Rv·T_K)
    let dry_term = dry_pressure_pa.div(
        &t_kelvin.mul(&UncertainScalar::fixed(R_DRY), sampler)?,
        sampler,
    )?;
    let vapor_term = vapor_pressure_pa.div(
        &t_kelvin.mul(&UncertainScalar::fixed(R_VAPOR), sampler)?,
        sampler,
    )?;
    let density_kg_m3 = dry_term.add(&vapor_term, sampler)?;

    Ok(AtmosphericState {
        air_pressure_pa,
        saturation_pressure_pa,
        vapor_pressure_pa,
        dry_pressure_pa,
        density_kg_m3,
    })
}

/// Validate a quantity against its documented range. Fixed values are
/// checked strictly and uniform inputs on both bounds; Gaussian inputs are
/// not range-checked, since the environment-uncertain temperature model
/// admits extremes outside the documented range.
fn check_domain(
    quantity: &'static str,
    scalar: &UncertainScalar,
    bounds: Bounds,
) -> Result<(), AtmosphereError> {
    let out_of_range = |value: f64| AtmosphereError::Domain {
        quantity,
        value,
        min: bounds.min,
        max: bounds.max,
    };
    match scalar {
        UncertainScalar::Fixed(v) => {
            if !bounds.contains(*v) {
                return Err(out_of_range(*v));
            }
        }
        UncertainScalar::Uniform { low, high } => {
            if !bounds.contains(*low) {
                return Err(out_of_range(*low));
            }
            if !bounds.contains(*high) {
                return Err(out_of_range(*high));
            }
        }
        UncertainScalar::Gaussian { .. } | UncertainScalar::Empirical(_) => {}
    }
    Ok(())
}
