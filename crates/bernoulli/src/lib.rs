//! Bernoulli lift-force estimation for a 2D airfoil section.
//!
//! Combines the atmospheric density model, the pressure-coefficient tables,
//! and the surface-velocity model into a single lift estimate:
//!
//! ```text
//! Fl = ρ · A · (v_over² − v_under²) / 2
//! ```
//!
//! Valid for inviscid, incompressible flow. Which inputs are fixed and which
//! are distributed is entirely a property of the [`EstimateConfig`]; the
//! pipeline itself is the same for every scenario.

use lift_atmosphere::{AtmosphereError, AtmosphericInputs, air_density};
use lift_coefficients::{CoefficientTable, Surface, TableError, builtin_10deg};
use lift_core::ranges::{self, Bounds};
use lift_uncertain::{Sampler, UncertainError, UncertainScalar};
use lift_velocity::{VelocityError, mean_surface_velocity};
use serde::Serialize;
use thiserror::Error;

pub mod scenario;

/// Errors from the lift-estimation pipeline.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("{quantity} {value} outside supported range [{min}, {max}]")]
    Domain {
        quantity: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error(transparent)]
    Atmosphere(#[from] AtmosphereError),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Velocity(#[from] VelocityError),
    #[error(transparent)]
    Arithmetic(#[from] UncertainError),
}

/// Where a scenario's pressure coefficients come from.
#[derive(Debug, Clone)]
pub enum CoefficientSource {
    /// The compiled-in digitized-plot tables at 10° AOA; coefficients are
    /// fixed values.
    Builtin10Deg,
    /// A loaded all-angles table; each station becomes a 3-sample empirical
    /// scalar over the AOA conditions.
    UncertainAoa(CoefficientTable),
}

/// Full description of one lift evaluation.
#[derive(Debug, Clone)]
pub struct EstimateConfig {
    pub name: String,
    pub elevation_m: UncertainScalar,
    pub temperature_c: UncertainScalar,
    pub relative_humidity: UncertainScalar,
    pub free_stream_m_s: UncertainScalar,
    pub planform_area_m2: f64,
    pub coefficients: CoefficientSource,
}

/// Representative values of every intermediate quantity, for reporting.
/// The pipeline returns these as data; printing is the caller's concern.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostics {
    pub temperature_c: f64,
    pub elevation_m: f64,
    pub relative_humidity: f64,
    pub air_pressure_pa: f64,
    pub saturation_pressure_pa: f64,
    pub vapor_pressure_pa: f64,
    pub dry_pressure_pa: f64,
    pub v_over_m_s: f64,
    pub v_under_m_s: f64,
    pub planform_area_m2: f64,
    pub density_kg_m3: f64,
}

/// Terminal output of one evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct LiftEstimate {
    pub scenario: String,
    /// Representative lift force (N).
    pub lift_force_n: f64,
    /// The full empirical sample set, when the propagated force carries one.
    pub samples: Option<Vec<f64>>,
    pub diagnostics: Diagnostics,
    /// The propagated force distribution itself.
    #[serde(skip)]
    pub force: UncertainScalar,
}

/// Lift force from density, planform area, and the two representative
/// surface velocities: `Fl = ρ · A · (v_over² − v_under²) / 2`.
pub fn lift_force(
    density_kg_m3: &UncertainScalar,
    planform_area_m2: &UncertainScalar,
    v_over_m_s: &UncertainScalar,
    v_under_m_s: &UncertainScalar,
    sampler: &mut Sampler,
) -> Result<UncertainScalar, UncertainError> {
    let two = UncertainScalar::fixed(2.0);
    let pressure_difference = v_over_m_s
        .pow(&two, sampler)?
        .sub(&v_under_m_s.pow(&two, sampler)?, sampler)?;
    density_kg_m3
        .mul(planform_area_m2, sampler)?
        .mul(&pressure_difference, sampler)?
        .div(&two, sampler)
}

/// Run the full pipeline for one configuration.
///
/// Atmosphere, per-station velocities, surface reduction, and the lift
/// combination all run as uncertain arithmetic through the one `sampler`,
/// so the same configuration, seed, and draw budget reproduce the same
/// estimate exactly.
pub fn estimate_lift(
    config: &EstimateConfig,
    sampler: &mut Sampler,
) -> Result<LiftEstimate, EstimateError> {
    check_domain("area", config.planform_area_m2, ranges::AREA_M2)?;
    check_velocity_domain(&config.free_stream_m_s)?;

    let atmosphere = air_density(
        &AtmosphericInputs {
            elevation_m: config.elevation_m.clone(),
            temperature_c: config.temperature_c.clone(),
            relative_humidity: config.relative_humidity.clone(),
        },
        sampler,
    )?;

    let (upper_cps, lower_cps) = match &config.coefficients {
        CoefficientSource::Builtin10Deg => {
            let table = builtin_10deg();
            (
                table.fixed_coefficients(Surface::Upper),
                table.fixed_coefficients(Surface::Lower),
            )
        }
        CoefficientSource::UncertainAoa(table) => (
            table.empirical_coefficients(Surface::Upper)?,
            table.empirical_coefficients(Surface::Lower)?,
        ),
    };

    let v_over = mean_surface_velocity(&config.free_stream_m_s, &upper_cps, sampler)?;
    let v_under = mean_surface_velocity(&config.free_stream_m_s, &lower_cps, sampler)?;

    let area = UncertainScalar::fixed(config.planform_area_m2);
    let force = lift_force(&atmosphere.density_kg_m3, &area, &v_over, &v_under, sampler)?;

    let diagnostics = Diagnostics {
        temperature_c: config.temperature_c.expected_value(),
        elevation_m: config.elevation_m.expected_value(),
        relative_humidity: config.relative_humidity.expected_value(),
        air_pressure_pa: atmosphere.air_pressure_pa.expected_value(),
        saturation_pressure_pa: atmosphere.saturation_pressure_pa.expected_value(),
        vapor_pressure_pa: atmosphere.vapor_pressure_pa.expected_value(),
        dry_pressure_pa: atmosphere.dry_pressure_pa.expected_value(),
        v_over_m_s: v_over.expected_value(),
        v_under_m_s: v_under.expected_value(),
        planform_area_m2: config.planform_area_m2,
        density_kg_m3: atmosphere.density_kg_m3.expected_value(),
    };

    Ok(LiftEstimate {
        scenario: config.name.clone(),
        lift_force_n: force.expected_value(),
        samples: force.samples().map(|s| s.to_vec()),
        diagnostics,
        force,
    })
}

fn check_domain(quantity: &'static str, value: f64, bounds: Bounds) -> Result<(), EstimateError> {
    if !bounds.contains(value) {
        return Err(EstimateError::Domain {
            quantity,
            value,
            min: bounds.min,
            max: bounds.max,
        });
    }
    Ok(())
}

/// The free-stream speed must stay subsonic; fixed values and both uniform
/// bounds are checked.
fn check_velocity_domain(speed: &UncertainScalar) -> Result<(), EstimateError> {
    let bounds = ranges::VELOCITY_M_S;
    match speed {
        UncertainScalar::Fixed(v) => check_domain("velocity", *v, bounds),
        UncertainScalar::Uniform { low, high } => {
            check_domain("velocity", *low, bounds)?;
            check_domain("velocity", *high, bounds)
        }
        _ => Ok(()),
    }
}
