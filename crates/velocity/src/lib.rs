//! Surface velocities from pressure-coefficient distributions.
//!
//! Each chordwise station maps a pressure coefficient to a local surface
//! velocity through `v = V_free · sqrt(|1 − Cp|)`; a surface is then
//! summarized by the arithmetic mean of its station velocities.

use lift_uncertain::{Sampler, UncertainError, UncertainScalar};
use thiserror::Error;

/// Errors from the velocity model.
#[derive(Debug, Error)]
pub enum VelocityError {
    #[error("surface has no chordwise stations to reduce")]
    NoStations,
    #[error(transparent)]
    Arithmetic(#[from] UncertainError),
}

/// Local surface velocity at one station: `V_free · sqrt(|1 − Cp|)`.
///
/// The result is `Fixed` exactly when both operands are `Fixed`.
pub fn surface_velocity(
    free_stream_m_s: &UncertainScalar,
    pressure_coefficient: &UncertainScalar,
    sampler: &mut Sampler,
) -> Result<UncertainScalar, UncertainError> {
    let defect = UncertainScalar::fixed(1.0)
        .sub(pressure_coefficient, sampler)?
        .abs(sampler)?;
    free_stream_m_s.mul(&defect.sqrt(sampler)?, sampler)
}

/// Representative velocity for one surface side: the arithmetic mean of the
/// per-station velocities.
///
/// Station velocities are accumulated with uncertain addition and divided by
/// the station count exactly once at the end, so no per-station rounding or
/// distribution-width bias compounds along the chord.
pub fn mean_surface_velocity(
    free_stream_m_s: &UncertainScalar,
    pressure_coefficients: &[UncertainScalar],
    sampler: &mut Sampler,
) -> Result<UncertainScalar, VelocityError> {
    let mut stations = pressure_coefficients.iter();
    let first = stations.next().ok_or(VelocityError::NoStations)?;
    let mut sum = surface_velocity(free_stream_m_s, first, sampler)?;
    for cp in stations {
        let v = surface_velocity(free_stream_m_s, cp, sampler)?;
        sum = sum.add(&v, sampler)?;
    }
    let count = UncertainScalar::fixed(pressure_coefficients.len() as f64);
    Ok(sum.div(&count, sampler)?)
}
