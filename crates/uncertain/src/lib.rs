//! Uncertain scalar quantities and the arithmetic that propagates them.
//!
//! A quantity is either a fixed value, a parametric distribution (uniform or
//! Gaussian), or an empirical distribution over a finite sample set. Binary
//! and unary operations combine quantities into new ones: closed forms are
//! used where the result is exact (fixed arithmetic, shift/scale by a fixed
//! operand, sums of independent Gaussians, elementwise maps over empirical
//! samples), and everything else falls back to seeded Monte Carlo draws that
//! yield an empirical result.
//!
//! All draws go through one [`Sampler`] per run, so the same seed and draw
//! budget reproduce the same distributions.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand_distr::{Distribution, Normal};
use thiserror::Error;

/// Default number of Monte Carlo draws per sampling-based combination.
pub const DEFAULT_DRAWS: usize = 1000;

/// Errors raised while constructing or combining uncertain values.
#[derive(Debug, Error)]
pub enum UncertainError {
    #[error("division by zero while combining uncertain values")]
    DivisionByZero,
    #[error("square root of negative value {value}")]
    NegativeSqrt { value: f64 },
    #[error("operation produced a non-finite result")]
    NonFinite,
    #[error("uniform bounds are inverted: low {low} > high {high}")]
    InvertedUniformBounds { low: f64, high: f64 },
    #[error("gaussian standard deviation {std_dev} is negative")]
    NegativeStdDev { std_dev: f64 },
    #[error("empirical distribution requires at least one sample")]
    EmptySamples,
}

/// A scalar quantity that may carry uncertainty.
///
/// Values are immutable once constructed; every operation returns a new
/// instance. Use the validating constructors rather than building variants
/// directly.
#[derive(Debug, Clone, PartialEq)]
pub enum UncertainScalar {
    /// A known value with no uncertainty.
    Fixed(f64),
    /// Uniformly distributed over the inclusive interval `[low, high]`.
    Uniform { low: f64, high: f64 },
    /// Normally distributed with the given mean and standard deviation.
    Gaussian { mean: f64, std_dev: f64 },
    /// A finite set of samples; insertion order is the originating
    /// condition order and is preserved through elementwise operations.
    Empirical(Vec<f64>),
}

/// Seeded source of Monte Carlo draws shared by one evaluation run.
///
/// Uses `SmallRng` so a given seed reproduces the same sequence of draws on
/// the same platform.
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: SmallRng,
    draws: usize,
}

impl Sampler {
    /// Create a sampler with the given seed and draws-per-combination budget.
    pub fn seeded(seed: u64, draws: usize) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            draws: draws.max(1),
        }
    }

    /// The number of draws taken per sampling-based combination.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Draw one value from the scalar's distribution.
    fn draw(&mut self, scalar: &UncertainScalar) -> Result<f64, UncertainError> {
        match scalar {
            UncertainScalar::Fixed(v) => Ok(*v),
            UncertainScalar::Uniform { low, high } => Ok(self.rng.random_range(*low..=*high)),
            UncertainScalar::Gaussian { mean, std_dev } => {
                let normal = Normal::new(*mean, *std_dev).map_err(|_| {
                    UncertainError::NegativeStdDev { std_dev: *std_dev }
                })?;
                Ok(normal.sample(&mut self.rng))
            }
            UncertainScalar::Empirical(samples) => {
                let idx = self.rng.random_range(0..samples.len());
                Ok(samples[idx])
            }
        }
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::seeded(0, DEFAULT_DRAWS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnaryOp {
    Sqrt,
    Abs,
    Exp,
}

/// Plain-real kernel shared by fixed arithmetic, elementwise maps, and the
/// sampling fallback. NaN is rejected; infinities are allowed to flow since
/// overflow of an extreme draw is not an invalid operation.
fn apply_binary(op: BinaryOp, a: f64, b: f64) -> Result<f64, UncertainError> {
    let out = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => {
            if b == 0.0 {
                return Err(UncertainError::DivisionByZero);
            }
            a / b
        }
        BinaryOp::Pow => a.powf(b),
    };
    if out.is_nan() {
        return Err(UncertainError::NonFinite);
    }
    Ok(out)
}

fn apply_unary(op: UnaryOp, a: f64) -> Result<f64, UncertainError> {
    let out = match op {
        UnaryOp::Sqrt => {
            if a < 0.0 {
                return Err(UncertainError::NegativeSqrt { value: a });
            }
            a.sqrt()
        }
        UnaryOp::Abs => a.abs(),
        UnaryOp::Exp => a.exp(),
    };
    if out.is_nan() {
        return Err(UncertainError::NonFinite);
    }
    Ok(out)
}

impl UncertainScalar {
    /// A known value with no uncertainty.
    pub fn fixed(value: f64) -> Self {
        Self::Fixed(value)
    }

    /// Uniform over `[low, high]`; requires `low <= high`.
    pub fn uniform(low: f64, high: f64) -> Result<Self, UncertainError> {
        if low > high {
            return Err(UncertainError::InvertedUniformBounds { low, high });
        }
        Ok(Self::Uniform { low, high })
    }

    /// Gaussian with the given mean; requires `std_dev >= 0`.
    pub fn gaussian(mean: f64, std_dev: f64) -> Result<Self, UncertainError> {
        if std_dev < 0.0 {
            return Err(UncertainError::NegativeStdDev { std_dev });
        }
        Ok(Self::Gaussian { mean, std_dev })
    }

    /// Empirical distribution over a non-empty sample sequence.
    pub fn empirical(samples: Vec<f64>) -> Result<Self, UncertainError> {
        if samples.is_empty() {
            return Err(UncertainError::EmptySamples);
        }
        Ok(Self::Empirical(samples))
    }

    /// Whether the scalar carries no uncertainty.
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// The empirical sample sequence, if this scalar carries one.
    pub fn samples(&self) -> Option<&[f64]> {
        match self {
            Self::Empirical(samples) => Some(samples),
            _ => None,
        }
    }

    /// Resolve to a single representative value by expectation: fixed values
    /// are themselves, uniform is the midpoint, Gaussian the mean, empirical
    /// the arithmetic mean of its samples.
    pub fn expected_value(&self) -> f64 {
        match self {
            Self::Fixed(v) => *v,
            Self::Uniform { low, high } => 0.5 * (low + high),
            Self::Gaussian { mean, .. } => *mean,
            Self::Empirical(samples) => {
                samples.iter().sum::<f64>() / samples.len() as f64
            }
        }
    }

    /// Sum of two quantities.
    pub fn add(&self, other: &Self, sampler: &mut Sampler) -> Result<Self, UncertainError> {
        use UncertainScalar::*;
        match (self, other) {
            (Fixed(a), Fixed(b)) => apply_binary(BinaryOp::Add, *a, *b).map(Fixed),
            (Fixed(c), Uniform { low, high }) | (Uniform { low, high }, Fixed(c)) => {
                Self::uniform(low + c, high + c)
            }
            (Fixed(c), Gaussian { mean, std_dev }) | (Gaussian { mean, std_dev }, Fixed(c)) => {
                Self::gaussian(mean + c, *std_dev)
            }
            (Fixed(c), Empirical(s)) | (Empirical(s), Fixed(c)) => {
                Self::map_samples(s, |x| apply_binary(BinaryOp::Add, x, *c))
            }
            // Independent Gaussians sum in closed form.
            (
                Gaussian {
                    mean: m1,
                    std_dev: s1,
                },
                Gaussian {
                    mean: m2,
                    std_dev: s2,
                },
            ) => Self::gaussian(m1 + m2, s1.hypot(*s2)),
            _ => self.sample_combine(BinaryOp::Add, other, sampler),
        }
    }

    /// Difference of two quantities.
    pub fn sub(&self, other: &Self, sampler: &mut Sampler) -> Result<Self, UncertainError> {
        use UncertainScalar::*;
        match (self, other) {
            (Fixed(a), Fixed(b)) => apply_binary(BinaryOp::Sub, *a, *b).map(Fixed),
            (Uniform { low, high }, Fixed(c)) => Self::uniform(low - c, high - c),
            (Fixed(c), Uniform { low, high }) => Self::uniform(c - high, c - low),
            (Gaussian { mean, std_dev }, Fixed(c)) => Self::gaussian(mean - c, *std_dev),
            (Fixed(c), Gaussian { mean, std_dev }) => Self::gaussian(c - mean, *std_dev),
            (Empirical(s), Fixed(c)) => Self::map_samples(s, |x| apply_binary(BinaryOp::Sub, x, *c)),
            (Fixed(c), Empirical(s)) => Self::map_samples(s, |x| apply_binary(BinaryOp::Sub, *c, x)),
            (
                Gaussian {
                    mean: m1,
                    std_dev: s1,
                },
                Gaussian {
                    mean: m2,
                    std_dev: s2,
                },
            ) => Self::gaussian(m1 - m2, s1.hypot(*s2)),
            _ => self.sample_combine(BinaryOp::Sub, other, sampler),
        }
    }

    /// Product of two quantities. Scaling by a fixed factor shifts the
    /// distribution parameters directly; a negative factor swaps uniform
    /// bounds so `low <= high` is preserved.
    pub fn mul(&self, other: &Self, sampler: &mut Sampler) -> Result<Self, UncertainError> {
        use UncertainScalar::*;
        match (self, other) {
            (Fixed(a), Fixed(b)) => apply_binary(BinaryOp::Mul, *a, *b).map(Fixed),
            (Fixed(c), Uniform { low, high }) | (Uniform { low, high }, Fixed(c)) => {
                let (a, b) = sorted_bounds(low * c, high * c);
                Self::uniform(a, b)
            }
            (Fixed(c), Gaussian { mean, std_dev }) | (Gaussian { mean, std_dev }, Fixed(c)) => {
                Self::gaussian(mean * c, std_dev * c.abs())
            }
            (Fixed(c), Empirical(s)) | (Empirical(s), Fixed(c)) => {
                Self::map_samples(s, |x| apply_binary(BinaryOp::Mul, x, *c))
            }
            _ => self.sample_combine(BinaryOp::Mul, other, sampler),
        }
    }

    /// Quotient of two quantities. Division by a fixed zero, or by an
    /// empirical sample that is exactly zero, is an error.
    pub fn div(&self, other: &Self, sampler: &mut Sampler) -> Result<Self, UncertainError> {
        use UncertainScalar::*;
        match (self, other) {
            (Fixed(a), Fixed(b)) => apply_binary(BinaryOp::Div, *a, *b).map(Fixed),
            (Uniform { low, high }, Fixed(c)) => {
                if *c == 0.0 {
                    return Err(UncertainError::DivisionByZero);
                }
                let (a, b) = sorted_bounds(low / c, high / c);
                Self::uniform(a, b)
            }
            (Gaussian { mean, std_dev }, Fixed(c)) => {
                if *c == 0.0 {
                    return Err(UncertainError::DivisionByZero);
                }
                Self::gaussian(mean / c, std_dev / c.abs())
            }
            (Empirical(s), Fixed(c)) => Self::map_samples(s, |x| apply_binary(BinaryOp::Div, x, *c)),
            (Fixed(c), Empirical(s)) => Self::map_samples(s, |x| apply_binary(BinaryOp::Div, *c, x)),
            _ => self.sample_combine(BinaryOp::Div, other, sampler),
        }
    }

    /// `self` raised to the power `other`.
    pub fn pow(&self, other: &Self, sampler: &mut Sampler) -> Result<Self, UncertainError> {
        use UncertainScalar::*;
        match (self, other) {
            (Fixed(a), Fixed(b)) => apply_binary(BinaryOp::Pow, *a, *b).map(Fixed),
            (Empirical(s), Fixed(c)) => Self::map_samples(s, |x| apply_binary(BinaryOp::Pow, x, *c)),
            (Fixed(c), Empirical(s)) => Self::map_samples(s, |x| apply_binary(BinaryOp::Pow, *c, x)),
            _ => self.sample_combine(BinaryOp::Pow, other, sampler),
        }
    }

    /// Square root; negative fixed values or draws are an error.
    pub fn sqrt(&self, sampler: &mut Sampler) -> Result<Self, UncertainError> {
        self.unary(UnaryOp::Sqrt, sampler)
    }

    /// Absolute value.
    pub fn abs(&self, sampler: &mut Sampler) -> Result<Self, UncertainError> {
        self.unary(UnaryOp::Abs, sampler)
    }

    /// Natural exponential.
    pub fn exp(&self, sampler: &mut Sampler) -> Result<Self, UncertainError> {
        self.unary(UnaryOp::Exp, sampler)
    }

    fn unary(&self, op: UnaryOp, sampler: &mut Sampler) -> Result<Self, UncertainError> {
        use UncertainScalar::*;
        match self {
            Fixed(a) => apply_unary(op, *a).map(Fixed),
            // Elementwise on the sample sequence is exact for a discrete
            // distribution and keeps the sample count unchanged.
            Empirical(s) => Self::map_samples(s, |x| apply_unary(op, x)),
            _ => {
                let n = sampler.draws();
                let mut out = Vec::with_capacity(n);
                for _ in 0..n {
                    let x = sampler.draw(self)?;
                    out.push(apply_unary(op, x)?);
                }
                Self::empirical(out)
            }
        }
    }

    /// General mechanism for combining two distributions: paired independent
    /// draws, the scalar operation applied elementwise, and an empirical
    /// result over the outcomes.
    fn sample_combine(
        &self,
        op: BinaryOp,
        other: &Self,
        sampler: &mut Sampler,
    ) -> Result<Self, UncertainError> {
        let n = sampler.draws();
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            let a = sampler.draw(self)?;
            let b = sampler.draw(other)?;
            out.push(apply_binary(op, a, b)?);
        }
        Self::empirical(out)
    }

    fn map_samples<F>(samples: &[f64], f: F) -> Result<Self, UncertainError>
    where
        F: Fn(f64) -> Result<f64, UncertainError>,
    {
        let mapped: Result<Vec<f64>, UncertainError> =
            samples.iter().copied().map(f).collect();
        Self::empirical(mapped?)
    }
}

fn sorted_bounds(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
