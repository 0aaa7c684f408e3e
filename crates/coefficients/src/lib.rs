//! Pressure-coefficient tables for the NACA 2412 section.
//!
//! Two sources exist: the compiled-in digitized-plot tables at 10° angle of
//! attack ([`FixedAoaTable`]), and a loaded table covering all three AOA
//! conditions ([`CoefficientTable`]) parsed from a semicolon-delimited,
//! decimal-comma CSV. The loaded table is the basis of the uncertain-AOA
//! model: each station's three per-condition values form a discrete
//! empirical distribution.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use lift_uncertain::{UncertainError, UncertainScalar};
use thiserror::Error;

mod tables;

pub use tables::{LOWER_CP_10DEG, UPPER_CP_10DEG};

/// Chordwise stations in the loaded all-angles table.
pub const LOADED_STATIONS: usize = 139;
/// Chordwise stations in the compiled-in 10°-AOA tables.
pub const BUILTIN_STATIONS: usize = 81;

/// Airfoil surface side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Upper,
    Lower,
}

/// Angle-of-attack condition, in the order the empirical per-station
/// distribution samples them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AoaCondition {
    Deg10,
    Deg5,
    Deg0,
}

impl AoaCondition {
    /// Condition order used when building per-station empirical scalars.
    pub const ORDERED: [AoaCondition; 3] = [AoaCondition::Deg10, AoaCondition::Deg5, AoaCondition::Deg0];
}

/// Errors raised while loading or reading coefficient tables.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read coefficient table {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse coefficient table: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row} has {fields} fields, expected station plus 6 coefficients")]
    MalformedRow { row: usize, fields: usize },
    #[error("row {row}, column {column} is not a number: {field:?}")]
    NonNumericField {
        row: usize,
        column: usize,
        field: String,
    },
    #[error("table has {found} data rows, expected {expected}")]
    RowCount { expected: usize, found: usize },
    #[error(transparent)]
    Distribution(#[from] UncertainError),
}

/// Compiled-in coefficients for both surfaces at a single angle of attack.
#[derive(Debug, Clone, Copy)]
pub struct FixedAoaTable {
    upper: &'static [f64],
    lower: &'static [f64],
}

/// The digitized-plot tables at 10° AOA used by the fixed-AOA scenarios.
pub fn builtin_10deg() -> FixedAoaTable {
    FixedAoaTable {
        upper: &UPPER_CP_10DEG,
        lower: &LOWER_CP_10DEG,
    }
}

impl FixedAoaTable {
    /// Number of chordwise stations per surface.
    pub fn station_count(&self) -> usize {
        self.upper.len()
    }

    /// Coefficient at the given station for one surface side.
    pub fn coefficient(&self, station: usize, side: Surface) -> f64 {
        match side {
            Surface::Upper => self.upper[station],
            Surface::Lower => self.lower[station],
        }
    }

    /// All stations for one side as fixed scalars, leading to trailing edge.
    pub fn fixed_coefficients(&self, side: Surface) -> Vec<UncertainScalar> {
        let column = match side {
            Surface::Upper => self.upper,
            Surface::Lower => self.lower,
        };
        column.iter().map(|&c| UncertainScalar::fixed(c)).collect()
    }
}

/// Loaded per-station coefficients for both surfaces at all three AOA
/// conditions. Fixed shape: [`LOADED_STATIONS`] stations × 6 columns.
#[derive(Debug, Clone)]
pub struct CoefficientTable {
    upper_10: Vec<f64>,
    upper_5: Vec<f64>,
    upper_0: Vec<f64>,
    lower_0: Vec<f64>,
    lower_5: Vec<f64>,
    lower_10: Vec<f64>,
}

impl CoefficientTable {
    /// Load the all-angles table from a semicolon-delimited CSV file.
    ///
    /// Row 0 is a header and is discarded. Each data row must carry the
    /// chord-position column followed by 6 coefficient columns in the order
    /// Upper-10°, Upper-5°, Upper-0°, Lower-0°, Lower-5°, Lower-10°, with
    /// `,` as the decimal separator. A short row or a non-numeric field
    /// aborts the load; no partial table is returned.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Load the all-angles table from any reader carrying the CSV contents.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, TableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut table = CoefficientTable {
            upper_10: Vec::with_capacity(LOADED_STATIONS),
            upper_5: Vec::with_capacity(LOADED_STATIONS),
            upper_0: Vec::with_capacity(LOADED_STATIONS),
            lower_0: Vec::with_capacity(LOADED_STATIONS),
            lower_5: Vec::with_capacity(LOADED_STATIONS),
            lower_10: Vec::with_capacity(LOADED_STATIONS),
        };

        for (index, record) in csv_reader.records().enumerate() {
            let record = record?;
            // Data rows are 1-based after the discarded header.
            let row = index + 2;
            if record.len() < 7 {
                return Err(TableError::MalformedRow {
                    row,
                    fields: record.len(),
                });
            }
            let mut fields = [0.0_f64; 6];
            for (offset, slot) in fields.iter_mut().enumerate() {
                let column = offset + 1;
                let raw = &record[column];
                *slot = parse_decimal_comma(raw).ok_or_else(|| TableError::NonNumericField {
                    row,
                    column,
                    field: raw.to_string(),
                })?;
            }
            table.upper_10.push(fields[0]);
            table.upper_5.push(fields[1]);
            table.upper_0.push(fields[2]);
            table.lower_0.push(fields[3]);
            table.lower_5.push(fields[4]);
            table.lower_10.push(fields[5]);
        }

        if table.upper_10.len() != LOADED_STATIONS {
            return Err(TableError::RowCount {
                expected: LOADED_STATIONS,
                found: table.upper_10.len(),
            });
        }
        Ok(table)
    }

    /// Number of chordwise stations per surface.
    pub fn station_count(&self) -> usize {
        self.upper_10.len()
    }

    /// One full column, leading to trailing edge.
    pub fn column(&self, side: Surface, condition: AoaCondition) -> &[f64] {
        match (side, condition) {
            (Surface::Upper, AoaCondition::Deg10) => &self.upper_10,
            (Surface::Upper, AoaCondition::Deg5) => &self.upper_5,
            (Surface::Upper, AoaCondition::Deg0) => &self.upper_0,
            (Surface::Lower, AoaCondition::Deg0) => &self.lower_0,
            (Surface::Lower, AoaCondition::Deg5) => &self.lower_5,
            (Surface::Lower, AoaCondition::Deg10) => &self.lower_10,
        }
    }

    /// Coefficient at one station, side, and AOA condition.
    pub fn coefficient(&self, station: usize, side: Surface, condition: AoaCondition) -> f64 {
        self.column(side, condition)[station]
    }

    /// The uncertain-AOA coefficient at one station: an empirical scalar
    /// over exactly 3 samples, one per AOA condition, in the order 10°,
    /// 5°, 0°. This is a discrete uniform distribution over the three
    /// possible angles, not a continuous approximation.
    pub fn empirical_coefficient(
        &self,
        station: usize,
        side: Surface,
    ) -> Result<UncertainScalar, TableError> {
        let samples = AoaCondition::ORDERED
            .iter()
            .map(|&condition| self.coefficient(station, side, condition))
            .collect();
        Ok(UncertainScalar::empirical(samples)?)
    }

    /// All stations for one side as 3-sample empirical scalars.
    pub fn empirical_coefficients(&self, side: Surface) -> Result<Vec<UncertainScalar>, TableError> {
        (0..self.station_count())
            .map(|station| self.empirical_coefficient(station, side))
            .collect()
    }
}

/// Parse a number whose decimal separator may be `,` (normalized to `.`).
fn parse_decimal_comma(field: &str) -> Option<f64> {
    field.trim().replace(',', ".").parse::<f64>().ok()
}
