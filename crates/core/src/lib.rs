//! Core constants and shared primitives for the Airfoil Lift Calculator workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Standard gravity at Earth's surface (m/s²).
    pub const G0: f64 = 9.80665;
    /// Molar mass of dry air (kg/mol).
    pub const MOLAR_MASS_AIR: f64 = 0.0289644;
    /// Universal gas constant (N·m/(mol·K)).
    pub const R_UNIVERSAL: f64 = 8.31432;
    /// Specific gas constant for dry air (J/(kg·K)).
    pub const R_DRY: f64 = 287.058;
    /// Specific gas constant for water vapor (J/(kg·K)).
    pub const R_VAPOR: f64 = 461.495;
    /// Reference sea-level pressure, 1 atm (Pa).
    pub const P0_SEA_LEVEL: f64 = 101_325.0;
    /// Offset between the Celsius and Kelvin scales (K).
    pub const KELVIN_OFFSET: f64 = 273.15;
    /// Magnus-formula scale term for saturation vapor pressure (hPa).
    pub const MAGNUS_SCALE: f64 = 6.1078;
    /// Magnus-formula exponent numerator coefficient (dimensionless).
    pub const MAGNUS_NUMERATOR: f64 = 7.5;
    /// Magnus-formula denominator offset (°C).
    pub const MAGNUS_DENOMINATOR_OFFSET: f64 = 237.3;
    /// Top of the troposphere for the barometric model (m).
    pub const TROPOSPHERE_CEILING_M: f64 = 11_019.2;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::KELVIN_OFFSET;

    /// Convert degrees Celsius to Kelvin.
    #[inline]
    pub fn celsius_to_kelvin(t: f64) -> f64 {
        t + KELVIN_OFFSET
    }

    /// Convert Kelvin to degrees Celsius.
    #[inline]
    pub fn kelvin_to_celsius(t: f64) -> f64 {
        t - KELVIN_OFFSET
    }
}

/// Documented input ranges for the lift pipeline, shared by the validation
/// sites in the atmosphere and estimator crates.
pub mod ranges {
    use super::constants::TROPOSPHERE_CEILING_M;

    /// Inclusive bounds for a physical quantity.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Bounds {
        pub min: f64,
        pub max: f64,
    }

    impl Bounds {
        /// Whether `value` falls inside the inclusive bounds.
        #[inline]
        pub fn contains(&self, value: f64) -> bool {
            value >= self.min && value <= self.max
        }
    }

    /// Elevation above sea level (m), troposphere only.
    pub const ELEVATION_M: Bounds = Bounds {
        min: 0.0,
        max: TROPOSPHERE_CEILING_M,
    };
    /// Ambient temperature (°C).
    pub const TEMPERATURE_C: Bounds = Bounds {
        min: -50.0,
        max: 50.0,
    };
    /// Relative humidity (dimensionless fraction).
    pub const HUMIDITY: Bounds = Bounds { min: 0.0, max: 1.0 };
    /// Planform area of the airfoil section (m²).
    pub const AREA_M2: Bounds = Bounds { min: 0.1, max: 1.0 };
    /// Free-stream velocity (m/s), subsonic.
    pub const VELOCITY_M_S: Bounds = Bounds {
        min: 10.0,
        max: 343.0,
    };
}
