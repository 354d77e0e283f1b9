/// Physical constants used across the range-card computations

/// ICAO standard sea-level pressure (hPa)
pub const STANDARD_PRESSURE_HPA: f64 = 1013.25;

/// ICAO standard sea-level temperature (°C)
pub const STANDARD_TEMPERATURE_C: f64 = 15.0;

/// Standard humidity assumed for all scenario atmospheres (fraction, 0-1)
pub const STANDARD_HUMIDITY: f64 = 0.0;

/// Specific gas constant for dry air (J/(kg·K))
pub const R_DRY: f64 = 287.05;

/// Specific gas constant for water vapor (J/(kg·K))
pub const R_VAPOR: f64 = 461.495;

/// Conversion factor: grains to kilograms
pub const GRAINS_TO_KG: f64 = 0.00006479891;

/// Conversion factor: inches to meters
pub const INCHES_TO_METERS: f64 = 0.0254;

/// Conversion factor: feet to meters
pub const FEET_TO_METERS: f64 = 0.3048;

/// Conversion factor: yards to meters
pub const YARDS_TO_METERS: f64 = 0.9144;

/// Conversion factor: pounds to kilograms
pub const POUNDS_TO_KG: f64 = 0.45359237;

/// Conversion factor: miles per hour to meters per second
pub const MPH_TO_MPS: f64 = 0.44704;

/// Conversion factor: kilometers per hour to meters per second
pub const KMH_TO_MPS: f64 = 1000.0 / 3600.0;

/// Conversion factor: millimeters of mercury to pascals
pub const MMHG_TO_PA: f64 = 133.322387415;

/// Conversion factor: inches of mercury to pascals
pub const INHG_TO_PA: f64 = 3386.389;

/// Maximum distance-step mismatch tolerated between aligned trajectories (m)
pub const DISTANCE_ALIGNMENT_TOLERANCE_M: f64 = 1e-6;
