//! Scenario atmospheres.
//!
//! Every scenario evaluates against an [`Atmosphere`] value: the baseline
//! and wind scenarios use the ICAO standard atmosphere, pressure and
//! temperature scenarios perturb exactly one axis of it. Density and
//! speed-of-sound helpers are provided for trajectory solver
//! implementations; the correction engine itself never reads them.

use crate::constants::{
    R_DRY, R_VAPOR, STANDARD_HUMIDITY, STANDARD_PRESSURE_HPA, STANDARD_TEMPERATURE_C,
};
use crate::units::{DistanceUnit, Measurement, PressureUnit, TemperatureUnit};

/// Heat capacity ratio for air
const GAMMA: f64 = 1.4;

/// Atmospheric conditions for one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Atmosphere {
    altitude: Measurement<DistanceUnit>,
    pressure: Measurement<PressureUnit>,
    temperature: Measurement<TemperatureUnit>,
    humidity: f64,
}

impl Atmosphere {
    /// `humidity` is a fraction and is clamped to `[0, 1]`.
    pub fn new(
        altitude: Measurement<DistanceUnit>,
        pressure: Measurement<PressureUnit>,
        temperature: Measurement<TemperatureUnit>,
        humidity: f64,
    ) -> Self {
        Atmosphere {
            altitude,
            pressure,
            temperature,
            humidity: humidity.clamp(0.0, 1.0),
        }
    }

    /// ICAO standard atmosphere at sea level: 1013.25 hPa, 15 °C, dry air.
    pub fn icao() -> Self {
        Atmosphere::with_temperature(STANDARD_TEMPERATURE_C)
    }

    /// Standard atmosphere with the pressure axis perturbed (hPa/mbar).
    pub fn with_pressure(pressure_hpa: f64) -> Self {
        Atmosphere::new(
            Measurement::new(0.0, DistanceUnit::Meter),
            Measurement::new(pressure_hpa, PressureUnit::HectoPascal),
            Measurement::new(STANDARD_TEMPERATURE_C, TemperatureUnit::Celsius),
            STANDARD_HUMIDITY,
        )
    }

    /// Standard atmosphere with the temperature axis perturbed (°C).
    pub fn with_temperature(temperature_c: f64) -> Self {
        Atmosphere::new(
            Measurement::new(0.0, DistanceUnit::Meter),
            Measurement::new(STANDARD_PRESSURE_HPA, PressureUnit::HectoPascal),
            Measurement::new(temperature_c, TemperatureUnit::Celsius),
            STANDARD_HUMIDITY,
        )
    }

    pub fn altitude(&self) -> Measurement<DistanceUnit> {
        self.altitude
    }

    pub fn pressure(&self) -> Measurement<PressureUnit> {
        self.pressure
    }

    pub fn temperature(&self) -> Measurement<TemperatureUnit> {
        self.temperature
    }

    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    /// Air density (kg/m³) from dry-air and water-vapor partial pressures.
    pub fn air_density(&self) -> f64 {
        let temp_c = self.temperature.in_unit(TemperatureUnit::Celsius);
        let temp_k = self.temperature.in_unit(TemperatureUnit::Kelvin);
        let pressure_pa = self.pressure.in_unit(PressureUnit::Pascal);

        // Saturation vapor pressure over water (Tetens formula)
        let saturation_pa = 610.94 * f64::exp((17.625 * temp_c) / (temp_c + 243.04));
        let vapor_pa = self.humidity * saturation_pa;
        let dry_pa = pressure_pa - vapor_pa;

        (dry_pa / (R_DRY * temp_k)) + (vapor_pa / (R_VAPOR * temp_k))
    }

    /// Speed of sound (m/s) at this atmosphere's temperature.
    pub fn speed_of_sound(&self) -> f64 {
        let temp_k = self.temperature.in_unit(TemperatureUnit::Kelvin);
        (GAMMA * R_DRY * temp_k).sqrt()
    }
}
