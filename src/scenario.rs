//! Scenario generation.
//!
//! A scenario names which environmental axis is perturbed against the
//! baseline. The full ordered set for a run is
//! `[Baseline, Pressure×N, Temperature×M, Wind×W×A]` — baseline always
//! first, wind scenarios speed-major. Every scenario maps
//! deterministically to its atmosphere and (for wind) its wind vector, so
//! all trajectories of a run share the same shot parameters and stay
//! index-aligned by distance.

use crate::atmosphere::Atmosphere;
use crate::config::RangeCardParams;
use crate::units::{AngularUnit, Measurement, VelocityUnit};
use crate::wind::Wind;

/// Spacing of the wind-angle buckets (degrees)
pub const WIND_ANGLE_STEP_DEG: f64 = 30.0;

/// Spacing of the wind-speed buckets (m/s); bucket 0 is already one step
pub const WIND_SPEED_STEP_MPS: f64 = 2.0;

/// One environmental perturbation axis.
#[derive(Debug, Clone, PartialEq)]
pub enum Scenario {
    /// Standard atmosphere, no wind
    Baseline,
    /// Off-standard pressure (hPa/mbar) at standard temperature
    Pressure(f64),
    /// Off-standard temperature (°C) at standard pressure
    Temperature(f64),
    /// One cell of the wind-speed × wind-angle matrix
    Wind {
        speed_bucket: usize,
        angle_bucket: usize,
    },
}

impl Scenario {
    /// The atmosphere this scenario is evaluated under.
    pub fn atmosphere(&self) -> Atmosphere {
        match self {
            Scenario::Baseline | Scenario::Wind { .. } => Atmosphere::icao(),
            Scenario::Pressure(pressure_hpa) => Atmosphere::with_pressure(*pressure_hpa),
            Scenario::Temperature(temperature_c) => Atmosphere::with_temperature(*temperature_c),
        }
    }

    /// The wind this scenario is evaluated under, if any.
    ///
    /// Bucket mapping: direction `180° − angle×30°`, speed
    /// `(bucket+1)×2 m/s`, so bucket (0,0) is the lightest head/tail wind.
    pub fn wind(&self) -> Option<Wind> {
        match self {
            Scenario::Wind {
                speed_bucket,
                angle_bucket,
            } => Some(Wind::new(
                Measurement::new(
                    180.0 - *angle_bucket as f64 * WIND_ANGLE_STEP_DEG,
                    AngularUnit::Degree,
                ),
                Measurement::new(
                    (*speed_bucket as f64 + 1.0) * WIND_SPEED_STEP_MPS,
                    VelocityUnit::MetersPerSecond,
                ),
            )),
            _ => None,
        }
    }

    /// Short identifier for logs and error reports.
    pub fn label(&self) -> String {
        match self {
            Scenario::Baseline => "baseline".to_string(),
            Scenario::Pressure(p) => format!("pressure {p:.0} hPa"),
            Scenario::Temperature(t) => format!("temperature {t:.0} °C"),
            Scenario::Wind {
                speed_bucket,
                angle_bucket,
            } => format!("wind {speed_bucket}x{angle_bucket:02}"),
        }
    }

    /// Placeholder identifier for this scenario's elevation delta.
    pub fn elevation_placeholder(&self) -> Option<String> {
        match self {
            Scenario::Baseline => None,
            Scenario::Pressure(p) => Some(format!("$P{p:.0}")),
            // Underscore marks a negative magnitude: $T_15 vs $T25
            Scenario::Temperature(t) if *t < 0.0 => Some(format!("$T_{:.0}", -t)),
            Scenario::Temperature(t) => Some(format!("$T{t:.0}")),
            Scenario::Wind {
                speed_bucket,
                angle_bucket,
            } => Some(format!("$D{speed_bucket}_{angle_bucket:02}")),
        }
    }

    /// Placeholder identifier for this scenario's windage delta.
    ///
    /// Only wind scenarios produce one; pressure and temperature are not
    /// expected to move windage materially.
    pub fn windage_placeholder(&self) -> Option<String> {
        match self {
            Scenario::Wind {
                speed_bucket,
                angle_bucket,
            } => Some(format!("$W{speed_bucket}_{angle_bucket:02}")),
            _ => None,
        }
    }

    /// Display decimals for this scenario's delta corrections.
    pub fn delta_precision(&self) -> usize {
        match self {
            Scenario::Pressure(_) | Scenario::Temperature(_) => 1,
            Scenario::Baseline | Scenario::Wind { .. } => 0,
        }
    }
}

/// The full ordered scenario set for a run.
pub fn scenarios(params: &RangeCardParams) -> Vec<Scenario> {
    let mut set = Vec::with_capacity(
        1 + params.pressures_mbar.len()
            + params.temperatures_c.len()
            + params.wind_speed_buckets * params.wind_angle_buckets,
    );
    set.push(Scenario::Baseline);
    set.extend(params.pressures_mbar.iter().map(|&p| Scenario::Pressure(p)));
    set.extend(
        params
            .temperatures_c
            .iter()
            .map(|&t| Scenario::Temperature(t)),
    );
    for speed_bucket in 0..params.wind_speed_buckets {
        for angle_bucket in 0..params.wind_angle_buckets {
            set.push(Scenario::Wind {
                speed_bucket,
                angle_bucket,
            });
        }
    }
    set
}
