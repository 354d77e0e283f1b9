//! Flat run configuration.
//!
//! One [`RangeCardParams`] record is loaded before the run and never
//! mutated. Missing JSON fields fall back to the reference .308 load the
//! defaults describe, so a partial configuration file stays usable.

use serde::{Deserialize, Serialize};

use crate::drag_model::DragModel;
use crate::error::RangeCardError;
use crate::solver::{
    Ammunition, BallisticCoefficient, Rifle, Rifling, ShotParameters, Sight, TwistDirection,
    ZeroingParameters,
};
use crate::units::{AngularUnit, DistanceUnit, Measurement, VelocityUnit, WeightUnit};

/// Parameters for one rifle/ammunition/sight configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeCardParams {
    /// Gun/profile name substituted for `$GUN`
    pub name: String,
    /// Template selector handed to the renderer
    pub template: String,

    // Ammunition
    pub bullet_weight_grain: f64,
    pub muzzle_velocity_mps: f64,
    pub ballistic_coefficient_model: DragModel,
    pub ballistic_coefficient: f64,
    pub bullet_diameter_inch: f64,
    pub bullet_length_inch: f64,

    // Sight
    pub sight_height_mm: f64,
    pub vertical_click_mrad: f64,
    pub horizontal_click_mrad: f64,

    // Rifling and zero
    pub rifling_twist_inch: f64,
    pub twist_direction: TwistDirection,
    pub zero_distance_m: f64,

    // Distance sweep
    pub max_distance_m: f64,
    pub step_m: f64,

    // Scenario matrix
    pub pressures_mbar: Vec<f64>,
    pub temperatures_c: Vec<f64>,
    pub wind_speed_buckets: usize,
    pub wind_angle_buckets: usize,
}

impl Default for RangeCardParams {
    fn default() -> Self {
        RangeCardParams {
            name: String::new(),
            template: String::new(),
            bullet_weight_grain: 168.0,
            muzzle_velocity_mps: 780.0,
            ballistic_coefficient_model: DragModel::G7,
            ballistic_coefficient: 0.218,
            bullet_diameter_inch: 0.308,
            bullet_length_inch: 1.22,
            sight_height_mm: 68.0,
            vertical_click_mrad: 0.1,
            horizontal_click_mrad: 0.1,
            rifling_twist_inch: 11.0,
            twist_direction: TwistDirection::Right,
            zero_distance_m: 100.0,
            max_distance_m: 1000.0,
            step_m: 50.0,
            pressures_mbar: vec![800.0, 900.0, 950.0, 980.0, 1050.0],
            temperatures_c: vec![-15.0, -5.0, 5.0, 25.0, 35.0],
            wind_speed_buckets: 5,
            wind_angle_buckets: 12,
        }
    }
}

impl RangeCardParams {
    /// Load from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, RangeCardError> {
        serde_json::from_str(json).map_err(|e| RangeCardError::Configuration(e.to_string()))
    }

    /// Reject configurations the run could not survive.
    pub fn validate(&self) -> Result<(), RangeCardError> {
        fn positive(value: f64, field: &str) -> Result<(), RangeCardError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(RangeCardError::Configuration(format!(
                    "{field} must be positive, got {value}"
                )))
            }
        }

        positive(self.bullet_weight_grain, "bullet_weight_grain")?;
        positive(self.muzzle_velocity_mps, "muzzle_velocity_mps")?;
        positive(self.ballistic_coefficient, "ballistic_coefficient")?;
        positive(self.bullet_diameter_inch, "bullet_diameter_inch")?;
        positive(self.bullet_length_inch, "bullet_length_inch")?;
        positive(self.sight_height_mm, "sight_height_mm")?;
        // Click sizes divide every correction
        positive(self.vertical_click_mrad, "vertical_click_mrad")?;
        positive(self.horizontal_click_mrad, "horizontal_click_mrad")?;
        positive(self.rifling_twist_inch, "rifling_twist_inch")?;
        positive(self.zero_distance_m, "zero_distance_m")?;
        positive(self.step_m, "step_m")?;
        positive(self.max_distance_m, "max_distance_m")?;

        if self.max_distance_m < self.step_m {
            return Err(RangeCardError::Configuration(format!(
                "max_distance_m ({}) is shorter than step_m ({})",
                self.max_distance_m, self.step_m
            )));
        }
        if self.wind_speed_buckets == 0 || self.wind_angle_buckets == 0 {
            return Err(RangeCardError::Configuration(
                "wind matrix needs at least one speed and one angle bucket".to_string(),
            ));
        }
        for &p in &self.pressures_mbar {
            positive(p, "pressures_mbar entry")?;
        }
        for &t in &self.temperatures_c {
            if !t.is_finite() {
                return Err(RangeCardError::Configuration(format!(
                    "temperatures_c entry must be finite, got {t}"
                )));
            }
        }
        Ok(())
    }

    pub fn ammunition(&self) -> Ammunition {
        Ammunition {
            weight: Measurement::new(self.bullet_weight_grain, WeightUnit::Grain),
            muzzle_velocity: Measurement::new(
                self.muzzle_velocity_mps,
                VelocityUnit::MetersPerSecond,
            ),
            ballistic_coefficient: BallisticCoefficient::new(
                self.ballistic_coefficient,
                self.ballistic_coefficient_model,
            ),
            bullet_diameter: Measurement::new(self.bullet_diameter_inch, DistanceUnit::Inch),
            bullet_length: Measurement::new(self.bullet_length_inch, DistanceUnit::Inch),
        }
    }

    pub fn rifle(&self) -> Rifle {
        Rifle {
            sight: Sight {
                sight_height: Measurement::new(self.sight_height_mm, DistanceUnit::Millimeter),
                vertical_click: Measurement::new(self.vertical_click_mrad, AngularUnit::MRad),
                horizontal_click: Measurement::new(self.horizontal_click_mrad, AngularUnit::MRad),
            },
            rifling: Rifling {
                twist: Measurement::new(self.rifling_twist_inch, DistanceUnit::Inch),
                direction: self.twist_direction,
            },
            zero: ZeroingParameters {
                distance: Measurement::new(self.zero_distance_m, DistanceUnit::Meter),
            },
        }
    }

    pub fn shot_parameters(&self) -> ShotParameters {
        ShotParameters {
            max_distance: Measurement::new(self.max_distance_m, DistanceUnit::Meter),
            step: Measurement::new(self.step_m, DistanceUnit::Meter),
        }
    }
}
