//! Trajectory solver collaborator interface.
//!
//! Trajectory integration itself lives outside this crate: the card
//! generator drives any [`TrajectorySolver`] implementation through the
//! data model here. A solver must honor the shot parameters exactly —
//! every call for the same [`ShotParameters`] has to sample the same
//! distance sequence, or the run is rejected at the alignment check.

use crate::atmosphere::Atmosphere;
use crate::drag_model::DragModel;
use crate::error::SolverError;
use crate::units::{AngularUnit, DistanceUnit, Measurement, VelocityUnit, WeightUnit};
use crate::wind::Wind;
use serde::{Deserialize, Serialize};

/// Ballistic coefficient value together with its drag family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallisticCoefficient {
    pub value: f64,
    pub model: DragModel,
}

impl BallisticCoefficient {
    pub fn new(value: f64, model: DragModel) -> Self {
        BallisticCoefficient { value, model }
    }
}

/// Projectile and load description.
#[derive(Debug, Clone, PartialEq)]
pub struct Ammunition {
    pub weight: Measurement<WeightUnit>,
    pub muzzle_velocity: Measurement<VelocityUnit>,
    pub ballistic_coefficient: BallisticCoefficient,
    pub bullet_diameter: Measurement<DistanceUnit>,
    pub bullet_length: Measurement<DistanceUnit>,
}

/// Sight geometry and click sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct Sight {
    pub sight_height: Measurement<DistanceUnit>,
    pub vertical_click: Measurement<AngularUnit>,
    pub horizontal_click: Measurement<AngularUnit>,
}

/// Barrel twist direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TwistDirection {
    Left,
    Right,
}

/// Barrel rifling description.
#[derive(Debug, Clone, PartialEq)]
pub struct Rifling {
    /// Distance per full turn
    pub twist: Measurement<DistanceUnit>,
    pub direction: TwistDirection,
}

/// Zeroing conditions: the sight is assumed dialed for this distance.
#[derive(Debug, Clone, PartialEq)]
pub struct ZeroingParameters {
    pub distance: Measurement<DistanceUnit>,
}

/// The rifle as the solver sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Rifle {
    pub sight: Sight,
    pub rifling: Rifling,
    pub zero: ZeroingParameters,
}

/// Sweep definition shared by every scenario of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotParameters {
    pub max_distance: Measurement<DistanceUnit>,
    pub step: Measurement<DistanceUnit>,
}

impl ShotParameters {
    /// The distance sequence a conforming solver must sample, in meters:
    /// `0, step, 2·step, …` up to and including `max_distance`.
    pub fn distances_m(&self) -> Vec<f64> {
        let step = self.step.in_unit(DistanceUnit::Meter);
        let max = self.max_distance.in_unit(DistanceUnit::Meter);
        let count = (max / step).floor() as usize + 1;
        (0..count).map(|i| i as f64 * step).collect()
    }
}

/// One sample of a solved trajectory.
///
/// The adjustments are the angular offsets between the line of sight and
/// the point of impact at this distance; their signs follow the solver's
/// convention (drop below the sight line is negative elevation, drift to
/// the right is positive windage).
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectorySample {
    pub distance: Measurement<DistanceUnit>,
    pub elevation_adjustment: Measurement<AngularUnit>,
    pub windage_adjustment: Measurement<AngularUnit>,
}

/// External ballistic trajectory solver.
pub trait TrajectorySolver {
    /// Solve one scenario trajectory, ordered by increasing distance.
    ///
    /// `wind` is `None` for the no-wind scenarios. The sample distances are
    /// fixed by `shot` and must not depend on atmosphere or wind.
    fn solve(
        &self,
        ammunition: &Ammunition,
        rifle: &Rifle,
        atmosphere: &Atmosphere,
        shot: &ShotParameters,
        wind: Option<&Wind>,
    ) -> Result<Vec<TrajectorySample>, SolverError>;
}
