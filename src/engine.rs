//! Correction-table engine.
//!
//! Consumes one trajectory per scenario — all aligned on the same distance
//! sequence — and derives, per distance step, the baseline sight
//! correction in click units plus the delta correction of every perturbed
//! scenario relative to baseline.
//!
//! Sign conventions: elevation is reported negated, as the correction the
//! shooter dials in (opposite to the raw drop adjustment); windage is
//! reported un-negated because the solver's windage sign already matches
//! the dial-in direction. Every delta subtracts the baseline's *raw*
//! click value, never a rounded one, so display rounding cannot
//! accumulate bias across the table.

use crate::constants::DISTANCE_ALIGNMENT_TOLERANCE_M;
use crate::error::RangeCardError;
use crate::scenario::Scenario;
use crate::solver::{Sight, TrajectorySample};
use crate::units::{AngularUnit, DistanceUnit};

/// Delta correction of one scenario at one distance step, in clicks.
///
/// Pressure and temperature scenarios carry only an elevation delta; wind
/// scenarios carry both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaCorrection {
    pub elevation_clicks: Option<f64>,
    pub windage_clicks: Option<f64>,
}

/// One distance step of the correction table.
///
/// Click values are raw; display rounding happens in the formatting
/// layer. Immutable after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionRow {
    pub distance_m: f64,
    /// Baseline elevation correction (clicks to dial in)
    pub elevation_clicks: f64,
    /// Baseline windage correction, spindrift included (clicks)
    pub windage_clicks: f64,
    /// Delta correction per perturbed scenario, in scenario-set order
    pub deltas: Vec<(Scenario, DeltaCorrection)>,
}

/// Baseline plus perturbed trajectories, alignment-checked at construction.
///
/// Construction is the single place where the alignment invariant is
/// enforced: every perturbed trajectory must cover every baseline index at
/// the baseline's distance. A shorter trajectory (a solver that
/// terminated early, e.g. on subsonic cutoff) is an
/// [`RangeCardError::IncompleteTrajectory`]; trailing samples beyond the
/// baseline sweep are ignored.
#[derive(Debug, Clone)]
pub struct ScenarioTrajectories {
    baseline: Vec<TrajectorySample>,
    perturbed: Vec<(Scenario, Vec<TrajectorySample>)>,
}

impl ScenarioTrajectories {
    pub fn new(
        baseline: Vec<TrajectorySample>,
        perturbed: Vec<(Scenario, Vec<TrajectorySample>)>,
    ) -> Result<Self, RangeCardError> {
        for (scenario, samples) in &perturbed {
            if samples.len() < baseline.len() {
                return Err(RangeCardError::IncompleteTrajectory {
                    scenario: scenario.label(),
                    expected: baseline.len(),
                    actual: samples.len(),
                });
            }
            for (index, reference) in baseline.iter().enumerate() {
                let distance_m = samples[index].distance.in_unit(DistanceUnit::Meter);
                let reference_m = reference.distance.in_unit(DistanceUnit::Meter);
                if (distance_m - reference_m).abs() > DISTANCE_ALIGNMENT_TOLERANCE_M {
                    return Err(RangeCardError::MisalignedSample {
                        scenario: scenario.label(),
                        index,
                    });
                }
            }
        }
        Ok(ScenarioTrajectories {
            baseline,
            perturbed,
        })
    }

    pub fn baseline(&self) -> &[TrajectorySample] {
        &self.baseline
    }

    pub fn perturbed(&self) -> &[(Scenario, Vec<TrajectorySample>)] {
        &self.perturbed
    }
}

/// Build the full correction table, one row per baseline distance step,
/// ascending.
///
/// Pure and total on validated inputs; alignment failures are ruled out by
/// [`ScenarioTrajectories::new`].
pub fn build_correction_table(
    sight: &Sight,
    trajectories: &ScenarioTrajectories,
) -> Vec<CorrectionRow> {
    let vertical_click = sight.vertical_click.in_unit(AngularUnit::MRad);
    let horizontal_click = sight.horizontal_click.in_unit(AngularUnit::MRad);

    trajectories
        .baseline()
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let elevation_clicks =
                -point.elevation_adjustment.in_unit(AngularUnit::MRad) / vertical_click;
            let windage_clicks =
                point.windage_adjustment.in_unit(AngularUnit::MRad) / horizontal_click;

            let deltas = trajectories
                .perturbed()
                .iter()
                .map(|(scenario, samples)| {
                    let sample = &samples[index];
                    let delta = match scenario {
                        Scenario::Pressure(_) | Scenario::Temperature(_) => DeltaCorrection {
                            // Additional clicks on top of the baseline
                            // elevation setting
                            elevation_clicks: Some(
                                -(elevation_clicks
                                    + sample.elevation_adjustment.in_unit(AngularUnit::MRad)
                                        / vertical_click),
                            ),
                            windage_clicks: None,
                        },
                        Scenario::Baseline | Scenario::Wind { .. } => DeltaCorrection {
                            elevation_clicks: Some(
                                -sample.elevation_adjustment.in_unit(AngularUnit::MRad)
                                    / vertical_click
                                    - elevation_clicks,
                            ),
                            windage_clicks: Some(
                                sample.windage_adjustment.in_unit(AngularUnit::MRad)
                                    / horizontal_click
                                    - windage_clicks,
                            ),
                        },
                    };
                    (scenario.clone(), delta)
                })
                .collect();

            CorrectionRow {
                distance_m: point.distance.in_unit(DistanceUnit::Meter),
                elevation_clicks,
                windage_clicks,
                deltas,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Measurement;

    fn sample(distance_m: f64, elevation_mrad: f64, windage_mrad: f64) -> TrajectorySample {
        TrajectorySample {
            distance: Measurement::new(distance_m, DistanceUnit::Meter),
            elevation_adjustment: Measurement::new(elevation_mrad, AngularUnit::MRad),
            windage_adjustment: Measurement::new(windage_mrad, AngularUnit::MRad),
        }
    }

    fn sight() -> Sight {
        Sight {
            sight_height: Measurement::new(68.0, DistanceUnit::Millimeter),
            vertical_click: Measurement::new(0.1, AngularUnit::MRad),
            horizontal_click: Measurement::new(0.1, AngularUnit::MRad),
        }
    }

    #[test]
    fn test_baseline_clicks() {
        let trajectories =
            ScenarioTrajectories::new(vec![sample(500.0, -3.47, 0.23)], vec![]).unwrap();
        let rows = build_correction_table(&sight(), &trajectories);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].distance_m, 500.0);
        // -(-3.47 / 0.1) = 34.7
        assert!((rows[0].elevation_clicks - 34.7).abs() < 1e-9);
        assert!((rows[0].windage_clicks - 2.3).abs() < 1e-9);
    }

    #[test]
    fn test_pressure_delta_formula() {
        // Worked example: baseline -3.47 mrad, pressure trajectory -3.60
        // mrad, 0.1 mrad clicks: delta = -(34.7 + (-36.0)) = 1.3
        let trajectories = ScenarioTrajectories::new(
            vec![sample(500.0, -3.47, 0.0)],
            vec![(Scenario::Pressure(900.0), vec![sample(500.0, -3.60, 0.0)])],
        )
        .unwrap();
        let rows = build_correction_table(&sight(), &trajectories);
        let (_, delta) = &rows[0].deltas[0];
        assert!((delta.elevation_clicks.unwrap() - 1.3).abs() < 1e-9);
        assert_eq!(delta.windage_clicks, None);
    }

    #[test]
    fn test_wind_delta_formula() {
        let trajectories = ScenarioTrajectories::new(
            vec![sample(500.0, -3.47, 0.23)],
            vec![(
                Scenario::Wind {
                    speed_bucket: 2,
                    angle_bucket: 3,
                },
                vec![sample(500.0, -3.50, 1.51)],
            )],
        )
        .unwrap();
        let rows = build_correction_table(&sight(), &trajectories);
        let (_, delta) = &rows[0].deltas[0];
        // windage: 15.1 - 2.3 = 12.8
        assert!((delta.windage_clicks.unwrap() - 12.8).abs() < 1e-9);
        // elevation: -(-3.50/0.1) - 34.7 = 0.3
        assert!((delta.elevation_clicks.unwrap() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_baseline_self_consistency() {
        // A degenerate scenario carrying the baseline's own samples must
        // produce exactly zero deltas before any rounding.
        let baseline = vec![sample(100.0, -0.4, 0.05), sample(200.0, -1.1, 0.11)];
        let trajectories = ScenarioTrajectories::new(
            baseline.clone(),
            vec![
                (Scenario::Temperature(15.0), baseline.clone()),
                (
                    Scenario::Wind {
                        speed_bucket: 0,
                        angle_bucket: 0,
                    },
                    baseline.clone(),
                ),
            ],
        )
        .unwrap();
        for row in build_correction_table(&sight(), &trajectories) {
            let (_, temperature_delta) = &row.deltas[0];
            assert_eq!(temperature_delta.elevation_clicks, Some(0.0));
            let (_, wind_delta) = &row.deltas[1];
            assert_eq!(wind_delta.elevation_clicks, Some(0.0));
            assert_eq!(wind_delta.windage_clicks, Some(0.0));
        }
    }

    #[test]
    fn test_short_trajectory_rejected() {
        let baseline = vec![sample(100.0, -0.4, 0.0), sample(200.0, -1.1, 0.0)];
        let err = ScenarioTrajectories::new(
            baseline,
            vec![(Scenario::Temperature(-15.0), vec![sample(100.0, -0.5, 0.0)])],
        )
        .unwrap_err();
        assert_eq!(
            err,
            RangeCardError::IncompleteTrajectory {
                scenario: "temperature -15 °C".to_string(),
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn test_misaligned_distance_rejected() {
        let baseline = vec![sample(100.0, -0.4, 0.0), sample(200.0, -1.1, 0.0)];
        let err = ScenarioTrajectories::new(
            baseline,
            vec![(
                Scenario::Pressure(800.0),
                vec![sample(100.0, -0.5, 0.0), sample(250.0, -1.2, 0.0)],
            )],
        )
        .unwrap_err();
        assert_eq!(
            err,
            RangeCardError::MisalignedSample {
                scenario: "pressure 800 hPa".to_string(),
                index: 1,
            }
        );
    }

    #[test]
    fn test_longer_trajectory_truncated_to_baseline() {
        let baseline = vec![sample(100.0, -0.4, 0.0)];
        let trajectories = ScenarioTrajectories::new(
            baseline,
            vec![(
                Scenario::Pressure(800.0),
                vec![sample(100.0, -0.5, 0.0), sample(200.0, -1.2, 0.0)],
            )],
        )
        .unwrap();
        let rows = build_correction_table(&sight(), &trajectories);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_unequal_click_sizes() {
        let sight = Sight {
            sight_height: Measurement::new(68.0, DistanceUnit::Millimeter),
            vertical_click: Measurement::new(0.1, AngularUnit::MRad),
            horizontal_click: Measurement::new(0.2, AngularUnit::MRad),
        };
        let trajectories =
            ScenarioTrajectories::new(vec![sample(500.0, -3.0, 0.4)], vec![]).unwrap();
        let rows = build_correction_table(&sight, &trajectories);
        assert!((rows[0].elevation_clicks - 30.0).abs() < 1e-9);
        assert!((rows[0].windage_clicks - 2.0).abs() < 1e-9);
    }
}
