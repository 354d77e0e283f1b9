//! Range-card orchestration.
//!
//! Drives one run end to end: validated configuration → scenario set →
//! one solver call per scenario (fanned out across threads; results are
//! collected back in scenario order before the sequential engine runs) →
//! correction table → placeholder rows → one rendered document per
//! distance. File output stays with the caller.

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::RangeCardParams;
use crate::engine::{build_correction_table, CorrectionRow, ScenarioTrajectories};
use crate::error::RangeCardError;
use crate::render::Renderer;
use crate::row::assemble_row;
use crate::scenario::{scenarios, Scenario};
use crate::solver::{TrajectorySample, TrajectorySolver};

/// One rendered card document.
///
/// The identifier is derived from the integer distance and is unique
/// within a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCard {
    pub distance_m: f64,
    pub id: String,
    pub document: String,
}

/// A configured range-card run.
#[derive(Debug, Clone)]
pub struct RangeCard {
    params: RangeCardParams,
}

impl RangeCard {
    /// Validates the configuration; no scenario is computed on failure.
    pub fn new(params: RangeCardParams) -> Result<Self, RangeCardError> {
        params.validate()?;
        Ok(RangeCard { params })
    }

    pub fn params(&self) -> &RangeCardParams {
        &self.params
    }

    /// Solve every scenario and build the correction table, ascending by
    /// distance.
    ///
    /// A solver failure or a scenario trajectory that does not align with
    /// baseline is fatal for the whole run — a silently missing scenario
    /// would corrupt the card.
    pub fn compute_rows<S>(&self, solver: &S) -> Result<Vec<CorrectionRow>, RangeCardError>
    where
        S: TrajectorySolver + Sync,
    {
        let ammunition = self.params.ammunition();
        let rifle = self.params.rifle();
        let shot = self.params.shot_parameters();
        let scenario_set = scenarios(&self.params);
        debug!(scenarios = scenario_set.len(), "solving scenario trajectories");

        let solved: Vec<(Scenario, Vec<TrajectorySample>)> = scenario_set
            .into_par_iter()
            .map(|scenario| {
                let wind = scenario.wind();
                solver
                    .solve(
                        &ammunition,
                        &rifle,
                        &scenario.atmosphere(),
                        &shot,
                        wind.as_ref(),
                    )
                    .map_err(|e| RangeCardError::solver(scenario.label(), e))
                    .map(|samples| (scenario, samples))
            })
            .collect::<Result<_, _>>()?;

        let mut baseline = None;
        let mut perturbed = Vec::with_capacity(solved.len().saturating_sub(1));
        for (scenario, samples) in solved {
            match scenario {
                Scenario::Baseline => baseline = Some(samples),
                other => perturbed.push((other, samples)),
            }
        }
        let baseline = baseline.ok_or_else(|| {
            RangeCardError::Configuration("scenario set lacks a baseline".to_string())
        })?;

        let trajectories = ScenarioTrajectories::new(baseline, perturbed)?;
        let rows = build_correction_table(&rifle.sight, &trajectories);
        debug!(rows = rows.len(), "correction table built");
        Ok(rows)
    }

    /// Placeholder mappings ready for a renderer, one per distance row.
    pub fn placeholder_rows<S>(
        &self,
        solver: &S,
    ) -> Result<Vec<BTreeMap<String, String>>, RangeCardError>
    where
        S: TrajectorySolver + Sync,
    {
        Ok(self
            .compute_rows(solver)?
            .iter()
            .map(|row| assemble_row(&self.params.name, row))
            .collect())
    }

    /// Render one document per distance through the configured template.
    ///
    /// Render failures are per-row outcomes and do not abort the
    /// remaining rows; everything upstream of rendering stays fatal.
    pub fn render<S, R>(
        &self,
        solver: &S,
        renderer: &R,
    ) -> Result<Vec<Result<RenderedCard, RangeCardError>>, RangeCardError>
    where
        S: TrajectorySolver + Sync,
        R: Renderer,
    {
        let rows = self.compute_rows(solver)?;
        Ok(rows
            .iter()
            .map(|row| {
                let values = assemble_row(&self.params.name, row);
                match renderer.render(&self.params.template, &values) {
                    Ok(document) => Ok(RenderedCard {
                        distance_m: row.distance_m,
                        id: format!("rangecard_{:.0}", row.distance_m),
                        document,
                    }),
                    Err(e) => {
                        warn!(distance_m = row.distance_m, error = %e, "row render failed");
                        Err(e)
                    }
                }
            })
            .collect())
    }
}
