//! # Range Card
//!
//! Printable range-card generation: for a fixed rifle/ammunition/sight
//! configuration, tabulates per-distance sight corrections in click units
//! plus delta corrections for off-standard winds, pressures and
//! temperatures.
//!
//! Trajectory integration and document output stay outside the crate:
//! plug in any [`TrajectorySolver`] and [`Renderer`] and drive a run
//! through [`RangeCard`].

// Re-export the main types and functions
pub use atmosphere::Atmosphere;
pub use card::{RangeCard, RenderedCard};
pub use config::RangeCardParams;
pub use drag_model::DragModel;
pub use engine::{build_correction_table, CorrectionRow, DeltaCorrection, ScenarioTrajectories};
pub use error::{RangeCardError, SolverError};
pub use format::format_clicks;
pub use render::{PlaceholderRenderer, Renderer};
pub use row::assemble_row;
pub use scenario::{scenarios, Scenario};
pub use solver::{
    Ammunition, BallisticCoefficient, Rifle, Rifling, ShotParameters, Sight, TrajectorySample,
    TrajectorySolver, TwistDirection, ZeroingParameters,
};
pub use units::{
    AngularUnit, DistanceUnit, Measurement, PressureUnit, TemperatureUnit, Unit, VelocityUnit,
    WeightUnit,
};
pub use wind::Wind;

// Module declarations
pub mod atmosphere;
pub mod card;
pub mod config;
mod constants;
pub mod drag_model;
pub mod engine;
pub mod error;
pub mod format;
pub mod render;
pub mod row;
pub mod scenario;
pub mod solver;
pub mod units;
pub mod wind;
