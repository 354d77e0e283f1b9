//! Row assembler: one correction row into a placeholder mapping.
//!
//! The mapping is what crosses the rendering boundary — placeholder
//! identifier to formatted value, nothing markup-specific. A `BTreeMap`
//! keeps iteration order deterministic.

use std::collections::BTreeMap;

use crate::engine::CorrectionRow;
use crate::format::format_clicks;

/// Gun/profile name placeholder
pub const GUN: &str = "$GUN";

/// Distance placeholder, integer meters
pub const DISTANCE: &str = "$DIST";

/// Baseline elevation correction placeholder, integer clicks
pub const DROP: &str = "$DROP";

/// Baseline windage (spindrift) correction placeholder, integer clicks
pub const SPINDRIFT: &str = "$SP";

/// Assemble the placeholder mapping for one distance row.
pub fn assemble_row(gun_name: &str, row: &CorrectionRow) -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();
    values.insert(GUN.to_string(), gun_name.to_string());
    values.insert(DISTANCE.to_string(), format_clicks(row.distance_m, 0));
    values.insert(DROP.to_string(), format_clicks(row.elevation_clicks, 0));
    values.insert(SPINDRIFT.to_string(), format_clicks(row.windage_clicks, 0));

    for (scenario, delta) in &row.deltas {
        if let (Some(placeholder), Some(clicks)) =
            (scenario.elevation_placeholder(), delta.elevation_clicks)
        {
            values.insert(placeholder, format_clicks(clicks, scenario.delta_precision()));
        }
        if let (Some(placeholder), Some(clicks)) =
            (scenario.windage_placeholder(), delta.windage_clicks)
        {
            values.insert(placeholder, format_clicks(clicks, scenario.delta_precision()));
        }
    }
    values
}
