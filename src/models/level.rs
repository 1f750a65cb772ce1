//! Game level definition.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One tier of the level table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GameLevel {
    /// Level number, starting at 1
    pub level: u32,
    pub name: String,
    /// Minimum cumulative points to hold this level
    pub min_points: u32,
    pub benefits: Vec<String>,
    /// Display color token (gradient classes)
    pub color: String,
}
