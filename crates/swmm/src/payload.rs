//! Output payload for the simulation engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rendered SWMM input fragments: one line list per area plus the
/// shared `[OPTIONS]` entries for the simulation window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnginePayload {
    /// SWMM timeseries lines keyed by area name.
    pub timeseries: BTreeMap<String, Vec<String>>,
    /// Simulation window options.
    pub options: BTreeMap<String, String>,
}
