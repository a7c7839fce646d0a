//! Output type for a generation run.

use std::collections::BTreeMap;

use notos_schema::{ColumnarSeries, SeriesMeta};

/// Result of one generation run: one series per area plus the shared
/// time-grid metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateResult {
    series: BTreeMap<String, ColumnarSeries>,
    meta: SeriesMeta,
}

impl GenerateResult {
    pub(crate) fn new(series: BTreeMap<String, ColumnarSeries>, meta: SeriesMeta) -> Self {
        Self { series, meta }
    }

    /// Returns the per-area series, keyed by area name.
    pub fn series(&self) -> &BTreeMap<String, ColumnarSeries> {
        &self.series
    }

    /// Returns the shared time-grid metadata.
    pub fn meta(&self) -> &SeriesMeta {
        &self.meta
    }

    /// Consumes the result, returning the series map and metadata.
    pub fn into_parts(self) -> (BTreeMap<String, ColumnarSeries>, SeriesMeta) {
        (self.series, self.meta)
    }
}
