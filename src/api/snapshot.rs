use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AxisBounds, HighlightRegion, ViewWindow};
use crate::error::{ChromatError, ChromatResult};

use super::ChromatEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub record_metadata: IndexMap<String, String>,
    pub base_count: usize,
    pub sample_count: usize,
    pub window: Option<ViewWindow>,
    pub highlight: Option<HighlightRegion>,
    pub bounds: AxisBounds,
}

impl ChromatEngine {
    /// Captures the engine's observable state together with the axis bounds
    /// the current plot would render with.
    pub fn snapshot(&self) -> ChromatResult<EngineSnapshot> {
        let mut record_metadata = IndexMap::new();
        if let Some(record) = self.record() {
            record_metadata.insert("name".to_owned(), record.name.clone());
            record_metadata.insert("id".to_owned(), record.id.clone());
            record_metadata.insert("description".to_owned(), record.description.clone());
        }

        let plot = self.plot()?;

        Ok(EngineSnapshot {
            record_metadata,
            base_count: self.record().map_or(0, |record| record.base_count()),
            sample_count: self.record().map_or(0, |record| record.sample_count()),
            window: self.window(),
            highlight: self.highlight(),
            bounds: plot.bounds(),
        })
    }

    /// JSON form of [`snapshot`](Self::snapshot) for golden-file tests.
    pub fn snapshot_json(&self) -> ChromatResult<String> {
        serde_json::to_string_pretty(&self.snapshot()?).map_err(|err| {
            ChromatError::InvalidData(format!("snapshot serialization failed: {err}"))
        })
    }
}
