//! Nearest-peak lookup and highlight-region geometry for interactive
//! base selection.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::plot::AxisBounds;
use crate::core::record::ChromatogramRecord;
use crate::error::{ChromatError, ChromatResult};

/// Result of a nearest-peak query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakHit {
    pub index: usize,
    pub peak: f64,
}

/// Highlight rectangle bounds around one called base.
///
/// The region spans the full y-extent of the current axes when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightRegion {
    pub index: usize,
    pub peak: f64,
    pub x_min: f64,
    pub x_max: f64,
}

/// Finds the peak nearest to a clicked x-coordinate.
///
/// Linear scan minimizing `|peak - x_click|`; exact ties resolve to the
/// lowest index. Peak counts stay in the low thousands, so no index
/// structure is needed.
pub fn closest_peak(x_click: f64, record: &ChromatogramRecord) -> ChromatResult<PeakHit> {
    if !x_click.is_finite() {
        return Err(ChromatError::InvalidData(
            "click coordinate must be finite".to_owned(),
        ));
    }

    record
        .peak_positions
        .iter()
        .copied()
        .enumerate()
        .min_by_key(|(_, peak)| OrderedFloat((peak - x_click).abs()))
        .map(|(index, peak)| PeakHit { index, peak })
        .ok_or_else(|| ChromatError::MalformedRecord("peak position list is empty".to_owned()))
}

/// Computes the highlight region for the peak nearest to `x_click`.
///
/// Fails with `OutOfView` unless the peak lies inside the currently
/// rendered x-extent (half-open: `x_min <= peak < x_max`). Region bounds
/// are the midpoints to the neighboring peaks; the first and last peaks
/// extend half a unit outward instead.
pub fn highlight_bounds(
    x_click: f64,
    record: &ChromatogramRecord,
    view: &AxisBounds,
) -> ChromatResult<HighlightRegion> {
    let hit = closest_peak(x_click, record)?;

    if !(view.x_min <= hit.peak && hit.peak < view.x_max) {
        return Err(ChromatError::OutOfView {
            peak: hit.peak,
            x_min: view.x_min,
            x_max: view.x_max,
        });
    }

    let peaks = &record.peak_positions;
    let x_min = if hit.index == 0 {
        hit.peak - 0.5
    } else {
        0.5 * (peaks[hit.index - 1] + hit.peak)
    };
    let x_max = if hit.index == peaks.len() - 1 {
        hit.peak + 0.5
    } else {
        0.5 * (hit.peak + peaks[hit.index + 1])
    };

    Ok(HighlightRegion {
        index: hit.index,
        peak: hit.peak,
        x_min,
        x_max,
    })
}
