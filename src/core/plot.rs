//! Geometry builder: projects a chromatogram record (optionally restricted
//! to a view window) into the arrays a presentation layer plots.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::nucleotide::{TRACE_CHANNELS, base_color};
use crate::core::record::ChromatogramRecord;
use crate::core::window::ViewWindow;
use crate::error::{ChromatError, ChromatResult};
use crate::render::Color;

/// Fixed y-axis extent of every chromatogram plot.
pub const Y_MIN: f64 = -0.15;
pub const Y_MAX: f64 = 1.05;

/// Baseline for the per-base letter labels, just under the traces.
pub const LABEL_Y: f64 = -0.11;

/// Axis extents in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisBounds {
    /// Bounds used for the placeholder plot when no record is loaded.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self {
            x_min: -2.0,
            x_max: 102.0,
            y_min: Y_MIN,
            y_max: Y_MAX,
        }
    }

    pub fn validate(self) -> ChromatResult<()> {
        for value in [self.x_min, self.x_max, self.y_min, self.y_max] {
            if !value.is_finite() {
                return Err(ChromatError::InvalidData(
                    "axis bounds must be finite".to_owned(),
                ));
            }
        }
        if self.x_min >= self.x_max || self.y_min >= self.y_max {
            return Err(ChromatError::InvalidData(
                "axis bounds must span a positive extent".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One channel's plottable curve: x-coordinates, normalized intensities,
/// and the color/letter of the base the channel records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceCurve {
    pub base: u8,
    pub color: Color,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

/// One called base's letter label, centered at its peak.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseLabel {
    pub base: u8,
    pub x: f64,
    pub y: f64,
    pub color: Color,
}

/// Complete plot geometry for one draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotFrame {
    pub curves: Vec<TraceCurve>,
    pub labels: Vec<BaseLabel>,
    pub bounds: AxisBounds,
}

/// Built render data, or the empty sentinel.
///
/// `Empty` covers both "no record loaded" and "the requested window selects
/// nothing"; it carries axis bounds so the caller can always draw axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlotData {
    Empty { bounds: AxisBounds },
    Frame(PlotFrame),
}

impl PlotData {
    #[must_use]
    pub fn empty() -> Self {
        Self::Empty {
            bounds: AxisBounds::placeholder(),
        }
    }

    #[must_use]
    pub fn bounds(&self) -> AxisBounds {
        match self {
            Self::Empty { bounds } => *bounds,
            Self::Frame(frame) => frame.bounds,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// Builds the plot geometry for `record`, restricted to `window` when given.
///
/// The function is pure: it validates the record, selects the windowed
/// sample/peak spans, normalizes all four channels by their shared maximum
/// (relative channel intensities stay comparable), and derives axis bounds
/// from the windowed peaks.
///
/// An absent record or a window that selects no samples or no peaks yields
/// `PlotData::Empty`, never an error.
pub fn build_plot_data(
    record: Option<&ChromatogramRecord>,
    window: Option<ViewWindow>,
) -> ChromatResult<PlotData> {
    let Some(record) = record else {
        return Ok(PlotData::empty());
    };
    record.validate()?;

    let xs = record.sample_xs();
    let peaks = &record.peak_positions;

    let (samples, peak_span) = match window {
        None => (0..xs.len(), 0..peaks.len()),
        Some(window) => {
            let (x_min, x_max) = window.resolve(record);
            let lo = xs.partition_point(|&x| x < x_min);
            let hi = xs.partition_point(|&x| x <= x_max);
            if lo == hi {
                return Ok(PlotData::empty());
            }
            let peak_lo = peaks.partition_point(|&p| p < x_min);
            let peak_hi = peaks.partition_point(|&p| p <= x_max);
            if peak_lo == peak_hi {
                return Ok(PlotData::empty());
            }
            (lo..hi, peak_lo..peak_hi)
        }
    };

    let window_xs = &xs[samples.clone()];
    let channel_slices: SmallVec<[&[f64]; TRACE_CHANNELS]> = record
        .traces
        .iter()
        .map(|trace| &trace[samples.clone()])
        .collect();

    let max_intensity = channel_slices
        .iter()
        .flat_map(|slice| slice.iter().copied())
        .fold(0.0_f64, f64::max);
    let scale = if max_intensity > 0.0 {
        max_intensity.recip()
    } else {
        1.0
    };

    let project_channel = |slot: usize| -> TraceCurve {
        let letter = record.channels[slot];
        TraceCurve {
            base: letter,
            color: base_color(letter),
            xs: window_xs.to_vec(),
            ys: channel_slices[slot].iter().map(|v| v * scale).collect(),
        }
    };

    // For long traces, optional parallel projection keeps output identical
    // while reducing wall-clock time.
    #[cfg(feature = "parallel-projection")]
    let curves: Vec<TraceCurve> = (0..TRACE_CHANNELS)
        .into_par_iter()
        .map(project_channel)
        .collect();

    #[cfg(not(feature = "parallel-projection"))]
    let curves: Vec<TraceCurve> = (0..TRACE_CHANNELS).map(project_channel).collect();

    let labels = peak_span
        .clone()
        .map(|i| BaseLabel {
            base: record.bases[i],
            x: peaks[i],
            y: LABEL_Y,
            color: base_color(record.bases[i]),
        })
        .collect();

    let first_peak = peaks[peak_span.start];
    let last_peak = peaks[peak_span.end - 1];
    let pad = (0.02 * (last_peak - first_peak)).max(2.0);
    let bounds = AxisBounds {
        x_min: first_peak - pad,
        x_max: last_peak + pad,
        y_min: Y_MIN,
        y_max: Y_MAX,
    };

    Ok(PlotData::Frame(PlotFrame {
        curves,
        labels,
        bounds,
    }))
}
