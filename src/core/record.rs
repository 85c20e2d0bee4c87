use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::core::nucleotide::TRACE_CHANNELS;
use crate::error::{ChromatError, ChromatResult};

/// A parsed Sanger chromatogram: called bases plus the raw four-channel
/// fluorescence signal they were called from.
///
/// Records are immutable values. Transforms such as
/// [`reverse_complement`](crate::core::reverse_complement) return a fresh
/// record; the caller swaps it in wholesale and discards the old one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChromatogramRecord {
    pub name: String,
    pub id: String,
    pub description: String,
    /// Called bases, one letter per peak.
    pub bases: Vec<u8>,
    /// Base letter recorded by each physical channel slot. Must be a
    /// bijection onto {A, C, G, T}.
    pub channels: [u8; TRACE_CHANNELS],
    /// Intensity samples per channel slot; equal length across slots.
    pub traces: [Vec<f64>; TRACE_CHANNELS],
    /// Per-base peak centers in the sample x-domain, strictly increasing.
    pub peak_positions: Vec<f64>,
    /// Optional explicit x-coordinate per sample; the sample index is the
    /// x-coordinate when absent.
    pub trace_x: Option<Vec<f64>>,
}

impl ChromatogramRecord {
    /// Number of called bases.
    #[must_use]
    pub fn base_count(&self) -> usize {
        self.bases.len()
    }

    /// Number of intensity samples per channel.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.traces[0].len()
    }

    /// Total x-extent of the trace: the last `trace_x` value, or `M - 1`
    /// when samples are indexed implicitly.
    #[must_use]
    pub fn x_extent(&self) -> f64 {
        match &self.trace_x {
            Some(xs) => xs.last().copied().unwrap_or(0.0),
            None => (self.sample_count().saturating_sub(1)) as f64,
        }
    }

    /// X-coordinate of every sample: `trace_x` when present, borrowed, or
    /// the synthesized sample indices.
    #[must_use]
    pub fn sample_xs(&self) -> Cow<'_, [f64]> {
        match &self.trace_x {
            Some(xs) => Cow::Borrowed(xs.as_slice()),
            None => Cow::Owned((0..self.sample_count()).map(|k| k as f64).collect()),
        }
    }

    /// Checks every structural invariant, failing with `MalformedRecord` on
    /// the first violation.
    ///
    /// Geometry builders and record transforms call this on entry so a bad
    /// record surfaces as a hard failure instead of partial output.
    pub fn validate(&self) -> ChromatResult<()> {
        let sample_count = self.traces[0].len();
        if self.traces.iter().any(|trace| trace.len() != sample_count) {
            return Err(ChromatError::MalformedRecord(
                "channel traces have mismatched lengths".to_owned(),
            ));
        }
        if sample_count == 0 {
            return Err(ChromatError::MalformedRecord(
                "record has no intensity samples".to_owned(),
            ));
        }
        for trace in &self.traces {
            if trace.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(ChromatError::MalformedRecord(
                    "intensity samples must be finite and non-negative".to_owned(),
                ));
            }
        }

        let mut letters: Vec<u8> = self
            .channels
            .iter()
            .map(|c| c.to_ascii_uppercase())
            .collect();
        letters.sort_unstable();
        if letters != *b"ACGT" {
            return Err(ChromatError::MalformedRecord(
                "channel map must assign each of A, C, G, T to exactly one slot".to_owned(),
            ));
        }

        if self.peak_positions.is_empty() {
            return Err(ChromatError::MalformedRecord(
                "peak position list is empty".to_owned(),
            ));
        }
        if self.peak_positions.len() != self.bases.len() {
            return Err(ChromatError::MalformedRecord(format!(
                "{} called bases but {} peak positions",
                self.bases.len(),
                self.peak_positions.len()
            )));
        }
        if self.peak_positions.iter().any(|p| !p.is_finite()) {
            return Err(ChromatError::MalformedRecord(
                "peak positions must be finite".to_owned(),
            ));
        }
        if self
            .peak_positions
            .windows(2)
            .any(|pair| pair[0] >= pair[1])
        {
            return Err(ChromatError::MalformedRecord(
                "peak positions must be strictly increasing".to_owned(),
            ));
        }

        let (x_first, x_last) = match &self.trace_x {
            Some(xs) => {
                if xs.len() != sample_count {
                    return Err(ChromatError::MalformedRecord(format!(
                        "trace_x has {} entries for {} samples",
                        xs.len(),
                        sample_count
                    )));
                }
                if xs.iter().any(|x| !x.is_finite()) {
                    return Err(ChromatError::MalformedRecord(
                        "trace_x coordinates must be finite".to_owned(),
                    ));
                }
                if xs.windows(2).any(|pair| pair[0] >= pair[1]) {
                    return Err(ChromatError::MalformedRecord(
                        "trace_x must be strictly increasing".to_owned(),
                    ));
                }
                (xs[0], xs[sample_count - 1])
            }
            None => (0.0, (sample_count - 1) as f64),
        };

        let first_peak = self.peak_positions[0];
        let last_peak = self.peak_positions[self.peak_positions.len() - 1];
        if first_peak < x_first || last_peak > x_last {
            return Err(ChromatError::MalformedRecord(format!(
                "peaks span [{first_peak}, {last_peak}] outside the sample x-domain \
                 [{x_first}, {x_last}]"
            )));
        }

        Ok(())
    }
}
