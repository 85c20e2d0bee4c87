use serde::{Deserialize, Serialize};

use crate::core::record::ChromatogramRecord;
use crate::error::{ChromatError, ChromatResult};

/// Sub-view selector for rendering. Transient; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewWindow {
    /// Inclusive x-coordinate interval.
    X { start: f64, end: f64 },
    /// Half-open called-base index interval `[start, end)`.
    Bases { start: usize, end: usize },
}

impl ViewWindow {
    pub fn x_range(start: f64, end: f64) -> ChromatResult<Self> {
        let window = Self::X { start, end };
        window.validate()?;
        Ok(window)
    }

    pub fn base_range(start: usize, end: usize) -> ChromatResult<Self> {
        let window = Self::Bases { start, end };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(self) -> ChromatResult<()> {
        match self {
            Self::X { start, end } => {
                if !start.is_finite() || !end.is_finite() {
                    return Err(ChromatError::InvalidData(
                        "window x coordinates must be finite".to_owned(),
                    ));
                }
            }
            Self::Bases { start, end } => {
                if start >= end {
                    return Err(ChromatError::InvalidData(
                        "base range must select at least one base".to_owned(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Resolves the window to an inclusive x interval over `record`.
    ///
    /// X endpoints are order-normalized; base indices clamp to the last
    /// called base, so an oversized range degrades to the trailing peaks
    /// instead of failing.
    #[must_use]
    pub fn resolve(self, record: &ChromatogramRecord) -> (f64, f64) {
        match self {
            Self::X { start, end } => {
                if start <= end {
                    (start, end)
                } else {
                    (end, start)
                }
            }
            Self::Bases { start, end } => {
                let peaks = &record.peak_positions;
                let last = peaks.len() - 1;
                (peaks[start.min(last)], peaks[end.saturating_sub(1).min(last)])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_range_rejects_non_finite_endpoints() {
        assert!(ViewWindow::x_range(f64::NAN, 10.0).is_err());
        assert!(ViewWindow::x_range(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn base_range_rejects_empty_interval() {
        assert!(ViewWindow::base_range(3, 3).is_err());
        assert!(ViewWindow::base_range(5, 2).is_err());
    }
}
