use tracing::{debug, warn};

use crate::core::{
    ChromatogramRecord, HighlightRegion, PlotData, ViewWindow, build_plot_data, highlight_bounds,
    reverse_complement,
};
use crate::error::{ChromatError, ChromatResult};
use crate::render::RenderFrame;

/// Stateful facade over the pure geometry core.
///
/// The engine owns what an embedding application would otherwise track by
/// hand: the current record, the active view window, and the highlight
/// toggle. Every query delegates to the pure core functions, so two engines
/// with equal state produce identical output.
#[derive(Debug, Default)]
pub struct ChromatEngine {
    record: Option<ChromatogramRecord>,
    window: Option<ViewWindow>,
    highlight: Option<HighlightRegion>,
}

impl ChromatEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a record, replacing any previous one and resetting the view
    /// window and highlight.
    pub fn load_record(&mut self, record: ChromatogramRecord) -> ChromatResult<()> {
        record.validate()?;
        debug!(
            name = %record.name,
            bases = record.base_count(),
            samples = record.sample_count(),
            "record loaded"
        );
        self.record = Some(record);
        self.window = None;
        self.highlight = None;
        Ok(())
    }

    /// Unloads the record; subsequent plots are the placeholder.
    pub fn clear_record(&mut self) {
        self.record = None;
        self.window = None;
        self.highlight = None;
    }

    #[must_use]
    pub fn record(&self) -> Option<&ChromatogramRecord> {
        self.record.as_ref()
    }

    #[must_use]
    pub fn window(&self) -> Option<ViewWindow> {
        self.window
    }

    #[must_use]
    pub fn highlight(&self) -> Option<HighlightRegion> {
        self.highlight
    }

    /// Restricts rendering to a view window.
    ///
    /// Any active highlight is cleared: its rectangle was computed against
    /// the previous axes.
    pub fn set_window(&mut self, window: ViewWindow) -> ChromatResult<()> {
        window.validate()?;
        debug!(?window, "view window set");
        self.window = Some(window);
        self.highlight = None;
        Ok(())
    }

    /// Returns to the full-extent view.
    pub fn reset_window(&mut self) {
        self.window = None;
        self.highlight = None;
    }

    /// Replaces the current record with its reverse complement and resets
    /// the view to the full read.
    pub fn reverse_complement(&mut self) -> ChromatResult<()> {
        let Some(record) = &self.record else {
            return Err(ChromatError::InvalidData(
                "no record loaded to reverse-complement".to_owned(),
            ));
        };
        self.record = Some(reverse_complement(record)?);
        self.window = None;
        self.highlight = None;
        debug!("record reverse-complemented");
        Ok(())
    }

    /// Builds plot geometry for the current record and window.
    pub fn plot(&self) -> ChromatResult<PlotData> {
        build_plot_data(self.record.as_ref(), self.window)
    }

    /// Materializes a draw-ready frame, including the active highlight.
    pub fn render_frame(&self) -> ChromatResult<RenderFrame> {
        Ok(RenderFrame::from_plot(&self.plot()?, self.highlight))
    }

    /// Drives the highlight toggle from a click at plot x-coordinate
    /// `x_click`, returning the new highlight state.
    ///
    /// Clicking the already-highlighted base clears it; any other visible
    /// base replaces it. Clicks resolving to a peak outside the rendered
    /// range, or landing while nothing is plotted, leave the state
    /// untouched.
    pub fn click(&mut self, x_click: f64) -> ChromatResult<Option<HighlightRegion>> {
        let Some(record) = &self.record else {
            return Ok(None);
        };

        let PlotData::Frame(frame) = build_plot_data(Some(record), self.window)? else {
            return Ok(self.highlight);
        };

        match highlight_bounds(x_click, record, &frame.bounds) {
            Ok(region) => {
                if self.highlight.map(|current| current.index) == Some(region.index) {
                    debug!(index = region.index, "highlight cleared");
                    self.highlight = None;
                } else {
                    debug!(index = region.index, peak = region.peak, "highlight set");
                    self.highlight = Some(region);
                }
                Ok(self.highlight)
            }
            Err(ChromatError::OutOfView { peak, .. }) => {
                warn!(peak, x_click, "click resolved outside the visible range");
                Ok(self.highlight)
            }
            Err(err) => Err(err),
        }
    }
}
