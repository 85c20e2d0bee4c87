use serde::{Deserialize, Serialize};

use crate::core::peaks::HighlightRegion;
use crate::core::plot::{AxisBounds, PlotData};
use crate::error::ChromatResult;
use crate::render::{Color, PolylinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

/// Stroke width for trace curves, in plot units.
pub const TRACE_STROKE_WIDTH: f64 = 2.0;

/// Translucent fill used for the highlighted-base rectangle.
pub const HIGHLIGHT_FILL: Color = Color::rgba(0.0, 0.0, 1.0, 0.3);

/// Backend-agnostic scene for one chromatogram draw pass.
///
/// Backends receive a fully materialized frame so drawing code stays isolated
/// from record transforms and interaction logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub strokes: Vec<PolylinePrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub highlight: Option<RectPrimitive>,
    pub bounds: AxisBounds,
}

impl RenderFrame {
    /// Materializes a frame from built plot data and an optional highlight.
    ///
    /// The `Empty` sentinel becomes a frame with no draw commands but valid
    /// axis bounds, so a caller can always draw the axes themselves.
    #[must_use]
    pub fn from_plot(plot: &PlotData, highlight: Option<HighlightRegion>) -> Self {
        let frame = match plot {
            PlotData::Empty { bounds } => return Self::empty(*bounds),
            PlotData::Frame(frame) => frame,
        };

        let strokes = frame
            .curves
            .iter()
            .map(|curve| PolylinePrimitive {
                xs: curve.xs.clone(),
                ys: curve.ys.clone(),
                stroke_width: TRACE_STROKE_WIDTH,
                color: curve.color,
            })
            .collect();

        let texts = frame
            .labels
            .iter()
            .map(|label| {
                TextPrimitive::new(
                    char::from(label.base).to_string(),
                    label.x,
                    label.y,
                    label.color,
                    TextHAlign::Center,
                )
            })
            .collect();

        let highlight = highlight.map(|region| RectPrimitive {
            x_min: region.x_min,
            x_max: region.x_max,
            y_min: frame.bounds.y_min,
            y_max: frame.bounds.y_max,
            fill: HIGHLIGHT_FILL,
        });

        Self {
            strokes,
            texts,
            highlight,
            bounds: frame.bounds,
        }
    }

    #[must_use]
    pub fn empty(bounds: AxisBounds) -> Self {
        Self {
            strokes: Vec::new(),
            texts: Vec::new(),
            highlight: None,
            bounds,
        }
    }

    pub fn validate(&self) -> ChromatResult<()> {
        self.bounds.validate()?;
        for stroke in &self.strokes {
            stroke.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        if let Some(rect) = self.highlight {
            rect.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.texts.is_empty() && self.highlight.is_none()
    }
}
