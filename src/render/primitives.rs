use serde::{Deserialize, Serialize};

use crate::error::{ChromatError, ChromatResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChromatResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChromatError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one connected trace stroke in plot coordinates.
///
/// Chromatogram curves run to thousands of connected samples, so strokes are
/// shipped as one polyline per channel rather than per-segment commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolylinePrimitive {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub stroke_width: f64,
    pub color: Color,
}

impl PolylinePrimitive {
    pub fn validate(&self) -> ChromatResult<()> {
        if self.xs.len() != self.ys.len() {
            return Err(ChromatError::InvalidData(
                "polyline coordinate arrays must have equal length".to_owned(),
            ));
        }
        if self.xs.iter().chain(&self.ys).any(|v| !v.is_finite()) {
            return Err(ChromatError::InvalidData(
                "polyline coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChromatError::InvalidData(
                "polyline stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one filled axis-aligned rectangle in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub fill: Color,
}

impl RectPrimitive {
    pub fn validate(self) -> ChromatResult<()> {
        for value in [self.x_min, self.x_max, self.y_min, self.y_max] {
            if !value.is_finite() {
                return Err(ChromatError::InvalidData(
                    "rect coordinates must be finite".to_owned(),
                ));
            }
        }
        if self.x_min > self.x_max || self.y_min > self.y_max {
            return Err(ChromatError::InvalidData(
                "rect min bounds must not exceed max bounds".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in plot coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64, color: Color, h_align: TextHAlign) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChromatResult<()> {
        if self.text.is_empty() {
            return Err(ChromatError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChromatError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        self.color.validate()
    }
}
