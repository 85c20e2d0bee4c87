mod frame;
mod null_renderer;
mod primitives;

pub use frame::{HIGHLIGHT_FILL, RenderFrame, TRACE_STROKE_WIDTH};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, PolylinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::ChromatResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from record and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChromatResult<()>;
}
