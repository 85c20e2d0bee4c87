//! chromat-rs: trace-to-plot geometry for Sanger chromatograms.
//!
//! This crate turns a parsed chromatogram record (four fluorescence
//! channels, called bases, peak positions) into deterministic render data:
//! normalized trace curves, base labels, axis bounds, highlight rectangles.
//! Drawing primitives and event wiring stay in the embedding presentation
//! layer.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::ChromatEngine;
pub use error::{ChromatError, ChromatResult};
