use thiserror::Error;

pub type ChromatResult<T> = Result<T, ChromatError>;

#[derive(Debug, Error)]
pub enum ChromatError {
    /// Structural invariant violation in a chromatogram record. Indicates an
    /// upstream parsing defect and is never silently recovered.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// A highlight query resolved to a peak outside the rendered x-extent.
    /// Expected during ordinary interaction; callers take no action.
    #[error("peak at x={peak} is outside the visible range [{x_min}, {x_max})")]
    OutOfView { peak: f64, x_min: f64, x_max: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
