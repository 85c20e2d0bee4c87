pub mod nucleotide;
pub mod peaks;
pub mod plot;
pub mod record;
pub mod revcomp;
pub mod window;

pub use peaks::{HighlightRegion, PeakHit, closest_peak, highlight_bounds};
pub use plot::{AxisBounds, BaseLabel, PlotData, PlotFrame, TraceCurve, build_plot_data};
pub use record::ChromatogramRecord;
pub use revcomp::reverse_complement;
pub use window::ViewWindow;
