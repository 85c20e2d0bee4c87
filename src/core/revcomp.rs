//! Whole-record reverse complementation.

use crate::core::nucleotide::{complement, reverse_complement_bases};
use crate::core::record::ChromatogramRecord;
use crate::error::ChromatResult;

/// Reverse-complements a chromatogram record, returning a fresh record that
/// reports the same physical read in the opposite orientation.
///
/// The base calls are complemented and order-reversed. Each channel slot
/// keeps its sample array but is relabeled with the complementary base
/// letter, and the samples themselves are time-reversed since the read
/// direction flips. Peak positions mirror about the trace extent `T`:
/// `new[i] = T - old[N-1-i]`, which preserves strict monotonicity.
/// `trace_x` and the name/id/description metadata are copied unchanged.
///
/// Applying the transform twice yields a record value-equal to the input.
pub fn reverse_complement(record: &ChromatogramRecord) -> ChromatResult<ChromatogramRecord> {
    record.validate()?;

    let traces = record.traces.clone().map(|mut trace| {
        trace.reverse();
        trace
    });

    let extent = record.x_extent();
    let peak_positions = record
        .peak_positions
        .iter()
        .rev()
        .map(|peak| extent - peak)
        .collect();

    Ok(ChromatogramRecord {
        name: record.name.clone(),
        id: record.id.clone(),
        description: record.description.clone(),
        bases: reverse_complement_bases(&record.bases),
        channels: record.channels.map(complement),
        traces,
        peak_positions,
        trace_x: record.trace_x.clone(),
    })
}
