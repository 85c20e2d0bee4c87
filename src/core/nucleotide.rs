//! Nucleotide alphabet helpers shared by record transforms and plot styling.

use crate::render::Color;

/// Number of fluorescence channels in a Sanger trace, one per base.
pub const TRACE_CHANNELS: usize = 4;

/// Complements a single IUPAC nucleotide letter, preserving case.
///
/// Ambiguity codes map to their complementary code (`R`<->`Y`, `K`<->`M`,
/// `B`<->`V`, `D`<->`H`; `W`, `S` and `N` are self-complementary). Bytes
/// outside the alphabet pass through unchanged, so the function is total.
#[must_use]
pub fn complement(letter: u8) -> u8 {
    match letter {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'U' => b'A',
        b'R' => b'Y',
        b'Y' => b'R',
        b'K' => b'M',
        b'M' => b'K',
        b'B' => b'V',
        b'V' => b'B',
        b'D' => b'H',
        b'H' => b'D',
        b'a' => b't',
        b't' => b'a',
        b'c' => b'g',
        b'g' => b'c',
        b'u' => b'a',
        b'r' => b'y',
        b'y' => b'r',
        b'k' => b'm',
        b'm' => b'k',
        b'b' => b'v',
        b'v' => b'b',
        b'd' => b'h',
        b'h' => b'd',
        other => other,
    }
}

/// Reverse-complements a base-call sequence.
#[must_use]
pub fn reverse_complement_bases(bases: &[u8]) -> Vec<u8> {
    bases.iter().rev().copied().map(complement).collect()
}

/// Maps a base letter to its conventional chromatogram color.
///
/// A -> red, C -> blue, G -> green, T -> black; any other letter gets the
/// purple fallback so unexpected calls still render.
#[must_use]
pub fn base_color(letter: u8) -> Color {
    match letter.to_ascii_uppercase() {
        b'A' => Color::rgb(1.0, 0.0, 0.0),
        b'C' => Color::rgb(0.0, 0.0, 1.0),
        b'G' => Color::rgb(0.0, 0.5, 0.0),
        b'T' => Color::rgb(0.0, 0.0, 0.0),
        _ => Color::rgb(0.5, 0.0, 0.5),
    }
}
