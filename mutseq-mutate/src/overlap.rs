//! Repeat overlap between an indel and its flanks.
//!
//! When the bases an indel removes or adds repeat into the neighbouring reference,
//! the same mutant window can be produced by shifting the edit along the repeat.
//! These helpers measure that overlap. They only affect the emitted windows when
//! [`MutateConfig::trim_repeat_overlap`](crate::config::MutateConfig) is turned on.

use crate::flank::Flanks;
use crate::kind::MutationKind;

/// Number of leading bases `a` and `b` agree on.
pub fn shared_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Number of trailing bases `a` and `b` agree on.
pub fn shared_suffix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().rev().zip(b.iter().rev()).take_while(|(x, y)| x == y).count()
}

/// How far the indel's bases repeat into each flank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepeatOverlap {
    /// Leading bases of the indel that also start the right flank.
    pub prefix: usize,
    /// Trailing bases of the indel that also end the left flank.
    pub suffix: usize,
}

impl RepeatOverlap {
    ///
    /// Bases to drop from the outer start of the left flank and from the outer
    /// end of the right flank: `(max(prefix - suffix, 0), max(suffix - prefix, 0))`.
    ///
    pub fn trim_amounts(&self) -> (usize, usize) {
        (
            self.prefix.saturating_sub(self.suffix),
            self.suffix.saturating_sub(self.prefix),
        )
    }
}

///
/// Measure the repeat overlap for an indel. `indel` is the deleted bases for a
/// deletion and the added bases for an insertion or duplication. Other kinds
/// never overlap.
///
pub fn repeat_overlap(kind: MutationKind, indel: &[u8], flanks: &Flanks) -> RepeatOverlap {
    match kind {
        MutationKind::Deletion | MutationKind::Insertion | MutationKind::Duplication => {
            RepeatOverlap {
                prefix: shared_prefix_len(indel, flanks.right),
                suffix: shared_suffix_len(indel, flanks.left),
            }
        }
        MutationKind::Substitution | MutationKind::Delins | MutationKind::Inversion => {
            RepeatOverlap::default()
        }
    }
}

/// Shave the outer flank ends by the overlap's trim amounts.
pub fn trim_flanks<'a>(flanks: Flanks<'a>, overlap: &RepeatOverlap) -> Flanks<'a> {
    let (left_trim, right_trim) = overlap.trim_amounts();
    let left_trim = left_trim.min(flanks.left.len());
    let right_trim = right_trim.min(flanks.right.len());

    Flanks {
        left: &flanks.left[left_trim..],
        right: &flanks.right[..flanks.right.len() - right_trim],
    }
}
