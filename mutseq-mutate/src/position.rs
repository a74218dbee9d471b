//! Conversion of 1-based notation positions into 0-based sequence offsets.

use std::num::IntErrorKind;
use std::ops::Range;

use crate::kind::MutationKind;
use crate::report::RejectReason;

/// Where an edit lands in the reference, as 0-based half-open ranges.
///
/// `span` is the region replaced by the edit: the left flank ends at `span.start`
/// and the right flank begins at `span.end`. Insertions and duplications have an
/// empty `span`. `source` is the region read from the reference to build the
/// mutant bases of a duplication; for every other kind it equals `span`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPosition {
    pub span: Range<usize>,
    pub source: Range<usize>,
}

/// Parse `"9_13"` or `"5"` into a pair of 1-based positions.
pub fn parse_positions(positions: &str) -> Result<(usize, usize), RejectReason> {
    let mut parts = positions.split('_');
    let first = parse_position(parts.next())?;
    let second = match parts.next() {
        Some(part) => parse_position(Some(part))?,
        None => first,
    };

    if parts.next().is_some() {
        return Err(RejectReason::UnparseableNotation);
    }
    Ok((first, second))
}

/// Positions past `usize::MAX` are well formed but can never be in range.
fn parse_position(part: Option<&str>) -> Result<usize, RejectReason> {
    let part = part.ok_or(RejectReason::UnparseableNotation)?;
    part.parse::<usize>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => RejectReason::PositionOutOfRange,
        _ => RejectReason::UnparseableNotation,
    })
}

///
/// Resolve the position string of a notation against a sequence of length
/// `seq_len`.
///
/// An insertion `p_p+1` sits between two adjacent bases, so its span is the
/// empty range at 0-based offset `p` (`c.0_1ins...` inserts before the first
/// base). A duplication copies its source span and is inserted immediately
/// after it.
///
pub fn resolve_positions(
    positions: &str,
    kind: MutationKind,
    seq_len: usize,
) -> Result<ResolvedPosition, RejectReason> {
    let (first, second) = parse_positions(positions)?;

    if kind == MutationKind::Insertion {
        if first.checked_add(1) != Some(second) {
            return Err(RejectReason::UnparseableNotation);
        }
        if first > seq_len {
            return Err(RejectReason::PositionOutOfRange);
        }
        return Ok(ResolvedPosition {
            span: first..first,
            source: first..first,
        });
    }

    if kind == MutationKind::Substitution && first != second {
        return Err(RejectReason::UnparseableNotation);
    }

    if first == 0 || second < first || second > seq_len {
        return Err(RejectReason::PositionOutOfRange);
    }

    let source = (first - 1)..second;
    let span = match kind {
        MutationKind::Duplication => source.end..source.end,
        _ => source.clone(),
    };

    Ok(ResolvedPosition { span, source })
}
