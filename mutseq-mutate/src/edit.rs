//! Computes the wildtype bases consumed by an edit and the mutant bases that
//! replace them.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::kind::MutationKind;
use crate::position::ResolvedPosition;
use crate::report::RejectReason;

static INSERTED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"ins([A-Z]+)").expect("insertion pattern is a valid regex"));
static DELINS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"delins([A-Z]+)").expect("delins pattern is a valid regex"));

/// Complement lookup, case preserving. Bytes outside the table (including the
/// gap characters `.` and `-`) map to themselves.
pub static COMPLEMENT: Lazy<[u8; 256]> = Lazy::new(|| {
    let mut comp = [0u8; 256];

    for (v, a) in comp.iter_mut().enumerate() {
        *a = v as u8;
    }

    for (&a, &b) in b"ATCGN".iter().zip(b"TAGCN".iter()) {
        comp[a as usize] = b; // upper case
        comp[a.to_ascii_lowercase() as usize] = b.to_ascii_lowercase(); // lower case
    }
    // RNA: uracil pairs with adenine
    comp[b'U' as usize] = b'A';
    comp[b'u' as usize] = b'a';

    comp
});

pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| COMPLEMENT[b as usize]).collect()
}

/// Wildtype and mutant bases at the mutation site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditedRegion {
    pub wt_region: Vec<u8>,
    pub mut_region: Vec<u8>,
}

///
/// Apply `edit` of the given `kind` at `position` in `sequence`.
///
/// `position` must come from [`resolve_positions`](crate::position::resolve_positions)
/// for the same sequence, so its ranges are within bounds.
///
pub fn apply_edit(
    sequence: &[u8],
    kind: MutationKind,
    position: &ResolvedPosition,
    edit: &str,
) -> Result<EditedRegion, RejectReason> {
    let span = position.span.clone();

    let (wt_region, mut_region) = match kind {
        MutationKind::Substitution => {
            let (wt_base, mut_base) = substitution_bases(edit)?;
            let reference_base = sequence[span.start];
            if !wt_base.eq_ignore_ascii_case(&reference_base) {
                return Err(RejectReason::WildtypeBaseMismatch);
            }
            (vec![reference_base], vec![mut_base])
        }
        MutationKind::Deletion => (sequence[span].to_vec(), Vec::new()),
        MutationKind::Insertion => (Vec::new(), inserted_bases(&INSERTED_RE, edit)?),
        MutationKind::Delins => (sequence[span].to_vec(), inserted_bases(&DELINS_RE, edit)?),
        MutationKind::Duplication => (Vec::new(), sequence[position.source.clone()].to_vec()),
        MutationKind::Inversion => {
            let wt = sequence[span].to_vec();
            let inverted = reverse_complement(&wt);
            (wt, inverted)
        }
    };

    Ok(EditedRegion {
        wt_region,
        mut_region,
    })
}

/// The base before `>` and the last base after it, e.g. `C>T` -> (`C`, `T`).
fn substitution_bases(edit: &str) -> Result<(u8, u8), RejectReason> {
    let (before, after) = edit
        .split_once('>')
        .ok_or(RejectReason::UnparseableNotation)?;

    match (before.chars().last(), after.chars().last()) {
        (Some(wt), Some(mt)) if wt.is_ascii() && mt.is_ascii() => Ok((wt as u8, mt as u8)),
        _ => Err(RejectReason::UnparseableNotation),
    }
}

fn inserted_bases(pattern: &Regex, edit: &str) -> Result<Vec<u8>, RejectReason> {
    pattern
        .captures(edit)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().as_bytes().to_vec())
        .ok_or(RejectReason::UnparseableNotation)
}
