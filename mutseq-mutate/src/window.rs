use mutseq_core::{MutationDescriptor, MutationWindow};

use crate::edit::EditedRegion;
use crate::flank::Flanks;
use crate::report::RejectReason;

fn join(left: &[u8], region: &[u8], right: &[u8]) -> String {
    let mut window = Vec::with_capacity(left.len() + region.len() + right.len());
    window.extend_from_slice(left);
    window.extend_from_slice(region);
    window.extend_from_slice(right);
    String::from_utf8_lossy(&window).into_owned()
}

///
/// Concatenate the flanks around the wildtype and mutant regions and attach the
/// output header of `descriptor`. A mutant window without any bases is rejected.
///
pub fn assemble_window(
    descriptor: &MutationDescriptor,
    flanks: &Flanks,
    region: &EditedRegion,
) -> Result<MutationWindow, RejectReason> {
    let mut_window = join(flanks.left, &region.mut_region, flanks.right);
    if mut_window.is_empty() {
        return Err(RejectReason::EmptyMutantWindow);
    }
    let wt_window = join(flanks.left, &region.wt_region, flanks.right);

    Ok(MutationWindow::from_descriptor(descriptor, wt_window, mut_window))
}

/// Number of ambiguous `N`/`n` bases in a window.
pub fn ambiguous_bases(window: &str) -> usize {
    window.bytes().filter(|b| b.eq_ignore_ascii_case(&b'N')).count()
}
