use std::fmt::{self, Display};

use crate::models::MutationDescriptor;

///
/// Output of a successfully applied mutation: the wildtype and mutant
/// sequence windows around the edit, plus the header they are written under.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationWindow {
    pub header: String,
    pub seq_id: String,
    pub notation: String,
    pub wt_window: String,
    pub mut_window: String,
    pub window_len: usize,
}

impl MutationWindow {
    ///
    /// Build the window for the row `descriptor`. The header follows
    /// [`MutationDescriptor::header`] and `window_len` is the mutant window length.
    ///
    pub fn from_descriptor(
        descriptor: &MutationDescriptor,
        wt_window: String,
        mut_window: String,
    ) -> Self {
        let window_len = mut_window.len();
        MutationWindow {
            header: descriptor.header(),
            seq_id: descriptor.seq_id.clone(),
            notation: descriptor.notation.trim().to_string(),
            wt_window,
            mut_window,
            window_len,
        }
    }

    ///
    /// FASTA record for the mutant window, newline terminated
    ///
    pub fn as_fasta(&self) -> String {
        format!(">{}\n{}\n", self.header, self.mut_window)
    }
}

impl Display for MutationWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_fasta())
    }
}
