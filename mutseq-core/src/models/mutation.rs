use std::fmt::{self, Display};

///
/// One row of a mutation table: which sequence to edit and how
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationDescriptor {
    pub seq_id: String,
    pub notation: String,

    pub custom_header_id: Option<String>,
}

impl MutationDescriptor {
    pub fn new(seq_id: impl Into<String>, notation: impl Into<String>) -> Self {
        MutationDescriptor {
            seq_id: seq_id.into(),
            notation: notation.into(),
            custom_header_id: None,
        }
    }

    pub fn with_header_id(mut self, header_id: impl Into<String>) -> Self {
        self.custom_header_id = Some(header_id.into());
        self
    }

    ///
    /// FASTA header for windows built from this row. A non-empty custom id wins,
    /// otherwise `seq_id:notation` with the notation trimmed.
    ///
    pub fn header(&self) -> String {
        match self.custom_header_id.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => self.to_string(),
        }
    }
}

impl Display for MutationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.seq_id, self.notation.trim())
    }
}
