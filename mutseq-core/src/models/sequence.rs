use fxhash::FxHashMap as HashMap;
use std::fmt::{self, Display};

///
/// A single named reference sequence, e.g. one transcript from a FASTA file
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceSequence {
    pub id: String,
    pub sequence: String,
}

impl ReferenceSequence {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        ReferenceSequence {
            id: id.into(),
            sequence: sequence.into(),
        }
    }

    ///
    /// Get length of the sequence
    ///
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl Display for ReferenceSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">{}\n{}", self.id, self.sequence)
    }
}

///
/// Lookup table from sequence identifier to nucleotide string. Read-only once a
/// batch starts, so it can be shared across worker threads by reference.
///
#[derive(Debug, Clone, Default)]
pub struct SequenceTable {
    sequences: HashMap<String, String>,
}

impl SequenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Insert a sequence, returning the previous sequence stored under the same id
    ///
    pub fn insert(&mut self, id: impl Into<String>, sequence: impl Into<String>) -> Option<String> {
        self.sequences.insert(id.into(), sequence.into())
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.sequences.get(id).map(|s| s.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sequences.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sequences.keys().map(|k| k.as_str())
    }
}

impl FromIterator<ReferenceSequence> for SequenceTable {
    fn from_iter<T: IntoIterator<Item = ReferenceSequence>>(iter: T) -> Self {
        let mut table = SequenceTable::new();
        for record in iter {
            table.insert(record.id, record.sequence);
        }
        table
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SequenceTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = SequenceTable::new();
        for (id, sequence) in iter {
            table.insert(id, sequence);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_table_from_pairs() {
        let table: SequenceTable = vec![("seq1", "ACGT"), ("seq2", "GGCC")].into_iter().collect();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("seq1"), Some("ACGT"));
        assert_eq!(table.get("seq3"), None);
        assert!(table.contains("seq2"));
    }

    #[rstest]
    fn test_table_from_records_keeps_last() {
        let table: SequenceTable = vec![
            ReferenceSequence::new("seq1", "AAAA"),
            ReferenceSequence::new("seq1", "CCCC"),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("seq1"), Some("CCCC"));
    }

    #[rstest]
    fn test_reference_sequence_display() {
        let record = ReferenceSequence::new("ENST0001", "ACGT");
        assert_eq!(record.to_string(), ">ENST0001\nACGT");
        assert_eq!(record.len(), 4);
    }
}
