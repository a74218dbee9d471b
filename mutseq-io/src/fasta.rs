use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use log::{debug, warn};

use mutseq_core::utils::{get_dynamic_reader, sequence_id_from_header};
use mutseq_core::{MutationWindow, ReferenceSequence, SequenceError, SequenceTable};

use crate::error::{IoError, Result};

///
/// Load a reference FASTA (optionally `.gz`) into a [`SequenceTable`].
///
/// Identifiers are cut at the first space or `.`, so `>ENST00000288602.11 cdna`
/// is stored as `ENST00000288602`. Multi-line records are joined and blank lines
/// skipped. When an identifier repeats, the last record wins.
///
pub fn read_fasta<P: AsRef<Path>>(path: P) -> Result<SequenceTable> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path)?;
    read_fasta_from(reader, &path.display().to_string())
}

///
/// Parse FASTA records from any buffered reader. `source` names the input in
/// error messages and logs.
///
pub fn read_fasta_from<R: BufRead>(reader: R, source: &str) -> Result<SequenceTable> {
    let mut table = SequenceTable::new();
    let mut current: Option<ReferenceSequence> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('>') {
            if let Some(record) = current.take() {
                store(&mut table, record);
            }
            let id = sequence_id_from_header(line)?;
            current = Some(ReferenceSequence::new(id, String::new()));
        } else {
            match current.as_mut() {
                Some(record) => record.sequence.push_str(line),
                None => return Err(SequenceError::MissingHeader(source.to_string()).into()),
            }
        }
    }
    if let Some(record) = current {
        store(&mut table, record);
    }

    debug!("Loaded {} sequences from {}", table.len(), source);
    Ok(table)
}

fn store(table: &mut SequenceTable, record: ReferenceSequence) {
    if table.contains(&record.id) {
        warn!("Duplicate sequence ID '{}', keeping the last record", record.id);
    }
    table.insert(record.id, record.sequence);
}

fn create_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|_| IoError::ParentDirectoryCreation)?;
    }
    Ok(())
}

pub trait WindowWrite {
    ///
    /// Write mutant windows as FASTA records to any writer, in order
    ///
    fn write_fasta_to<W: Write>(&self, writer: W) -> Result<()>;

    ///
    /// Write data to disk as a FASTA file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_fasta<T: AsRef<Path>>(&self, path: T) -> Result<()>;

    ///
    /// Write data to disk as a fa.gz file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_fasta_gz<T: AsRef<Path>>(&self, path: T) -> Result<()>;

    ///
    /// Write one tab separated row per window with the columns
    /// `header, seq_id, notation, wt_window, mut_window`
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_tsv<T: AsRef<Path>>(&self, path: T) -> Result<()>;
}

impl WindowWrite for [MutationWindow] {
    fn write_fasta_to<W: Write>(&self, mut writer: W) -> Result<()> {
        for window in self {
            write!(writer, "{}", window.as_fasta())?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_fasta<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();
        create_parent_dirs(path)?;

        let file = File::create(path)?;
        self.write_fasta_to(BufWriter::new(file))
    }

    fn write_fasta_gz<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();
        create_parent_dirs(path)?;

        let file = File::create(path)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::best());

        self.write_fasta_to(&mut encoder)?;

        encoder.finish()?;
        Ok(())
    }

    fn write_tsv<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();
        create_parent_dirs(path)?;

        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_path(path)?;

        writer.write_record(["header", "seq_id", "notation", "wt_window", "mut_window"])?;
        for window in self {
            writer.write_record([
                window.header.as_str(),
                window.seq_id.as_str(),
                window.notation.as_str(),
                window.wt_window.as_str(),
                window.mut_window.as_str(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use std::io::Read;

    use flate2::read::MultiGzDecoder;
    use mutseq_core::MutationDescriptor;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn windows() -> Vec<MutationWindow> {
        vec![
            MutationWindow::from_descriptor(
                &MutationDescriptor::new("seq1", "c.3C>X"),
                "ABCDEFG".to_string(),
                "ABXDEFG".to_string(),
            ),
            MutationWindow::from_descriptor(
                &MutationDescriptor::new("seq1", "c.3_6del").with_header_id("m2"),
                "ABCDEFG".to_string(),
                "ABG".to_string(),
            ),
        ]
    }

    #[rstest]
    fn test_read_fasta_multiline() {
        let input = ">ENST0001.4 cdna\nACGT\nacgt\n\n>ENST0002\nGG\n";
        let table = read_fasta_from(input.as_bytes(), "memory").unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("ENST0001"), Some("ACGTacgt"));
        assert_eq!(table.get("ENST0002"), Some("GG"));
    }

    #[rstest]
    fn test_read_fasta_duplicate_keeps_last() {
        let input = ">seq1\nAAAA\n>seq1.2\nCCCC\n";
        let table = read_fasta_from(input.as_bytes(), "memory").unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("seq1"), Some("CCCC"));
    }

    #[rstest]
    fn test_read_fasta_crlf_and_empty_record() {
        let input = ">seq1\r\nAC\r\nGT\r\n>empty\r\n";
        let table = read_fasta_from(input.as_bytes(), "memory").unwrap();

        assert_eq!(table.get("seq1"), Some("ACGT"));
        assert_eq!(table.get("empty"), Some(""));
    }

    #[rstest]
    fn test_read_fasta_sequence_before_header() {
        let result = read_fasta_from("ACGT\n>seq1\nAC\n".as_bytes(), "memory");
        assert!(matches!(
            result,
            Err(IoError::Sequence(SequenceError::MissingHeader(_)))
        ));
    }

    #[rstest]
    fn test_read_fasta_empty_identifier() {
        let result = read_fasta_from(">\nACGT\n".as_bytes(), "memory");
        assert!(matches!(
            result,
            Err(IoError::Sequence(SequenceError::EmptyIdentifier(_)))
        ));
    }

    #[rstest]
    fn test_read_fasta_gz_from_disk() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("ref.fa.gz");

        let file = File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(b">seq1 desc\nABCDEFG\n").unwrap();
        encoder.finish().unwrap();

        let table = read_fasta(&path).unwrap();
        assert_eq!(table.get("seq1"), Some("ABCDEFG"));
    }

    #[rstest]
    fn test_read_fasta_missing_file() {
        let result = read_fasta("does/not/exist.fa");
        assert!(matches!(
            result,
            Err(IoError::Sequence(SequenceError::FileReadError(_)))
        ));
    }

    #[rstest]
    fn test_write_fasta_to(windows: Vec<MutationWindow>) {
        let mut buffer = Vec::new();
        windows.write_fasta_to(&mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            ">seq1:c.3C>X\nABXDEFG\n>m2\nABG\n"
        );
    }

    #[rstest]
    fn test_write_fasta_gz(windows: Vec<MutationWindow>) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("nested/out.fa.gz");

        windows.write_fasta_gz(&path).unwrap();

        let mut contents = String::new();
        MultiGzDecoder::new(File::open(&path).unwrap())
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, ">seq1:c.3C>X\nABXDEFG\n>m2\nABG\n");
    }

    #[rstest]
    fn test_write_fasta_reads_back(windows: Vec<MutationWindow>) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("out.fa");

        windows.write_fasta(&path).unwrap();

        let table = read_fasta(&path).unwrap();
        assert_eq!(table.get("m2"), Some("ABG"));
    }

    #[rstest]
    fn test_write_tsv(windows: Vec<MutationWindow>) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("windows.tsv");

        windows.write_tsv(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                "header\tseq_id\tnotation\twt_window\tmut_window",
                "seq1:c.3C>X\tseq1\tc.3C>X\tABCDEFG\tABXDEFG",
                "m2\tseq1\tc.3_6del\tABCDEFG\tABG",
            ]
        );
    }
}
