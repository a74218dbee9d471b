//! Loader for CSV/TSV mutation tables.

use std::io::Read;
use std::path::Path;

use log::debug;

use mutseq_core::MutationDescriptor;
use mutseq_core::utils::{FileType, get_dynamic_reader, get_dynamic_reader_w_stdin, get_file_info};

use crate::error::{IoError, Result};

/// Default header of the notation column.
pub const MUTATION_COLUMN: &str = "mutation";
/// Default header of the sequence identifier column.
pub const SEQ_ID_COLUMN: &str = "seq_ID";
/// Headers probed, in order, for an optional custom output header column.
pub const MUT_ID_COLUMNS: [&str; 2] = ["mut_ID", "mutation_id"];

/// Which header names hold the fields of a [`MutationDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationColumns {
    pub mutation: String,
    pub seq_id: String,
    /// Column with custom output headers. `None` probes [`MUT_ID_COLUMNS`] and
    /// carries on without custom headers when neither is present.
    pub mut_id: Option<String>,
}

impl Default for MutationColumns {
    fn default() -> Self {
        MutationColumns {
            mutation: MUTATION_COLUMN.to_string(),
            seq_id: SEQ_ID_COLUMN.to_string(),
            mut_id: None,
        }
    }
}

/// `,` for `.csv` (or `.csv.gz`) files, tab otherwise.
pub fn delimiter_for(path: &Path) -> u8 {
    match get_file_info(path).file_type {
        FileType::CSV => b',',
        _ => b'\t',
    }
}

fn column_index(
    headers: &csv::StringRecord,
    column: &str,
    source: &str,
) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| IoError::MissingColumn {
            column: column.to_string(),
            path: source.to_string(),
            available: headers.iter().collect::<Vec<_>>().join(", "),
        })
}

///
/// Read a mutation table, inferring the delimiter from the file extension.
///
/// # Arguments
/// - path: CSV/TSV file, optionally gzipped
/// - columns: header names to read the fields from
///
pub fn read_mutation_table<P: AsRef<Path>>(
    path: P,
    columns: &MutationColumns,
) -> Result<Vec<MutationDescriptor>> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path)?;
    read_mutation_table_from(
        reader,
        delimiter_for(path),
        columns,
        &path.display().to_string(),
    )
}

///
/// Like [`read_mutation_table`], but `-` reads a tab separated table from stdin.
///
pub fn read_mutation_table_w_stdin(
    path: &str,
    columns: &MutationColumns,
) -> Result<Vec<MutationDescriptor>> {
    let reader = get_dynamic_reader_w_stdin(path)?;
    let delimiter = match path {
        "-" => b'\t',
        _ => delimiter_for(Path::new(path)),
    };
    read_mutation_table_from(reader, delimiter, columns, path)
}

///
/// Read mutation rows from any reader with an explicit delimiter. Fields are
/// trimmed; rows keep their input order.
///
pub fn read_mutation_table_from<R: Read>(
    reader: R,
    delimiter: u8,
    columns: &MutationColumns,
    source: &str,
) -> Result<Vec<MutationDescriptor>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mutation_idx = column_index(&headers, &columns.mutation, source)?;
    let seq_id_idx = column_index(&headers, &columns.seq_id, source)?;
    let mut_id_idx = match &columns.mut_id {
        Some(column) => Some(column_index(&headers, column, source)?),
        None => MUT_ID_COLUMNS
            .iter()
            .find_map(|column| headers.iter().position(|h| h == *column)),
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |idx: usize| record.get(idx).unwrap_or_default();

        let mut row = MutationDescriptor::new(field(seq_id_idx), field(mutation_idx));
        if let Some(idx) = mut_id_idx {
            let mut_id = field(idx);
            if !mut_id.is_empty() {
                row = row.with_header_id(mut_id);
            }
        }
        rows.push(row);
    }

    debug!("Loaded {} mutation rows from {}", rows.len(), source);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("mutations.csv", b',')]
    #[case("mutations.csv.gz", b',')]
    #[case("mutations.tsv", b'\t')]
    #[case("mutations.txt", b'\t')]
    #[case("mutations", b'\t')]
    fn test_delimiter_for(#[case] path: &str, #[case] expected: u8) {
        assert_eq!(delimiter_for(Path::new(path)), expected);
    }

    #[rstest]
    fn test_read_default_columns() {
        let input = "seq_ID\tmutation\tmut_ID\nENST0001\tc.3C>T\tCOSM1\nENST0002\t c.3_6del \t\n";
        let rows = read_mutation_table_from(
            input.as_bytes(),
            b'\t',
            &MutationColumns::default(),
            "memory",
        )
        .unwrap();

        assert_eq!(
            rows,
            vec![
                MutationDescriptor::new("ENST0001", "c.3C>T").with_header_id("COSM1"),
                MutationDescriptor::new("ENST0002", "c.3_6del"),
            ]
        );
    }

    #[rstest]
    fn test_read_mutation_id_fallback() {
        let input = "mutation,seq_ID,mutation_id\nc.1A>G,s1,M1\n";
        let rows =
            read_mutation_table_from(input.as_bytes(), b',', &MutationColumns::default(), "memory")
                .unwrap();
        assert_eq!(rows[0].header(), "M1");
    }

    #[rstest]
    fn test_read_custom_columns() {
        let input = "transcript,hgvs,id\nENST0001,c.3C>T,x\n";
        let columns = MutationColumns {
            mutation: "hgvs".to_string(),
            seq_id: "transcript".to_string(),
            mut_id: Some("id".to_string()),
        };
        let rows = read_mutation_table_from(input.as_bytes(), b',', &columns, "memory").unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].seq_id, "ENST0001");
        assert_eq!(rows[0].notation, "c.3C>T");
        assert_eq!(rows[0].header(), "x");
    }

    #[rstest]
    #[case("seq_ID,mutation_ids\ns1,c.1A>G\n", MutationColumns::default())]
    #[case(
        "seq_ID,mutation\ns1,c.1A>G\n",
        MutationColumns { mut_id: Some("nope".to_string()), ..MutationColumns::default() }
    )]
    fn test_read_missing_column(#[case] input: &str, #[case] columns: MutationColumns) {
        let result = read_mutation_table_from(input.as_bytes(), b',', &columns, "memory");
        assert!(matches!(result, Err(IoError::MissingColumn { .. })));
    }

    #[rstest]
    fn test_read_ragged_row_is_error() {
        let input = "seq_ID,mutation\ns1,c.1A>G,extra\n";
        let result =
            read_mutation_table_from(input.as_bytes(), b',', &MutationColumns::default(), "memory");
        assert!(matches!(result, Err(IoError::Csv(_))));
    }

    #[rstest]
    fn test_read_csv_from_disk() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("mutations.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "seq_ID,mutation").unwrap();
        writeln!(file, "seq1,c.3_4insXYZ").unwrap();
        drop(file);

        let rows = read_mutation_table(&path, &MutationColumns::default()).unwrap();
        assert_eq!(rows, vec![MutationDescriptor::new("seq1", "c.3_4insXYZ")]);

        let rows =
            read_mutation_table_w_stdin(path.to_str().unwrap(), &MutationColumns::default())
                .unwrap();
        assert_eq!(rows.len(), 1);
    }
}
