use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use flate2::read::MultiGzDecoder;

use crate::errors::SequenceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum FileType {
    FASTA,
    CSV,
    TSV,
    UNKNOWN,
}

impl FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fa" | "fasta" | "fna" | "ffn" => Ok(FileType::FASTA),
            "csv" => Ok(FileType::CSV),
            "tsv" | "txt" | "tab" => Ok(FileType::TSV),
            _ => Ok(FileType::UNKNOWN),
        }
    }
}

pub struct FileInfo {
    pub file_type: FileType,
    pub is_gzipped: bool,
}

///
/// Guess file type and compression from the file name, looking through a
/// trailing `.gz` (e.g. `mutations.csv.gz` is a gzipped CSV).
///
pub fn get_file_info(path: &Path) -> FileInfo {
    let mut file_type = FileType::UNKNOWN;
    let mut is_gzipped = false;

    if let Some(filename) = path.file_name().and_then(|f| f.to_str()) {
        let base_filename = match filename.strip_suffix(".gz") {
            Some(base) => {
                is_gzipped = true;
                base
            }
            None => filename,
        };

        if let Some(ext) = PathBuf::from(base_filename)
            .extension()
            .and_then(|e| e.to_str())
        {
            file_type = FileType::from_str(ext).unwrap_or(FileType::UNKNOWN);
        }
    }

    FileInfo {
        file_type,
        is_gzipped,
    }
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>, SequenceError> {
    let file = File::open(path)
        .map_err(|e| SequenceError::FileReadError(format!("{}: {}", path.display(), e)))?;
    let file: Box<dyn Read> = match get_file_info(path).is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - file_path: path to the file to read, or '-' for stdin
///
pub fn get_dynamic_reader_w_stdin(
    file_path_str: &str,
) -> Result<BufReader<Box<dyn Read>>, SequenceError> {
    if file_path_str == "-" {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        get_dynamic_reader(Path::new(file_path_str))
    }
}

///
/// Extract the sequence identifier from a FASTA header line: everything after
/// the leading `>` up to the first space or `.` (Ensembl version suffixes like
/// `ENST00000288602.11` are dropped).
///
pub fn sequence_id_from_header(header: &str) -> Result<&str, SequenceError> {
    let header = header.trim_end();
    let body = header.strip_prefix('>').unwrap_or(header);
    let id = body
        .split([' ', '\t', '.'])
        .next()
        .unwrap_or_default();

    if id.is_empty() {
        return Err(SequenceError::EmptyIdentifier(header.to_string()));
    }
    Ok(id)
}
