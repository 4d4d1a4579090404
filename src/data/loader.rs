//! Poll CSV Loader Module
//! Reads the polling file line by line into a columnar dataset.

use super::dataset::{ColumnBuffers, PollDataset, PollRecord};
use polars::prelude::PolarsError;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

/// Fields per data line: month, date, "size type", candidate A, candidate B.
pub const FIELD_COUNT: usize = 5;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Line {line}: invalid {field} value {value:?}")]
    Parse {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("Failed to build dataset: {0}")]
    TableError(#[from] PolarsError),
}

/// Outcome of splitting one data line.
enum ParsedLine {
    Record(PollRecord),
    Skipped,
}

/// Loads polling files of the form
/// `month,date,<size> <type>,<candidate A>,<candidate B>` behind a single header line.
pub struct DataLoader;

impl DataLoader {
    /// Load a polling CSV file from disk.
    pub fn load_csv(file_path: impl AsRef<Path>) -> Result<PollDataset, LoaderError> {
        let path = file_path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::parse_content(&content)?;
        info!(
            path = %path.display(),
            records = dataset.len(),
            skipped = dataset.skipped_rows(),
            "loaded polling data"
        );
        Ok(dataset)
    }

    /// Parse polling CSV text. The first line is a header and is ignored.
    ///
    /// Lines without exactly five comma-separated fields are dropped; a
    /// numeric field that fails to parse on an otherwise well-formed line is
    /// an error.
    pub fn parse_content(content: &str) -> Result<PollDataset, LoaderError> {
        let mut buffers = ColumnBuffers::default();
        let mut skipped = 0;

        // Header is line 1
        for (idx, line) in content.lines().enumerate().skip(1) {
            match Self::parse_line(idx + 1, line)? {
                ParsedLine::Record(record) => buffers.push(record),
                ParsedLine::Skipped => skipped += 1,
            }
        }

        debug!(records = buffers.len(), skipped, "parsed polling rows");
        Ok(PollDataset::from_buffers(buffers, skipped)?)
    }

    fn parse_line(line_no: usize, line: &str) -> Result<ParsedLine, LoaderError> {
        let parts: Vec<&str> = line.trim().split(',').collect();
        if parts.len() != FIELD_COUNT {
            debug!(line = line_no, fields = parts.len(), "skipping malformed row");
            return Ok(ParsedLine::Skipped);
        }

        let mut sample_info = parts[2].split_whitespace();
        let sample = sample_info.next().unwrap_or_default();
        let sample_type = sample_info.next().ok_or_else(|| LoaderError::Parse {
            line: line_no,
            field: "sample type",
            value: parts[2].to_string(),
        })?;

        Ok(ParsedLine::Record(PollRecord {
            month: parts[0].to_string(),
            date: parse_field(line_no, "date", parts[1])?,
            sample: parse_field(line_no, "sample size", sample)?,
            sample_type: sample_type.to_string(),
            candidate_a: parse_field(line_no, "candidate A result", parts[3])?,
            candidate_b: parse_field(line_no, "candidate B result", parts[4])?,
        }))
    }
}

fn parse_field<T: FromStr>(line: usize, field: &'static str, raw: &str) -> Result<T, LoaderError> {
    raw.trim().parse().map_err(|_| LoaderError::Parse {
        line,
        field,
        value: raw.to_string(),
    })
}
