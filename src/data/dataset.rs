//! Poll Dataset Module
//! Columnar storage of polling records backed by a Polars DataFrame.

use polars::prelude::*;

pub const MONTH: &str = "month";
pub const DATE: &str = "date";
pub const SAMPLE: &str = "sample";
pub const SAMPLE_TYPE: &str = "sample_type";
pub const CANDIDATE_A: &str = "candidate_a";
pub const CANDIDATE_B: &str = "candidate_b";

/// One poll, as read from a single data line.
#[derive(Debug, Clone, PartialEq)]
pub struct PollRecord {
    pub month: String,
    pub date: i64,
    pub sample: i64,
    pub sample_type: String,
    pub candidate_a: f64,
    pub candidate_b: f64,
}

/// Which of the two tracked candidates a column belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    A,
    B,
}

impl Candidate {
    pub fn column(self) -> &'static str {
        match self {
            Candidate::A => CANDIDATE_A,
            Candidate::B => CANDIDATE_B,
        }
    }
}

/// Growable per-field buffers filled row by row, then frozen into a DataFrame.
#[derive(Debug, Default)]
pub(crate) struct ColumnBuffers {
    months: Vec<String>,
    dates: Vec<i64>,
    samples: Vec<i64>,
    sample_types: Vec<String>,
    candidate_a: Vec<f64>,
    candidate_b: Vec<f64>,
}

impl ColumnBuffers {
    pub(crate) fn push(&mut self, record: PollRecord) {
        self.months.push(record.month);
        self.dates.push(record.date);
        self.samples.push(record.sample);
        self.sample_types.push(record.sample_type);
        self.candidate_a.push(record.candidate_a);
        self.candidate_b.push(record.candidate_b);
    }

    pub(crate) fn len(&self) -> usize {
        self.dates.len()
    }

    pub(crate) fn into_dataframe(self) -> PolarsResult<DataFrame> {
        DataFrame::new(vec![
            Column::new(MONTH.into(), self.months),
            Column::new(DATE.into(), self.dates),
            Column::new(SAMPLE.into(), self.samples),
            Column::new(SAMPLE_TYPE.into(), self.sample_types),
            Column::new(CANDIDATE_A.into(), self.candidate_a),
            Column::new(CANDIDATE_B.into(), self.candidate_b),
        ])
    }
}

/// Polling records in file order, stored as six co-indexed columns.
///
/// Built once by the loader and read-only afterwards. Row `i` of every
/// column belongs to the same poll.
#[derive(Debug, Clone)]
pub struct PollDataset {
    df: DataFrame,
    skipped_rows: usize,
}

impl PollDataset {
    pub(crate) fn from_buffers(buffers: ColumnBuffers, skipped_rows: usize) -> PolarsResult<Self> {
        Ok(Self {
            df: buffers.into_dataframe()?,
            skipped_rows,
        })
    }

    /// Build a dataset from in-memory records, keeping their order.
    pub fn from_records<I>(records: I) -> PolarsResult<Self>
    where
        I: IntoIterator<Item = PollRecord>,
    {
        let mut buffers = ColumnBuffers::default();
        for record in records {
            buffers.push(record);
        }
        Self::from_buffers(buffers, 0)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Data lines dropped by the loader for having the wrong field count.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Read-only view of the underlying table.
    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    /// Get one candidate's result column in record order.
    pub fn candidate_results(&self, candidate: Candidate) -> PolarsResult<Vec<f64>> {
        Ok(self
            .df
            .column(candidate.column())?
            .f64()?
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect())
    }

    /// Materialize the rows back into records, in order.
    pub fn records(&self) -> PolarsResult<Vec<PollRecord>> {
        let months = self.df.column(MONTH)?.str()?;
        let dates = self.df.column(DATE)?.i64()?;
        let samples = self.df.column(SAMPLE)?.i64()?;
        let sample_types = self.df.column(SAMPLE_TYPE)?.str()?;
        let candidate_a = self.df.column(CANDIDATE_A)?.f64()?;
        let candidate_b = self.df.column(CANDIDATE_B)?.f64()?;

        Ok((0..self.len())
            .map(|i| PollRecord {
                month: months.get(i).unwrap_or_default().to_string(),
                date: dates.get(i).unwrap_or_default(),
                sample: samples.get(i).unwrap_or_default(),
                sample_type: sample_types.get(i).unwrap_or_default().to_string(),
                candidate_a: candidate_a.get(i).unwrap_or(f64::NAN),
                candidate_b: candidate_b.get(i).unwrap_or(f64::NAN),
            })
            .collect())
    }
}
