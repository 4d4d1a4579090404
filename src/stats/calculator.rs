//! Polling Statistics Module
//! Highest result, likely-voter average and early/late history change.

use crate::config::PollConfig;
use crate::data::{PollDataset, CANDIDATE_A, CANDIDATE_B, SAMPLE_TYPE};
use crate::report::format_percent;
use polars::prelude::*;
use std::fmt;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("No records available for {0}")]
    EmptyData(&'static str),
    #[error("History change needs at least {required} records, dataset has {actual}")]
    InsufficientData { required: usize, actual: usize },
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Candidate holding the single highest result.
#[derive(Debug, Clone, PartialEq)]
pub enum Leader {
    Candidate { name: String, value: f64 },
    /// Both columns peak at the same value
    Even(f64),
}

impl Leader {
    pub fn value(&self) -> f64 {
        match self {
            Leader::Candidate { value, .. } | Leader::Even(value) => *value,
        }
    }
}

impl fmt::Display for Leader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leader::Candidate { name, value } => write!(f, "{}: {}", name, format_percent(*value, 1)),
            Leader::Even(value) => write!(f, "EVEN: {}", format_percent(*value, 1)),
        }
    }
}

/// Runs the summary queries over a loaded dataset.
pub struct PollCalculator;

impl PollCalculator {
    /// Compare each candidate's column maximum; the two maxima may come from
    /// different polls.
    pub fn highest_polling_result(
        dataset: &PollDataset,
        config: &PollConfig,
    ) -> Result<Leader, StatsError> {
        let df = dataset.dataframe();
        let max_a = df
            .column(CANDIDATE_A)?
            .f64()?
            .max()
            .ok_or(StatsError::EmptyData("highest polling candidate"))?;
        let max_b = df
            .column(CANDIDATE_B)?
            .f64()?
            .max()
            .ok_or(StatsError::EmptyData("highest polling candidate"))?;

        let leader = if max_a > max_b {
            Leader::Candidate {
                name: config.candidate_a.clone(),
                value: max_a,
            }
        } else if max_b > max_a {
            Leader::Candidate {
                name: config.candidate_b.clone(),
                value: max_b,
            }
        } else {
            Leader::Even(max_a)
        };

        debug!(max_a, max_b, "highest polling");
        Ok(leader)
    }

    /// Formatted as `"<name>: <pct>%"`, or `"EVEN: <pct>%"` on a tie.
    pub fn highest_polling(dataset: &PollDataset, config: &PollConfig) -> Result<String, StatsError> {
        Ok(Self::highest_polling_result(dataset, config)?.to_string())
    }

    /// Mean of each candidate over likely-voter samples only.
    pub fn likely_voter_average(
        dataset: &PollDataset,
        config: &PollConfig,
    ) -> Result<(f64, f64), StatsError> {
        let likely = dataset
            .dataframe()
            .clone()
            .lazy()
            .filter(col(SAMPLE_TYPE).eq(lit(config.likely_voter_code.as_str())))
            .select([col(CANDIDATE_A), col(CANDIDATE_B)])
            .collect()?;

        let a = likely.column(CANDIDATE_A)?.f64()?;
        let b = likely.column(CANDIDATE_B)?.f64()?;

        let (total_a, total_b, count) = a.into_iter().zip(b.into_iter()).fold(
            (0.0, 0.0, 0usize),
            |(total_a, total_b, count), (va, vb)| {
                (
                    total_a + va.unwrap_or(0.0),
                    total_b + vb.unwrap_or(0.0),
                    count + 1,
                )
            },
        );

        if count == 0 {
            return Err(StatsError::EmptyData("likely voter average"));
        }

        let averages = (total_a / count as f64, total_b / count as f64);
        debug!(count, avg_a = averages.0, avg_b = averages.1, "likely voter average");
        Ok(averages)
    }

    /// Mean of the last `window` records minus mean of the first `window`,
    /// by position. Datasets shorter than two windows yield overlapping slices.
    pub fn history_change(
        dataset: &PollDataset,
        config: &PollConfig,
    ) -> Result<(f64, f64), StatsError> {
        let window = config.window;
        if dataset.len() < window {
            return Err(StatsError::InsufficientData {
                required: window,
                actual: dataset.len(),
            });
        }

        let df = dataset.dataframe();
        let early = df.head(Some(window));
        let late = df.tail(Some(window));

        let change_a = Self::column_mean(&late, CANDIDATE_A)? - Self::column_mean(&early, CANDIDATE_A)?;
        let change_b = Self::column_mean(&late, CANDIDATE_B)? - Self::column_mean(&early, CANDIDATE_B)?;

        debug!(window, change_a, change_b, "history change");
        Ok((change_a, change_b))
    }

    fn column_mean(df: &DataFrame, column: &str) -> Result<f64, StatsError> {
        df.column(column)?
            .f64()?
            .mean()
            .ok_or(StatsError::EmptyData("history change"))
    }
}
