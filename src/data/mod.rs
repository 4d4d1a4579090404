//! Data module - Polling CSV loading and columnar storage

mod dataset;
mod loader;

pub use dataset::{
    Candidate, PollDataset, PollRecord, CANDIDATE_A, CANDIDATE_B, DATE, MONTH, SAMPLE,
    SAMPLE_TYPE,
};
pub use loader::{DataLoader, LoaderError, FIELD_COUNT};
