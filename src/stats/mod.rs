//! Stats module - Polling summary queries

mod calculator;

pub use calculator::{Leader, PollCalculator, StatsError};
