//! Pollreader - Election polling CSV loader & summary statistics
//!
//! Loads a polling file into a columnar [`PollDataset`] and answers three
//! questions about it: which candidate reached the single highest result,
//! the candidates' average among likely-voter samples, and how each
//! candidate's average moved between the earliest and latest polls.
//!
//! ```no_run
//! use pollreader::{DataLoader, PollConfig, PollReport};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = DataLoader::load_csv("polling_data.csv")?;
//!     let report = PollReport::build(&dataset, &PollConfig::default())?;
//!     print!("{report}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data;
pub mod logging;
pub mod report;
pub mod stats;

pub use config::{ConfigError, PollConfig};
pub use data::{Candidate, DataLoader, LoaderError, PollDataset, PollRecord};
pub use report::{format_percent, format_signed_percent, PollReport};
pub use stats::{Leader, PollCalculator, StatsError};
