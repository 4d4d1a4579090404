//! Console report combining the three polling summaries.

use crate::config::PollConfig;
use crate::data::PollDataset;
use crate::stats::{Leader, PollCalculator, StatsError};
use std::fmt;

/// `0.4934` -> `"49.34%"` with `decimals = 2`.
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value * 100.0)
}

/// Like [`format_percent`] but always signed: `"+1.53%"`, `"-0.40%"`.
pub fn format_signed_percent(value: f64, decimals: usize) -> String {
    format!("{:+.*}%", decimals, value * 100.0)
}

/// All summary statistics for one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct PollReport {
    pub candidate_a: String,
    pub candidate_b: String,
    pub leader: Leader,
    pub likely_voter_average: (f64, f64),
    pub history_change: (f64, f64),
}

impl PollReport {
    /// Run every query; the first failure aborts the whole report.
    pub fn build(dataset: &PollDataset, config: &PollConfig) -> Result<Self, StatsError> {
        Ok(Self {
            candidate_a: config.candidate_a.clone(),
            candidate_b: config.candidate_b.clone(),
            leader: PollCalculator::highest_polling_result(dataset, config)?,
            likely_voter_average: PollCalculator::likely_voter_average(dataset, config)?,
            history_change: PollCalculator::history_change(dataset, config)?,
        })
    }
}

impl fmt::Display for PollReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Highest Polling Candidate: {}", self.leader)?;
        writeln!(f, "Likely Voter Polling Average:")?;
        writeln!(f, "  {}: {}", self.candidate_a, format_percent(self.likely_voter_average.0, 2))?;
        writeln!(f, "  {}: {}", self.candidate_b, format_percent(self.likely_voter_average.1, 2))?;
        writeln!(f, "Polling History Change:")?;
        writeln!(f, "  {}: {}", self.candidate_a, format_signed_percent(self.history_change.0, 2))?;
        writeln!(f, "  {}: {}", self.candidate_b, format_signed_percent(self.history_change.1, 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PollRecord;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.57, 1), "57.0%");
        assert_eq!(format_percent(0.4934, 2), "49.34%");
        assert_eq!(format_percent(1.0, 0), "100%");
    }

    #[test]
    fn test_format_signed_percent() {
        assert_eq!(format_signed_percent(0.0153, 2), "+1.53%");
        assert_eq!(format_signed_percent(-0.004, 2), "-0.40%");
        assert_eq!(format_signed_percent(0.0, 2), "+0.00%");
    }

    #[test]
    fn test_report_text() {
        let records: Vec<PollRecord> = (0..30)
            .map(|i| PollRecord {
                month: "September".to_string(),
                date: i + 1,
                sample: 1200,
                sample_type: if i % 2 == 0 { "LV" } else { "RV" }.to_string(),
                candidate_a: 0.50,
                candidate_b: 0.45,
            })
            .collect();
        let dataset = PollDataset::from_records(records).unwrap();

        let report = PollReport::build(&dataset, &PollConfig::default()).unwrap();
        let expected = "\
Highest Polling Candidate: Harris: 50.0%
Likely Voter Polling Average:
  Harris: 50.00%
  Trump: 45.00%
Polling History Change:
  Harris: +0.00%
  Trump: +0.00%
";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_report_fails_without_likely_voters() {
        let records: Vec<PollRecord> = (0..30)
            .map(|i| PollRecord {
                month: "September".to_string(),
                date: i + 1,
                sample: 800,
                sample_type: "RV".to_string(),
                candidate_a: 0.47,
                candidate_b: 0.49,
            })
            .collect();
        let dataset = PollDataset::from_records(records).unwrap();

        let err = PollReport::build(&dataset, &PollConfig::default()).unwrap_err();
        assert!(matches!(err, StatsError::EmptyData(_)));
    }
}
