//! Summary of non-fatal refresh diagnostics.

use std::fmt;

use crate::models::Warning;

/// How many individual warnings are listed before the rest is elided.
const MAX_LISTED: usize = 10;

/// Human-readable summary of dropped records and empty results.
///
/// Prints nothing when there are no warnings.
pub struct WarningSummary<'a>(pub &'a [Warning]);

impl fmt::Display for WarningSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let malformed: Vec<&Warning> = self.0.iter().filter(|w| w.is_malformed_record()).collect();

        if !malformed.is_empty() {
            let noun = if malformed.len() == 1 { "record" } else { "records" };
            writeln!(f, "Skipped {} malformed {noun}:", malformed.len())?;
            for warning in malformed.iter().take(MAX_LISTED) {
                writeln!(f, "- {warning}")?;
            }
            if malformed.len() > MAX_LISTED {
                writeln!(f, "- ... and {} more", malformed.len() - MAX_LISTED)?;
            }
        }

        for warning in self.0.iter().filter(|w| !w.is_malformed_record()) {
            writeln!(f, "{warning}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordSource;

    fn malformed(plan_id: &str) -> Warning {
        Warning::malformed(RecordSource::Executions, Some(plan_id), "unparsable finishTimestamp 'x'")
    }

    #[test]
    fn test_no_warnings_prints_nothing() {
        assert_eq!(WarningSummary(&[]).to_string(), "");
    }

    #[test]
    fn test_single_malformed_record() {
        let output = WarningSummary(&[malformed("A")]).to_string();
        assert!(output.starts_with("Skipped 1 malformed record:\n"));
        assert!(output.contains("- Skipped executions record for plan A"));
    }

    #[test]
    fn test_long_lists_are_elided() {
        let warnings: Vec<Warning> = (0..13).map(|i| malformed(&format!("P{i}"))).collect();
        let output = WarningSummary(&warnings).to_string();
        assert!(output.starts_with("Skipped 13 malformed records:\n"));
        assert!(output.contains("plan P9:"));
        assert!(!output.contains("plan P10:"));
        assert!(output.contains("- ... and 3 more"));
    }

    #[test]
    fn test_empty_result_is_listed() {
        let warnings = vec![Warning::JoinEmptyResult {
            environment: "ENV_PRD".to_string(),
        }];
        assert_eq!(
            WarningSummary(&warnings).to_string(),
            "No plan statuses found for environment ENV_PRD\n"
        );
    }
}
