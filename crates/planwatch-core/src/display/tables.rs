//! Markdown tables for plan statuses and the plan catalog.

use std::fmt;

use super::table_cell;
use crate::{models::Plan, projection::Projection};

/// Latest status per plan for one environment.
///
/// Failed executions are marked with `✗`, successful ones with `✓` and
/// running ones with `➤`.
pub struct StatusTable<'a>(pub &'a Projection);

impl fmt::Display for StatusTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let projection = self.0;
        writeln!(f, "# Plan status: {}", projection.environment)?;
        writeln!(f)?;

        if projection.is_empty() {
            return writeln!(f, "No plan statuses found for {}.", projection.environment);
        }

        writeln!(f, "| Plan | Status |")?;
        writeln!(f, "|------|--------|")?;
        for entry in &projection.entries {
            writeln!(
                f,
                "| {} | {} |",
                table_cell(&entry.name),
                table_cell(&entry.status.with_icon())
            )?;
        }

        let failed = projection
            .entries
            .iter()
            .filter(|e| e.status.is_failure())
            .count();
        writeln!(f)?;
        writeln!(
            f,
            "{} plans, {} failed",
            projection.entries.len(),
            failed
        )
    }
}

/// The plan catalog, one line per plan.
pub struct PlanTable<'a>(pub &'a [Plan]);

impl fmt::Display for PlanTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plans")?;
        writeln!(f)?;

        if self.0.is_empty() {
            return writeln!(f, "No plans found.");
        }

        writeln!(f, "| Plan ID | Name | Environment |")?;
        writeln!(f, "|---------|------|-------------|")?;
        for plan in self.0 {
            writeln!(
                f,
                "| {} | {} | {} |",
                table_cell(&plan.plan_id),
                table_cell(&plan.name),
                table_cell(&plan.env)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StatusEntry, Warning};

    fn projection(entries: Vec<StatusEntry>) -> Projection {
        Projection {
            environment: "ENV_PRD".to_string(),
            entries,
            warnings: Vec::<Warning>::new(),
        }
    }

    #[test]
    fn test_status_table_rows() {
        let projection = projection(vec![
            StatusEntry::new("Load-EDW", "execution_failed"),
            StatusEntry::new("Sync CRM", "execution_successful"),
            StatusEntry::new("Nightly", "executing"),
        ]);
        let output = StatusTable(&projection).to_string();

        assert!(output.starts_with("# Plan status: ENV_PRD\n"));
        assert!(output.contains("| Load-EDW | ✗ execution_failed |"));
        assert!(output.contains("| Sync CRM | ✓ execution_successful |"));
        assert!(output.contains("| Nightly | ➤ executing |"));
        assert!(output.contains("3 plans, 1 failed"));
    }

    #[test]
    fn test_status_table_empty() {
        let output = StatusTable(&projection(vec![])).to_string();
        assert!(output.contains("No plan statuses found for ENV_PRD."));
        assert!(!output.contains("| Plan |"));
    }

    #[test]
    fn test_status_table_escapes_pipes() {
        let projection = projection(vec![StatusEntry::new("Load | Merge", "executing")]);
        let output = StatusTable(&projection).to_string();
        assert!(output.contains("| Load \\| Merge | ➤ executing |"));
    }

    #[test]
    fn test_plan_table() {
        let plans = vec![
            Plan::new("A", "Load-EDW", "ENV_PRD"),
            Plan::new("B", "Load-EDW", "ENV_DEV"),
        ];
        let output = PlanTable(&plans).to_string();
        assert!(output.contains("| A | Load-EDW | ENV_PRD |"));
        assert!(output.contains("| B | Load-EDW | ENV_DEV |"));

        assert!(PlanTable(&[]).to_string().contains("No plans found."));
    }
}
