//! Plain-text report rendering.
//!
//! Each table is a `Display` wrapper, so it can be written to any
//! formatter or collected with `to_string()`.

use std::fmt;

use crate::models::JobRepository;
use crate::scheduler::{PassKpi, PassResult};

const JOB_RULE_WIDTH: usize = 44;
const PASS_RULE_WIDTH: usize = 56;
const SUMMARY_RULE_WIDTH: usize = 64;

fn rule(f: &mut fmt::Formatter<'_>, width: usize) -> fmt::Result {
    writeln!(f, "{}", "-".repeat(width))
}

/// The input job list.
#[derive(Debug, Clone, Copy)]
pub struct JobTable<'a>(pub &'a JobRepository);

impl fmt::Display for JobTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Jobs")?;
        rule(f, JOB_RULE_WIDTH)?;
        writeln!(f, " {:<8}{:<12}{:<12}{:<10}", "ID", "Arrival", "Service", "Priority")?;
        rule(f, JOB_RULE_WIDTH)?;
        for job in self.0.jobs() {
            writeln!(
                f,
                " {:<8}{:<12}{:<12}{:<10}",
                job.id, job.arrival, job.service, job.priority
            )?;
        }
        rule(f, JOB_RULE_WIDTH)
    }
}

/// One pass: per-job rows in schedule order, then totals and averages.
#[derive(Debug, Clone, Copy)]
pub struct PassTable<'a>(pub &'a PassResult);

impl fmt::Display for PassTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pass = self.0;
        writeln!(
            f,
            "{} schedule ({})",
            pass.policy.name(),
            pass.policy.description()
        )?;
        rule(f, PASS_RULE_WIDTH)?;
        writeln!(
            f,
            " {:<8}{:<12}{:<12}{:<12}{:<12}",
            "ID", "Arrival", "Start", "Wait", "Turnaround"
        )?;
        rule(f, PASS_RULE_WIDTH)?;
        for o in &pass.outcomes {
            writeln!(
                f,
                " {:<8}{:<12}{:<12}{:<12}{:<12}",
                o.job_id, o.arrival, o.start, o.wait, o.turnaround
            )?;
        }
        rule(f, PASS_RULE_WIDTH)?;
        writeln!(
            f,
            "Total wait: {}  Total turnaround: {}",
            pass.total_wait, pass.total_turnaround
        )?;
        writeln!(
            f,
            "Average wait: {:.2}  Average turnaround: {:.2}",
            pass.average_wait(),
            pass.average_turnaround()
        )
    }
}

/// Side-by-side comparison of several passes.
#[derive(Debug, Clone, Copy)]
pub struct SummaryTable<'a>(pub &'a [PassResult]);

impl fmt::Display for SummaryTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary")?;
        rule(f, SUMMARY_RULE_WIDTH)?;
        writeln!(
            f,
            " {:<8}{:<12}{:<16}{:<16}{:<10}",
            "Policy", "Avg wait", "Avg turnaround", "Avg weighted", "Makespan"
        )?;
        rule(f, SUMMARY_RULE_WIDTH)?;
        for pass in self.0 {
            let kpi = PassKpi::calculate(pass);
            writeln!(
                f,
                " {:<8}{:<12.2}{:<16.2}{:<16.2}{:<10}",
                kpi.policy.name(),
                kpi.avg_wait,
                kpi.avg_turnaround,
                kpi.avg_weighted_turnaround,
                kpi.makespan
            )?;
        }
        rule(f, SUMMARY_RULE_WIDTH)
    }
}

/// Renders the input job table.
pub fn render_jobs(repository: &JobRepository) -> String {
    JobTable(repository).to_string()
}

/// Renders one pass.
pub fn render_pass(pass: &PassResult) -> String {
    PassTable(pass).to_string()
}

/// Renders the comparison table for several passes.
pub fn render_summary(passes: &[PassResult]) -> String {
    SummaryTable(passes).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules::EarliestArrival;
    use crate::models::JobSpec;
    use crate::scheduler::run_pass;

    fn fcfs_pass() -> (JobRepository, PassResult) {
        let mut repo =
            JobRepository::from_specs(vec![JobSpec::new(0, 5, 1), JobSpec::new(1, 3, 2)]).unwrap();
        let pass = run_pass(&mut repo, &EarliestArrival).unwrap();
        (repo, pass)
    }

    #[test]
    fn test_render_jobs() {
        let (repo, _) = fcfs_pass();
        let text = render_jobs(&repo);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Jobs");
        assert!(lines[2].contains("Arrival"));
        assert_eq!(lines[4].split_whitespace().collect::<Vec<_>>(), ["1", "0", "5", "1"]);
        assert_eq!(lines[5].split_whitespace().collect::<Vec<_>>(), ["2", "1", "3", "2"]);
    }

    #[test]
    fn test_render_pass() {
        let (_, pass) = fcfs_pass();
        let text = render_pass(&pass);
        assert!(text.starts_with("FCFS schedule (First-Come-First-Served)\n"));
        let rows: Vec<Vec<&str>> = text
            .lines()
            .skip(4)
            .take(2)
            .map(|l| l.split_whitespace().collect())
            .collect();
        assert_eq!(rows[0], ["1", "0", "0", "0", "5"]);
        assert_eq!(rows[1], ["2", "1", "5", "4", "7"]);
        assert!(text.contains("Total wait: 4  Total turnaround: 12\n"));
        assert!(text.contains("Average wait: 2.00  Average turnaround: 6.00\n"));
    }

    #[test]
    fn test_render_summary() {
        let (_, pass) = fcfs_pass();
        let text = render_summary(std::slice::from_ref(&pass));
        let row = text
            .lines()
            .find(|l| l.trim_start().starts_with("FCFS"))
            .unwrap();
        assert_eq!(
            row.split_whitespace().collect::<Vec<_>>(),
            ["FCFS", "2.00", "6.00", "1.67", "8"]
        );
    }
}
