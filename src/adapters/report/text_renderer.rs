//! Plain-text report renderer.
//!
//! Prints one `<Criterion>: <name>(<score>)` line per single-selection
//! criterion and the Hurwitz sweep as a `|`-separated table.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::domain::criteria::{CriterionKind, HurwitzSweep, RegretMatrix};
use crate::domain::evaluation::{CriterionResult, EvaluationReport};
use crate::domain::foundation::format_number;
use crate::ports::ReportRenderer;

const COLUMN_SEPARATOR: &str = " | ";

/// Text renderer with optional sections and row pacing.
#[derive(Debug, Clone)]
pub struct TextReportRenderer {
    show_table: bool,
    show_regret_matrix: bool,
    pacing: Duration,
}

impl TextReportRenderer {
    /// Renderer with the regret matrix on, table echo off and no pacing.
    pub fn new() -> Self {
        Self {
            show_table: false,
            show_regret_matrix: true,
            pacing: Duration::ZERO,
        }
    }

    /// Echo the parsed alternatives before the results.
    pub fn with_table(mut self, show: bool) -> Self {
        self.show_table = show;
        self
    }

    /// Print the Savage regret matrix before the Savage line.
    pub fn with_regret_matrix(mut self, show: bool) -> Self {
        self.show_regret_matrix = show;
        self
    }

    /// Pause between Hurwitz rows. Display only.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    fn write_table(&self, report: &EvaluationReport, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Parsed alternatives:")?;
        for alt in &report.alternatives {
            writeln!(out, "{}", alt)?;
        }
        Ok(())
    }

    fn write_hurwitz(&self, sweep: &HurwitzSweep, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Hurwitz:")?;

        let header: Vec<String> = std::iter::once("h".to_string())
            .chain(sweep.alternatives.iter().cloned())
            .collect();
        let body: Vec<Vec<String>> = sweep
            .rows
            .iter()
            .map(|row| {
                std::iter::once(format_number(row.degree))
                    .chain(row.scores.iter().map(|&s| format_number(s)))
                    .collect()
            })
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|c| c.chars().count()).collect();
        for cells in &body {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header_line = join_padded(&header, &widths);
        writeln!(out, "{}", header_line)?;
        writeln!(out, "{}", "-".repeat(header_line.chars().count().max(1)))?;

        for (i, cells) in body.iter().enumerate() {
            writeln!(out, "{}", join_padded(cells, &widths))?;
            if !self.pacing.is_zero() && i + 1 < body.len() {
                out.flush()?;
                thread::sleep(self.pacing);
            }
        }
        Ok(())
    }

    fn write_regret_matrix(&self, matrix: &RegretMatrix, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Regret matrix (alternative: (state0, state1))")?;
        for row in &matrix.rows {
            writeln!(
                out,
                "{}: ({}, {})",
                row.name,
                format_number(row.regret_state0),
                format_number(row.regret_state1)
            )?;
        }
        Ok(())
    }
}

impl Default for TextReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TextReportRenderer {
    fn render(&self, report: &EvaluationReport, out: &mut dyn Write) -> io::Result<()> {
        if self.show_table {
            self.write_table(report, out)?;
        }

        for kind in [
            CriterionKind::Pessimistic,
            CriterionKind::Optimistic,
            CriterionKind::Laplace,
        ] {
            if let Some(result) = report.selection(kind) {
                write_selection(result, out)?;
            }
        }

        self.write_hurwitz(&report.hurwitz, out)?;

        if let Some(choice) = &report.hurwitz_choice {
            writeln!(
                out,
                "Hurwitz(h={}): {}({})",
                format_number(choice.degree),
                choice.name,
                format_number(choice.score)
            )?;
        }

        if self.show_regret_matrix && !report.regret.is_empty() {
            self.write_regret_matrix(&report.regret, out)?;
        }

        if let Some(result) = report.selection(CriterionKind::Savage) {
            write_selection(result, out)?;
        }

        out.flush()
    }
}

fn write_selection(result: &CriterionResult, out: &mut dyn Write) -> io::Result<()> {
    writeln!(
        out,
        "{}: {}({})",
        result.criterion,
        result.name,
        format_number(result.score)
    )
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR);
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::{HurwitzAnalyzer, SavageCriterion, Selection};
    use crate::domain::evaluation::HurwitzChoice;
    use crate::domain::payoff::PayoffTable;

    fn report_for(table: &PayoffTable) -> EvaluationReport {
        EvaluationReport {
            alternatives: table.alternatives().to_vec(),
            selections: CriterionKind::ALL
                .iter()
                .map(|kind| CriterionResult::new(*kind, kind.select(table)))
                .collect(),
            hurwitz: HurwitzAnalyzer::sweep(table, 10),
            hurwitz_choice: None,
            regret: SavageCriterion::regret_matrix(table),
        }
    }

    fn example() -> PayoffTable {
        PayoffTable::builder()
            .alternative("A", 10.0, 30.0)
            .alternative("B", 20.0, 5.0)
            .alternative("C", 5.0, 25.0)
            .build()
    }

    fn render(renderer: &TextReportRenderer, report: &EvaluationReport) -> String {
        let mut out = Vec::new();
        renderer.render(report, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn selection_lines_in_order() {
        let text = render(&TextReportRenderer::new(), &report_for(&example()));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Pessimistic: B(20.0)");
        assert_eq!(lines[1], "Optimistic: A(30.0)");
        assert_eq!(lines[2], "Laplace: A(20.0)");
        assert_eq!(lines[3], "Hurwitz:");
        assert_eq!(*lines.last().unwrap(), "Savage: A(10.0)");
    }

    #[test]
    fn hurwitz_table_layout() {
        let text = render(
            &TextReportRenderer::new().with_regret_matrix(false),
            &report_for(&example()),
        );
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[4], "h   | A    | B    | C");
        assert!(lines[5].chars().all(|c| c == '-'));
        assert_eq!(lines[6], "0.0 | 10.0 | 20.0 | 5.0");
        assert_eq!(lines[11], "0.5 | 20.0 | 12.5 | 15.0");

        let rows: Vec<&&str> = lines[6..].iter().take_while(|l| !l.starts_with("Savage")).collect();
        assert_eq!(rows.len(), 10);
        assert!(rows.iter().all(|row| row.matches('|').count() == 3));
    }

    #[test]
    fn regret_matrix_precedes_savage() {
        let text = render(&TextReportRenderer::new(), &report_for(&example()));
        assert!(text.contains(
            "Regret matrix (alternative: (state0, state1))\nA: (10.0, 0.0)\nB: (0.0, 25.0)\nC: (15.0, 5.0)\nSavage: A(10.0)\n"
        ));
    }

    #[test]
    fn table_echo_is_optional() {
        let report = report_for(&example());
        assert!(!render(&TextReportRenderer::new(), &report).contains("Parsed alternatives:"));

        let text = render(&TextReportRenderer::new().with_table(true), &report);
        assert!(text.starts_with("Parsed alternatives:\nA: (10.0, 30.0)\nB: (20.0, 5.0)\nC: (5.0, 25.0)\n"));
    }

    #[test]
    fn hurwitz_choice_line() {
        let mut report = report_for(&example());
        report.hurwitz_choice = Some(HurwitzChoice {
            degree: 0.5,
            name: "A".to_string(),
            score: 20.0,
        });
        assert!(render(&TextReportRenderer::new(), &report).contains("Hurwitz(h=0.5): A(20.0)\n"));
    }

    #[test]
    fn empty_table_renders_placeholders() {
        let text = render(&TextReportRenderer::new(), &report_for(&PayoffTable::empty()));
        assert!(text.contains("Pessimistic: (0.0)\n"));
        assert!(text.contains("Savage: (0.0)\n"));
        assert!(!text.contains("Regret matrix"));
        assert!(text.contains("h\n-\n0.0\n0.1\n"));
    }

    #[test]
    fn pacing_does_not_change_output() {
        let report = report_for(&example());
        let paced = render(
            &TextReportRenderer::new().with_pacing(Duration::from_millis(1)),
            &report,
        );
        assert_eq!(paced, render(&TextReportRenderer::new(), &report));
    }

    #[test]
    fn wide_names_widen_columns() {
        let table = PayoffTable::builder()
            .alternative("status quo", 1.0, 2.0)
            .build();
        let report = EvaluationReport {
            hurwitz: HurwitzAnalyzer::sweep(&table, 2),
            selections: vec![CriterionResult::new(CriterionKind::Savage, Selection::new("status quo", 0.0))],
            ..Default::default()
        };
        let text = render(&TextReportRenderer::new(), &report);
        assert!(text.contains("h   | status quo\n"));
        assert!(text.contains("0.0 | 1.0\n"));
        assert!(text.contains("0.5 | 1.5\n"));
    }
}
