//! Integration tests for the full evaluation flow.
//!
//! These tests verify the end-to-end path:
//! 1. A CSV file on disk is loaded through `CsvTableSource`
//! 2. `EvaluatePayoffTableHandler` runs every criterion once
//! 3. A renderer writes the report exactly as the binary would

use std::io::Write;
use std::sync::Arc;

use serde_json::Value;
use tempfile::NamedTempFile;

use decision_criteria::adapters::{CsvTableSource, JsonReportRenderer, TextReportRenderer};
use decision_criteria::application::{EvaluatePayoffTableCommand, EvaluatePayoffTableHandler};
use decision_criteria::domain::criteria::{CriterionKind, Selection};
use decision_criteria::domain::evaluation::EvaluationReport;
use decision_criteria::ports::ReportRenderer;

// =============================================================================
// Test Infrastructure
// =============================================================================

const WORKED_EXAMPLE: &str = "X,A,B,C\ns0,10,20,5\ns1,30,5,25\n";

fn csv_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn evaluate(file: &NamedTempFile) -> EvaluationReport {
    let handler = EvaluatePayoffTableHandler::new(Arc::new(CsvTableSource::new(file.path())));
    handler.handle(EvaluatePayoffTableCommand::default())
}

fn render(renderer: &dyn ReportRenderer, report: &EvaluationReport) -> String {
    let mut out = Vec::new();
    renderer.render(report, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn selection(report: &EvaluationReport, kind: CriterionKind) -> Selection {
    report.selection(kind).unwrap().selection()
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn worked_example_end_to_end() {
    let file = csv_file(WORKED_EXAMPLE);
    let report = evaluate(&file);

    assert_eq!(selection(&report, CriterionKind::Pessimistic), Selection::new("B", 20.0));
    assert_eq!(selection(&report, CriterionKind::Optimistic), Selection::new("A", 30.0));
    assert_eq!(selection(&report, CriterionKind::Laplace), Selection::new("A", 20.0));
    assert_eq!(selection(&report, CriterionKind::Savage), Selection::new("A", 10.0));
}

#[test]
fn text_output_lines() {
    let file = csv_file(WORKED_EXAMPLE);
    let text = render(&TextReportRenderer::new(), &evaluate(&file));
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines.contains(&"Pessimistic: B(20.0)"));
    assert!(lines.contains(&"Optimistic: A(30.0)"));
    assert!(lines.contains(&"Laplace: A(20.0)"));
    assert!(lines.contains(&"Savage: A(10.0)"));

    let hurwitz_rows: Vec<&&str> = lines
        .iter()
        .filter(|l| l.starts_with("0.") && l.contains('|'))
        .collect();
    assert_eq!(hurwitz_rows.len(), 10);
    assert!(hurwitz_rows.iter().all(|row| row.matches('|').count() == 3));
    assert_eq!(*hurwitz_rows[9], "0.9 | 28.0 | 6.5  | 23.0");
}

#[test]
fn json_output_lists_criteria_in_order() {
    let file = csv_file(WORKED_EXAMPLE);
    let json = render(&JsonReportRenderer, &evaluate(&file));

    let value: Value = serde_json::from_str(&json).unwrap();
    let criteria: Vec<&str> = value["selections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["criterion"].as_str().unwrap())
        .collect();
    assert_eq!(criteria, vec!["pessimistic", "optimistic", "laplace", "savage"]);
    assert_eq!(value["hurwitz"]["rows"].as_array().unwrap().len(), 10);
    assert_eq!(value["regret"]["max_state1"], 30.0);
}

#[test]
fn header_only_file_gives_zero_outcomes() {
    let file = csv_file("X,A,B,C\n");
    let report = evaluate(&file);

    assert_eq!(report.alternatives.len(), 3);
    assert!(report
        .alternatives
        .iter()
        .all(|a| a.outcome_state0 == 0.0 && a.outcome_state1 == 0.0));
    assert_eq!(selection(&report, CriterionKind::Pessimistic), Selection::new("A", 0.0));
}

#[test]
fn file_naming_no_alternatives_is_harmless() {
    for content in ["X\ns0\ns1\n", "", "\n\n"] {
        let file = csv_file(content);
        let report = evaluate(&file);

        assert!(report.alternatives.is_empty());
        for kind in CriterionKind::ALL {
            assert_eq!(selection(&report, kind), Selection::empty());
        }

        let text = render(&TextReportRenderer::new(), &report);
        assert!(text.contains("Pessimistic: (0.0)"));
    }
}

#[test]
fn missing_file_is_harmless() {
    let dir = tempfile::tempdir().unwrap();
    let handler = EvaluatePayoffTableHandler::new(Arc::new(CsvTableSource::new(
        dir.path().join("how_to_expand.csv"),
    )));
    let report = handler.handle(EvaluatePayoffTableCommand::default());

    assert!(report.alternatives.is_empty());
    assert_eq!(selection(&report, CriterionKind::Savage), Selection::empty());
}

#[test]
fn extra_state_rows_do_not_change_results() {
    let two_rows = evaluate(&csv_file(WORKED_EXAMPLE));
    let three_rows = evaluate(&csv_file("X,A,B,C\ns0,10,20,5\ns1,30,5,25\ns2,-99,400,7\n"));

    assert_eq!(two_rows, three_rows);
}

#[test]
fn malformed_cells_become_zero() {
    let report = evaluate(&csv_file("X,A,B\ns0,ten,4\ns1,6,n/a\n"));

    assert_eq!(report.alternatives[0].outcome_state0, 0.0);
    assert_eq!(report.alternatives[0].outcome_state1, 6.0);
    assert_eq!(report.alternatives[1].outcome_state0, 4.0);
    assert_eq!(report.alternatives[1].outcome_state1, 0.0);
}

#[test]
fn negative_payoffs_select_the_true_maximum() {
    let report = evaluate(&csv_file("X,A,B,C\ns0,-40,-3,-12\ns1,-8,-6,-2\n"));

    assert_eq!(selection(&report, CriterionKind::Pessimistic), Selection::new("B", -3.0));
    assert_eq!(selection(&report, CriterionKind::Laplace), Selection::new("B", -4.5));
}
