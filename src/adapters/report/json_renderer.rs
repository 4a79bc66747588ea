//! JSON report renderer.

use std::io::{self, Write};

use crate::domain::evaluation::EvaluationReport;
use crate::ports::ReportRenderer;

/// Writes the whole report as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReportRenderer;

impl ReportRenderer for JsonReportRenderer {
    fn render(&self, report: &EvaluationReport, out: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)
    }
}
