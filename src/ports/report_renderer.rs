//! Report Renderer Port - Presentation of an evaluation report.

use std::io::{self, Write};

use crate::domain::evaluation::EvaluationReport;

/// Port for writing an `EvaluationReport` to an output stream.
///
/// Rendering is the only step with observable side effects; computing the
/// report never prints.
pub trait ReportRenderer: Send + Sync {
    /// Writes the report.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the output cannot be written.
    fn render(&self, report: &EvaluationReport, out: &mut dyn Write) -> io::Result<()>;
}
