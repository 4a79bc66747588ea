//! decision-criteria - Evaluate `how_to_expand.csv` under every criterion.
//!
//! Always exits 0: bad input degrades to empty or placeholder output, bad
//! configuration falls back to defaults, and write failures are logged.

use std::io;
use std::sync::Arc;

use decision_criteria::adapters::{CsvTableSource, JsonReportRenderer, TextReportRenderer};
use decision_criteria::application::{EvaluatePayoffTableCommand, EvaluatePayoffTableHandler};
use decision_criteria::config::{AppConfig, OutputFormat};
use decision_criteria::ports::ReportRenderer;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

fn setup_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn main() {
    let (config, config_error) = match AppConfig::load_validated() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    setup_logging(&config.output.log_level);
    if let Some(e) = config_error {
        warn!("{}; using default configuration", e);
    }

    let handler = EvaluatePayoffTableHandler::new(Arc::new(CsvTableSource::default()));
    let report = handler.handle(EvaluatePayoffTableCommand {
        hurwitz_steps: config.hurwitz.steps,
        hurwitz_degree: config.hurwitz.degree,
    });

    let renderer: Box<dyn ReportRenderer> = match config.output.format {
        OutputFormat::Text => Box::new(
            TextReportRenderer::new()
                .with_table(config.output.show_table)
                .with_regret_matrix(config.output.show_regret_matrix)
                .with_pacing(config.hurwitz.pacing()),
        ),
        OutputFormat::Json => Box::new(JsonReportRenderer),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = renderer.render(&report, &mut out) {
        error!("Failed to write report: {}", e);
    }
}
