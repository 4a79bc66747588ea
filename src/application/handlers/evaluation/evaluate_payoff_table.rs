//! EvaluatePayoffTableHandler - Loads the table once and runs every criterion.
//!
//! Criteria run one after another, each to completion, over the same
//! read-only table. Nothing here prints; the returned report is handed to
//! a `ReportRenderer`.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::criteria::{
    CriterionKind, HurwitzAnalyzer, SavageCriterion, DEFAULT_HURWITZ_STEPS,
};
use crate::domain::evaluation::{CriterionResult, EvaluationReport, HurwitzChoice};
use crate::ports::TableSource;

/// Command to evaluate the source's payoff table.
#[derive(Debug, Clone)]
pub struct EvaluatePayoffTableCommand {
    /// Number of Hurwitz optimism degrees in [0, 1).
    pub hurwitz_steps: u32,
    /// Degree at which to also pick a single Hurwitz winner.
    pub hurwitz_degree: Option<f64>,
}

impl Default for EvaluatePayoffTableCommand {
    fn default() -> Self {
        Self {
            hurwitz_steps: DEFAULT_HURWITZ_STEPS,
            hurwitz_degree: None,
        }
    }
}

/// Result of an evaluation run.
pub type EvaluatePayoffTableResult = EvaluationReport;

/// Handler that evaluates a payoff table under every criterion.
///
/// Never fails: a source that cannot produce a table yields an empty one,
/// and every criterion answers an empty table with its sentinel.
pub struct EvaluatePayoffTableHandler {
    source: Arc<dyn TableSource>,
}

impl EvaluatePayoffTableHandler {
    pub fn new(source: Arc<dyn TableSource>) -> Self {
        Self { source }
    }

    pub fn handle(&self, cmd: EvaluatePayoffTableCommand) -> EvaluatePayoffTableResult {
        let table = self.source.load_table();
        info!(
            source = %self.source.describe(),
            alternatives = table.alternative_count(),
            "Loaded payoff table"
        );

        let selections: Vec<CriterionResult> = CriterionKind::ALL
            .iter()
            .map(|kind| {
                let selection = kind.select(&table);
                debug!(criterion = %kind, name = %selection.name, score = selection.score, "Criterion evaluated");
                CriterionResult::new(*kind, selection)
            })
            .collect();

        let hurwitz = HurwitzAnalyzer::sweep(&table, cmd.hurwitz_steps);
        debug!(rows = hurwitz.len(), "Hurwitz sweep computed");

        let hurwitz_choice = cmd.hurwitz_degree.map(|degree| {
            let selection = HurwitzAnalyzer::best_at(&table, degree);
            HurwitzChoice {
                degree,
                name: selection.name,
                score: selection.score,
            }
        });

        let regret = SavageCriterion::regret_matrix(&table);

        EvaluationReport {
            alternatives: table.into_alternatives(),
            selections,
            hurwitz,
            hurwitz_choice,
            regret,
        }
    }
}
