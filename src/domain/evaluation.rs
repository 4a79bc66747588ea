//! Evaluation report - Every criterion's result for one payoff table.

use serde::{Deserialize, Serialize};

use super::criteria::{CriterionKind, HurwitzSweep, RegretMatrix, Selection};
use super::payoff::Alternative;

/// Result of a single-selection criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionResult {
    pub criterion: CriterionKind,
    pub name: String,
    pub score: f64,
}

impl CriterionResult {
    /// Pairs a criterion with its selection.
    pub fn new(criterion: CriterionKind, selection: Selection) -> Self {
        Self {
            criterion,
            name: selection.name,
            score: selection.score,
        }
    }

    /// Returns the selection part of this result.
    pub fn selection(&self) -> Selection {
        Selection::new(self.name.clone(), self.score)
    }
}

/// Hurwitz winner at one configured optimism degree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HurwitzChoice {
    pub degree: f64,
    pub name: String,
    pub score: f64,
}

/// Everything one evaluation run produced, ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// The loaded table, in column order.
    pub alternatives: Vec<Alternative>,
    /// Single-selection results in `CriterionKind::ALL` order.
    pub selections: Vec<CriterionResult>,
    pub hurwitz: HurwitzSweep,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hurwitz_choice: Option<HurwitzChoice>,
    pub regret: RegretMatrix,
}

impl EvaluationReport {
    /// Looks up the result of one criterion.
    pub fn selection(&self, criterion: CriterionKind) -> Option<&CriterionResult> {
        self.selections.iter().find(|r| r.criterion == criterion)
    }
}
