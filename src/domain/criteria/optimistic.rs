//! Optimistic (maximax) criterion.

use super::{select_max_by, CriterionKind, DecisionCriterion, Selection};
use crate::domain::payoff::PayoffTable;

/// Maximax: picks the alternative with the best best-case outcome (`outcome_state1`).
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimisticCriterion;

impl DecisionCriterion for OptimisticCriterion {
    fn kind(&self) -> CriterionKind {
        CriterionKind::Optimistic
    }

    fn select(&self, table: &PayoffTable) -> Selection {
        select_max_by(table, |alt| alt.outcome_state1)
    }
}
