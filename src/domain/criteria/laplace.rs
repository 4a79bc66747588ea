//! Laplace (equal likelihood) criterion.

use super::{select_max_by, CriterionKind, DecisionCriterion, Selection};
use crate::domain::payoff::{Alternative, PayoffTable};

/// Picks the alternative with the greatest unweighted mean outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaplaceCriterion;

impl LaplaceCriterion {
    /// Mean of the two outcomes.
    pub fn mean(alternative: &Alternative) -> f64 {
        (alternative.outcome_state0 + alternative.outcome_state1) / 2.0
    }
}

impl DecisionCriterion for LaplaceCriterion {
    fn kind(&self) -> CriterionKind {
        CriterionKind::Laplace
    }

    fn select(&self, table: &PayoffTable) -> Selection {
        select_max_by(table, Self::mean)
    }
}
