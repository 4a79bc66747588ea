//! Pessimistic (maximin) criterion.

use super::{select_max_by, CriterionKind, DecisionCriterion, Selection};
use crate::domain::payoff::PayoffTable;

/// Maximin: picks the alternative with the best guaranteed outcome.
///
/// Tables are laid out so the first state of nature holds each
/// alternative's worst case, so the score is `outcome_state0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PessimisticCriterion;

impl DecisionCriterion for PessimisticCriterion {
    fn kind(&self) -> CriterionKind {
        CriterionKind::Pessimistic
    }

    fn select(&self, table: &PayoffTable) -> Selection {
        select_max_by(table, |alt| alt.outcome_state0)
    }
}
