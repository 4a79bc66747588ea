//! Savage (minimax regret) criterion.

use serde::{Deserialize, Serialize};

use super::{CriterionKind, DecisionCriterion, Selection};
use crate::domain::payoff::PayoffTable;

/// Regrets of one alternative under each state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegretRow {
    pub name: String,
    pub regret_state0: f64,
    pub regret_state1: f64,
    pub max_regret: f64,
}

/// Regret of every alternative against the best outcome per state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegretMatrix {
    /// Best first-state outcome over all alternatives.
    pub max_state0: f64,
    /// Best second-state outcome over all alternatives.
    pub max_state1: f64,
    /// One row per alternative, in table order.
    pub rows: Vec<RegretRow>,
}

impl RegretMatrix {
    /// Returns true if the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Minimax regret: picks the alternative whose worst regret is smallest.
#[derive(Debug, Clone, Copy, Default)]
pub struct SavageCriterion;

impl SavageCriterion {
    /// Computes the regret matrix.
    ///
    /// # Algorithm
    /// For each state k: regret_k(alt) = max over all alts of outcome_k - alt.outcome_k.
    /// An alternative's max regret is the larger of its two regrets.
    ///
    /// # Edge Cases
    /// - Empty table: Returns an empty matrix with both maxima at 0
    pub fn regret_matrix(table: &PayoffTable) -> RegretMatrix {
        if table.is_empty() {
            return RegretMatrix::default();
        }

        let max_state0 = table
            .iter()
            .map(|alt| alt.outcome_state0)
            .fold(f64::NEG_INFINITY, f64::max);
        let max_state1 = table
            .iter()
            .map(|alt| alt.outcome_state1)
            .fold(f64::NEG_INFINITY, f64::max);

        let rows = table
            .iter()
            .map(|alt| {
                let regret_state0 = max_state0 - alt.outcome_state0;
                let regret_state1 = max_state1 - alt.outcome_state1;
                RegretRow {
                    name: alt.name.clone(),
                    regret_state0,
                    regret_state1,
                    max_regret: regret_state0.max(regret_state1),
                }
            })
            .collect();

        RegretMatrix {
            max_state0,
            max_state1,
            rows,
        }
    }

    /// Picks the row with the strictly smallest max regret; first seen wins ties.
    pub fn select_from(matrix: &RegretMatrix) -> Selection {
        let mut rows = matrix.rows.iter();
        let Some(first) = rows.next() else {
            return Selection::empty();
        };

        let best = rows.fold(first, |best, row| {
            if row.max_regret < best.max_regret {
                row
            } else {
                best
            }
        });

        Selection::new(best.name.clone(), best.max_regret)
    }
}

impl DecisionCriterion for SavageCriterion {
    fn kind(&self) -> CriterionKind {
        CriterionKind::Savage
    }

    fn select(&self, table: &PayoffTable) -> Selection {
        Self::select_from(&Self::regret_matrix(table))
    }
}
