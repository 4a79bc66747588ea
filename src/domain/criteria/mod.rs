//! Criteria Module - Decision rules under uncertainty.
//!
//! Each criterion is a stateless unit struct. The single-selection criteria
//! implement [`DecisionCriterion`] and pick one alternative from a
//! [`PayoffTable`]; Hurwitz instead produces a full sweep over optimism
//! degrees (see [`HurwitzAnalyzer`]).
//!
//! # Tie-breaks
//!
//! Comparisons are strict, so when two alternatives share the decisive
//! score the one listed first in the table wins. The incumbent is seeded
//! with the first alternative's own score, never with a fixed sentinel.
//!
//! # Empty tables
//!
//! Every criterion returns [`Selection::empty`] for an empty table.

mod hurwitz;
mod laplace;
mod optimistic;
mod pessimistic;
mod savage;

pub use hurwitz::{HurwitzAnalyzer, HurwitzRow, HurwitzSweep, DEFAULT_HURWITZ_STEPS};
pub use laplace::LaplaceCriterion;
pub use optimistic::OptimisticCriterion;
pub use pessimistic::PessimisticCriterion;
pub use savage::{RegretMatrix, RegretRow, SavageCriterion};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::payoff::{Alternative, PayoffTable};

/// The winning alternative of a criterion and its decisive score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub name: String,
    pub score: f64,
}

impl Selection {
    /// Creates a selection.
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// The sentinel returned for an empty table: `("", 0.0)`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true for the empty-table sentinel.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.score == 0.0
    }
}

/// A criterion that selects a single alternative from a payoff table.
pub trait DecisionCriterion: Send + Sync {
    /// Which criterion this is.
    fn kind(&self) -> CriterionKind;

    /// Selects the winning alternative. Never mutates the table.
    fn select(&self, table: &PayoffTable) -> Selection;
}

/// The closed set of single-selection criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKind {
    Pessimistic,
    Optimistic,
    Laplace,
    Savage,
}

impl CriterionKind {
    /// All single-selection criteria, in report order.
    pub const ALL: [CriterionKind; 4] = [
        CriterionKind::Pessimistic,
        CriterionKind::Optimistic,
        CriterionKind::Laplace,
        CriterionKind::Savage,
    ];

    /// Returns the display label used in report lines.
    pub fn label(&self) -> &'static str {
        match self {
            CriterionKind::Pessimistic => "Pessimistic",
            CriterionKind::Optimistic => "Optimistic",
            CriterionKind::Laplace => "Laplace",
            CriterionKind::Savage => "Savage",
        }
    }

    /// Returns the evaluator for this criterion.
    pub fn criterion(&self) -> &'static dyn DecisionCriterion {
        match self {
            CriterionKind::Pessimistic => &PessimisticCriterion,
            CriterionKind::Optimistic => &OptimisticCriterion,
            CriterionKind::Laplace => &LaplaceCriterion,
            CriterionKind::Savage => &SavageCriterion,
        }
    }

    /// Shorthand for `self.criterion().select(table)`.
    pub fn select(&self, table: &PayoffTable) -> Selection {
        self.criterion().select(table)
    }
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Picks the alternative with the strictly greatest score; first seen wins ties.
pub(crate) fn select_max_by<F>(table: &PayoffTable, score: F) -> Selection
where
    F: Fn(&Alternative) -> f64,
{
    select_by(table, score, |candidate, incumbent| candidate > incumbent)
}

/// Picks the alternative with the strictly smallest score; first seen wins ties.
pub(crate) fn select_min_by<F>(table: &PayoffTable, score: F) -> Selection
where
    F: Fn(&Alternative) -> f64,
{
    select_by(table, score, |candidate, incumbent| candidate < incumbent)
}

fn select_by<F, B>(table: &PayoffTable, score: F, beats: B) -> Selection
where
    F: Fn(&Alternative) -> f64,
    B: Fn(f64, f64) -> bool,
{
    let mut alternatives = table.iter();
    let Some(first) = alternatives.next() else {
        return Selection::empty();
    };

    let mut best = first;
    let mut best_score = score(first);
    for alternative in alternatives {
        let candidate = score(alternative);
        if beats(candidate, best_score) {
            best = alternative;
            best_score = candidate;
        }
    }

    Selection::new(best.name.clone(), best_score)
}
