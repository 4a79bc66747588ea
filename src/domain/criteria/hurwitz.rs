//! Hurwitz criterion - Blend of best and worst case over optimism degrees.

use serde::{Deserialize, Serialize};

use super::{select_max_by, Selection};
use crate::domain::payoff::{Alternative, PayoffTable};

/// Number of optimism degrees in a standard sweep (h = 0.0, 0.1, ... 0.9).
pub const DEFAULT_HURWITZ_STEPS: u32 = 10;

/// Scores of every alternative at one optimism degree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HurwitzRow {
    pub degree: f64,
    /// One score per alternative, in table order.
    pub scores: Vec<f64>,
}

/// The full Hurwitz table: one row per degree, one column per alternative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HurwitzSweep {
    pub alternatives: Vec<String>,
    pub rows: Vec<HurwitzRow>,
}

impl HurwitzSweep {
    /// Returns the number of degree rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no degree rows were computed.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Hurwitz analysis functions.
///
/// Unlike the other criteria this produces no single winner; its result is
/// the whole sweep, which callers print or inspect.
pub struct HurwitzAnalyzer;

impl HurwitzAnalyzer {
    /// Blended score of one alternative: `h * outcome_state1 + (1 - h) * outcome_state0`.
    pub fn score(alternative: &Alternative, degree: f64) -> f64 {
        degree * alternative.outcome_state1 + (1.0 - degree) * alternative.outcome_state0
    }

    /// Optimism degrees `i / steps` for `i` in `0..steps`, so 1.0 is never reached.
    pub fn degrees(steps: u32) -> impl Iterator<Item = f64> {
        (0..steps).map(move |i| i as f64 / steps as f64)
    }

    /// Computes the sweep over `steps` evenly spaced degrees in [0, 1).
    ///
    /// # Edge Cases
    /// - Empty table: Rows still list every degree, each with no scores
    /// - Zero steps: Returns a sweep with no rows
    pub fn sweep(table: &PayoffTable, steps: u32) -> HurwitzSweep {
        let alternatives = table.iter().map(|alt| alt.name.clone()).collect();

        let rows = Self::degrees(steps)
            .map(|degree| HurwitzRow {
                degree,
                scores: table.iter().map(|alt| Self::score(alt, degree)).collect(),
            })
            .collect();

        HurwitzSweep { alternatives, rows }
    }

    /// Picks the alternative with the strictly greatest blended score at one degree.
    ///
    /// First listed wins ties; an empty table yields [`Selection::empty`].
    pub fn best_at(table: &PayoffTable, degree: f64) -> Selection {
        select_max_by(table, |alt| Self::score(alt, degree))
    }
}
