//! Alternative - One candidate decision with an outcome per state of nature.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::format_number;

/// The two states of nature a payoff table is defined over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateOfNature {
    /// First data row of the table.
    First,
    /// Second data row of the table.
    Second,
}

impl StateOfNature {
    /// Maps a zero-based data row index to a state, if it is one of the two tracked rows.
    pub fn from_row(row: usize) -> Option<Self> {
        match row {
            0 => Some(StateOfNature::First),
            1 => Some(StateOfNature::Second),
            _ => None,
        }
    }
}

/// A named alternative with exactly two outcomes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    pub outcome_state0: f64,
    pub outcome_state1: f64,
}

impl Alternative {
    /// Creates an alternative with both outcomes set.
    pub fn new(name: impl Into<String>, outcome_state0: f64, outcome_state1: f64) -> Self {
        Self {
            name: name.into(),
            outcome_state0,
            outcome_state1,
        }
    }

    /// Creates an alternative whose outcomes are still unset (0.0).
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, 0.0, 0.0)
    }

    /// Returns the outcome under the given state.
    pub fn outcome(&self, state: StateOfNature) -> f64 {
        match state {
            StateOfNature::First => self.outcome_state0,
            StateOfNature::Second => self.outcome_state1,
        }
    }

    pub(crate) fn set_outcome(&mut self, state: StateOfNature, value: f64) {
        match state {
            StateOfNature::First => self.outcome_state0 = value,
            StateOfNature::Second => self.outcome_state1 = value,
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ({}, {})",
            self.name,
            format_number(self.outcome_state0),
            format_number(self.outcome_state1)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_alternative_starts_at_zero() {
        let alt = Alternative::named("expansion");
        assert_eq!(alt.name, "expansion");
        assert_eq!(alt.outcome_state0, 0.0);
        assert_eq!(alt.outcome_state1, 0.0);
    }

    #[test]
    fn outcome_reads_the_requested_state() {
        let alt = Alternative::new("A", 10.0, 30.0);
        assert_eq!(alt.outcome(StateOfNature::First), 10.0);
        assert_eq!(alt.outcome(StateOfNature::Second), 30.0);
    }

    #[test]
    fn set_outcome_writes_only_that_state() {
        let mut alt = Alternative::named("A");
        alt.set_outcome(StateOfNature::Second, 7.0);
        assert_eq!(alt.outcome_state0, 0.0);
        assert_eq!(alt.outcome_state1, 7.0);
    }

    #[test]
    fn state_row_mapping() {
        assert_eq!(StateOfNature::from_row(0), Some(StateOfNature::First));
        assert_eq!(StateOfNature::from_row(1), Some(StateOfNature::Second));
        assert_eq!(StateOfNature::from_row(2), None);
    }

    #[test]
    fn display_uses_report_number_format() {
        assert_eq!(Alternative::new("A", 10.0, 12.5).to_string(), "A: (10.0, 12.5)");
        assert_eq!(Alternative::named("status quo").to_string(), "status quo: (0.0, 0.0)");
    }

    #[test]
    fn alternative_serializes_to_json() {
        let json = serde_json::to_string(&Alternative::new("A", 1.0, 2.0)).unwrap();
        assert!(json.contains("\"outcome_state0\":1.0"));
        assert!(json.contains("\"outcome_state1\":2.0"));
    }
}
