//! Payoff Table - Ordered alternatives over two states of nature.

use serde::{Deserialize, Serialize};

use super::Alternative;

/// The payoff table: alternatives in source column order.
///
/// All alternatives are owned by value in a single vector; the table is
/// read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayoffTable {
    alternatives: Vec<Alternative>,
}

impl PayoffTable {
    /// Creates an empty payoff table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a table from alternatives already in column order.
    pub fn new(alternatives: Vec<Alternative>) -> Self {
        Self { alternatives }
    }

    /// Creates a builder for constructing a payoff table.
    pub fn builder() -> PayoffTableBuilder {
        PayoffTableBuilder::new()
    }

    /// Alternatives in column order.
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// Iterates alternatives in column order.
    pub fn iter(&self) -> std::slice::Iter<'_, Alternative> {
        self.alternatives.iter()
    }

    /// Names in column order.
    pub fn names(&self) -> Vec<&str> {
        self.alternatives.iter().map(|a| a.name.as_str()).collect()
    }

    /// Returns true if the table has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Consumes the table, yielding its alternatives.
    pub fn into_alternatives(self) -> Vec<Alternative> {
        self.alternatives
    }
}

impl<'a> IntoIterator for &'a PayoffTable {
    type Item = &'a Alternative;
    type IntoIter = std::slice::Iter<'a, Alternative>;

    fn into_iter(self) -> Self::IntoIter {
        self.alternatives.iter()
    }
}

/// Builder for constructing PayoffTable instances.
#[derive(Debug, Default)]
pub struct PayoffTableBuilder {
    alternatives: Vec<Alternative>,
}

impl PayoffTableBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an alternative with both outcomes.
    pub fn alternative(mut self, name: impl Into<String>, outcome_state0: f64, outcome_state1: f64) -> Self {
        self.alternatives
            .push(Alternative::new(name, outcome_state0, outcome_state1));
        self
    }

    /// Builds the payoff table.
    pub fn build(self) -> PayoffTable {
        PayoffTable {
            alternatives: self.alternatives,
        }
    }
}
