//! Payoff module - The two-state payoff table and its alternatives.
//!
//! # Components
//!
//! - `Alternative` - A named course of action with one outcome per state of nature
//! - `PayoffTable` - Ordered, owned collection of alternatives (column order)
//! - `PayoffTableBuilder` - Fluent construction for tests and in-memory sources

mod alternative;
mod payoff_table;

pub use alternative::{Alternative, StateOfNature};
pub use payoff_table::{PayoffTable, PayoffTableBuilder};
