//! Table Source Port - Where the payoff table comes from.
//!
//! The application loads a table exactly once per run through this trait.
//! Adapters (like `CsvTableSource`) provide the implementation.

use crate::domain::payoff::PayoffTable;

/// Port for loading a payoff table.
///
/// # Contract
///
/// Implementations must:
/// - Return alternatives in source column order
/// - Never fail: unreadable or malformed input degrades to an empty table
///   (or to 0.0 outcomes for individual bad cells)
/// - Log the degradation rather than surface it
pub trait TableSource: Send + Sync {
    /// Loads the table.
    fn load_table(&self) -> PayoffTable;

    /// Human-readable description of the source, for logs.
    fn describe(&self) -> String;
}
