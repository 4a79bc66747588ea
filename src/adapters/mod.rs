//! Adapters - Implementations of port interfaces.
//!
//! - `csv` - Payoff tables read from CSV files
//! - `report` - Text and JSON report renderers

pub mod csv;
pub mod report;

pub use csv::{CsvTableSource, TableLoadError, DEFAULT_TABLE_FILE};
pub use report::{JsonReportRenderer, TextReportRenderer};
