//! CSV adapters - Payoff tables from comma-separated files.

mod csv_table_source;

pub use csv_table_source::{CsvTableSource, TableLoadError, DEFAULT_TABLE_FILE};
