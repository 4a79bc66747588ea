//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TableSource` - Where the payoff table is loaded from
//! - `ReportRenderer` - How an evaluation report is written out

mod report_renderer;
mod table_source;

pub use report_renderer::ReportRenderer;
pub use table_source::TableSource;
