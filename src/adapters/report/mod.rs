//! Report adapters - Text and JSON rendering of evaluation reports.

mod json_renderer;
mod text_renderer;

pub use json_renderer::JsonReportRenderer;
pub use text_renderer::TextReportRenderer;
