//! Application handlers, grouped by area.

pub mod evaluation;

pub use evaluation::{
    EvaluatePayoffTableCommand, EvaluatePayoffTableHandler, EvaluatePayoffTableResult,
};
