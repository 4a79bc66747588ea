//! Evaluation handlers - Run every decision criterion over a payoff table.

mod evaluate_payoff_table;

pub use evaluate_payoff_table::{
    EvaluatePayoffTableCommand, EvaluatePayoffTableHandler, EvaluatePayoffTableResult,
};
