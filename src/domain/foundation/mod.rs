//! Foundation module - Shared domain primitives.

mod number_format;

pub use number_format::{format_number, INTEGER_EPSILON};
