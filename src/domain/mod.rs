//! Domain layer containing the decision logic and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (number formatting)
//! - `payoff` - Alternatives and the payoff table
//! - `criteria` - Pure decision criteria (maximin, maximax, Laplace, Hurwitz, Savage)
//! - `evaluation` - The report collecting every criterion's result
//!
//! All functions here are pure: they take domain objects and return
//! computed results, with no I/O.

pub mod criteria;
pub mod evaluation;
pub mod foundation;
pub mod payoff;
