//! Decision Criteria - Classical decision rules under uncertainty
//!
//! This crate evaluates a two-state payoff table under the pessimistic
//! (maximin), optimistic (maximax), Laplace, Hurwitz and Savage (minimax
//! regret) criteria and renders the results.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
