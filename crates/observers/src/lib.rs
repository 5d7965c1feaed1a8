//! Reusable observers for the cvxlab solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across solvers.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasObjective`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] forwards every line search evaluation to `tracing`
//! - [`EvaluationBudget`] stops a solver after a fixed number of events
//! - [`ObjectiveTarget`] stops a solver once the objective is good enough
//!
//! [`Observer`]: cvxlab_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod budget;
mod logging;
mod target;

pub use budget::EvaluationBudget;
pub use logging::LogObserver;
pub use target::ObjectiveTarget;
