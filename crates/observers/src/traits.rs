//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written once can steer any solver whose events and actions
//! implement them.
//!
//! # Event traits
//!
//! - [`HasObjective`]: events that carry an objective value
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use cvxlab_core::Observer;
//! use cvxlab_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct Plateau {
//!     best: f64,
//!     stale: usize,
//!     patience: usize,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for Plateau {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.objective() < self.best {
//!             self.best = event.objective();
//!             self.stale = 0;
//!         } else {
//!             self.stale += 1;
//!         }
//!         (self.stale >= self.patience).then(A::stop_early)
//!     }
//! }
//! ```

use cvxlab_solvers::line_search::golden_section;

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<X> HasObjective for golden_section::Event<'_, X> {
    fn objective(&self) -> f64 {
        golden_section::Event::objective(self)
    }
}

impl CanStopEarly for golden_section::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
