use cvxlab_core::Observer;

use crate::traits::{CanStopEarly, HasObjective};

/// Stops a solver as soon as an evaluated objective reaches a target.
///
/// Useful when any point below a known threshold is good enough, so the
/// remaining narrowing steps would be wasted work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectiveTarget {
    target: f64,
    best: f64,
}

impl ObjectiveTarget {
    /// Creates an observer that stops once an objective is `<= target`.
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self {
            target,
            best: f64::INFINITY,
        }
    }

    /// Returns the lowest objective observed so far.
    ///
    /// Returns `f64::INFINITY` before the first event.
    #[must_use]
    pub fn best(&self) -> f64 {
        self.best
    }
}

impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for ObjectiveTarget {
    fn observe(&mut self, event: &E) -> Option<A> {
        let objective = event.objective();
        self.best = self.best.min(objective);
        (objective <= self.target).then(A::stop_early)
    }
}

/// Allows `&mut ObjectiveTarget` to be passed to solvers that take an
/// observer by value, so its state can be inspected after the solve.
impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for &mut ObjectiveTarget {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
