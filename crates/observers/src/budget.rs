use cvxlab_core::Observer;

use crate::traits::CanStopEarly;

/// Stops a solver once it has emitted a fixed number of events.
///
/// Line searches emit one event per objective evaluation after the start
/// value, so this caps the evaluation count of an expensive objective. The
/// solver still returns a usable point from its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationBudget {
    limit: usize,
    seen: usize,
}

impl EvaluationBudget {
    /// Creates a budget that stops the solver on event number `limit`.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { limit, seen: 0 }
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Returns the events left before the budget stops the solver.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.seen)
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for EvaluationBudget {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.seen += 1;
        (self.seen >= self.limit).then(A::stop_early)
    }
}

/// Allows `&mut EvaluationBudget` to be passed to solvers that take an
/// observer by value, so its state can be inspected after the solve.
impl<E, A: CanStopEarly> Observer<E, A> for &mut EvaluationBudget {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
