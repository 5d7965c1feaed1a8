use std::cell::Cell;

use super::Objective;

/// Adapter that counts how many times the wrapped objective is evaluated.
///
/// Every call to [`Objective::value`] increments the count, including calls
/// that return an error.
#[derive(Debug, Default)]
pub struct Counted<O> {
    inner: O,
    evaluations: Cell<usize>,
}

impl<O> Counted<O> {
    /// Wraps an objective with a zeroed counter.
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            evaluations: Cell::new(0),
        }
    }

    /// Returns the number of evaluations so far.
    #[must_use]
    pub fn evaluations(&self) -> usize {
        self.evaluations.get()
    }

    /// Resets the counter to zero.
    pub fn reset(&self) {
        self.evaluations.set(0);
    }

    /// Returns a reference to the wrapped objective.
    pub fn inner(&self) -> &O {
        &self.inner
    }

    /// Unwraps the adapter, discarding the count.
    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<X, O> Objective<X> for Counted<O>
where
    O: Objective<X>,
{
    type Error = O::Error;

    fn value(&self, x: &X) -> Result<f64, Self::Error> {
        self.evaluations.set(self.evaluations.get() + 1);
        self.inner.value(x)
    }
}
