use cvxlab_core::Objective;

/// Evaluates an objective and counts every call it makes.
///
/// Each line search owns one `Evaluator`, so the count covers exactly the
/// evaluations of that call and nothing else.
pub(crate) struct Evaluator<'a, O> {
    objective: &'a O,
    count: usize,
}

impl<'a, O> Evaluator<'a, O> {
    /// Creates an evaluator with a zeroed count.
    pub(crate) fn new(objective: &'a O) -> Self {
        Self {
            objective,
            count: 0,
        }
    }

    /// Evaluates the objective at `x`, counting the call even if it fails.
    ///
    /// # Errors
    ///
    /// Returns the objective's error unchanged.
    pub(crate) fn value<X>(&mut self, x: &X) -> Result<f64, O::Error>
    where
        O: Objective<X>,
    {
        self.count += 1;
        self.objective.value(x)
    }

    /// Returns the number of evaluations made so far.
    pub(crate) fn count(&self) -> usize {
        self.count
    }
}
