use cvxlab_core::Vector;

/// Indicates how the line search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket width reached the configured precision.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a golden section line search.
#[derive(Debug, Clone)]
pub struct Solution<X> {
    /// Final solver status.
    pub status: Status,

    /// The located minimizer along the ray.
    pub point: X,

    /// The step `t` such that `point ≈ start + t * direction`.
    pub step: f64,

    /// Objective evaluations consumed, including those spent bracketing.
    pub evaluations: usize,

    /// Number of bracket shrinks performed while narrowing.
    pub iters: usize,
}

impl<X: Vector> Solution<X> {
    pub(super) fn new(
        status: Status,
        point: X,
        start: &X,
        direction: &X,
        evaluations: usize,
        iters: usize,
    ) -> Self {
        let step = recover_step(start, direction, &point);
        Self {
            status,
            point,
            step,
            evaluations,
            iters,
        }
    }
}

/// Recovers the scalar step that maps `start` onto `point` along `direction`.
///
/// Every component should agree on the step, but rounding makes them drift
/// slightly apart, so the per-component ratios are averaged. Components where
/// `direction` is zero carry no information about the step and are skipped.
#[allow(clippy::cast_precision_loss)]
fn recover_step<X: Vector>(start: &X, direction: &X, point: &X) -> f64 {
    let (sum, count) = point
        .as_slice()
        .iter()
        .zip(start.as_slice())
        .zip(direction.as_slice())
        .filter(|&(_, &d)| d != 0.0)
        .fold((0.0, 0_usize), |(sum, count), ((&p, &s), &d)| {
            (sum + (p - s) / d, count + 1)
        });

    if count == 0 { 0.0 } else { sum / count as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn step_of_scalar_ray() {
        assert_relative_eq!(recover_step(&1.0, &-2.0, &-3.0), 2.0);
    }

    #[test]
    fn step_averages_drifting_components() {
        let start = [0.0, 0.0];
        let direction = [1.0, 2.0];
        let point = [1.5, 3.2];

        // Component steps are 1.5 and 1.6.
        assert_relative_eq!(recover_step(&start, &direction, &point), 1.55);
    }

    #[test]
    fn step_skips_zero_direction_components() {
        let start = [1.0, 5.0, 2.0];
        let direction = [0.0, -1.0, 0.0];
        let point = [1.0, 2.0, 2.0];

        assert_relative_eq!(recover_step(&start, &direction, &point), 3.0);
    }

    #[test]
    fn solution_records_recovered_step() {
        let solution = Solution::new(Status::Converged, [4.0, 2.0], &[0.0, 0.0], &[2.0, 1.0], 7, 3);

        assert_relative_eq!(solution.step, 2.0);
        assert_eq!(solution.evaluations, 7);
        assert_eq!(solution.iters, 3);
    }
}
