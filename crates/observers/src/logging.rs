use cvxlab_core::{Observer, Vector};
use cvxlab_solvers::line_search::golden_section::Event;
use tracing::debug;

/// Forwards every line search evaluation to `tracing` at `DEBUG` level.
///
/// Each event is logged with structured fields (`search`, `phase`,
/// `objective`, `point`, and either `t` or `width`), so a subscriber can
/// filter or format them freely. The observer never requests an action.
///
/// # Example
///
/// ```
/// use cvxlab_observers::LogObserver;
/// use cvxlab_solvers::line_search::golden_section::{self, Config};
///
/// let parabola = |x: &f64| (x - 3.0).powi(2);
/// let observer = LogObserver::new("parabola");
///
/// let solution = golden_section::search(&parabola, &0.0, &1.0, &Config::default(), observer)
///     .unwrap();
/// assert!((solution.point - 3.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    search: &'static str,
}

impl LogObserver {
    /// Creates an observer that tags each record with `search`.
    #[must_use]
    pub fn new(search: &'static str) -> Self {
        Self { search }
    }

    /// Returns the tag attached to each record.
    #[must_use]
    pub fn search(&self) -> &'static str {
        self.search
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new("line_search")
    }
}

impl<X: Vector, A> Observer<Event<'_, X>, A> for LogObserver {
    fn observe(&mut self, event: &Event<'_, X>) -> Option<A> {
        match event {
            Event::Expanded {
                t,
                point,
                objective,
                start_objective,
            } => debug!(
                search = self.search,
                phase = "expand",
                t,
                objective,
                start_objective,
                point = ?point.as_slice(),
                "trial point evaluated"
            ),
            Event::Narrowed {
                point,
                objective,
                width,
            } => debug!(
                search = self.search,
                phase = "narrow",
                width,
                objective,
                point = ?point.as_slice(),
                "interior point evaluated"
            ),
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use cvxlab_solvers::line_search::golden_section::{Config, Status, search, search_unobserved};
    use tracing::Level;

    #[test]
    fn logging_does_not_change_the_result() {
        let objective = |x: &[f64; 2]| (x[0] - 1.0).powi(2) + 4.0 * (x[1] + 0.5).powi(2);
        let start = [0.0, 0.0];
        let direction = [1.0, -1.0];
        let config = Config::default();

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_test_writer()
            .finish();

        let logged = tracing::subscriber::with_default(subscriber, || {
            search(&objective, &start, &direction, &config, LogObserver::new("bowl"))
        })
        .expect("should converge");
        let plain = search_unobserved(&objective, &start, &direction, &config)
            .expect("should converge");

        assert_eq!(logged.status, Status::Converged);
        assert_eq!(logged.evaluations, plain.evaluations);
        assert_relative_eq!(logged.point[0], plain.point[0]);
        assert_relative_eq!(logged.point[1], plain.point[1]);
    }

    #[test]
    fn never_requests_an_action() {
        let mut observer = LogObserver::default();
        let point = 2.0;
        let event = Event::Narrowed {
            point: &point,
            objective: 1.0,
            width: 0.5,
        };

        let action: Option<()> = observer.observe(&event);

        assert_eq!(action, None);
        assert_eq!(observer.search(), "line_search");
    }
}
