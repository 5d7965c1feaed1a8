use cvxlab_core::{Objective, Observer, Vector};

use crate::line_search::evaluate::Evaluator;

use super::{Action, Config, Error, Event};

/// Outcome of bracketing a minimum along the ray.
pub(super) enum Expansion<X> {
    /// The objective at `high` exceeds the objective at the start point, so a
    /// minimum lies in `[start, high]`.
    Bracketed(X),

    /// The observer stopped the search at trial point `high`.
    StopEarly(X),
}

/// Brackets a minimum by doubling the step along `direction`.
///
/// The start value is evaluated once. Trial points `start + t * direction` are
/// tried for `t = 1, 2, 4, ...` until one has a strictly larger objective,
/// at most `config.max_doublings()` times.
///
/// # Errors
///
/// Returns [`Error::BracketingFailed`] if the budget runs out or a trial point
/// overflows, and [`Error::Objective`] if the objective fails.
pub(super) fn expand<X, O, Obs>(
    evaluator: &mut Evaluator<'_, O>,
    start: &X,
    direction: &X,
    config: &Config,
    observer: &mut Obs,
) -> Result<Expansion<X>, Error>
where
    X: Vector,
    O: Objective<X>,
    Obs: for<'a> Observer<Event<'a, X>, Action>,
{
    let start_objective = evaluator.value(start).map_err(Error::objective)?;

    let mut t = 1.0;
    for attempt in 0..config.max_doublings() {
        let trial = start.step(direction, t);
        if !trial.is_finite() {
            return Err(Error::BracketingFailed { attempts: attempt });
        }

        let objective = evaluator.value(&trial).map_err(Error::objective)?;
        let event = Event::Expanded {
            t,
            point: &trial,
            objective,
            start_objective,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Expansion::StopEarly(trial));
        }

        if objective > start_objective {
            return Ok(Expansion::Bracketed(trial));
        }
        t *= 2.0;
    }

    Err(Error::BracketingFailed {
        attempts: config.max_doublings(),
    })
}
