use cvxlab_core::{Objective, Observer, Vector};

use crate::line_search::evaluate::Evaluator;

use super::{
    Action, Config, Error, Event, Solution,
    bracket::GoldenBracket,
    expand::{Expansion, expand},
    solution::Status,
    state::State,
};

/// Core golden section line search implementation.
///
/// Validates the ray, brackets a minimum by doubling the step, then narrows
/// the bracket with golden section steps until its width is within
/// `config.precision()`.
pub(super) fn search<X, O, Obs>(
    objective: &O,
    start: &X,
    direction: &X,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<X>, Error>
where
    X: Vector,
    O: Objective<X>,
    Obs: for<'a> Observer<Event<'a, X>, Action>,
{
    validate_ray(start, direction)?;

    let mut evaluator = Evaluator::new(objective);
    let finish = |status, bracket: &GoldenBracket<X>, evaluations, iters| {
        Solution::new(status, bracket.midpoint(), start, direction, evaluations, iters)
    };

    let high = match expand(&mut evaluator, start, direction, config, &mut observer)? {
        Expansion::Bracketed(high) => high,
        Expansion::StopEarly(high) => {
            let bracket = GoldenBracket::new(start.clone(), high);
            let evaluations = evaluator.count();
            return Ok(finish(Status::StoppedByObserver, &bracket, evaluations, 0));
        }
    };

    let bracket = GoldenBracket::new(start.clone(), high);
    if bracket.is_converged(config.precision()) {
        return Ok(finish(Status::Converged, &bracket, evaluator.count(), 0));
    }

    // Both interior points are new; every later step reuses one of them.
    let width = bracket.width_norm();
    let mut values = [0.0; 2];
    for (value, point) in values.iter_mut().zip([&bracket.inner_low, &bracket.inner_high]) {
        match eval_and_observe(&mut evaluator, point, width, &mut observer)? {
            Some(v) => *value = v,
            None => {
                let evaluations = evaluator.count();
                return Ok(finish(Status::StoppedByObserver, &bracket, evaluations, 0));
            }
        }
    }

    let mut state = State::new(bracket, values[0], values[1]);
    let mut iters = 0;
    loop {
        let shrink = state.next_shrink();
        state.shrink(shrink);
        iters += 1;

        let bracket = state.bracket();
        if bracket.is_converged(config.precision()) {
            return Ok(finish(Status::Converged, bracket, evaluator.count(), iters));
        }

        let width = bracket.width_norm();
        match eval_and_observe(&mut evaluator, state.pending(shrink), width, &mut observer)? {
            Some(value) => state.record(shrink, value),
            None => {
                let evaluations = evaluator.count();
                let bracket = state.bracket();
                return Ok(finish(Status::StoppedByObserver, bracket, evaluations, iters));
            }
        }
    }
}

/// Checks that `start` and `direction` describe a usable ray.
fn validate_ray<X: Vector>(start: &X, direction: &X) -> Result<(), Error> {
    if start.dim() != direction.dim() {
        return Err(Error::DimensionMismatch {
            start: start.dim(),
            direction: direction.dim(),
        });
    }
    if !start.is_finite() || !direction.is_finite() {
        return Err(Error::NonFinite);
    }
    if direction.as_slice().iter().all(|&d| d == 0.0) {
        return Err(Error::ZeroDirection);
    }
    Ok(())
}

/// Evaluates an interior point and emits an event.
///
/// Returns `None` if the observer asked to stop.
fn eval_and_observe<X, O, Obs>(
    evaluator: &mut Evaluator<'_, O>,
    point: &X,
    width: f64,
    observer: &mut Obs,
) -> Result<Option<f64>, Error>
where
    X: Vector,
    O: Objective<X>,
    Obs: for<'a> Observer<Event<'a, X>, Action>,
{
    let objective = evaluator.value(point).map_err(Error::objective)?;
    let event = Event::Narrowed {
        point,
        objective,
        width,
    };
    match observer.observe(&event) {
        Some(Action::StopEarly) => Ok(None),
        None => Ok(Some(objective)),
    }
}
