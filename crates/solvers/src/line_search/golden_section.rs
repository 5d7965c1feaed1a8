//! Golden section line search along a ray.
//!
//! # Algorithm
//!
//! Given an objective `f`, a start point `x` and a search direction `d`, the
//! search locates a minimizer of `f(x + t·d)` for `t ≥ 0` in two phases:
//!
//! 1. **Bracketing.** Trial points `x + t·d` are evaluated for
//!    `t = 1, 2, 4, ...` until one has a strictly larger objective than the
//!    start, giving a bracket `[x, x + t·d]`. The budget is
//!    [`Config::max_doublings`] attempts.
//! 2. **Narrowing.** Two interior points are placed at fractions φ⁻² and φ⁻¹
//!    of the bracket. Comparing their objectives discards one end, shrinking
//!    the bracket by exactly φ⁻¹ while keeping one interior point (and its
//!    value) for the next step. The search stops once the norm of the bracket
//!    width is at most [`Config::precision`] and returns the midpoint.
//!
//! Points may live in R^N (see [`Vector`]), so widths are compared by
//! Euclidean norm even though the search runs along a single ray.
//!
//! # Assumptions
//!
//! - The objective is unimodal along the ray. This is not checked; other
//!   objectives give deterministic but meaningless results.
//! - The direction points downhill from the start. An uphill direction
//!   brackets immediately and the search converges back toward the start.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per evaluation, except the start value:
//!
//! - [`Event::Expanded`]: a trial point while bracketing
//! - [`Event::Narrowed`]: an interior point while narrowing
//!
//! Observers can return [`Action::StopEarly`] to halt and receive the
//! midpoint of the current bracket.
//!
//! [`Vector`]: cvxlab_core::Vector

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod expand;
mod search;
mod solution;
mod state;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use cvxlab_core::{Objective, Observer, Vector};

/// Finds the minimum of `objective` along `start + t * direction`, `t ≥ 0`.
///
/// The observer receives an [`Event`] for each evaluation after the start.
/// See the [module docs](self) for details.
///
/// # Errors
///
/// Returns [`Error::BracketingFailed`] if no bracket is found within the
/// budget, an input error if the ray is degenerate, or [`Error::Objective`]
/// if the objective fails.
pub fn search<X, O, Obs>(
    objective: &O,
    start: &X,
    direction: &X,
    config: &Config,
    observer: Obs,
) -> Result<Solution<X>, Error>
where
    X: Vector,
    O: Objective<X>,
    Obs: for<'a> Observer<Event<'a, X>, Action>,
{
    search::search(objective, start, direction, config, observer)
}

/// Finds the minimum along a ray without observer support.
///
/// This is a convenience wrapper around [`search`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`search`].
pub fn search_unobserved<X, O>(
    objective: &O,
    start: &X,
    direction: &X,
    config: &Config,
) -> Result<Solution<X>, Error>
where
    X: Vector,
    O: Objective<X>,
{
    search(objective, start, direction, config, ())
}
