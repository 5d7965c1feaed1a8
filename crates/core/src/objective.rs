mod counted;

pub use counted::Counted;

use std::convert::Infallible;

/// A scalar objective over points of type `X`.
///
/// Objectives must be deterministic: evaluating the same point twice gives
/// the same value. Solvers rely on this to cache values between steps.
///
/// Any closure `Fn(&X) -> f64` is an objective that cannot fail.
pub trait Objective<X> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective is undefined at `x`.
    fn value(&self, x: &X) -> Result<f64, Self::Error>;
}

impl<X, F> Objective<X> for F
where
    F: Fn(&X) -> f64,
{
    type Error = Infallible;

    fn value(&self, x: &X) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}
