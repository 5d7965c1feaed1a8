//! Reference objectives in R² with analytic gradients.
//!
//! These are the standard test problems for descent methods on the plane:
//! a quadratic whose conditioning is set by one parameter, and a smooth
//! non-quadratic sum of exponentials. Both are strictly convex, so any
//! descent direction gives a unimodal line search.

use std::convert::Infallible;

use cvxlab_core::Objective;

/// `f(x) = ½(x₁² + γ·x₂²)`
///
/// The condition number of the sublevel sets is `max(γ, 1/γ)`, so `γ`
/// controls how hard the problem is for steepest descent. The minimum is
/// `f(0, 0) = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticR2 {
    pub gamma: f64,
}

impl Default for QuadraticR2 {
    fn default() -> Self {
        Self { gamma: 2.0 }
    }
}

impl QuadraticR2 {
    #[must_use]
    pub fn new(gamma: f64) -> Self {
        Self { gamma }
    }

    /// Returns `f(x)`.
    #[must_use]
    pub fn eval(&self, x: &[f64; 2]) -> f64 {
        0.5 * (x[0] * x[0] + self.gamma * x[1] * x[1])
    }

    /// Returns `∇f(x) = (x₁, γ·x₂)`.
    #[must_use]
    pub fn gradient(&self, x: &[f64; 2]) -> [f64; 2] {
        [x[0], self.gamma * x[1]]
    }
}

impl Objective<[f64; 2]> for QuadraticR2 {
    type Error = Infallible;

    fn value(&self, x: &[f64; 2]) -> Result<f64, Self::Error> {
        Ok(self.eval(x))
    }
}

/// `f(x) = e^(x₁ + 3x₂ − 0.1) + e^(x₁ − 3x₂ − 0.1) + e^(−x₁ − 0.1)`
///
/// Minimized at `(−ln(2)/2, 0)` with value `2√2·e^(−0.1)`. Keep inputs
/// moderate, since the terms grow exponentially.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NonQuadraticR2;

impl NonQuadraticR2 {
    fn terms(x: &[f64; 2]) -> [f64; 3] {
        [
            (x[0] + 3.0 * x[1] - 0.1).exp(),
            (x[0] - 3.0 * x[1] - 0.1).exp(),
            (-x[0] - 0.1).exp(),
        ]
    }

    /// Returns `f(x)`.
    #[must_use]
    pub fn eval(&self, x: &[f64; 2]) -> f64 {
        Self::terms(x).iter().sum()
    }

    /// Returns `∇f(x)`.
    #[must_use]
    pub fn gradient(&self, x: &[f64; 2]) -> [f64; 2] {
        let [up, down, left] = Self::terms(x);
        [up + down - left, 3.0 * (up - down)]
    }
}

impl Objective<[f64; 2]> for NonQuadraticR2 {
    type Error = Infallible;

    fn value(&self, x: &[f64; 2]) -> Result<f64, Self::Error> {
        Ok(self.eval(x))
    }
}
