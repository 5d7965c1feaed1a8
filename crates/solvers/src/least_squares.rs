//! Least-squares problems: evaluating and minimizing `‖A·x − b‖²`.
//!
//! A [`QuadraticForm`] holds a dense `A` (m×n) and target `b` (length m).
//! Query points are accepted in many shapes through [`AsColumn`]: every
//! input is first flattened to a single column, then checked against the
//! column count of `A`. Keeping the two steps apart means a malformed input
//! always fails with the same [`Error::ShapeMismatch`], whatever container
//! it arrived in.
//!
//! Minimization goes through a dense SVD of `A`. Rank-deficient and
//! underdetermined systems return the minimum-norm minimizer.
//!
//! # Example
//!
//! ```
//! use cvxlab_solvers::least_squares::QuadraticForm;
//! use nalgebra::dmatrix;
//!
//! let form = QuadraticForm::new(dmatrix![1.0, 2.0; 3.0, 4.0], &[6.0, 7.0]).unwrap();
//!
//! assert_eq!(form.evaluate(&[1.0, 1.0]).unwrap(), 9.0);
//!
//! let report = form.solve_minimum().unwrap();
//! assert_eq!(report.rank, 2);
//! ```

mod column;
mod error;
mod form;
mod report;

#[cfg(test)]
mod tests;

pub use column::AsColumn;
pub use error::Error;
pub use form::QuadraticForm;
pub use report::MinimizationReport;
