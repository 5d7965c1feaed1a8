//! Line search and least-squares routines for convex optimization.
//!
//! - [`line_search::golden_section`]: minimize an objective along a ray
//! - [`least_squares::QuadraticForm`]: evaluate and minimize `‖A·x − b‖²`
//! - [`objectives`]: reference objectives in R² with analytic gradients

pub mod least_squares;
pub mod line_search;
pub mod objectives;
