//! Line searches: minimizing an objective along a ray.
//!
//! A line search takes an [`Objective`], a start point and a search direction,
//! and finds a step along the direction that minimizes the objective.
//!
//! # Solvers
//!
//! - [`golden_section`]: exponential bracketing followed by golden section
//!   narrowing, for objectives that are unimodal along the ray
//!
//! [`Objective`]: cvxlab_core::Objective

mod evaluate;

pub mod golden_section;
