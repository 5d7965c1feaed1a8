//! Core traits and types shared by the cvxlab solvers.
//!
//! - [`Objective`]: a scalar function of a point, implemented by closures
//! - [`Vector`]: a point in R^N that can be stepped along a direction
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`Counted`]: an objective adapter that counts evaluations
//! - [`central_difference`]: a numerical gradient for building descent directions

mod gradient;
mod objective;
mod observer;
mod vector;

pub use gradient::central_difference;
pub use objective::{Counted, Objective};
pub use observer::Observer;
pub use vector::Vector;
