use thiserror::Error;

/// Errors that can occur when building or evaluating a [`QuadraticForm`].
///
/// [`QuadraticForm`]: super::QuadraticForm
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("A has {a} rows but b has {b} components")]
    IncompatibleTarget { a: usize, b: usize },

    #[error("A must have at least one row and one column")]
    EmptyMatrix,

    #[error("A and b must be finite")]
    NonFinite,

    /// The point does not have one component per column of `A`.
    ///
    /// Both shapes are reported as `(rows, cols)`, with the point already
    /// normalized to a column.
    #[error("shape mismatch, A: {a:?}, x: {x:?}")]
    ShapeMismatch {
        a: (usize, usize),
        x: (usize, usize),
    },

    #[error("least-squares solve failed: {0}")]
    Solve(&'static str),
}
