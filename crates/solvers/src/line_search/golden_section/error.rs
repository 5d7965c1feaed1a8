use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during a golden section line search.
#[derive(Debug, Error)]
pub enum Error {
    /// Doubling the step never produced a value above the start value.
    #[error(
        "failed to bracket a minimum after {attempts} attempts; check that the \
         objective is convex, and the start point and search direction"
    )]
    BracketingFailed { attempts: usize },

    #[error("start has {start} components but direction has {direction}")]
    DimensionMismatch { start: usize, direction: usize },

    #[error("start and direction must be finite")]
    NonFinite,

    #[error("direction must be nonzero")]
    ZeroDirection,

    #[error("objective error: {0}")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn objective<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Objective(Box::new(err))
    }
}
