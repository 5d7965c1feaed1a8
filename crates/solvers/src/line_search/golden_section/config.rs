use thiserror::Error;

/// Configuration for the golden section line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    precision: f64,
    max_doublings: usize,
}

/// Errors that can occur when validating a line search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("precision must be finite and positive")]
    Precision,

    #[error("max_doublings must be at least 1")]
    MaxDoublings,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-6, 64).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `precision` bounds the norm of the final bracket width, and
    /// `max_doublings` bounds how many times the trial step may be tried
    /// (doubling after each miss) while bracketing a minimum.
    ///
    /// # Errors
    ///
    /// Returns an error if `precision` is not finite and positive, or if
    /// `max_doublings` is zero.
    pub fn new(precision: f64, max_doublings: usize) -> Result<Self, ConfigError> {
        if !precision.is_finite() || precision <= 0.0 {
            return Err(ConfigError::Precision);
        }
        if max_doublings == 0 {
            return Err(ConfigError::MaxDoublings);
        }

        Ok(Self {
            precision,
            max_doublings,
        })
    }

    /// Creates a config with the given precision and the default bracketing budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `precision` is not finite and positive.
    pub fn with_precision(precision: f64) -> Result<Self, ConfigError> {
        Self::new(precision, Self::default().max_doublings)
    }

    /// Returns the target norm of the final bracket width.
    #[must_use]
    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Returns the maximum number of bracketing attempts.
    #[must_use]
    pub fn max_doublings(&self) -> usize {
        self.max_doublings
    }
}
