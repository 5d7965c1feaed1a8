use cvxlab_core::Objective;
use nalgebra::{DMatrix, DVector};

use super::{AsColumn, Error, MinimizationReport};

/// A least-squares problem instance, `f(x) = ‖A·x − b‖²`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticForm {
    a: DMatrix<f64>,
    b: DVector<f64>,
}

impl QuadraticForm {
    /// Creates a form from `A` and a target `b`.
    ///
    /// `b` is normalized to a column the same way query points are.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyMatrix`] if `A` has no rows or no columns,
    /// [`Error::IncompatibleTarget`] if `b` does not have one component per
    /// row of `A`, and [`Error::NonFinite`] if `A` or `b` holds a NaN or an
    /// infinity.
    pub fn new<B>(a: DMatrix<f64>, b: &B) -> Result<Self, Error>
    where
        B: AsColumn + ?Sized,
    {
        if a.is_empty() {
            return Err(Error::EmptyMatrix);
        }

        let b = b.to_column();
        if b.len() != a.nrows() {
            return Err(Error::IncompatibleTarget {
                a: a.nrows(),
                b: b.len(),
            });
        }

        if !a.iter().chain(b.iter()).copied().all(f64::is_finite) {
            return Err(Error::NonFinite);
        }

        Ok(Self { a, b })
    }

    /// Returns the matrix `A`.
    pub fn a(&self) -> &DMatrix<f64> {
        &self.a
    }

    /// Returns the target `b` as a column.
    pub fn b(&self) -> &DVector<f64> {
        &self.b
    }

    /// Returns the shape of `A` as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.a.shape()
    }

    /// Flattens any supported input into a column vector.
    ///
    /// No length check happens here; see [`validate`](Self::validate).
    pub fn normalize<X>(x: &X) -> DVector<f64>
    where
        X: AsColumn + ?Sized,
    {
        x.to_column()
    }

    /// Checks that a normalized point has one component per column of `A`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] carrying both shapes otherwise.
    pub fn validate(&self, x: &DVector<f64>) -> Result<(), Error> {
        if x.len() == self.a.ncols() {
            Ok(())
        } else {
            Err(Error::ShapeMismatch {
                a: self.a.shape(),
                x: x.shape(),
            })
        }
    }

    /// Returns `‖A·x − b‖²`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `x` has the wrong length.
    pub fn evaluate<X>(&self, x: &X) -> Result<f64, Error>
    where
        X: AsColumn + ?Sized,
    {
        let x = Self::normalize(x);
        self.validate(&x)?;
        Ok(self.residual(&x).norm_squared())
    }

    /// Returns the gradient `2·Aᵀ(A·x − b)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `x` has the wrong length.
    pub fn gradient<X>(&self, x: &X) -> Result<DVector<f64>, Error>
    where
        X: AsColumn + ?Sized,
    {
        let x = Self::normalize(x);
        self.validate(&x)?;
        Ok(self.a.tr_mul(&self.residual(&x)) * 2.0)
    }

    /// Finds a minimizer of `‖A·x − b‖²` through the SVD of `A`.
    ///
    /// Singular values at or below `ε · max(m, n) · σ_max` are treated as
    /// zero, which fixes the reported rank and yields the minimum-norm
    /// minimizer when `A` is rank deficient.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Solve`] if the decomposition does not converge or
    /// cannot be used to solve.
    #[allow(clippy::cast_precision_loss)]
    pub fn solve_minimum(&self) -> Result<MinimizationReport, Error> {
        let (m, n) = self.a.shape();
        // A zero iteration cap lets the decomposition run until convergence.
        let svd = self
            .a
            .clone()
            .try_svd(true, true, f64::EPSILON, 0)
            .ok_or(Error::Solve("singular value decomposition did not converge"))?;

        let cutoff = f64::EPSILON * m.max(n) as f64 * svd.singular_values.max();
        let minimizer = svd.solve(&self.b, cutoff).map_err(Error::Solve)?;
        let rank = svd.rank(cutoff);

        let residual = (rank == n && m > n).then(|| self.residual(&minimizer).norm_squared());

        Ok(MinimizationReport {
            minimizer,
            residual,
            rank,
            singular_values: svd.singular_values,
        })
    }

    fn residual(&self, x: &DVector<f64>) -> DVector<f64> {
        &self.a * x - &self.b
    }
}

impl<X: AsColumn> Objective<X> for QuadraticForm {
    type Error = Error;

    fn value(&self, x: &X) -> Result<f64, Self::Error> {
        self.evaluate(x)
    }
}
