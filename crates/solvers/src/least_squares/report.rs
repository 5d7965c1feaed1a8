use nalgebra::DVector;

/// The result of minimizing a least-squares problem.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimizationReport {
    /// A minimizer of `‖A·x − b‖²`, of minimum norm when it is not unique.
    pub minimizer: DVector<f64>,

    /// The squared residual `‖A·x* − b‖²`.
    ///
    /// Only reported when `A` has full column rank and more rows than
    /// columns. Square and underdetermined systems give `None`.
    pub residual: Option<f64>,

    /// The numerical rank of `A`.
    pub rank: usize,

    /// Singular values of `A`, largest first.
    pub singular_values: DVector<f64>,
}
