use nalgebra::{DMatrix, DVector, RowDVector};

/// Converts a caller's point into the canonical column representation.
///
/// Matrices of any shape are flattened in row-major order, so a 1×n row and
/// an n×1 column describe the same point.
pub trait AsColumn {
    /// Returns the components as a column vector.
    fn to_column(&self) -> DVector<f64>;
}

impl AsColumn for [f64] {
    fn to_column(&self) -> DVector<f64> {
        DVector::from_column_slice(self)
    }
}

impl<const N: usize> AsColumn for [f64; N] {
    fn to_column(&self) -> DVector<f64> {
        self.as_slice().to_column()
    }
}

impl AsColumn for Vec<f64> {
    fn to_column(&self) -> DVector<f64> {
        self.as_slice().to_column()
    }
}

impl AsColumn for f64 {
    fn to_column(&self) -> DVector<f64> {
        DVector::from_element(1, *self)
    }
}

impl AsColumn for DVector<f64> {
    fn to_column(&self) -> DVector<f64> {
        self.clone()
    }
}

impl AsColumn for RowDVector<f64> {
    fn to_column(&self) -> DVector<f64> {
        self.transpose()
    }
}

impl AsColumn for DMatrix<f64> {
    fn to_column(&self) -> DVector<f64> {
        // nalgebra stores columns contiguously, so walk the transpose.
        DVector::from_iterator(self.len(), self.transpose().iter().copied())
    }
}
