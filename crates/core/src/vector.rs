use nalgebra::DVector;

/// A point in R^N that solvers can move along a search direction.
///
/// Implementors only expose their components as a contiguous slice; stepping,
/// scaling, and norms are derived from that view. This lets the same solver
/// run on a plain `f64`, a fixed-size array, or a dynamically sized vector.
pub trait Vector: Clone {
    /// Returns the components as a slice.
    fn as_slice(&self) -> &[f64];

    /// Returns the components as a mutable slice.
    fn as_mut_slice(&mut self) -> &mut [f64];

    /// Returns `self + t * direction`.
    ///
    /// Components beyond the shorter of the two vectors are left unchanged,
    /// so callers are expected to check dimensions first.
    #[must_use]
    fn step(&self, direction: &Self, t: f64) -> Self {
        let mut next = self.clone();
        for (x, d) in next.as_mut_slice().iter_mut().zip(direction.as_slice()) {
            *x += t * d;
        }
        next
    }

    /// Returns `factor * self`.
    #[must_use]
    fn scale(&self, factor: f64) -> Self {
        let mut scaled = self.clone();
        for x in scaled.as_mut_slice() {
            *x *= factor;
        }
        scaled
    }

    /// Returns the Euclidean norm.
    fn norm(&self) -> f64 {
        self.as_slice().iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Returns the number of components.
    fn dim(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns true if every component is finite.
    fn is_finite(&self) -> bool {
        self.as_slice().iter().copied().all(f64::is_finite)
    }
}

impl Vector for f64 {
    fn as_slice(&self) -> &[f64] {
        std::slice::from_ref(self)
    }

    fn as_mut_slice(&mut self) -> &mut [f64] {
        std::slice::from_mut(self)
    }
}

impl<const N: usize> Vector for [f64; N] {
    fn as_slice(&self) -> &[f64] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [f64] {
        self
    }
}

impl Vector for Vec<f64> {
    fn as_slice(&self) -> &[f64] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [f64] {
        self
    }
}

impl Vector for DVector<f64> {
    fn as_slice(&self) -> &[f64] {
        nalgebra::Matrix::as_slice(self)
    }

    fn as_mut_slice(&mut self) -> &mut [f64] {
        nalgebra::Matrix::as_mut_slice(self)
    }
}
