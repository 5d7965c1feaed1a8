use cvxlab_core::Vector;

/// The golden ratio: φ = (1 + √5) / 2
const PHI: f64 = 1.618_033_988_749_895;

/// The inverse golden ratio: 1/φ
///
/// This equals φ - 1 due to the golden ratio's unique property.
pub(super) const INV_PHI: f64 = PHI - 1.0;

/// The inverse golden ratio squared: 1/φ² = 1 - 1/φ
pub(super) const INV_PHI_SQ: f64 = 1.0 - INV_PHI;

/// Golden section search bracket along a ray.
///
/// Maintains the outer interval [low, high] and two interior points
/// positioned according to the golden ratio. Points are vectors, so the
/// width is a vector too and convergence is measured by its norm.
#[derive(Debug, Clone)]
pub(super) struct GoldenBracket<X> {
    /// Outer bound nearest the start of the ray.
    pub(super) low: X,

    /// Outer bound furthest along the ray.
    pub(super) high: X,

    /// The width `high - low`.
    ///
    /// Carried forward and scaled by φ⁻¹ on each shrink, rather than
    /// recomputed from the bounds, so it shrinks by exactly φ⁻¹ per step.
    pub(super) width: X,

    /// Inner point at `low + φ⁻² * width`.
    pub(super) inner_low: X,

    /// Inner point at `low + φ⁻¹ * width`.
    pub(super) inner_high: X,
}

impl<X: Vector> GoldenBracket<X> {
    /// Creates a bracket from its bounds with interior points positioned by
    /// the golden ratio.
    pub(super) fn new(low: X, high: X) -> Self {
        let width = high.step(&low, -1.0);
        let inner_low = low.step(&width, INV_PHI_SQ);
        let inner_high = low.step(&width, INV_PHI);
        Self {
            low,
            high,
            width,
            inner_low,
            inner_high,
        }
    }

    /// Returns the norm of the bracket width.
    pub(super) fn width_norm(&self) -> f64 {
        self.width.norm()
    }

    /// Returns true once the bracket is no wider than `precision`.
    pub(super) fn is_converged(&self, precision: f64) -> bool {
        self.width_norm() <= precision
    }

    /// Returns `(low + high) / 2`.
    pub(super) fn midpoint(&self) -> X {
        self.low.step(&self.high, 1.0).scale(0.5)
    }

    /// Shrinks the bounds to `[low, inner_high]` and computes a new `inner_low`.
    ///
    /// The old `inner_low` becomes the new `inner_high`.
    pub(super) fn shrink_high(&mut self) {
        self.width = self.width.scale(INV_PHI);
        let reused = self.inner_low.clone();
        self.high = std::mem::replace(&mut self.inner_high, reused);
        self.inner_low = self.low.step(&self.width, INV_PHI_SQ);
    }

    /// Shrinks the bounds to `[inner_low, high]` and computes a new `inner_high`.
    ///
    /// The old `inner_high` becomes the new `inner_low`.
    pub(super) fn shrink_low(&mut self) {
        self.width = self.width.scale(INV_PHI);
        let reused = self.inner_high.clone();
        self.low = std::mem::replace(&mut self.inner_low, reused);
        self.inner_high = self.low.step(&self.width, INV_PHI);
    }
}
