use cvxlab_core::Vector;

use super::bracket::GoldenBracket;

/// Which end of the bracket to discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Shrink {
    /// Keep `[low, inner_high]`; the new point to evaluate is `inner_low`.
    High,

    /// Keep `[inner_low, high]`; the new point to evaluate is `inner_high`.
    Low,
}

/// Narrowing state: the bracket plus objective values at its interior points.
///
/// Values are carried across shrinks so that each step needs exactly one new
/// evaluation. Between [`State::shrink`] and [`State::record`] the value of
/// the new interior point is stale.
pub(super) struct State<X> {
    bracket: GoldenBracket<X>,
    inner_low_value: f64,
    inner_high_value: f64,
}

impl<X: Vector> State<X> {
    pub(super) fn new(bracket: GoldenBracket<X>, inner_low_value: f64, inner_high_value: f64) -> Self {
        Self {
            bracket,
            inner_low_value,
            inner_high_value,
        }
    }

    pub(super) fn bracket(&self) -> &GoldenBracket<X> {
        &self.bracket
    }

    /// Pure query: which end of the bracket to discard next.
    pub(super) fn next_shrink(&self) -> Shrink {
        if self.inner_low_value < self.inner_high_value {
            Shrink::High
        } else {
            Shrink::Low
        }
    }

    /// Shrinks the bracket, reusing the retained interior value.
    pub(super) fn shrink(&mut self, shrink: Shrink) {
        match shrink {
            Shrink::High => {
                self.bracket.shrink_high();
                self.inner_high_value = self.inner_low_value;
            }
            Shrink::Low => {
                self.bracket.shrink_low();
                self.inner_low_value = self.inner_high_value;
            }
        }
    }

    /// Returns the interior point created by the last shrink.
    pub(super) fn pending(&self, shrink: Shrink) -> &X {
        match shrink {
            Shrink::High => &self.bracket.inner_low,
            Shrink::Low => &self.bracket.inner_high,
        }
    }

    /// Records the objective at the interior point created by the last shrink.
    pub(super) fn record(&mut self, shrink: Shrink, value: f64) {
        match shrink {
            Shrink::High => self.inner_low_value = value,
            Shrink::Low => self.inner_high_value = value,
        }
    }
}
