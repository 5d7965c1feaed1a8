/// Events emitted by the golden section line search.
///
/// One event is emitted per objective evaluation, except for the value at the
/// start point, which is evaluated once up front and carried in every
/// [`Event::Expanded`] as `start_objective`.
#[derive(Debug)]
pub enum Event<'a, X> {
    /// A trial point was evaluated while bracketing the minimum.
    ///
    /// The trial lies at `start + t * direction`. Bracketing succeeds on the
    /// first trial whose objective exceeds `start_objective`.
    Expanded {
        /// The step multiplier of the trial point.
        t: f64,

        /// The trial point.
        point: &'a X,

        /// The objective at the trial point.
        objective: f64,

        /// The objective at the start point.
        start_objective: f64,
    },

    /// An interior point was evaluated while narrowing the bracket.
    Narrowed {
        /// The interior point.
        point: &'a X,

        /// The objective at the interior point.
        objective: f64,

        /// Norm of the width of the bracket containing `point`.
        width: f64,
    },
}

impl<X> Event<'_, X> {
    /// Returns the evaluated point.
    #[must_use]
    pub fn point(&self) -> &X {
        match self {
            Self::Expanded { point, .. } | Self::Narrowed { point, .. } => point,
        }
    }

    /// Returns the objective at the evaluated point.
    #[must_use]
    pub fn objective(&self) -> f64 {
        match self {
            Self::Expanded { objective, .. } | Self::Narrowed { objective, .. } => *objective,
        }
    }
}
