use crate::{Objective, Vector};

/// Relative size of the central-difference perturbation.
const RELATIVE_DELTA: f64 = 1e-6;

/// Approximates the gradient of `objective` at `x` using central differences.
///
/// Each component is perturbed by `δ = 1e-6 · ‖x‖` (or `1e-6` at the origin):
///
/// ```text
/// g_i = (f(x + δ·e_i) - f(x - δ·e_i)) / (2δ)
/// ```
///
/// This costs `2N` objective evaluations. The negated result is the steepest
/// descent direction, which is the usual way to seed a line search.
///
/// # Errors
///
/// Returns the objective's error if any perturbed evaluation fails.
pub fn central_difference<X, O>(objective: &O, x: &X) -> Result<X, O::Error>
where
    X: Vector,
    O: Objective<X>,
{
    let norm = x.norm();
    let delta = if norm == 0.0 {
        RELATIVE_DELTA
    } else {
        RELATIVE_DELTA * norm
    };

    let mut gradient = x.clone();
    let mut shifted = x.clone();

    for i in 0..x.dim() {
        let xi = x.as_slice()[i];

        shifted.as_mut_slice()[i] = xi + delta;
        let forward = objective.value(&shifted)?;

        shifted.as_mut_slice()[i] = xi - delta;
        let backward = objective.value(&shifted)?;

        shifted.as_mut_slice()[i] = xi;
        gradient.as_mut_slice()[i] = (forward - backward) / (2.0 * delta);
    }

    Ok(gradient)
}
