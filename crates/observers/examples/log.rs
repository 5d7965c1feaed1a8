//! Logged line searches on the reference objectives and a least-squares problem.
//!
//! Each mode runs a few steepest-descent steps, where every step is a golden
//! section line search along the negative gradient, and logs every
//! evaluation through [`LogObserver`].
//!
//! # Usage
//!
//! ```text
//! cargo run --example log -- quadratic
//! cargo run --example log -- nonquadratic
//! cargo run --example log -- least-squares
//! RUST_LOG=info cargo run --example log -- quadratic
//! ```

use std::error::Error;

use cvxlab_core::{Objective, Vector};
use cvxlab_observers::{EvaluationBudget, LogObserver};
use cvxlab_solvers::{
    least_squares::QuadraticForm,
    line_search::golden_section::{self, Config},
    objectives::{NonQuadraticR2, QuadraticR2},
};
use nalgebra::{DVector, dmatrix};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

const STEPS: usize = 5;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(Level::DEBUG.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .init();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "quadratic".into());
    match mode.as_str() {
        "quadratic" => {
            let f = QuadraticR2::new(10.0);
            descend("quadratic", &f, [10.0, 1.0], |x| Ok(f.gradient(x)))
        }
        "nonquadratic" => {
            let f = NonQuadraticR2;
            descend("nonquadratic", &f, [-1.0, 0.5], |x| Ok(f.gradient(x)))
        }
        "least-squares" => least_squares(),
        other => Err(format!("unknown mode `{other}`").into()),
    }
}

/// Runs a few steepest-descent steps and logs each line search.
fn descend<X, O>(
    name: &'static str,
    objective: &O,
    start: X,
    gradient: impl Fn(&X) -> Result<X, Box<dyn Error>>,
) -> Result<(), Box<dyn Error>>
where
    X: Vector + std::fmt::Debug,
    O: Objective<X>,
{
    let config = Config::default();
    let mut x = start;

    for step in 0..STEPS {
        let direction = gradient(&x)?.scale(-1.0);
        if direction.norm() <= config.precision() {
            break;
        }

        let solution =
            golden_section::search(objective, &x, &direction, &config, LogObserver::new(name))?;
        let value = objective.value(&solution.point)?;
        info!(
            step,
            t = solution.step,
            evaluations = solution.evaluations,
            value,
            "{name}: moved to {:?}",
            solution.point
        );
        x = solution.point;
    }

    Ok(())
}

/// Minimizes a small least-squares problem by descent, then compares with
/// the SVD solution. The first line search is capped by an evaluation budget.
fn least_squares() -> Result<(), Box<dyn Error>> {
    let form = QuadraticForm::new(
        dmatrix![1.0, 2.0; 3.0, 4.0; 3.0, 5.0; -1.0, 0.5],
        &[6.0, 7.0, 8.0, 0.0],
    )?;
    let start = DVector::from_vec(vec![0.0, 0.0]);

    let direction = form.gradient(&start)?.scale(-1.0);
    let capped = golden_section::search(
        &form,
        &start,
        &direction,
        &Config::default(),
        EvaluationBudget::new(8),
    )?;
    info!(status = ?capped.status, evaluations = capped.evaluations, "budgeted search");

    descend("least-squares", &form, start, |x| Ok(form.gradient(x)?))?;

    let report = form.solve_minimum()?;
    info!(
        rank = report.rank,
        residual = ?report.residual,
        "svd minimizer {:?}",
        report.minimizer.as_slice()
    );

    Ok(())
}
