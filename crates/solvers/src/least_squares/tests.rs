use approx::{assert_abs_diff_eq, assert_relative_eq};
use cvxlab_core::central_difference;
use nalgebra::{DMatrix, DVector, RowDVector, dmatrix, dvector};
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{Error, QuadraticForm};

fn random_form(rng: &mut StdRng, rows: usize, cols: usize) -> QuadraticForm {
    let a = DMatrix::from_fn(rows, cols, |_, _| rng.random_range(-1.0..1.0));
    let b = DVector::<f64>::from_fn(rows, |_, _| rng.random_range(-1.0..1.0));
    QuadraticForm::new(a, &b).expect("shapes agree")
}

#[test]
fn evaluates_squared_residual() {
    let form = QuadraticForm::new(dmatrix![1.0, 2.0; 3.0, 4.0], &[6.0, 7.0]).unwrap();

    assert_relative_eq!(form.evaluate(&[1.0, 1.0]).unwrap(), 9.0);
    assert_relative_eq!(form.evaluate(&[-5.0, 5.5]).unwrap(), 0.0);
}

#[test]
fn every_container_gives_same_value() {
    let mut rng = StdRng::seed_from_u64(7);
    let form = random_form(&mut rng, 10, 2);
    let (x0, x1) = (0.3, -1.2);

    let expected = form.evaluate(&[x0, x1]).unwrap();

    assert_eq!(form.evaluate(&vec![x0, x1]).unwrap(), expected);
    assert_eq!(form.evaluate(&[x0, x1][..]).unwrap(), expected);
    assert_eq!(form.evaluate(&dvector![x0, x1]).unwrap(), expected);
    assert_eq!(form.evaluate(&dmatrix![x0; x1]).unwrap(), expected);
    assert_eq!(form.evaluate(&dmatrix![x0, x1]).unwrap(), expected);
    assert_eq!(form.evaluate(&RowDVector::from_row_slice(&[x0, x1])).unwrap(), expected);
}

#[test]
fn wrong_length_reports_both_shapes() {
    let mut rng = StdRng::seed_from_u64(11);
    let form = random_form(&mut rng, 10, 2);

    let err = form.evaluate(&[1.0, 2.0, 3.0]).unwrap_err();

    assert_eq!(err, Error::ShapeMismatch { a: (10, 2), x: (3, 1) });
    assert_eq!(err.to_string(), "shape mismatch, A: (10, 2), x: (3, 1)");
}

#[test]
fn square_form_rejects_short_and_long_inputs() {
    let mut rng = StdRng::seed_from_u64(5);
    let form = random_form(&mut rng, 5, 5);

    assert!(form.evaluate(&[0.0, 1.0, 2.0, 3.0]).is_err());
    assert!(form.evaluate(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).is_err());
    assert!(form.evaluate(&[0.0, 1.0, 2.0, 3.0, 4.0]).is_ok());
}

#[test]
fn normalize_and_validate_are_separate_steps() {
    let form = QuadraticForm::new(dmatrix![1.0, 0.0; 0.0, 1.0], &[0.0, 0.0]).unwrap();

    let column = QuadraticForm::normalize(&dmatrix![1.0, 2.0, 3.0]);

    assert_eq!(column, dvector![1.0, 2.0, 3.0]);
    assert!(matches!(
        form.validate(&column),
        Err(Error::ShapeMismatch { x: (3, 1), .. })
    ));
}

#[test]
fn constructor_checks_shapes() {
    let result = QuadraticForm::new(dmatrix![1.0, 2.0; 3.0, 4.0], &[1.0, 2.0, 3.0]);
    assert_eq!(result, Err(Error::IncompatibleTarget { a: 2, b: 3 }));

    let result = QuadraticForm::new(DMatrix::zeros(0, 2), &Vec::<f64>::new());
    assert_eq!(result, Err(Error::EmptyMatrix));
}

#[test]
fn constructor_rejects_non_finite_entries() {
    let result = QuadraticForm::new(dmatrix![1.0, f64::NAN; 3.0, 4.0], &[6.0, 7.0]);
    assert_eq!(result, Err(Error::NonFinite));

    let result = QuadraticForm::new(dmatrix![1.0, 2.0; 3.0, 4.0], &[6.0, f64::INFINITY]);
    assert_eq!(result, Err(Error::NonFinite));
}

#[test]
fn target_is_normalized_like_points() {
    let from_row = QuadraticForm::new(dmatrix![1.0; 2.0], &dmatrix![3.0, 4.0]).unwrap();

    assert_eq!(from_row.b(), &dvector![3.0, 4.0]);
    assert_eq!(from_row.shape(), (2, 1));
}

#[test]
fn norm_properties_hold() {
    let mut rng = StdRng::seed_from_u64(42);
    let form = random_form(&mut rng, 5, 5);

    for _ in 0..5 {
        let x = DVector::<f64>::from_fn(5, |_, _| rng.random_range(-1.0..1.0));
        for _ in 0..5 {
            let a: f64 = rng.random_range(-1.0..1.0);
            let value = form.evaluate(&x).unwrap();

            // a²‖Ax − b‖² = ‖A(ax) − ab‖²
            let scaled = QuadraticForm::new(form.a().clone(), &(form.b() * a)).unwrap();
            assert_relative_eq!(
                a * a * value,
                scaled.evaluate(&(&x * a)).unwrap(),
                epsilon = 1e-12,
                max_relative = 1e-10
            );

            // Triangle inequality: ‖Ax − b‖ ≤ ‖Ax‖ + ‖b‖
            let bound = ((form.a() * &x).norm() + form.b().norm()).powi(2);
            assert!(value <= bound);

            assert!(value >= 0.0);
        }
    }
}

#[test]
fn zero_form_is_zero_everywhere() {
    let mut rng = StdRng::seed_from_u64(3);
    let form = QuadraticForm::new(DMatrix::zeros(5, 5), &DVector::<f64>::zeros(5)).unwrap();

    let x = DVector::<f64>::from_fn(5, |_, _| rng.random_range(-1.0..1.0));

    assert_abs_diff_eq!(form.evaluate(&x).unwrap(), 0.0);
}

#[test]
fn gradient_matches_central_difference() {
    let mut rng = StdRng::seed_from_u64(19);
    let form = random_form(&mut rng, 8, 3);
    let x = dvector![0.4, -0.9, 1.3];

    let analytic = form.gradient(&x).unwrap();
    let numeric = central_difference(&form, &x).unwrap();

    assert_relative_eq!(analytic, numeric, epsilon = 1e-6);
}

// --- Minimization ---

#[test]
fn solves_determined_system() {
    let form = QuadraticForm::new(dmatrix![1.0, 2.0; 3.0, 4.0], &[6.0, 7.0]).unwrap();

    let report = form.solve_minimum().unwrap();

    assert_relative_eq!(report.minimizer, dvector![-5.0, 5.5], epsilon = 1e-12);
    assert_eq!(report.residual, None);
    assert_eq!(report.rank, 2);
    assert_relative_eq!(
        report.singular_values,
        dvector![5.464_985_7, 0.365_966_19],
        epsilon = 1e-7
    );
}

#[test]
fn solves_overdetermined_system() {
    let form =
        QuadraticForm::new(dmatrix![1.0, 2.0; 3.0, 4.0; 3.0, 5.0], &[6.0, 7.0, 8.0]).unwrap();

    let report = form.solve_minimum().unwrap();

    assert_relative_eq!(
        report.minimizer,
        dvector![-25.0 / 14.0, 41.0 / 14.0],
        epsilon = 1e-12
    );
    let residual = report.residual.expect("full column rank and m > n");
    assert_relative_eq!(residual, 1134.0 / 196.0, epsilon = 1e-12);
    assert_eq!(report.rank, 2);
    assert_relative_eq!(
        report.singular_values,
        dvector![7.986_269_29, 0.468_511_3],
        epsilon = 1e-7
    );
}

#[test]
fn solves_underdetermined_system_with_minimum_norm() {
    let form = QuadraticForm::new(dmatrix![1.0, 2.0], &[6.0]).unwrap();

    let report = form.solve_minimum().unwrap();

    assert_relative_eq!(report.minimizer, dvector![1.2, 2.4], epsilon = 1e-12);
    assert_eq!(report.residual, None);
    assert_eq!(report.rank, 1);
    assert_relative_eq!(report.singular_values, dvector![5.0_f64.sqrt()], epsilon = 1e-12);
}

#[test]
fn singular_values_come_largest_first() {
    let mut rng = StdRng::seed_from_u64(31);
    let form = random_form(&mut rng, 9, 5);

    let report = form.solve_minimum().unwrap();

    assert_eq!(report.singular_values.len(), 5);
    for pair in report.singular_values.as_slice().windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[test]
fn rank_deficient_square_system() {
    let form = QuadraticForm::new(dmatrix![1.0, 2.0; 2.0, 4.0], &[1.0, 2.0]).unwrap();

    let report = form.solve_minimum().unwrap();

    assert_eq!(report.rank, 1);
    assert_eq!(report.residual, None);
    assert_relative_eq!(report.minimizer, dvector![0.2, 0.4], epsilon = 1e-12);
}

#[test]
fn minimizer_beats_nearby_points() {
    let mut rng = StdRng::seed_from_u64(2024);
    let form = random_form(&mut rng, 10, 3);

    let report = form.solve_minimum().unwrap();
    let best = form.evaluate(&report.minimizer).unwrap();

    for _ in 0..20 {
        let nudge = DVector::<f64>::from_fn(3, |_, _| rng.random_range(-1e-3..1e-3));
        let nearby = &report.minimizer + nudge;
        assert!(best <= form.evaluate(&nearby).unwrap());
    }
}

#[test]
fn gradient_vanishes_at_minimizer() {
    let mut rng = StdRng::seed_from_u64(8);
    let form = random_form(&mut rng, 12, 4);

    let report = form.solve_minimum().unwrap();
    let gradient = form.gradient(&report.minimizer).unwrap();

    assert_abs_diff_eq!(gradient.norm(), 0.0, epsilon = 1e-10);
}
