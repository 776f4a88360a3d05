use ndarray::Array1;
use sfu_testfunctions::*;

#[test]
#[should_panic]
fn test_eggholder_rejects_short_vector() {
    // 2D functions index x[1]; a 1-element vector must fail loudly, not be
    // padded or truncated
    let x = Array1::from_vec(vec![1.0]);
    eggholder(&x);
}

#[test]
#[should_panic]
fn test_holder_table_rejects_empty_vector() {
    let x = Array1::from_vec(vec![]);
    holder_table(&x);
}

#[test]
#[should_panic]
fn test_langermann_rejects_three_dimensions() {
    // The fixed 5x2 matrix A only supplies two columns
    let x = Array1::from_vec(vec![1.0, 2.0, 3.0]);
    langermann(&x);
}

#[test]
fn test_langermann_tolerates_one_dimension() {
    // With a single coordinate only the first column of A is indexed
    let x = Array1::from_vec(vec![2.0]);
    assert!(langermann(&x).is_finite());
}

#[test]
fn test_gramacy_lee_singularity_at_zero() {
    // sin(0)/0 follows IEEE-754 semantics instead of raising
    let x = Array1::from_vec(vec![0.0]);
    assert!(gramacy_lee(&x).is_nan());
}

#[test]
fn test_gramacy_lee_finite_on_domain() {
    for i in 1..=100 {
        let xi = 2.5 * (i as f64) / 100.0;
        let x = Array1::from_vec(vec![xi]);
        assert!(gramacy_lee(&x).is_finite(), "gramacy_lee({}) not finite", xi);
    }
}

#[test]
fn test_griewank_first_product_factor_unscaled() {
    // In 1D the product term reduces to cos(x0) with denominator sqrt(1),
    // so the whole function collapses to a closed form we can match bitwise
    for t in [0.3, 0.7, -2.5, 119.0] {
        let x = Array1::from_vec(vec![t]);
        assert_eq!(griewank(&x), t.powi(2) / 4000.0 - t.cos() + 1.0);
    }
}

#[test]
fn test_ackley_default_params_match_plain_call() {
    let x = Array1::from_vec(vec![0.5, -1.5, 3.25]);
    assert_eq!(ackley(&x), ackley_with_params(&x, &AckleyParams::default()));
}

#[test]
fn test_ackley_custom_params_keep_origin_minimum() {
    // f(0) = -a - exp(0 mean cos) + a + e = 0 regardless of the parameters
    let params = AckleyParams {
        a: 15.0,
        b: 0.3,
        c: std::f64::consts::PI,
    };
    let origin = Array1::zeros(4);
    assert!(ackley_with_params(&origin, &params).abs() < 1e-12);

    // And nearby points stay above it
    let nearby = Array1::from_elem(4, 0.1);
    assert!(ackley_with_params(&nearby, &params) > ackley_with_params(&origin, &params));
}

#[test]
fn test_non_finite_inputs_propagate() {
    // NaN coordinates flow through the formulas rather than being masked
    let x = Array1::from_vec(vec![f64::NAN, 1.0]);
    assert!(drop_wave(&x).is_nan());
    assert!(levy_n13(&x).is_nan());
}
