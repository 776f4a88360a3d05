use ndarray::Array1;
use sfu_testfunctions::*;

#[test]
fn test_lookup_by_name() {
    let x = Array1::from_vec(vec![0.0, 0.0]);

    let f = get_function("drop_wave").expect("drop_wave should resolve");
    assert_eq!(f(&x), -1.0);

    assert!(get_function("sphere").is_none());
    assert!(get_function("").is_none());
}

#[test]
fn test_function_pointers_match_free_functions() {
    let x = Array1::from_vec(vec![0.7, -1.3]);
    let by_name = get_function("holder_table").unwrap()(&x);
    assert_eq!(by_name.to_bits(), holder_table(&x).to_bits());
}

#[test]
fn test_checked_evaluation() {
    let x = Array1::from_vec(vec![0.0, 0.0]);
    assert_eq!(evaluate("drop_wave", &x).unwrap(), -1.0);

    // Any-dimensional entries accept every d >= 1
    for d in 1..=10 {
        assert!(evaluate("ackley", &Array1::zeros(d)).is_ok());
        assert!(evaluate("griewank", &Array1::zeros(d)).is_ok());
    }
}

#[test]
fn test_checked_evaluation_unknown_name() {
    let x = Array1::zeros(2);
    let err = evaluate("rosenbrock", &x).unwrap_err();
    assert!(matches!(err, EvalError::UnknownFunction(_)));
    assert!(err.to_string().contains("rosenbrock"));
}

#[test]
fn test_checked_evaluation_fails_fast_on_dimension() {
    // Wrong-sized inputs surface as errors before the formula runs, instead
    // of the index panic a direct call produces
    let err = evaluate("eggholder", &Array1::zeros(3)).unwrap_err();
    assert!(matches!(
        err,
        EvalError::DimensionMismatch {
            expected: Dimensions::Fixed(2),
            got: 3,
            ..
        }
    ));
    assert!(err.to_string().contains("eggholder"));

    assert!(evaluate("langermann", &Array1::zeros(3)).is_err());
    assert!(evaluate("langermann", &Array1::zeros(1)).is_err());
    assert!(evaluate("gramacy_lee", &Array1::zeros(2)).is_err());

    // Even any-dimensional functions need at least one coordinate
    let err = evaluate("ackley", &Array1::zeros(0)).unwrap_err();
    assert!(matches!(
        err,
        EvalError::DimensionMismatch {
            expected: Dimensions::Any,
            got: 0,
            ..
        }
    ));
}

#[test]
fn test_bounds_expansion() {
    let bounds = get_function_bounds("ackley", 7).unwrap();
    assert_eq!(bounds, vec![(-32.768, 32.768); 7]);

    // Fixed-dimensional entries keep their per-coordinate intervals
    let bounds = get_function_bounds("bukin_n6", 2).unwrap();
    assert_eq!(bounds, vec![(-15.0, -5.0), (-3.0, 3.0)]);

    assert!(get_function_bounds("bukin_n6", 3).is_none());
    assert!(get_function_bounds("nonesuch", 2).is_none());
}

#[test]
fn test_create_bounds_matrix() {
    let bounds = create_bounds(3, 0.0, 10.0);
    assert_eq!(bounds.shape(), &[2, 3]);
    assert_eq!(bounds[[0, 0]], 0.0);
    assert_eq!(bounds[[1, 2]], 10.0);
}

#[test]
fn test_metadata_serializes_to_json() {
    let metadata = get_function_metadata();
    let json = serde_json::to_value(&metadata).expect("metadata should serialize");

    assert_eq!(json["ackley"]["dimensions"], serde_json::json!("Any"));
    assert_eq!(
        json["eggholder"]["dimensions"],
        serde_json::json!({ "Fixed": 2 })
    );
    assert_eq!(json["drop_wave"]["global_minima"][0][1], -1.0);
    assert_eq!(json["bukin_n6"]["bounds"][0][0], -15.0);
    assert_eq!(json["shubert"]["multimodal"], true);
}
