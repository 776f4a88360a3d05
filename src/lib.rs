//! Many-local-minima optimization test functions
//!
//! This library provides the "Many Local Minima" family of test functions for
//! optimization algorithm benchmarking and validation, following the SFU
//! Virtual Library of Simulation Experiments
//! (<https://www.sfu.ca/~ssurjano/optimization.html>).
//!
//! Every function is a pure evaluation `fn(&Array1<f64>) -> f64` with no
//! shared state: identical input always yields identical output, and all
//! functions are safe to call concurrently without synchronization.
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use sfu_testfunctions::*;
//!
//! let x = Array1::from_vec(vec![0.0, 0.0]);
//! assert!(ackley(&x).abs() < 1e-12);
//!
//! // Catalog-style access by name
//! let f = get_function("drop_wave").unwrap();
//! assert_eq!(f(&x), -1.0);
//!
//! // Checked dispatch validates dimensionality before evaluating
//! assert!(evaluate("eggholder", &Array1::zeros(1)).is_err());
//! ```

use ndarray::{Array1, Array2};
use serde::Serialize;
use std::collections::HashMap;

// Import all function modules
pub mod functions;
pub use functions::*;

/// A test function mapping a point to its scalar objective value
pub type TestFunction = fn(&Array1<f64>) -> f64;

/// Dimensionality accepted by a test function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dimensions {
    /// The function indexes exactly `n` coordinates
    Fixed(usize),
    /// The function is defined for any d >= 1
    Any,
}

impl Dimensions {
    /// Whether a vector of length `d` is accepted
    pub fn accepts(&self, d: usize) -> bool {
        match *self {
            Dimensions::Fixed(n) => d == n,
            Dimensions::Any => d >= 1,
        }
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Dimensions::Fixed(n) => write!(f, "exactly {}", n),
            Dimensions::Any => write!(f, "any d >= 1"),
        }
    }
}

/// Error type for checked, name-based evaluation
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("unknown test function: {0}")]
    UnknownFunction(String),

    #[error("function {name} expects {expected} coordinate(s), got a vector of length {got}")]
    DimensionMismatch {
        name: String,
        expected: Dimensions,
        got: usize,
    },
}

/// Metadata for a test function including bounds and known global minima
#[derive(Debug, Clone, Serialize)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Bounds per coordinate (min, max); functions accepting any
    /// dimensionality carry a single interval to be repeated per coordinate
    pub bounds: Vec<(f64, f64)>,
    /// Global minima locations and values
    pub global_minima: Vec<(Vec<f64>, f64)>,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
    /// Dimensionality the function accepts
    pub dimensions: Dimensions,
}

/// Create bounds matrix for optimization (2 x n matrix)
/// bounds[[0, i]] = lower bound, bounds[[1, i]] = upper bound
pub fn create_bounds(n: usize, lower: f64, upper: f64) -> Array2<f64> {
    Array2::from_shape_fn((2, n), |(i, _)| if i == 0 { lower } else { upper })
}

/// Look up a test function by name
///
/// Returns the plain function pointer; the returned function does not check
/// dimensionality (see [`evaluate`] for the checked form).
pub fn get_function(name: &str) -> Option<TestFunction> {
    match name {
        "ackley" => Some(ackley),
        "bukin_n6" => Some(bukin_n6),
        "cross_in_tray" => Some(cross_in_tray),
        "drop_wave" => Some(drop_wave),
        "eggholder" => Some(eggholder),
        "gramacy_lee" => Some(gramacy_lee),
        "griewank" => Some(griewank),
        "holder_table" => Some(holder_table),
        "langermann" => Some(langermann),
        "levy" => Some(levy),
        "levy_n13" => Some(levy_n13),
        "rastrigin" => Some(rastrigin),
        "schaffer_n2" => Some(schaffer_n2),
        "schaffer_n4" => Some(schaffer_n4),
        "schwefel" => Some(schwefel),
        "shubert" => Some(shubert),
        _ => None,
    }
}

/// Evaluate a test function by name with dimensionality checking
///
/// Unlike calling the functions directly, this validates the input length
/// against the catalog before running the formula, so a wrong-sized vector
/// surfaces as [`EvalError::DimensionMismatch`] instead of an index panic.
pub fn evaluate(name: &str, x: &Array1<f64>) -> Result<f64, EvalError> {
    let f = get_function(name).ok_or_else(|| EvalError::UnknownFunction(name.to_string()))?;
    let metadata = get_function_metadata();
    let meta = metadata
        .get(name)
        .ok_or_else(|| EvalError::UnknownFunction(name.to_string()))?;

    if !meta.dimensions.accepts(x.len()) {
        return Err(EvalError::DimensionMismatch {
            name: name.to_string(),
            expected: meta.dimensions,
            got: x.len(),
        });
    }

    Ok(f(x))
}

/// Get metadata for all available test functions
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let mut metadata = HashMap::new();

    metadata.insert(
        "ackley".to_string(),
        FunctionMetadata {
            name: "ackley".to_string(),
            bounds: vec![(-32.768, 32.768)],
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            description: "N-dimensional multimodal function with a nearly flat outer region"
                .to_string(),
            multimodal: true,
            dimensions: Dimensions::Any,
        },
    );

    metadata.insert(
        "bukin_n6".to_string(),
        FunctionMetadata {
            name: "bukin_n6".to_string(),
            bounds: vec![(-15.0, -5.0), (-3.0, 3.0)],
            global_minima: vec![(vec![-10.0, 1.0], 0.0)],
            description: "2D function with many local minima along a narrow ridge".to_string(),
            multimodal: true,
            dimensions: Dimensions::Fixed(2),
        },
    );

    metadata.insert(
        "cross_in_tray".to_string(),
        FunctionMetadata {
            name: "cross_in_tray".to_string(),
            bounds: vec![(-10.0, 10.0); 2],
            global_minima: vec![
                (vec![1.3491, 1.3491], -2.06261),
                (vec![1.3491, -1.3491], -2.06261),
                (vec![-1.3491, 1.3491], -2.06261),
                (vec![-1.3491, -1.3491], -2.06261),
            ],
            description: "2D multimodal function with 4 symmetric global minima".to_string(),
            multimodal: true,
            dimensions: Dimensions::Fixed(2),
        },
    );

    metadata.insert(
        "drop_wave".to_string(),
        FunctionMetadata {
            name: "drop_wave".to_string(),
            bounds: vec![(-5.12, 5.12); 2],
            global_minima: vec![(vec![0.0, 0.0], -1.0)],
            description: "2D highly multimodal ripple function".to_string(),
            multimodal: true,
            dimensions: Dimensions::Fixed(2),
        },
    );

    metadata.insert(
        "eggholder".to_string(),
        FunctionMetadata {
            name: "eggholder".to_string(),
            bounds: vec![(-512.0, 512.0); 2],
            global_minima: vec![(vec![512.0, 404.2319], -959.6407)],
            description: "2D highly multimodal function, very difficult to optimize".to_string(),
            multimodal: true,
            dimensions: Dimensions::Fixed(2),
        },
    );

    metadata.insert(
        "gramacy_lee".to_string(),
        FunctionMetadata {
            name: "gramacy_lee".to_string(),
            bounds: vec![(0.5, 2.5)],
            global_minima: vec![(vec![0.548563444114526], -0.869011134989500)],
            description: "1D test function with challenging properties by Gramacy & Lee (2012)"
                .to_string(),
            multimodal: true,
            dimensions: Dimensions::Fixed(1),
        },
    );

    metadata.insert(
        "griewank".to_string(),
        FunctionMetadata {
            name: "griewank".to_string(),
            bounds: vec![(-600.0, 600.0)],
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            description: "N-dimensional multimodal function with widespread regular minima"
                .to_string(),
            multimodal: true,
            dimensions: Dimensions::Any,
        },
    );

    metadata.insert(
        "holder_table".to_string(),
        FunctionMetadata {
            name: "holder_table".to_string(),
            bounds: vec![(-10.0, 10.0); 2],
            global_minima: vec![
                (vec![8.05502, 9.66459], -19.2085),
                (vec![8.05502, -9.66459], -19.2085),
                (vec![-8.05502, 9.66459], -19.2085),
                (vec![-8.05502, -9.66459], -19.2085),
            ],
            description: "2D multimodal function with 4 symmetric global minima".to_string(),
            multimodal: true,
            dimensions: Dimensions::Fixed(2),
        },
    );

    metadata.insert(
        "langermann".to_string(),
        FunctionMetadata {
            name: "langermann".to_string(),
            bounds: vec![(0.0, 10.0); 2],
            global_minima: vec![(vec![2.00299219, 1.006096], -5.1621)],
            description: "2D multimodal function with unevenly distributed local minima"
                .to_string(),
            multimodal: true,
            dimensions: Dimensions::Fixed(2),
        },
    );

    metadata.insert(
        "levy".to_string(),
        FunctionMetadata {
            name: "levy".to_string(),
            bounds: vec![(-10.0, 10.0)],
            global_minima: vec![(vec![1.0, 1.0], 0.0)],
            description: "N-dimensional multimodal function (generalized Levy)".to_string(),
            multimodal: true,
            dimensions: Dimensions::Any,
        },
    );

    metadata.insert(
        "levy_n13".to_string(),
        FunctionMetadata {
            name: "levy_n13".to_string(),
            bounds: vec![(-10.0, 10.0); 2],
            global_minima: vec![(vec![1.0, 1.0], 0.0)],
            description: "2D multimodal Levy N.13 function".to_string(),
            multimodal: true,
            dimensions: Dimensions::Fixed(2),
        },
    );

    metadata.insert(
        "rastrigin".to_string(),
        FunctionMetadata {
            name: "rastrigin".to_string(),
            bounds: vec![(-5.12, 5.12)],
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            description: "N-dimensional highly multimodal function with regular minima"
                .to_string(),
            multimodal: true,
            dimensions: Dimensions::Any,
        },
    );

    metadata.insert(
        "schaffer_n2".to_string(),
        FunctionMetadata {
            name: "schaffer_n2".to_string(),
            bounds: vec![(-100.0, 100.0); 2],
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            description: "2D multimodal Schaffer N.2 function".to_string(),
            multimodal: true,
            dimensions: Dimensions::Fixed(2),
        },
    );

    metadata.insert(
        "schaffer_n4".to_string(),
        FunctionMetadata {
            name: "schaffer_n4".to_string(),
            bounds: vec![(-100.0, 100.0); 2],
            global_minima: vec![
                (vec![0.0, 1.253115], 0.292579),
                (vec![0.0, -1.253115], 0.292579),
            ],
            description: "2D multimodal Schaffer N.4 function".to_string(),
            multimodal: true,
            dimensions: Dimensions::Fixed(2),
        },
    );

    metadata.insert(
        "schwefel".to_string(),
        FunctionMetadata {
            name: "schwefel".to_string(),
            bounds: vec![(-500.0, 500.0)],
            global_minima: vec![(vec![420.9687, 420.9687], 0.0)],
            description: "N-dimensional multimodal function with a distant second-best minimum"
                .to_string(),
            multimodal: true,
            dimensions: Dimensions::Any,
        },
    );

    metadata.insert(
        "shubert".to_string(),
        FunctionMetadata {
            name: "shubert".to_string(),
            bounds: vec![(-10.0, 10.0); 2],
            global_minima: vec![
                (vec![-1.425128, -0.800321], -186.7309),
                (vec![-0.800321, -1.425128], -186.7309),
            ],
            description: "2D multimodal function with 18 global minima".to_string(),
            multimodal: true,
            dimensions: Dimensions::Fixed(2),
        },
    );

    metadata
}

/// Recommended evaluation box for a function, expanded to `d` coordinates
///
/// Functions accepting any dimensionality get their per-coordinate interval
/// repeated `d` times. Returns None for unknown names, or when `d` does not
/// match a fixed-dimensional function.
pub fn get_function_bounds(name: &str, d: usize) -> Option<Vec<(f64, f64)>> {
    let metadata = get_function_metadata();
    let meta = metadata.get(name)?;
    match meta.dimensions {
        Dimensions::Any => meta.bounds.first().map(|&b| vec![b; d]),
        Dimensions::Fixed(n) if n == d => Some(meta.bounds.clone()),
        Dimensions::Fixed(_) => None,
    }
}
