//! Multimodal test functions with many local minima
//!
//! These functions have multiple local minima and are used to test the global
//! search capabilities and exploration of optimization algorithms. Formulas
//! follow the SFU Virtual Library of Simulation Experiments.

use ndarray::Array1;
use std::f64::consts::PI;

/// Parameters for the Ackley function.
///
/// The recommended values from the literature are `a = 20`, `b = 0.2` and
/// `c = 2π`; `AckleyParams::default()` returns exactly those.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AckleyParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Default for AckleyParams {
    fn default() -> Self {
        AckleyParams {
            a: 20.0,
            b: 0.2,
            c: 2.0 * PI,
        }
    }
}

/// Ackley function - N-dimensional multimodal
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-32.768, 32.768]
pub fn ackley(x: &Array1<f64>) -> f64 {
    ackley_with_params(x, &AckleyParams::default())
}

/// Ackley function with explicit parameters
///
/// The same as `ackley`; however, it allows to set the parameters a, b and c.
/// The origin stays the global minimum (value 0) for any parameter choice.
pub fn ackley_with_params(x: &Array1<f64>, params: &AckleyParams) -> f64 {
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let sum_cos: f64 = x.iter().map(|&xi| (params.c * xi).cos()).sum();

    -params.a * (-params.b * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp()
        + params.a
        + std::f64::consts::E
}

/// Bukin N.6 function - highly multimodal with narrow global optimum
/// Global minimum: f(x) = 0 at x = (-10, 1)
/// Bounds: x1 in [-15, -5], x2 in [-3, 3]
pub fn bukin_n6(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    100.0 * (x2 - 0.01 * x1.powi(2)).abs().sqrt() + 0.01 * (x1 + 10.0).abs()
}

/// Cross-in-tray function - 2D multimodal
/// Global minimum: f(x) = -2.06261 at x = (±1.3491, ±1.3491)
/// Bounds: x_i in [-10, 10]
pub fn cross_in_tray(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    let exp_term = (100.0 - (x1.powi(2) + x2.powi(2)).sqrt() / PI).abs();
    -0.0001 * ((x1.sin() * x2.sin() * exp_term.exp()).abs() + 1.0).powf(0.1)
}

/// Drop-wave function - 2D multimodal
/// Global minimum: f(x) = -1.0 at x = (0, 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn drop_wave(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    let numerator = 1.0 + (12.0 * (x1.powi(2) + x2.powi(2)).sqrt()).cos();
    let denominator = 0.5 * (x1.powi(2) + x2.powi(2)) + 2.0;
    -numerator / denominator
}

/// Eggholder function - highly multimodal, very challenging
/// Global minimum: f(x) = -959.6407 at x = (512, 404.2319)
/// Bounds: x_i in [-512, 512]
pub fn eggholder(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    -(x2 + 47.0) * (x2 + x1 / 2.0 + 47.0).abs().sqrt().sin()
        - x1 * (x1 - (x2 + 47.0)).abs().sqrt().sin()
}

/// Griewank function - N-dimensional, challenging for large dimensions
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-600, 600]
pub fn griewank(x: &Array1<f64>) -> f64 {
    let sum_squares: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    // The product term scales coordinate i (0-based) by sqrt(i + 1), so the
    // first factor is cos(x0) unscaled.
    let product_cos: f64 = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    sum_squares / 4000.0 - product_cos + 1.0
}

/// Holder table function - 2D multimodal
/// Global minimum: f(x) = -19.2085 at x = (±8.05502, ±9.66459)
/// Bounds: x_i in [-10, 10]
pub fn holder_table(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    let exp_term = (1.0 - (x1.powi(2) + x2.powi(2)).sqrt() / PI).abs();
    -(x1.sin() * x2.cos() * exp_term.exp()).abs()
}

/// Langermann function - multimodal with unevenly distributed local minima
/// Global minimum: f(x) ≈ -5.1621 at x ≈ (2.00299219, 1.006096)
/// Bounds: x_i in [0, 10]
///
/// Uses the standard constants m = 5, c = (1, 2, 5, 2, 3) and the fixed 5x2
/// matrix A, so the function is defined for d <= 2 only; indexing past the
/// second column panics.
pub fn langermann(x: &Array1<f64>) -> f64 {
    let a = [
        [3.0, 5.0],
        [5.0, 2.0],
        [2.0, 1.0],
        [1.0, 4.0],
        [7.0, 9.0],
    ];
    let c = [1.0, 2.0, 5.0, 2.0, 3.0];

    -c.iter()
        .enumerate()
        .map(|(i, &ci)| {
            let inner: f64 = x
                .iter()
                .enumerate()
                .map(|(j, &xj)| (xj - a[i][j]).powi(2))
                .sum();
            ci * (-inner / PI).exp() * (PI * inner).cos()
        })
        .sum::<f64>()
}

/// Levy function - N-dimensional multimodal (generalized version)
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-10, 10]
pub fn levy(x: &Array1<f64>) -> f64 {
    let w: Vec<f64> = x.iter().map(|&xi| 1.0 + (xi - 1.0) / 4.0).collect();

    let first_term = (PI * w[0]).sin().powi(2);

    let middle_sum: f64 = w
        .iter()
        .take(w.len() - 1)
        .map(|&wi| (wi - 1.0).powi(2) * (1.0 + 10.0 * (PI * wi + 1.0).sin().powi(2)))
        .sum();

    let last_term = {
        let wn = w[w.len() - 1];
        (wn - 1.0).powi(2) * (1.0 + (2.0 * PI * wn).sin().powi(2))
    };

    first_term + middle_sum + last_term
}

/// Lévy function N.13 - 2D multimodal
/// Global minimum: f(x) = 0 at x = (1, 1)
/// Bounds: x_i in [-10, 10]
pub fn levy_n13(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];

    (3.0 * PI * x1).sin().powi(2)
        + (x1 - 1.0).powi(2) * (1.0 + (3.0 * PI * x2).sin().powi(2))
        + (x2 - 1.0).powi(2) * (1.0 + (2.0 * PI * x2).sin().powi(2))
}

/// Rastrigin function - highly multimodal
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn rastrigin(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum: f64 = x
        .iter()
        .map(|&xi| xi.powi(2) - 10.0 * (2.0 * PI * xi).cos())
        .sum();
    10.0 * n + sum
}

/// Schaffer N.2 function - 2D multimodal
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-100, 100]
pub fn schaffer_n2(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    0.5 + ((x1.powi(2) - x2.powi(2)).sin().powi(2) - 0.5)
        / (1.0 + 0.001 * (x1.powi(2) + x2.powi(2))).powi(2)
}

/// Schaffer N.4 function - 2D multimodal
/// Global minimum: f(x) = 0.292579 at x = (0, ±1.253115)
/// Bounds: x_i in [-100, 100]
pub fn schaffer_n4(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    0.5 + ((x1.powi(2) - x2.powi(2)).abs().sin().cos().powi(2) - 0.5)
        / (1.0 + 0.001 * (x1.powi(2) + x2.powi(2))).powi(2)
}

/// Schwefel function - N-dimensional with many local minima
/// Global minimum: f(x) = 0 at x = (420.9687, 420.9687, ..., 420.9687)
/// Bounds: x_i in [-500, 500]
pub fn schwefel(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum: f64 = x.iter().map(|&xi| xi * xi.abs().sqrt().sin()).sum();
    418.9829 * n - sum
}

/// Shubert function - highly multimodal with many global minima
/// Global minimum: f(x) = -186.7309 for 2D, attained at 18 locations
/// Bounds: x_i in [-10, 10]
pub fn shubert(x: &Array1<f64>) -> f64 {
    x.iter()
        .map(|&xi| {
            (1..=5)
                .map(|i| {
                    let i_f64 = i as f64;
                    i_f64 * ((i_f64 + 1.0) * xi + i_f64).cos()
                })
                .sum::<f64>()
        })
        .product()
}
