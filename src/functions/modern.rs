//! Recent benchmark functions from the research literature

use ndarray::Array1;
use std::f64::consts::PI;

/// Gramacy & Lee (2012) function - 1D with challenging properties
/// Global minimum: f(x) = -0.869011134989500 at x = 0.548563444114526
/// (determined numerically; the published reference leaves it undocumented)
/// Bounds: x in [0.5, 2.5]
///
/// Undefined at x = 0 where the first term divides by zero; the division is
/// left to IEEE-754 semantics (0 yields NaN) rather than raised as an error,
/// so optimizer callers can detect degenerate evaluations themselves.
pub fn gramacy_lee(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    (10.0 * PI * x1).sin() / (2.0 * x1) + (x1 - 1.0).powi(4)
}
