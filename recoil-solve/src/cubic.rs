//! Single-real-root cubic equations solved by Cardano's formula.

use thiserror::Error;

/// Errors that can occur when solving a cubic.
#[derive(Debug, Error)]
pub enum Error {
    /// The discriminant indicates three distinct real roots, so no single
    /// root can be reported.
    #[error("the cubic has three distinct real roots")]
    ThreeRealRoots,

    /// The leading coefficient is zero; the equation is not a cubic.
    #[error("leading coefficient is zero")]
    ZeroLeadingCoefficient,
}

/// The real root of the depressed cubic `x³ + px + q = 0`.
///
/// # Errors
///
/// Returns [`Error::ThreeRealRoots`] when the discriminant places three
/// distinct real roots on the curve.
pub fn depressed_single_root(p: f64, q: f64) -> Result<f64, Error> {
    let delta = -(q * q / 4.0 + p * p * p / 27.0);
    if delta <= 0.0 {
        let s = (-delta).sqrt();
        Ok((-q / 2.0 + s).cbrt() + (-q / 2.0 - s).cbrt())
    } else {
        Err(Error::ThreeRealRoots)
    }
}

/// The real root of `ax³ + bx² + cx + d = 0`, via reduction to the
/// depressed form.
///
/// # Errors
///
/// Returns [`Error::ZeroLeadingCoefficient`] when `a` is zero and
/// [`Error::ThreeRealRoots`] when no single real root exists.
pub fn single_root(a: f64, b: f64, c: f64, d: f64) -> Result<f64, Error> {
    if a == 0.0 {
        return Err(Error::ZeroLeadingCoefficient);
    }

    let p = (3.0 * a * c - b * b) / (3.0 * a * a);
    let q = (27.0 * a * a * d - 9.0 * a * b * c + 2.0 * b * b * b) / (27.0 * a * a * a);

    Ok(depressed_single_root(p, q)? - b / (3.0 * a))
}
