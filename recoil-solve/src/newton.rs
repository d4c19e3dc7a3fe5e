//! Newton iteration for scalar equations with a known derivative.

use thiserror::Error;

/// Configuration for the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub max_iters: usize,
    pub x_tol: f64,
    pub residual_tol: f64,
    /// Smallest derivative magnitude a step may divide by.
    pub derivative_floor: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_tol: 1e-12,
            residual_tol: 1e-12,
            derivative_floor: 1e-12,
        }
    }
}

impl Config {
    /// Validates that all tolerances are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.x_tol.is_finite() || self.x_tol < 0.0 {
            return Err("x_tol must be finite and non-negative");
        }
        if !self.residual_tol.is_finite() || self.residual_tol < 0.0 {
            return Err("residual_tol must be finite and non-negative");
        }
        if !self.derivative_floor.is_finite() || self.derivative_floor < 0.0 {
            return Err("derivative_floor must be finite and non-negative");
        }
        Ok(())
    }
}

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,
    /// Reached the iteration limit without converging.
    MaxIters,
}

/// The result of a Newton solve.
#[derive(Debug, Clone, Copy)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Best estimate of the root.
    pub x: f64,
    /// Residual at the reported root estimate.
    pub residual: f64,
    /// Iteration count when the solver finished.
    pub iters: usize,
}

/// Errors that can occur during Newton solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("non-finite starting point: {value}")]
    NonFiniteStart { value: f64 },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("derivative {derivative} at x = {x} is below the floor")]
    VanishingDerivative { x: f64, derivative: f64 },

    #[error("iterate became non-finite after step from x = {x}")]
    NonFiniteIterate { x: f64 },
}

/// Finds a root of `f` by Newton iteration starting from `x0`.
///
/// Converges when the residual falls within `residual_tol` or the step
/// magnitude falls within `x_tol`. A derivative smaller in magnitude than
/// `derivative_floor` aborts the solve rather than taking an unbounded
/// step.
///
/// # Errors
///
/// Returns an error if the config or starting point is invalid, if `f` or
/// `df` produces a non-finite value, or if the derivative vanishes.
pub fn solve(
    f: impl Fn(f64) -> f64,
    df: impl Fn(f64) -> f64,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error> {
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    if !x0.is_finite() {
        return Err(Error::NonFiniteStart { value: x0 });
    }

    let mut x = x0;

    for iter in 1..=config.max_iters {
        let residual = f(x);
        if !residual.is_finite() {
            return Err(Error::NonFiniteResidual { x, residual });
        }

        if residual.abs() <= config.residual_tol {
            return Ok(Solution {
                status: Status::Converged,
                x,
                residual,
                iters: iter - 1,
            });
        }

        let derivative = df(x);
        if !derivative.is_finite() || derivative.abs() < config.derivative_floor {
            return Err(Error::VanishingDerivative { x, derivative });
        }

        let step = residual / derivative;
        let next = x - step;
        if !next.is_finite() {
            return Err(Error::NonFiniteIterate { x });
        }

        if step.abs() <= config.x_tol {
            return Ok(Solution {
                status: Status::Converged,
                x: next,
                residual: f(next),
                iters: iter,
            });
        }

        x = next;
    }

    Ok(Solution {
        status: Status::MaxIters,
        x,
        residual: f(x),
        iters: config.max_iters,
    })
}
