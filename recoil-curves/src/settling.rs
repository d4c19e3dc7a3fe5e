//! Settling duration of a spring response.
//!
//! The settling duration is the largest time after the start at which the
//! response still deviates from its target by the settling tolerance. Past
//! that instant the value stays inside the tolerance band forever.

use recoil_core::Motion;
use recoil_solve::bisection;

use crate::spring::{DampingRegime, SpringResponse};

/// Default settling tolerance: the response has settled once it stays
/// within one part in a thousand of the full step.
pub const DEFAULT_ALPHA: f64 = 1e-3;

/// Default threshold below which a coefficient is treated as zero.
pub const DEFAULT_EPSILON: f64 = 1e-8;

/// Upper bound on backward-march probes before giving up and reporting the
/// conservative envelope bound.
const MAX_MARCH_STEPS: usize = 10_000;

/// Computes the largest `τ ≥ 0` with `|value(start_time + τ) − 1| = alpha`.
///
/// An undamped spring (`damping_ratio == 0`) never settles and yields
/// `f64::INFINITY`.
///
/// The critical regime with `initial_velocity ≈ omega` collapses to the
/// closed form `−ln(alpha) / omega`. Every other case is located
/// numerically: an analytic bound on the decay envelope gives a time past
/// every crossing, a backward march in sub-period steps brackets the last
/// one, and bisection refines it.
#[must_use]
pub fn settling_duration(spring: &SpringResponse, alpha: f64, epsilon: f64) -> f64 {
    let omega = spring.omega;
    let zeta = spring.damping_ratio;
    let v0 = spring.initial_velocity;

    let deviation = |tau: f64| (spring.value(spring.start_time + tau) - 1.0).abs() - alpha;

    let (envelope_time, step) = match spring.regime() {
        DampingRegime::Critical => {
            let c2 = v0 - omega;
            if c2.abs() < epsilon {
                // g(τ) = -exp(-ωτ), monotone: the crossing is exact.
                return -alpha.ln() / omega;
            }
            (critical_envelope_time(omega, c2.abs(), alpha), 0.5 / omega)
        }
        DampingRegime::Overdamped => {
            let root = (zeta * zeta - 1.0).sqrt();
            let s1 = omega * (-zeta + root);
            let s2 = omega * (-zeta - root);
            let c1 = (-s2 - v0) / (s2 - s1);
            let c2 = (s1 + v0) / (s2 - s1);

            // Both modes decay at least as slowly as s1.
            let amplitude = c1.abs() + c2.abs();
            ((alpha / amplitude).ln() / s1, 0.5 / omega)
        }
        DampingRegime::Underdamped => {
            let a = -omega * zeta;
            if a == 0.0 {
                return f64::INFINITY;
            }
            let b = omega * (1.0 - zeta * zeta).sqrt();
            let c2 = (v0 + a) / b;

            let amplitude = (1.0 + c2 * c2).sqrt();
            // Half the oscillation half-period: fine enough to land inside
            // the last tolerance-exceeding lobe.
            ((alpha / amplitude).ln() / a, 0.5 * std::f64::consts::PI / b)
        }
    };

    refine_last_crossing(deviation, envelope_time, step)
}

/// Time at which the critical-damping envelope `(1 + |c2| τ) e^{−ωτ}` has
/// decayed to `alpha`, found by doubling from the exponential-only bound.
fn critical_envelope_time(omega: f64, c2_abs: f64, alpha: f64) -> f64 {
    let mut t = -alpha.ln() / omega;
    for _ in 0..64 {
        if (1.0 + c2_abs * t) * (-omega * t).exp() <= alpha {
            break;
        }
        t *= 2.0;
    }
    t
}

/// Brackets the last tolerance crossing by marching backward from a time
/// known to be past every crossing, then refines it by bisection.
fn refine_last_crossing(deviation: impl Fn(f64) -> f64, envelope_time: f64, step: f64) -> f64 {
    if !envelope_time.is_finite() {
        return f64::INFINITY;
    }
    if envelope_time <= 0.0 {
        return 0.0;
    }

    // deviation(envelope_time) <= 0 by construction; deviation(0) = 1 - alpha > 0.
    let mut high = envelope_time;
    let mut low = envelope_time - step;
    let mut probes = 0;
    while low > 0.0 && deviation(low) <= 0.0 {
        high = low;
        low -= step;
        probes += 1;
        if probes > MAX_MARCH_STEPS {
            return envelope_time;
        }
    }
    let low = low.max(0.0);

    match bisection::solve(&deviation, [low, high], &bisection::Config::default()) {
        Ok(solution) => solution.x,
        Err(_) => high,
    }
}
