//! Springs specified by a perceptual duration instead of a frequency.
//!
//! Platform animation APIs often take a duration and damping ratio and
//! derive the stiffness internally: the natural frequency is chosen so the
//! underdamped decay envelope reaches a fixed fraction of the step at the
//! requested duration. This module solves that inverse problem.

use std::f64::consts::PI;

use recoil_solve::{cubic, newton};
use serde::{Deserialize, Serialize};

use crate::parameters::SpringParameters;

/// Envelope fraction that defines "visually finished".
const ENVELOPE_ALPHA: f64 = 0.001;

/// Default threshold below which a coefficient is treated as zero.
const DEFAULT_EPSILON: f64 = 1e-8;

/// Frequency reported when no underdamped solve applies or the solve fails.
const FALLBACK_OMEGA: f64 = 1.0;

/// A spring described by duration, damping ratio, and initial velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationSpring {
    pub duration: f64,
    pub damping_ratio: f64,
    pub initial_velocity: f64,
}

impl DurationSpring {
    /// The natural frequency at which the underdamped decay envelope
    /// reaches `0.001` at `duration`.
    ///
    /// Only the strictly underdamped range has a defined solve; a damping
    /// ratio at or above critical, a (near-)zero ratio, and any solver
    /// failure all fall back to `1.0`.
    #[must_use]
    pub fn omega(&self) -> f64 {
        self.omega_with(DEFAULT_EPSILON)
    }

    /// Same as [`omega`](Self::omega) with an explicit zero threshold.
    #[must_use]
    pub fn omega_with(&self, epsilon: f64) -> f64 {
        let zeta = self.damping_ratio;
        if zeta < epsilon || zeta >= 1.0 - epsilon {
            return FALLBACK_OMEGA;
        }

        self.underdamped_omega(epsilon).unwrap_or(FALLBACK_OMEGA)
    }

    /// Design-space parameters with the solved frequency.
    #[must_use]
    pub fn parameters(&self) -> SpringParameters {
        SpringParameters::new(
            2.0 * PI / self.omega(),
            self.damping_ratio.min(1.0),
            self.initial_velocity,
        )
    }

    /// Solves `|c2| e^{aτ} = 0.001` at `τ = duration` for the frequency.
    ///
    /// Substituting `u = v0/ζ`, `E = duration·ζ`, and
    /// `c = 0.001·√(1−ζ²)/ζ` reduces the envelope condition to
    /// `(u/ω − 1)·e^{−Eω} + c = 0`.
    fn underdamped_omega(&self, epsilon: f64) -> Option<f64> {
        let zeta = self.damping_ratio;
        let u = self.initial_velocity / zeta;
        let e = self.duration * zeta;
        let c = ENVELOPE_ALPHA * (1.0 - zeta * zeta).sqrt() / zeta;

        if u.abs() < epsilon {
            return Some(-c.ln() / e);
        }

        let f = move |omega: f64| (u / omega - 1.0) * (-e * omega).exp() + c;
        let df = move |omega: f64| {
            (-u / (omega * omega) - e * u / omega + e) * (-e * omega).exp()
        };

        let start = if u < 0.0 {
            // f is monotone increasing for negative u; any positive start
            // converges.
            1.0
        } else {
            // Newton must start past the inflection point, located via the
            // cubic 2u x³ + 2Eu x² + E²u x − E² = 0 in x = 1/ω.
            match cubic::single_root(2.0 * u, 2.0 * e * u, e * e * u, -(e * e)) {
                Ok(x) if x > 0.0 => 1.0 / x,
                _ => 1.0,
            }
        };

        let solution = newton::solve(f, df, start, &newton::Config::default()).ok()?;

        (solution.status == newton::Status::Converged
            && solution.x.is_finite()
            && solution.x > 0.0)
            .then_some(solution.x)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    /// Time at which the underdamped envelope `|c2| e^{aτ}` decays to the
    /// envelope fraction.
    fn envelope_time(omega: f64, zeta: f64, v0: f64) -> f64 {
        let a = -omega * zeta;
        let b = omega * (1.0 - zeta * zeta).sqrt();
        let c2 = (v0 + a) / b;

        (ENVELOPE_ALPHA / c2.abs()).ln() / a
    }

    #[test]
    fn zero_velocity_uses_the_closed_form() {
        let spring = DurationSpring {
            duration: 1.0,
            damping_ratio: 0.5,
            initial_velocity: 0.0,
        };

        assert_relative_eq!(spring.omega(), 12.716_898_269_296_165, epsilon = 1e-9);
    }

    #[test]
    fn solved_frequency_reproduces_the_duration() {
        for duration in [1.0, 3.0] {
            for i in 1..10 {
                let zeta = f64::from(i) * 0.1;
                for j in 0..=10 {
                    let v0 = -10.0 + f64::from(j);
                    let spring = DurationSpring {
                        duration,
                        damping_ratio: zeta,
                        initial_velocity: v0,
                    };

                    let omega = spring.omega();

                    assert_abs_diff_eq!(
                        envelope_time(omega, zeta, v0),
                        duration,
                        epsilon = 1e-6
                    );
                }
            }
        }
    }

    #[test]
    fn positive_velocity_solves_past_the_inflection() {
        let cases = [
            (1.0, 0.3, 0.5, 18.861_411_680_568_878),
            (1.0, 0.3, 2.0, 17.580_607_741_188_214),
            (2.0, 0.5, 1.0, 5.948_659_378_469_268),
        ];

        for (duration, zeta, v0, expected) in cases {
            let spring = DurationSpring {
                duration,
                damping_ratio: zeta,
                initial_velocity: v0,
            };

            let omega = spring.omega();

            assert_relative_eq!(omega, expected, epsilon = 1e-6);
            assert_abs_diff_eq!(envelope_time(omega, zeta, v0), duration, epsilon = 1e-6);
        }
    }

    #[test]
    fn falls_back_outside_the_underdamped_range() {
        let undamped = DurationSpring {
            duration: 1.0,
            damping_ratio: 0.0,
            initial_velocity: 0.0,
        };
        let critical = DurationSpring {
            duration: 1.0,
            damping_ratio: 1.0,
            initial_velocity: 0.0,
        };

        assert_relative_eq!(undamped.omega(), 1.0);
        assert_relative_eq!(critical.omega(), 1.0);
    }

    #[test]
    fn parameters_carry_the_solved_frequency() {
        let spring = DurationSpring {
            duration: 1.0,
            damping_ratio: 0.5,
            initial_velocity: 0.0,
        };

        let parameters = spring.parameters();

        assert_relative_eq!(parameters.omega(), spring.omega(), epsilon = 1e-9);
        assert_relative_eq!(parameters.damping_ratio(), 0.5);
    }
}
