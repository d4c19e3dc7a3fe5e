//! Closed-form step response of a damped harmonic oscillator.

use std::f64::consts::PI;

use recoil_core::Motion;
use serde::{Deserialize, Serialize};

use crate::settling;

/// The damping regime of a second-order system.
///
/// Selection uses an exact comparison of the damping ratio against 1, so a
/// ratio within floating-point round-off of 1 lands in a neighboring regime
/// and its coefficients can lose precision to cancellation. Callers wanting
/// critical damping must set the ratio to exactly `1.0`; the discontinuity
/// at the boundary is an accepted property of the closed-form evaluation,
/// not something a tolerance band papers over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DampingRegime {
    /// `damping_ratio == 1`: fastest non-oscillating return to the target.
    Critical,
    /// `damping_ratio > 1`: two real decay modes, approaches the target
    /// asymptotically.
    Overdamped,
    /// `damping_ratio < 1`: oscillates about the target inside a decaying
    /// envelope.
    Underdamped,
}

impl DampingRegime {
    /// Classifies a damping ratio into its regime.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn classify(damping_ratio: f64) -> Self {
        if damping_ratio == 1.0 {
            Self::Critical
        } else if damping_ratio > 1.0 {
            Self::Overdamped
        } else {
            Self::Underdamped
        }
    }
}

/// The step response of a damped harmonic oscillator.
///
/// The value is `0` for all times before `start_time` and rises toward `1`
/// with the dynamics selected by `damping_ratio`. At `start_time` the value
/// is exactly `0` with initial slope `initial_velocity`, in units of the
/// full step per time unit.
///
/// `omega` must be positive: a zero natural frequency divides by zero in
/// several branches and the resulting non-finite values propagate to the
/// caller, following IEEE semantics rather than a guard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringResponse {
    pub start_time: f64,
    /// Natural frequency of the undamped system, radians per time unit.
    pub omega: f64,
    pub damping_ratio: f64,
    pub initial_velocity: f64,
}

impl SpringResponse {
    #[must_use]
    pub fn new(start_time: f64, omega: f64, damping_ratio: f64, initial_velocity: f64) -> Self {
        Self {
            start_time,
            omega,
            damping_ratio,
            initial_velocity,
        }
    }

    /// The regime this response evaluates in.
    #[must_use]
    pub fn regime(&self) -> DampingRegime {
        DampingRegime::classify(self.damping_ratio)
    }

    /// The undamped period `2π / omega`.
    #[must_use]
    pub fn response(&self) -> f64 {
        2.0 * PI / self.omega
    }
}

impl Motion for SpringResponse {
    /// Evaluates the step response at time `t`.
    ///
    /// Before `start_time` the system has not been excited and the result
    /// is exactly `0` in every regime.
    fn value(&self, t: f64) -> f64 {
        let tau = t - self.start_time;
        if tau < 0.0 {
            return 0.0;
        }

        let omega = self.omega;
        let zeta = self.damping_ratio;
        let v0 = self.initial_velocity;

        // Homogeneous solution g with g(0) = -1 and g'(0) = v0, so that
        // 1 + g steps from 0 toward 1.
        let g = match self.regime() {
            DampingRegime::Critical => {
                let c1 = -1.0;
                let c2 = v0 - omega;
                (c1 + c2 * tau) * (-omega * tau).exp()
            }
            DampingRegime::Overdamped => {
                let root = (zeta * zeta - 1.0).sqrt();
                let s1 = omega * (-zeta + root);
                let s2 = omega * (-zeta - root);
                let c1 = (-s2 - v0) / (s2 - s1);
                let c2 = (s1 + v0) / (s2 - s1);
                c1 * (s1 * tau).exp() + c2 * (s2 * tau).exp()
            }
            DampingRegime::Underdamped => {
                let a = -omega * zeta;
                let b = omega * (1.0 - zeta * zeta).sqrt();
                let c1 = -1.0;
                let c2 = (v0 + a) / b;
                c1 * (a * tau).exp() * (b * tau).cos() + c2 * (a * tau).exp() * (b * tau).sin()
            }
        };

        1.0 + g
    }

    /// Evaluates the analytic time derivative of the step response.
    ///
    /// Unlike [`value`](Motion::value), no pre-start masking applies: the
    /// formula value is returned for all times, including `t < start_time`.
    /// The asymmetry is part of the contract; callers that want a masked
    /// derivative must gate on `start_time` themselves.
    fn velocity(&self, t: f64) -> f64 {
        let tau = t - self.start_time;

        let omega = self.omega;
        let zeta = self.damping_ratio;
        let v0 = self.initial_velocity;

        match self.regime() {
            DampingRegime::Critical => {
                let c1 = -1.0;
                let c2 = v0 - omega;
                (c2 - omega * c1 - omega * c2 * tau) * (-omega * tau).exp()
            }
            DampingRegime::Overdamped => {
                let root = (zeta * zeta - 1.0).sqrt();
                let s1 = omega * (-zeta + root);
                let s2 = omega * (-zeta - root);
                let c1 = (-s2 - v0) / (s2 - s1);
                let c2 = (s1 + v0) / (s2 - s1);
                c1 * s1 * (s1 * tau).exp() + c2 * s2 * (s2 * tau).exp()
            }
            DampingRegime::Underdamped => {
                // Amplitude/phase form of the same solution; equals the
                // termwise derivative of the sin/cos form in `value`.
                let a = -omega * zeta;
                let b = omega * (1.0 - zeta * zeta).sqrt();
                let c2 = (v0 + a) / b;
                let theta = c2.atan() + PI;
                (1.0 + c2 * c2).sqrt()
                    * (a * tau).exp()
                    * (a * (b * tau + theta).cos() - b * (b * tau + theta).sin())
            }
        }
    }

    fn settling_duration(&self) -> f64 {
        settling::settling_duration(self, settling::DEFAULT_ALPHA, settling::DEFAULT_EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    fn springs_in_each_regime() -> [SpringResponse; 3] {
        [
            SpringResponse::new(1.0, 2.0 * PI, 0.3, 2.0),
            SpringResponse::new(1.0, 2.0 * PI, 1.0, 2.0),
            SpringResponse::new(1.0, 2.0 * PI, 2.5, 2.0),
        ]
    }

    #[test]
    fn classifies_regimes_exactly() {
        assert_eq!(DampingRegime::classify(1.0), DampingRegime::Critical);
        assert_eq!(DampingRegime::classify(1.5), DampingRegime::Overdamped);
        assert_eq!(DampingRegime::classify(0.5), DampingRegime::Underdamped);

        // Values within round-off of 1 stay in their neighboring regime.
        assert_eq!(
            DampingRegime::classify(1.0 + 1e-15),
            DampingRegime::Overdamped
        );
        assert_eq!(
            DampingRegime::classify(1.0 - 1e-15),
            DampingRegime::Underdamped
        );
    }

    #[test]
    fn masks_values_before_start() {
        for spring in springs_in_each_regime() {
            for epsilon in [1e-9, 0.5, 10.0] {
                assert_eq!(spring.value(spring.start_time - epsilon), 0.0);
            }
        }
    }

    #[test]
    fn starts_at_zero_in_every_regime() {
        for spring in springs_in_each_regime() {
            assert_abs_diff_eq!(spring.value(spring.start_time), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn velocity_is_not_masked_before_start() {
        // The derivative deliberately keeps returning the formula value
        // before the start time, while `value` clamps to zero.
        let spring = SpringResponse::new(0.0, 2.0 * PI, 0.5, 0.0);

        assert_eq!(spring.value(-1.0), 0.0);
        assert_relative_eq!(spring.velocity(-1.0), 125.218_429_023_662_61, epsilon = 1e-9);
    }

    #[test]
    fn initial_slope_matches_initial_velocity() {
        for spring in springs_in_each_regime() {
            assert_abs_diff_eq!(
                spring.velocity(spring.start_time),
                spring.initial_velocity,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn golden_underdamped_value() {
        let spring = SpringResponse::new(0.0, 2.0 * PI, 0.1, 0.0);

        assert_abs_diff_eq!(spring.value(1.0), 0.468_464_876_272_828, epsilon = 1e-6);
        assert_abs_diff_eq!(spring.velocity(1.0), -0.106_085_225_304_324, epsilon = 1e-6);
    }

    #[test]
    fn regimes_agree_near_critical_damping() {
        // Approaching critical damping from either side converges to the
        // critical formula; agreement is numeric, not exact.
        for v0 in [0.0, 3.0] {
            let critical = SpringResponse::new(0.0, 2.0 * PI, 1.0, v0);
            let under = SpringResponse::new(0.0, 2.0 * PI, 0.999, v0);
            let over = SpringResponse::new(0.0, 2.0 * PI, 1.001, v0);

            for i in 0..=60 {
                let t = f64::from(i) * 0.05;
                assert_abs_diff_eq!(under.value(t), critical.value(t), epsilon = 1e-3);
                assert_abs_diff_eq!(over.value(t), critical.value(t), epsilon = 1e-3);
                assert_abs_diff_eq!(under.velocity(t), critical.velocity(t), epsilon = 5e-3);
                assert_abs_diff_eq!(over.velocity(t), critical.velocity(t), epsilon = 5e-3);
            }
        }
    }

    #[test]
    fn underdamped_matches_amplitude_phase_form() {
        // The sin/cos evaluation in `value` and the amplitude/phase form
        // that `velocity` differentiates are the same solution.
        for response in [1.0, 2.0, 4.5] {
            for zeta in [0.0, 0.2, 0.5, 0.8] {
                for v0 in [-5.0, -1.0, 0.0, 1.0, 5.0] {
                    let omega = 2.0 * PI / response;
                    let spring = SpringResponse::new(0.0, omega, zeta, v0);

                    let a = -omega * zeta;
                    let b = omega * (1.0 - zeta * zeta).sqrt();
                    let c2 = (v0 + a) / b;
                    let theta = c2.atan() + PI;

                    for i in 0..=20 {
                        let t = f64::from(i) * 0.5;
                        let phase_form =
                            1.0 + (1.0 + c2 * c2).sqrt() * (a * t).exp() * (b * t + theta).cos();
                        assert_abs_diff_eq!(spring.value(t), phase_form, epsilon = 1e-10);
                    }
                }
            }
        }
    }

    #[test]
    fn zero_omega_propagates_nan() {
        // omega == 0 divides by zero in the underdamped coefficients; the
        // non-finite result must reach the caller unguarded.
        let spring = SpringResponse::new(0.0, 0.0, 0.5, 0.0);

        assert!(spring.value(1.0).is_nan());
    }

    #[test]
    fn sample_is_elementwise_value() {
        let spring = SpringResponse::new(0.0, 2.0 * PI, 0.5, 0.0);
        let times = ndarray::array![-1.0, 0.0, 0.5, 1.0];

        let values = spring.sample(&times);
        let velocities = spring.sample_velocity(&times);

        assert_eq!(values.len(), times.len());
        for i in 0..times.len() {
            assert_relative_eq!(values[i], spring.value(times[i]));
            assert_relative_eq!(velocities[i], spring.velocity(times[i]));
        }
    }

    #[test]
    fn response_is_undamped_period() {
        let spring = SpringResponse::new(0.0, 2.0 * PI, 0.5, 0.0);
        assert_relative_eq!(spring.response(), 1.0);
    }
}
