//! Checks the analytic derivative against a central finite difference of
//! the value across the whole parameter space.

use approx::assert_abs_diff_eq;
use recoil_core::Motion;
use recoil_curves::parameters::SpringParameters;

fn finite_difference(motion: &impl Motion, t: f64) -> f64 {
    let delta = 1e-6;
    (motion.value(t + delta) - motion.value(t - delta)) / (2.0 * delta)
}

#[test]
fn velocity_matches_finite_difference_of_value() {
    let responses = [1.0, 2.0, 3.0];
    let damping_ratios = [0.2, 0.8, 1.0, 1.5, 3.0];
    let initial_velocities = [-10.0, -5.0, -1.0, 0.0, 1.0, 5.0, 10.0];

    for response in responses {
        for damping_ratio in damping_ratios {
            for v0 in initial_velocities {
                let spring =
                    SpringParameters::new(response, damping_ratio, v0).curve(0.0);

                // The grid starts after the start time: the finite
                // difference straddles the pre-start mask there, while the
                // derivative is deliberately unmasked.
                for i in 1..=100 {
                    let t = f64::from(i) * 0.1;

                    assert_abs_diff_eq!(
                        spring.velocity(t),
                        finite_difference(&spring, t),
                        epsilon = 1e-5
                    );
                }
            }
        }
    }
}
