//! Retargets a running spring animation mid-flight, with and without
//! carrying the current velocity into the new curve.

use std::f64::consts::PI;

use ndarray::Array1;
use recoil_curves::{
    SpringResponse,
    compose::{Composed, Transition, VelocityMatched},
};
use recoil_plot::PlotApp;

fn main() {
    let times = Array1::linspace(0.0, 2.5, 501);
    let omega = 2.0 * PI;

    let first = Transition {
        curve: SpringResponse::new(0.0, omega, 0.8, 0.0),
        from: 0.0,
        to: 1.0,
    };

    // Retarget to 0.2 while the first animation is still moving.
    let offset = 0.35;
    let retarget = SpringResponse::new(0.0, omega, 0.6, 0.0);

    let blended = Composed {
        previous: Box::new(first),
        start_offset: offset,
        curve: retarget,
        to: 0.2,
    };
    let matched = VelocityMatched::new(&first, offset, retarget, 0.2);

    PlotApp::new()
        .add_motion("original", &first, &times)
        .add_motion("blended retarget", &blended, &times)
        .add_motion("velocity-matched retarget", &matched, &times)
        .run("Mid-flight retargeting")
        .unwrap();
}
