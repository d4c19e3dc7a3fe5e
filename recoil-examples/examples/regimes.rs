//! Plots the step response in each damping regime next to a linear ramp.

use std::f64::consts::PI;

use ndarray::Array1;
use recoil_curves::{LinearRamp, SpringResponse};
use recoil_plot::PlotApp;

fn main() {
    let times = Array1::linspace(-0.2, 3.0, 641);
    let omega = 2.0 * PI;

    let underdamped = SpringResponse::new(0.0, omega, 0.2, 0.0);
    let critical = SpringResponse::new(0.0, omega, 1.0, 0.0);
    let overdamped = SpringResponse::new(0.0, omega, 2.0, 0.0);
    let ramp = LinearRamp::new(0.0, 1.0);

    PlotApp::new()
        .add_motion("underdamped (ζ = 0.2)", &underdamped, &times)
        .add_motion("critical (ζ = 1)", &critical, &times)
        .add_motion("overdamped (ζ = 2)", &overdamped, &times)
        .add_motion("linear ramp", &ramp, &times)
        .run("Damping regimes")
        .unwrap();
}
