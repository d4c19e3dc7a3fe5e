//! Scores candidate spring parameters against a recorded dataset.
//!
//! The "recording" is synthesized from a known spring, so the best
//! candidate should be the one sharing its damping ratio.

use std::f64::consts::PI;

use ndarray::Array1;
use recoil_core::{
    Motion,
    data::{Recording, rmse},
};
use recoil_curves::SpringResponse;
use recoil_plot::PlotApp;

fn main() {
    let times = Array1::linspace(0.0, 3.0, 301);
    let omega = 2.0 * PI;

    let truth = SpringResponse::new(0.0, omega, 0.35, 0.0);
    let recorded: Recording = times.iter().map(|&t| (t, truth.value(t))).collect();

    let candidates = [0.15, 0.25, 0.35, 0.5, 0.8];
    let mut best: Option<(f64, SpringResponse)> = None;

    println!("{:>6}  {:>12}  {:>12}", "ζ", "mean |err|", "rmse");
    for zeta in candidates {
        let candidate = SpringResponse::new(0.0, omega, zeta, 0.0);
        let synthesized: Recording = times.iter().map(|&t| (t, candidate.value(t))).collect();

        let mean_abs = recorded
            .mean_abs_error(&synthesized)
            .expect("recordings are non-empty");
        let rms = rmse(&recorded.values(), &synthesized.values());

        println!("{zeta:>6.2}  {mean_abs:>12.6}  {rms:>12.6}");

        if best.is_none_or(|(score, _)| rms < score) {
            best = Some((rms, candidate));
        }
    }

    let (_, fitted) = best.expect("at least one candidate");

    PlotApp::new()
        .add_recording("recorded", &recorded)
        .add_motion("best fit", &fitted, &times)
        .run("Fit error")
        .unwrap();
}
