use ndarray::Array1;

/// A time-parameterized motion curve.
///
/// A `Motion` maps an absolute time to a value and to the value's time
/// derivative. It is the seam between curve producers (spring and ramp
/// responses, composed retargeting curves) and curve consumers (plotting,
/// metrics, animation drivers).
///
/// Implementations must be pure: the same `t` always yields the same value.
/// The trait is object safe, so consumers can hold `Box<dyn Motion>`.
pub trait Motion {
    /// The curve's value at time `t`.
    fn value(&self, t: f64) -> f64;

    /// The curve's time derivative at `t`.
    fn velocity(&self, t: f64) -> f64;

    /// Time from the curve's start after which the value stays within a
    /// fixed tolerance of its target.
    fn settling_duration(&self) -> f64;

    /// Samples the curve at each time in `times`.
    ///
    /// Output index `i` corresponds to input index `i`; no other ordering
    /// contract applies.
    fn sample(&self, times: &Array1<f64>) -> Array1<f64> {
        times.mapv(|t| self.value(t))
    }

    /// Samples the curve's derivative at each time in `times`.
    fn sample_velocity(&self, times: &Array1<f64>) -> Array1<f64> {
        times.mapv(|t| self.velocity(t))
    }
}
