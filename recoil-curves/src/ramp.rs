//! A saturating linear ramp, the simplest motion curve.

use recoil_core::Motion;
use serde::{Deserialize, Serialize};

/// A linear rise from 0 to 1 over a fixed duration.
///
/// `duration == 0` divides by zero for a sample landing exactly on
/// `start_time`; the IEEE `0/0` result propagates rather than being
/// special-cased.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRamp {
    pub start_time: f64,
    pub duration: f64,
}

impl LinearRamp {
    #[must_use]
    pub fn new(start_time: f64, duration: f64) -> Self {
        Self {
            start_time,
            duration,
        }
    }
}

impl Motion for LinearRamp {
    fn value(&self, t: f64) -> f64 {
        let tau = t - self.start_time;
        if tau < 0.0 {
            0.0
        } else if tau > self.duration {
            1.0
        } else {
            tau / self.duration
        }
    }

    fn velocity(&self, t: f64) -> f64 {
        let tau = t - self.start_time;
        if tau < 0.0 || tau > self.duration {
            0.0
        } else {
            1.0 / self.duration
        }
    }

    fn settling_duration(&self) -> f64 {
        self.duration
    }
}
