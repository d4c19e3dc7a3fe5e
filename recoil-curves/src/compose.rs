//! Composing spring curves: mapping unit responses onto value ranges and
//! retargeting a still-running animation.
//!
//! Every curve here treats time the same way as the spring it wraps: the
//! wrapped response's own `start_time` applies, and retargeting curves
//! evaluate their predecessor at `t + start_offset`, where `start_offset`
//! is the retarget instant on the predecessor's clock.

use recoil_core::Motion;

use crate::spring::SpringResponse;

/// Smallest value span used when normalizing a handoff velocity.
const MIN_SPAN: f64 = 0.001;

/// Affine map of a unit step response onto a concrete value range.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub curve: SpringResponse,
    pub from: f64,
    pub to: f64,
}

impl Motion for Transition {
    fn value(&self, t: f64) -> f64 {
        self.from + (self.to - self.from) * self.curve.value(t)
    }

    fn velocity(&self, t: f64) -> f64 {
        (self.to - self.from) * self.curve.velocity(t)
    }

    fn settling_duration(&self) -> f64 {
        self.curve.settling_duration()
    }
}

/// A new target taking over from a still-running predecessor.
///
/// The value blends from wherever the predecessor currently is toward the
/// new target, so there is no jump at the takeover instant. The
/// predecessor keeps evolving underneath until the new curve's weight
/// reaches one.
pub struct Composed {
    pub previous: Box<dyn Motion>,
    /// The takeover instant on the predecessor's clock.
    pub start_offset: f64,
    pub curve: SpringResponse,
    pub to: f64,
}

impl Motion for Composed {
    fn value(&self, t: f64) -> f64 {
        let previous = self.previous.value(t + self.start_offset);
        previous + (self.to - previous) * self.curve.value(t)
    }

    fn velocity(&self, t: f64) -> f64 {
        let previous_value = self.previous.value(t + self.start_offset);
        self.previous.velocity(t + self.start_offset) * (1.0 - self.curve.value(t))
            + (self.to - previous_value) * self.curve.velocity(t)
    }

    fn settling_duration(&self) -> f64 {
        (self.previous.settling_duration() - self.start_offset)
            .max(self.curve.settling_duration())
    }
}

/// A retarget that carries the predecessor's velocity into the new curve.
///
/// At construction the predecessor's value and velocity at the takeover
/// instant are captured; the velocity, normalized by the new value span,
/// is added to the new curve's initial velocity. The result then evaluates
/// as a plain [`Transition`] from the captured value.
pub struct VelocityMatched {
    transition: Transition,
}

impl VelocityMatched {
    #[must_use]
    pub fn new(previous: &dyn Motion, start_offset: f64, curve: SpringResponse, to: f64) -> Self {
        let from = previous.value(start_offset);

        let span = to - from;
        let span = if span.abs() < MIN_SPAN { MIN_SPAN } else { span };
        let normalized_velocity = previous.velocity(start_offset) / span;

        let curve = SpringResponse {
            initial_velocity: curve.initial_velocity + normalized_velocity,
            ..curve
        };

        Self {
            transition: Transition { curve, from, to },
        }
    }

    /// The transition actually being evaluated, with the adjusted initial
    /// velocity.
    #[must_use]
    pub fn transition(&self) -> &Transition {
        &self.transition
    }
}

impl Motion for VelocityMatched {
    fn value(&self, t: f64) -> f64 {
        self.transition.value(t)
    }

    fn velocity(&self, t: f64) -> f64 {
        self.transition.velocity(t)
    }

    fn settling_duration(&self) -> f64 {
        self.transition.settling_duration()
    }
}
