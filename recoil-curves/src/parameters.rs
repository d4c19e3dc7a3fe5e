//! Parameter families for specifying a spring and conversions between them.
//!
//! The same physical system can be described in design space (undamped
//! period plus damping ratio) or by Newtonian constants (mass, stiffness,
//! viscous damping). The representations are bijective for positive mass
//! and stiffness.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::spring::SpringResponse;

/// Smallest allowed undamped period.
const MIN_RESPONSE: f64 = 1e-5;

/// Design-space spring parameters: undamped period, damping ratio, and
/// initial velocity.
///
/// The raw fields are private because the accessors clamp: `response` is
/// floored at `1e-5` and `damping_ratio` at `0`, which keeps interactively
/// supplied values (sliders, recorded presets) from producing a divide by
/// zero or negative damping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringParameters {
    response: f64,
    damping_ratio: f64,
    pub initial_velocity: f64,
}

impl SpringParameters {
    #[must_use]
    pub fn new(response: f64, damping_ratio: f64, initial_velocity: f64) -> Self {
        Self {
            response,
            damping_ratio,
            initial_velocity,
        }
    }

    /// The undamped period, floored at `1e-5`.
    #[must_use]
    pub fn response(&self) -> f64 {
        self.response.max(MIN_RESPONSE)
    }

    pub fn set_response(&mut self, response: f64) {
        self.response = response;
    }

    /// The damping ratio, floored at `0`.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping_ratio.max(0.0)
    }

    pub fn set_damping_ratio(&mut self, damping_ratio: f64) {
        self.damping_ratio = damping_ratio;
    }

    /// Natural frequency `2π / response`.
    #[must_use]
    pub fn omega(&self) -> f64 {
        2.0 * PI / self.response()
    }

    /// The step response these parameters describe, excited at `start_time`.
    #[must_use]
    pub fn curve(&self, start_time: f64) -> SpringResponse {
        SpringResponse::new(
            start_time,
            self.omega(),
            self.damping_ratio(),
            self.initial_velocity,
        )
    }
}

/// Newtonian spring constants: mass, spring stiffness, and viscous damping
/// coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalSpring {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
    pub initial_velocity: f64,
}

impl PhysicalSpring {
    /// Natural frequency `sqrt(stiffness / mass)`.
    #[must_use]
    pub fn omega(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio `damping / (2 sqrt(stiffness mass))`.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// The step response these constants describe, excited at `start_time`.
    ///
    /// Exact inverse of [`SpringResponse::physical`] for positive mass and
    /// stiffness.
    #[must_use]
    pub fn curve(&self, start_time: f64) -> SpringResponse {
        SpringResponse::new(
            start_time,
            self.omega(),
            self.damping_ratio(),
            self.initial_velocity,
        )
    }
}

impl SpringResponse {
    /// The Newtonian constants equivalent to this response at the given
    /// mass: `stiffness = mass ω²`, `damping = ζ 2 sqrt(stiffness mass)`.
    ///
    /// `start_time` plays no role; the initial velocity is carried through
    /// unchanged and does not influence stiffness or damping.
    #[must_use]
    pub fn physical(&self, mass: f64) -> PhysicalSpring {
        let stiffness = mass * self.omega * self.omega;
        let damping = self.damping_ratio * 2.0 * (stiffness * mass).sqrt();

        PhysicalSpring {
            mass,
            stiffness,
            damping,
            initial_velocity: self.initial_velocity,
        }
    }
}

impl From<PhysicalSpring> for SpringParameters {
    /// Converts Newtonian constants to design-space parameters.
    ///
    /// The mass is floored at `1e-5` and the damping ratio is capped at
    /// critical, matching how platform spring APIs hand these constants to
    /// design tools.
    fn from(physical: PhysicalSpring) -> Self {
        let response = 2.0 * PI / (physical.stiffness / physical.mass.max(1e-5)).sqrt();
        let damping_ratio = physical.damping_ratio().min(1.0);

        SpringParameters::new(response, damping_ratio, physical.initial_velocity)
    }
}
