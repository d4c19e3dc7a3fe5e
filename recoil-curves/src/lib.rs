pub mod compose;
pub mod duration;
pub mod parameters;
pub mod ramp;
pub mod settling;
pub mod spring;

pub use ramp::LinearRamp;
pub use spring::{DampingRegime, SpringResponse};
