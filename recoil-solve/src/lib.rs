pub mod bisection;
pub mod cubic;
pub mod newton;
