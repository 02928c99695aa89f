//! Complex number and quaternion algebra.

#[macro_use]
mod macros;

pub mod complex;
pub mod num;
pub mod quaternion;
pub mod random;

pub use complex::{Complex, Complexf};
pub use num::Float;
pub use quaternion::{Quaternion, Quaternionf};
