//! 2D vector math used by the physics core
//!
//! Positions, velocities and accelerations are all `NVec2` (an nalgebra
//! `Vector2<f64>`). Addition, subtraction, scalar multiplication / division
//! and `magnitude()` (Euclidean norm) come straight from nalgebra and always
//! produce new values. [`VecExt`] adds the normalization the force law relies
//! on: the zero vector normalizes to itself instead of to NaN.

use nalgebra::Vector2;

pub type NVec2 = Vector2<f64>;

/// Normalization helper for [`NVec2`]
pub trait VecExt {
    /// Unit vector in the same direction, or zero if the magnitude is exactly zero
    fn normalized(&self) -> Self;
}

impl VecExt for NVec2 {
    #[inline]
    fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            return NVec2::zeros();
        }
        self / mag
    }
}
