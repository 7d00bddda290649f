//! Force / acceleration contributors for the gravity engine
//!
//! Defines the acceleration trait the integrator is driven by and the direct
//! O(n^2) Newtonian gravity term with its overlap cutoff

use super::states::Body;
use super::vector::{NVec2, VecExt};

/// Trait for acceleration sources operating on a slice of bodies
///
/// Implementations compute the acceleration felt by one body given the
/// positions in `bodies`; [`Acceleration::acceleration`] fills a whole buffer
/// from a single snapshot of the slice
pub trait Acceleration {
    /// Acceleration felt by `bodies[i]`
    fn acceleration_on(&self, i: usize, bodies: &[Body]) -> NVec2;

    /// Write the acceleration of every body into `out[i]`
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec2]) {
        for (i, a) in out.iter_mut().enumerate().take(bodies.len()) {
            *a = self.acceleration_on(i, bodies);
        }
    }
}

/// 2D Newtonian gravity, direct summation over every other body
///
/// Pairs closer than the sum of their radii are skipped entirely: overlapping
/// bodies do not attract each other, which also keeps the inverse-square law
/// away from its singularity. Every body's acceleration is summed on its own;
/// no equal-and-opposite shortcut is taken
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl NewtonianGravity {
    #[allow(non_snake_case)]
    pub fn new(G: f64) -> Self {
        Self { G }
    }

    /// Acceleration `target` feels from `source`, or zero if they overlap
    #[inline]
    pub fn pull(&self, target: &Body, source: &Body) -> NVec2 {
        // direction points from the target towards the source
        let direction = source.x - target.x;
        let distance = direction.magnitude();

        // coincident point masses (zero radii) have no defined direction either
        if distance < target.radius + source.radius || distance == 0.0 {
            return NVec2::zeros();
        }

        let strength = self.G * source.m / (distance * distance);
        direction.normalized() * strength
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration_on(&self, i: usize, bodies: &[Body]) -> NVec2 {
        let target = &bodies[i];
        let mut a = NVec2::zeros();

        for (j, source) in bodies.iter().enumerate() {
            if i == j {
                continue;
            }
            a += self.pull(target, source);
        }
        a
    }
}
