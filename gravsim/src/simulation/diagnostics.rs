//! Conserved-quantity diagnostics
//!
//! Used by tests and by the headless runner to report drift. The potential
//! energy skips overlapping pairs, matching the force cutoff in
//! [`NewtonianGravity`](super::forces::NewtonianGravity).

use super::states::System;

pub fn kinetic_energy(sys: &System) -> f64 {
    sys.bodies
        .iter()
        .map(|b| 0.5 * b.m * b.v.norm_squared())
        .sum()
}

#[allow(non_snake_case)]
pub fn potential_energy(sys: &System, G: f64) -> f64 {
    let bodies = &sys.bodies;
    let mut u = 0.0;

    // each unordered pair once
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (bi, bj) = (&bodies[i], &bodies[j]);
            let d = (bj.x - bi.x).magnitude();
            if d < bi.radius + bj.radius || d == 0.0 {
                continue;
            }
            u -= G * bi.m * bj.m / d;
        }
    }
    u
}

#[allow(non_snake_case)]
pub fn total_energy(sys: &System, G: f64) -> f64 {
    kinetic_energy(sys) + potential_energy(sys, G)
}

/// z-component of the total angular momentum about the origin
pub fn angular_momentum(sys: &System) -> f64 {
    sys.bodies
        .iter()
        .map(|b| b.m * (b.x.x * b.v.y - b.x.y * b.v.x))
        .sum()
}

/// `true` if every position, velocity and acceleration is finite
pub fn is_finite(sys: &System) -> bool {
    sys.bodies
        .iter()
        .all(|b| b.x.iter().chain(b.v.iter()).chain(b.a.iter()).all(|c| c.is_finite()))
}
