//! Circular orbit initial velocities
//!
//! The velocity only depends on the current relative position of the body
//! and its primary and on the primary's mass; other bodies are ignored. A
//! body with several primaries (a moon around a planet around a star) gets
//! the sum of one circular velocity per primary. That superposition is only
//! approximately stable.

use bevy::log::debug;

use crate::configuration::config::OrbitConvention;

use super::states::Body;
use super::vector::NVec2;

/// Velocity putting `body` on a circular orbit around `primary`
///
/// Uses the reference axis convention `(sin(angle), cos(angle)) * speed`,
/// with `angle` the polar angle of `body` seen from `primary`. Coincident
/// positions give a non-finite result.
#[allow(non_snake_case)]
pub fn orbit_velocity(body: &Body, primary: &Body, G: f64) -> NVec2 {
    orbit_velocity_with(body, primary, G, OrbitConvention::Reference)
}

/// [`orbit_velocity`] with an explicit axis convention
#[allow(non_snake_case)]
pub fn orbit_velocity_with(body: &Body, primary: &Body, G: f64, convention: OrbitConvention) -> NVec2 {
    let delta = body.x - primary.x;
    let angle = delta.y.atan2(delta.x);
    let distance = delta.magnitude();
    let speed = (G * primary.m / distance).sqrt();

    debug!("orbit velocity: angle = {angle:.6} rad, distance = {distance:.3}, speed = {speed:.6}");

    match convention {
        OrbitConvention::Reference => NVec2::new(angle.sin() * speed, angle.cos() * speed),
        OrbitConvention::Tangential => NVec2::new(-angle.sin() * speed, angle.cos() * speed),
    }
}

/// Sum of the circular orbit velocities of `body` around each of `primaries`
#[allow(non_snake_case)]
pub fn superposed_orbit_velocity<'a, I>(body: &Body, primaries: I, G: f64, convention: OrbitConvention) -> NVec2
where
    I: IntoIterator<Item = &'a Body>,
{
    primaries
        .into_iter()
        .map(|p| orbit_velocity_with(body, p, G, convention))
        .fold(NVec2::zeros(), |acc, v| acc + v)
}
