//! Fixed-step time integrator for the gravity system
//!
//! Semi-implicit (symplectic) Euler: the acceleration comes from the current
//! positions, the velocity is kicked with it, and the position is drifted
//! with the *new* velocity. Two sequencings are provided, selected by
//! [`UpdateOrder`]:
//! - snapshot: every acceleration is computed before any body moves
//! - sequential: body `i` is fully advanced before body `i + 1` is looked at,
//!   so later bodies see earlier bodies' new positions within the same step

use crate::configuration::config::UpdateOrder;

use super::forces::Acceleration;
use super::states::System;
use super::vector::NVec2;

/// Advance the system by one step of size `dt` using the given update order
pub fn step<F: Acceleration>(sys: &mut System, forces: &F, order: UpdateOrder, dt: f64) {
    match order {
        UpdateOrder::Snapshot => semi_implicit_euler(sys, forces, dt),
        UpdateOrder::Sequential => semi_implicit_euler_sequential(sys, forces, dt),
    }
}

/// Semi-implicit Euler with all accelerations taken from one snapshot of positions
pub fn semi_implicit_euler<F: Acceleration>(sys: &mut System, forces: &F, dt: f64) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    // a_n from x_n for every body, before anything moves
    let mut accels = vec![NVec2::zeros(); n];
    forces.acceleration(&sys.bodies, &mut accels);

    for (b, a) in sys.bodies.iter_mut().zip(accels) {
        // Kick: v_n+1 = v_n + dt * a_n
        b.a = a;
        b.v += b.a * dt;

        // Drift with the new velocity: x_n+1 = x_n + dt * v_n+1
        b.x += b.v * dt;
    }

    sys.t += dt;
}

/// Semi-implicit Euler applied body by body, in collection order
pub fn semi_implicit_euler_sequential<F: Acceleration>(sys: &mut System, forces: &F, dt: f64) {
    for i in 0..sys.bodies.len() {
        // reads positions of bodies 0..i that were already moved this step
        let a = forces.acceleration_on(i, &sys.bodies);

        let b = &mut sys.bodies[i];
        b.a = a;
        b.v += b.a * dt;
        b.x += b.v * dt;
    }

    sys.t += dt;
}
