//! Frame-driven simulation driver
//!
//! [`Simulation`] owns the bodies and advances them once per external tick:
//! the tick's elapsed time is scaled by `time_scale` and the integrator is
//! run `sub_steps` times with that increment. Rendering and input stay
//! outside; they only read [`Simulation::bodies`] between ticks.

use bevy::log::{info, warn};
use bevy::prelude::Resource;

use super::diagnostics;
use super::forces::NewtonianGravity;
use super::integrator;
use super::params::Parameters;
use super::states::{Body, System};

/// Bevy resource holding the running simulation
///
/// Inserted into the app by the viewer / headless runner; the physics system
/// mutates it once per frame and the render systems read it afterwards
#[derive(Resource, Debug, Clone)]
pub struct Simulation {
    pub parameters: Parameters,
    pub system: System,
    pub gravity: NewtonianGravity,
    diverged: bool, // set once a non-finite state has been reported
}

impl Simulation {
    pub fn new(parameters: Parameters, bodies: Vec<Body>) -> Self {
        let gravity = NewtonianGravity::new(parameters.G);
        Self {
            parameters,
            system: System::new(bodies),
            gravity,
            diverged: false,
        }
    }

    /// Bodies as of the last completed tick
    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    /// Simulated time elapsed so far
    pub fn time(&self) -> f64 {
        self.system.t
    }

    /// Log the body count and the parameters the run uses
    pub fn log_summary(&self) {
        let p = &self.parameters;
        info!(
            "simulation initialized: {} bodies, G = {:e}, {} sub-steps, time scale {}, {:?} updates",
            self.system.bodies.len(),
            p.G,
            p.sub_steps,
            p.time_scale,
            p.update_order,
        );
    }

    /// Integrator increment for a tick of `elapsed` real seconds
    pub fn sub_step_dt(&self, elapsed: f64) -> f64 {
        elapsed * self.parameters.time_scale
    }

    /// One integrator pass with an explicit `dt`
    pub fn step(&mut self, dt: f64) {
        integrator::step(&mut self.system, &self.gravity, self.parameters.update_order, dt);
    }

    /// Advance by one external tick of `elapsed` real seconds
    pub fn tick(&mut self, elapsed: f64) {
        let dt = self.sub_step_dt(elapsed);
        for _ in 0..self.parameters.sub_steps {
            self.step(dt);
        }

        if !self.diverged && !diagnostics::is_finite(&self.system) {
            self.diverged = true;
            warn!("simulation state became non-finite at t = {:.3}", self.system.t);
        }
    }
}
