//! Window-less runner
//!
//! Drives the same `Simulation` resource as the viewer from a Bevy app with
//! `MinimalPlugins`, using a fixed frame time instead of the wall clock, and
//! reports conservation drift when done.

use bevy::app::AppExit;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::simulation::diagnostics::{angular_momentum, total_energy};
use crate::simulation::driver::Simulation;

#[derive(Resource, Debug)]
struct HeadlessRun {
    frames: u64, // frames to simulate
    frame_dt: f64, // fixed elapsed seconds fed to every tick
    frame: u64, // frames done
    energy0: f64, // total energy at t = 0
    momentum0: f64, // angular momentum at t = 0
}

pub fn run_headless(simulation: Simulation, frames: u64, frame_dt: f64) {
    let energy0 = total_energy(&simulation.system, simulation.parameters.G);
    let momentum0 = angular_momentum(&simulation.system);

    App::new()
        .add_plugins((MinimalPlugins, LogPlugin::default()))
        .insert_resource(simulation)
        .insert_resource(HeadlessRun {
            frames,
            frame_dt,
            frame: 0,
            energy0,
            momentum0,
        })
        .add_systems(Startup, announce_system)
        .add_systems(Update, headless_step_system)
        .run();
}

fn announce_system(simulation: Res<Simulation>, run: Res<HeadlessRun>) {
    simulation.log_summary();
    info!(
        "headless run: {} bodies, {} frames of {} s",
        simulation.bodies().len(),
        run.frames,
        run.frame_dt
    );
}

fn headless_step_system(mut run: ResMut<HeadlessRun>, mut simulation: ResMut<Simulation>, mut exit: EventWriter<AppExit>) {
    if run.frame >= run.frames {
        report(&simulation, &run);
        exit.send(AppExit::Success);
        return;
    }

    simulation.tick(run.frame_dt);
    run.frame += 1;

    if run.frame % 600 == 0 {
        debug!("frame {} / {}, t = {:.1}", run.frame, run.frames, simulation.time());
    }
}

fn report(simulation: &Simulation, run: &HeadlessRun) {
    let energy = total_energy(&simulation.system, simulation.parameters.G);
    let momentum = angular_momentum(&simulation.system);

    info!(
        "done: t = {:.1}, energy drift = {:.3e}, angular momentum drift = {:.3e}",
        simulation.time(),
        relative_drift(run.energy0, energy),
        relative_drift(run.momentum0, momentum),
    );

    for (i, b) in simulation.bodies().iter().enumerate() {
        info!("body {i}: x = ({:.3}, {:.3}), v = ({:.5}, {:.5})", b.x.x, b.x.y, b.v.x, b.v.y);
    }
}

fn relative_drift(initial: f64, current: f64) -> f64 {
    if initial == 0.0 {
        return current - initial;
    }
    (current - initial) / initial.abs()
}
