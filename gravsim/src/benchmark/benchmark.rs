use std::time::Instant;

use crate::configuration::config::UpdateOrder;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::step;
use crate::simulation::params::G;
use crate::simulation::states::{Body, System};
use crate::simulation::vector::NVec2;

/// Build a manual System of size `n` spread over a disc, no overlaps
fn make_system(n: usize) -> System {
    let bodies = (0..n)
        .map(|i| {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            let x = NVec2::new(
                (i_f * 0.37).sin() * 5.0e5,
                (i_f * 0.13).cos() * 5.0e5,
            );
            Body::new(x, 1.0e12, 1.0)
        })
        .collect();

    System::new(bodies)
}

/// Time one integrator step for a range of n, both update orders
/// Paste output directly into a spreadsheet to graph
pub fn bench_step() {
    let gravity = NewtonianGravity::new(G);
    let dt = 0.75;

    println!("N,snapshot_ms,sequential_ms");

    for n in [50, 100, 200, 400, 800, 1600, 3200] {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 400 { 20 } else { 2 };
        let sys_template = make_system(n);

        let mut row = Vec::with_capacity(2);
        for order in [UpdateOrder::Snapshot, UpdateOrder::Sequential] {
            let mut sys = sys_template.clone();

            // Warm-up
            step(&mut sys, &gravity, order, dt);

            let t0 = Instant::now();
            for _ in 0..steps {
                step(&mut sys, &gravity, order, dt);
            }
            row.push(t0.elapsed().as_secs_f64() * 1000.0 / steps as f64);
        }

        println!("{},{:.6},{:.6}", n, row[0], row[1]);
    }
}
