use std::time::Instant;

use crate::error::SimError;
use crate::simulation::engine::{Engine, UpdateOrder};
use crate::simulation::params::{Parameters, AU};
use crate::simulation::states::{Body, NVec2};
use crate::simulation::system::Simulation;

/// Helper to build a ring of `n` equal-mass bodies around an anchor
fn make_bodies(n: usize) -> Result<Vec<Body>, SimError> {
    let mut bodies = Vec::with_capacity(n + 1);
    bodies.push(Body::new(NVec2::zeros(), NVec2::zeros(), 1.98892e30)?.anchor());

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(
            (i_f * 0.37).sin() * 2.0 * AU,
            (i_f * 0.13).cos() * 2.0 * AU,
        );
        bodies.push(Body::new(x, NVec2::zeros(), 6.0e24)?);
    }

    Ok(bodies)
}

/// Time `Simulation::step` for a range of body counts under both update orders.
/// Prints CSV so the output can be pasted into a spreadsheet
pub fn bench_step() -> Result<(), SimError> {
    let ns = [5, 50, 100, 200, 400, 800, 1600];

    println!("N,simultaneous_ms,sequential_ms");

    for n in ns {
        // Small n: average over many steps to smooth noise
        let steps = if n <= 200 { 50 } else { 5 };

        let mut per_order = [0.0; 2];
        for (k, update_order) in [UpdateOrder::Simultaneous, UpdateOrder::Sequential].into_iter().enumerate() {
            let mut sim = Simulation::new(make_bodies(n)?, Parameters::default(), Engine { update_order })?;

            // Warm-up
            sim.step()?;

            let t0 = Instant::now();
            sim.run(steps)?;
            per_order[k] = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;
        }

        println!("{},{:.6},{:.6}", n + 1, per_order[0], per_order[1]);
    }

    Ok(())
}
