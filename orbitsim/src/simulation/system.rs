//! The simulation: owns every body and advances them one fixed step at a time
//!
//! `step()` takes `&mut self`, so no renderer can read a half-updated frame.
//! Everything else is read-only access for the renderer and diagnostics.

use log::{debug, info, warn};

use crate::error::SimError;
use super::engine::{Engine, UpdateOrder};
use super::forces::NewtonianGravity;
use super::params::Parameters;
use super::states::{Body, NVec2};

#[derive(Debug, Clone)]
pub struct Simulation {
    bodies: Vec<Body>, // identity is the index, fixed for the whole run
    parameters: Parameters,
    engine: Engine,
    gravity: NewtonianGravity,
    forces: Vec<NVec2>, // forces of the last completed step
    scratch: Vec<NVec2>, // forces of the step in progress
    t: f64, // simulated time, seconds
    steps: u64,
}

impl Simulation {
    pub fn new(mut bodies: Vec<Body>, parameters: Parameters, engine: Engine) -> Result<Self, SimError> {
        let dt = parameters.time_step;
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimError::InvalidTimeStep(dt));
        }
        let g = parameters.g;
        if !g.is_finite() || g <= 0.0 {
            return Err(SimError::InvalidGravitationalConstant(g));
        }

        for b in bodies.iter_mut() {
            b.trail.set_capacity(parameters.max_trail_length);
        }

        let anchors = bodies.iter().filter(|b| b.anchor).count();
        match anchors {
            0 => warn!("no anchor body, distances to anchor will not be reported"),
            1 => {}
            n => warn!("{n} anchor bodies, distances are reported to the first one"),
        }
        info!(
            "simulation: {} bodies, dt = {} s, trail length {}, {:?} update order",
            bodies.len(),
            dt,
            parameters.max_trail_length,
            engine.update_order
        );

        let n = bodies.len();
        Ok(Self {
            bodies,
            gravity: NewtonianGravity { g },
            parameters,
            engine,
            forces: vec![NVec2::zeros(); n],
            scratch: vec![NVec2::zeros(); n],
            t: 0.0,
            steps: 0,
        })
    }

    /// Advance every body by one `time_step`.
    ///
    /// An error means the step did not complete for every body; the run should
    /// be treated as failed.
    pub fn step(&mut self) -> Result<(), SimError> {
        let dt = self.parameters.time_step;

        match self.engine.update_order {
            UpdateOrder::Simultaneous => {
                // all forces from the pre-step snapshot, nothing moves until every force is known
                self.gravity.accumulate_forces(&self.bodies, &mut self.scratch);
                if let Some(index) = self.scratch.iter().position(|f| !is_finite(f)) {
                    return Err(SimError::NonFiniteForce { index, step: self.steps });
                }
                for (b, f) in self.bodies.iter_mut().zip(self.scratch.iter()) {
                    b.integrate(*f, dt);
                }
            }
            UpdateOrder::Sequential => {
                // body i sees bodies 0..i at their already-updated positions
                for i in 0..self.bodies.len() {
                    let f = self.gravity.net_force(&self.bodies, i);
                    if !is_finite(&f) {
                        return Err(SimError::NonFiniteForce { index: i, step: self.steps });
                    }
                    self.scratch[i] = f;
                    self.bodies[i].integrate(f, dt);
                }
            }
        }

        std::mem::swap(&mut self.forces, &mut self.scratch);
        self.update_anchor_distances();

        self.t += dt;
        self.steps += 1;
        debug!("step {} done, t = {} s", self.steps, self.t);
        Ok(())
    }

    /// Run `n` steps, stopping at the first failure
    pub fn run(&mut self, n: u64) -> Result<(), SimError> {
        for _ in 0..n {
            self.step()?;
        }
        Ok(())
    }

    // post-step positions on both sides
    fn update_anchor_distances(&mut self) {
        let Some(a) = self.anchor_index() else {
            return;
        };
        let anchor_x = self.bodies[a].x;
        for (i, b) in self.bodies.iter_mut().enumerate() {
            b.distance_to_anchor = if i == a {
                None
            } else {
                Some((anchor_x - b.x).norm())
            };
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, i: usize) -> Option<&Body> {
        self.bodies.get(i)
    }

    /// Index of the first body flagged as anchor
    pub fn anchor_index(&self) -> Option<usize> {
        self.bodies.iter().position(|b| b.anchor)
    }

    pub fn anchor(&self) -> Option<&Body> {
        self.anchor_index().map(|i| &self.bodies[i])
    }

    /// Current distance from body `i` to the anchor, computed on demand.
    /// `None` for the anchor itself, an unknown index, or when no anchor exists
    pub fn distance_to_anchor(&self, i: usize) -> Option<f64> {
        let a = self.anchor_index()?;
        if a == i {
            return None;
        }
        let b = self.bodies.get(i)?;
        Some(b.distance_to(&self.bodies[a]))
    }

    /// Net forces applied in the last completed step, zeros before the first one.
    /// A failed step leaves this untouched
    pub fn last_forces(&self) -> &[NVec2] {
        &self.forces
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn step_count(&self) -> u64 {
        self.steps
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().fold(NVec2::zeros(), |p, b| p + b.momentum())
    }

    pub fn total_energy(&self) -> f64 {
        let kinetic: f64 = self.bodies.iter().map(Body::kinetic_energy).sum();
        kinetic + self.gravity.potential_energy(&self.bodies)
    }
}

fn is_finite(v: &NVec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}
