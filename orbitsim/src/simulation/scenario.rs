//! Build fully-initialized simulations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a ready-to-step
//! `Simulation`, or builds the default inner solar system directly.
//! Also holds the circular-orbit helpers used to set up stable orbits.

use std::f64::consts::PI;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::SimError;
use super::engine::Engine;
use super::params::{Parameters, AU};
use super::states::{Body, NVec2};
use super::system::Simulation;

/// Speed of a circular orbit at distance `r` around `central_mass`: `sqrt(g * M / r)`
pub fn circular_orbit_speed(central_mass: f64, r: f64, g: f64) -> f64 {
    (g * central_mass / r).sqrt()
}

/// Period of a circular orbit of radius `r`: `2 pi sqrt(r^3 / (g * M))`
pub fn orbital_period(central_mass: f64, r: f64, g: f64) -> f64 {
    2.0 * PI * (r.powi(3) / (g * central_mass)).sqrt()
}

/// Sun, Mercury, Venus, Earth and Mars on the x axis with their mean orbital speeds
pub fn solar_system() -> Result<Vec<Body>, SimError> {
    let sun = Body::new(NVec2::zeros(), NVec2::zeros(), 1.98892e30)?
        .named("Sun")
        .with_radius(30.0)
        .with_color([255, 255, 0])
        .anchor();

    let earth = Body::new(NVec2::new(-1.0 * AU, 0.0), NVec2::new(0.0, 29.783 * 1000.0), 5.9742e24)?
        .named("Earth")
        .with_radius(16.0)
        .with_color([0, 0, 255]);

    let mercury = Body::new(NVec2::new(0.387 * AU, 0.0), NVec2::new(0.0, 47.4 * 1000.0), 3.3e23)?
        .named("Mercury")
        .with_radius(12.0)
        .with_color([169, 169, 169]);

    let venus = Body::new(NVec2::new(0.723 * AU, 0.0), NVec2::new(0.0, -35.02 * 1000.0), 4.8685e24)?
        .named("Venus")
        .with_radius(14.0)
        .with_color([255, 255, 255]);

    let mars = Body::new(NVec2::new(-1.524 * AU, 0.0), NVec2::new(0.0, 24.077 * 1000.0), 6.39e23)?
        .named("Mars")
        .with_radius(12.0)
        .with_color([255, 0, 0]);

    Ok(vec![sun, earth, mercury, venus, mars])
}

pub struct Scenario;

impl Scenario {
    /// The default solar system with default parameters and engine
    pub fn default_simulation() -> Result<Simulation, SimError> {
        Simulation::new(solar_system()?, Parameters::default(), Engine::default())
    }

    pub fn build(cfg: ScenarioConfig) -> Result<Simulation, SimError> {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| build_body(i, bc))
            .collect::<Result<Vec<Body>, SimError>>()?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            g: p_cfg.g,
            time_step: p_cfg.time_step,
            max_trail_length: p_cfg.max_trail_length,
        };

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            update_order: cfg.engine.update_order,
        };

        Simulation::new(bodies, parameters, engine)
    }
}

fn build_body(i: usize, bc: &BodyConfig) -> Result<Body, SimError> {
    let x = vec2(i, "x", &bc.x)?;
    let v = vec2(i, "v", &bc.v)?;

    let mut body = Body::new(x, v, bc.m)?
        .with_radius(bc.radius)
        .with_color(bc.color);
    if let Some(name) = &bc.name {
        body = body.named(name.clone());
    }
    if bc.anchor {
        body = body.anchor();
    }
    Ok(body)
}

fn vec2(body: usize, field: &'static str, xs: &[f64]) -> Result<NVec2, SimError> {
    match xs {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(SimError::InvalidVector { body, field, len: xs.len() }),
    }
}
