//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – engine options (update order)
//! - [`ParametersConfig`] – step size, trail length and gravitational constant
//! - [`BodyConfig`]       – initial state and display attributes for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario matching these types (SI units):
//!
//! ```yaml
//! engine:
//!   update_order: "simultaneous"   # or "sequential"
//!
//! parameters:
//!   G: 6.67428e-11                 # gravitational constant
//!   time_step: 86400.0             # seconds per step
//!   max_trail_length: 100          # trail points kept per body
//!
//! bodies:
//!   - name: "Sun"
//!     x: [0.0, 0.0]                # meters
//!     v: [0.0, 0.0]                # meters / second
//!     m: 1.98892e30                # kilograms
//!     radius: 30.0                 # display only
//!     color: [255, 255, 0]
//!     anchor: true
//!   - name: "Earth"
//!     x: [-1.496e11, 0.0]
//!     v: [0.0, 29783.0]
//!     m: 5.9742e24
//!     radius: 16.0
//!     color: [0, 0, 255]
//! ```
//!
//! `engine`, `parameters` and every body field except `x`, `v` and `m` are optional.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::SimError;
use crate::simulation::engine::UpdateOrder;
use crate::simulation::params::{G, DAY, MAX_TRAIL_LENGTH};
use crate::simulation::states::Rgb;

/// High-level engine configuration
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub update_order: UpdateOrder, // how bodies are advanced within one step
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    #[serde(rename = "G")]
    pub g: f64,                  // gravitational constant
    pub time_step: f64,          // fixed step size, seconds
    pub max_trail_length: usize, // trail capacity per body
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            g: G,
            time_step: DAY,
            max_trail_length: MAX_TRAIL_LENGTH,
        }
    }
}

fn default_radius() -> f64 {
    1.0
}

fn default_color() -> Rgb {
    [255, 255, 255]
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: Option<String>, // display label
    pub x: Vec<f64>,          // initial position, meters
    pub v: Vec<f64>,          // initial velocity, m/s
    pub m: f64,               // mass, kg
    #[serde(default = "default_radius")]
    pub radius: f64,          // display radius
    #[serde(default = "default_color")]
    pub color: Rgb,
    #[serde(default)]
    pub anchor: bool,         // distances are reported to this body
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, SimError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_body_uses_defaults() {
        let cfg = ScenarioConfig::from_yaml_str(
            "bodies:\n  - x: [1.0, 2.0]\n    v: [0.0, 0.0]\n    m: 5.0\n",
        )
        .unwrap();

        assert_eq!(cfg.engine.update_order, UpdateOrder::Simultaneous);
        assert_eq!(cfg.parameters.g, G);
        assert_eq!(cfg.parameters.time_step, DAY);
        assert_eq!(cfg.parameters.max_trail_length, MAX_TRAIL_LENGTH);

        let b = &cfg.bodies[0];
        assert_eq!(b.x, vec![1.0, 2.0]);
        assert_eq!(b.radius, 1.0);
        assert_eq!(b.color, [255, 255, 255]);
        assert!(!b.anchor);
        assert!(b.name.is_none());
    }

    #[test]
    fn full_scenario_parses() {
        let yaml = r#"
engine:
  update_order: "sequential"
parameters:
  G: 1.0
  time_step: 0.5
  max_trail_length: 7
bodies:
  - name: "Sun"
    x: [0.0, 0.0]
    v: [0.0, 0.0]
    m: 10.0
    radius: 3.0
    color: [255, 255, 0]
    anchor: true
"#;
        let cfg = ScenarioConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.engine.update_order, UpdateOrder::Sequential);
        assert_eq!(cfg.parameters.g, 1.0);
        assert_eq!(cfg.parameters.time_step, 0.5);
        assert_eq!(cfg.parameters.max_trail_length, 7);
        assert_eq!(cfg.bodies[0].name.as_deref(), Some("Sun"));
        assert!(cfg.bodies[0].anchor);
    }

    #[test]
    fn missing_mass_is_a_parse_error() {
        let err = ScenarioConfig::from_yaml_str("bodies:\n  - x: [0.0, 0.0]\n    v: [0.0, 0.0]\n")
            .unwrap_err();
        assert!(matches!(err, SimError::Yaml(_)));
    }

    #[test]
    fn unknown_update_order_is_rejected() {
        let yaml = "engine:\n  update_order: \"rk4\"\nbodies: []\n";
        assert!(ScenarioConfig::from_yaml_str(yaml).is_err());
    }
}
