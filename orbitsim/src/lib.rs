pub mod error;
pub mod simulation;
pub mod configuration;
#[cfg(feature = "viewer")]
pub mod visualization;
pub mod benchmark;

pub use error::SimError;

pub use simulation::states::{Body, NVec2, Rgb};
pub use simulation::trail::Trail;
pub use simulation::params::{Parameters, G, AU, DAY, MAX_TRAIL_LENGTH};
pub use simulation::engine::{Engine, UpdateOrder};
pub use simulation::forces::NewtonianGravity;
pub use simulation::system::Simulation;
pub use simulation::scenario::{Scenario, solar_system, circular_orbit_speed, orbital_period};

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};

#[cfg(feature = "viewer")]
pub use visualization::viewer2d::run_2d;

pub use benchmark::benchmark::bench_step;
