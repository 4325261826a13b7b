//! Error type shared by the simulation core and the scenario loader

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Mass must be finite and strictly positive, `integrate` divides by it
    #[error("invalid mass {0}: bodies need a finite, strictly positive mass")]
    InvalidMass(f64),

    #[error("invalid time step {0}: must be finite and > 0")]
    InvalidTimeStep(f64),

    #[error("invalid gravitational constant {0}: must be finite and > 0")]
    InvalidGravitationalConstant(f64),

    /// A config vector did not have exactly two components
    #[error("body {body}: `{field}` needs 2 components, got {len}")]
    InvalidVector {
        body: usize,
        field: &'static str,
        len: usize,
    },

    /// Net force overflowed, usually two bodies passing through each other
    #[error("non-finite net force on body {index} at step {step}")]
    NonFiniteForce { index: usize, step: u64 },

    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
