//! Physical constants and numerical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `g`,
//! - fixed integration step `time_step` (seconds),
//! - trail capacity per body
//!
//! `AU` is only used to place bodies in the default scenario.

/// Gravitational constant, m^3 kg^-1 s^-2
pub const G: f64 = 6.67428e-11;

/// Astronomical unit in meters
pub const AU: f64 = 149.6e6 * 1000.0;

/// One day in seconds, the default step
pub const DAY: f64 = 3600.0 * 24.0;

/// Default number of past positions kept per body
pub const MAX_TRAIL_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub time_step: f64, // step size dt, seconds
    pub max_trail_length: usize, // trail capacity per body
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: G,
            time_step: DAY,
            max_trail_length: MAX_TRAIL_LENGTH,
        }
    }
}
