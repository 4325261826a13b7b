//! Core state types for the orbit simulation.
//!
//! `Body` is a point mass in the 2D simulation plane (meters, m/s) plus the
//! display attributes a renderer needs. Physics state is private: it only
//! changes through `Body::integrate` and `Simulation::step`.

use nalgebra::Vector2;

use crate::error::SimError;
use super::params::MAX_TRAIL_LENGTH;
use super::trail::Trail;

pub type NVec2 = Vector2<f64>;

/// Display color, 8-bit RGB
pub type Rgb = [u8; 3];

#[derive(Debug, Clone)]
pub struct Body {
    pub(crate) name: Option<String>, // display label
    pub(crate) x: NVec2, // position
    pub(crate) v: NVec2, // velocity
    pub(crate) m: f64, // mass
    pub(crate) radius: f64, // display radius, not used by the physics
    pub(crate) color: Rgb,
    pub(crate) anchor: bool, // the body others report their distance to
    pub(crate) distance_to_anchor: Option<f64>, // cached after each step
    pub(crate) trail: Trail,
}

impl Body {
    /// Create a body, rejecting masses that are zero, negative or not finite
    pub fn new(x: NVec2, v: NVec2, m: f64) -> Result<Self, SimError> {
        if !m.is_finite() || m <= 0.0 {
            return Err(SimError::InvalidMass(m));
        }
        Ok(Self {
            name: None,
            x,
            v,
            m,
            radius: 1.0,
            color: [255, 255, 255],
            anchor: false,
            distance_to_anchor: None,
            trail: Trail::new(MAX_TRAIL_LENGTH),
        })
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Mark this body as the anchor ("sun")
    pub fn anchor(mut self) -> Self {
        self.anchor = true;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn is_anchor(&self) -> bool {
        self.anchor
    }

    /// Distance to the anchor recorded at the end of the last step.
    /// `None` before the first step, for the anchor itself, or without an anchor
    pub fn distance_to_anchor(&self) -> Option<f64> {
        self.distance_to_anchor
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}
