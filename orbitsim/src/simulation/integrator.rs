//! Fixed-step time integration for a single body
//!
//! Semi-implicit (symplectic) Euler: velocity first, then position from the
//! updated velocity. Swapping the two updates gives explicit Euler, which
//! spirals planets outward.

use super::states::{Body, NVec2};

impl Body {
    /// Advance this body by `dt` under a constant net `force`, then record the new
    /// position in the trail
    pub fn integrate(&mut self, force: NVec2, dt: f64) {
        // a = F / m, mass is validated > 0 at construction
        let a = force / self.m;

        // Kick: v_n+1 = v_n + dt * a_n
        self.v += dt * a;

        // Drift: x_n+1 = x_n + dt * v_n+1
        self.x += dt * self.v;

        self.trail.push(self.x);
    }
}
