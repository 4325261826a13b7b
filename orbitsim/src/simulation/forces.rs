//! Gravitational force contributors for the orbit engine
//!
//! `Body::pairwise_force` is Newton's law for a single pair,
//! `NewtonianGravity` sums it over every other body

use super::states::{Body, NVec2};

impl Body {
    /// Force this body feels due to `other`: `g * m1 * m2 / r^2`, pointing toward `other`.
    ///
    /// Coincident bodies (r == 0) get a zero vector instead of a division by zero.
    /// This is unphysical and only guards the degenerate case.
    pub fn pairwise_force(&self, other: &Body, g: f64) -> NVec2 {
        // r points from self to other, so self is pulled along +r
        let r = other.x - self.x;
        let r2 = r.norm_squared();
        if r2 == 0.0 {
            return NVec2::zeros();
        }
        let dist = r2.sqrt();

        // m1 * m2 grouped so that the force on the other body is bit-for-bit opposite
        let magnitude = g * (self.m * other.m) / r2;

        // unit vector along r, same as (cos(theta), sin(theta)) with theta = atan2(dy, dx)
        (magnitude / dist) * r
    }

    /// Euclidean distance between the two bodies' current positions
    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.x - self.x).norm()
    }
}

/// Direct O(n^2) Newtonian gravity without softening
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl NewtonianGravity {
    /// Net force on `bodies[i]` from every other body. Self is skipped by index
    pub fn net_force(&self, bodies: &[Body], i: usize) -> NVec2 {
        let bi = &bodies[i];
        bodies
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .fold(NVec2::zeros(), |acc, (_, bj)| acc + bi.pairwise_force(bj, self.g))
    }

    /// Net forces on all bodies from the same snapshot, `out[i]` for body `i`
    pub fn accumulate_forces(&self, bodies: &[Body], out: &mut [NVec2]) {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }

        let n = bodies.len();
        // Loop over each unordered pair (i, j) with i < j, equal and opposite
        for i in 0..n {
            for j in (i + 1)..n {
                let f = bodies[i].pairwise_force(&bodies[j], self.g);
                out[i] += f;
                out[j] -= f;
            }
        }
    }

    /// Pairwise potential energy `-g * m1 * m2 / r` over all pairs, coincident pairs skipped
    pub fn potential_energy(&self, bodies: &[Body]) -> f64 {
        let mut u = 0.0;
        for (i, bi) in bodies.iter().enumerate() {
            for bj in &bodies[i + 1..] {
                let r = bi.distance_to(bj);
                if r > 0.0 {
                    u -= self.g * (bi.m * bj.m) / r;
                }
            }
        }
        u
    }
}
