//! High-level runtime engine settings
//!
//! Selects how bodies are advanced within a single step

use serde::Deserialize;

/// Order in which forces are evaluated and bodies integrated during `step()`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateOrder {
    /// Every net force is computed from the pre-step snapshot, then every body is integrated
    #[default]
    #[serde(rename = "simultaneous")]
    Simultaneous,

    /// Bodies are integrated one at a time, so later bodies see earlier bodies' new positions.
    /// Order dependent, reproduces trajectories of a naive one-pass update loop
    #[serde(rename = "sequential")]
    Sequential,
}

#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub update_order: UpdateOrder,
}
