//! Decision policies
//!
//! The simulation core is policy-agnostic: anything that can turn an
//! observation into control input can drive the car. Learning algorithms
//! live behind this seam, outside the crate; the implementations here are
//! baselines for demos and tests.

mod chase;
mod random;

pub use chase::ChasePolicy;
pub use random::RandomPolicy;

use crate::sim::{Controls, Observation};

/// A driving decision source.
pub trait Policy {
    /// Produce control input for the next tick.
    fn decide(&mut self, obs: &Observation) -> Controls;

    /// Feed back the reward earned since the last decision.
    fn reinforce(&mut self, reward: f32, obs: &Observation);
}
