//! Raceline - a 2D top-down driving simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, sensors, track, reward gates)
//! - `policy`: Decision interface and baseline policies
//! - `tuning`: Data-driven handling and sensing parameters
//!
//! Rendering, input collection and any learning algorithm live outside this
//! crate: a renderer consumes the per-tick [`sim::Observation`] plus an output
//! surface size, and a [`policy::Policy`] turns the same observation into the
//! next tick's control input.

pub mod policy;
pub mod sim;
pub mod tuning;

pub use sim::{Controls, Observation, Simulation};
pub use tuning::{SimConfig, Tuning};

/// Simulation constants
pub mod consts {
    /// Number of distance sensors on the rig
    pub const SENSOR_COUNT: usize = 8;

    /// Reward for a tick that crosses no gate
    pub const STEP_PENALTY: f32 = -0.1;
    /// Base reward for a first-time gate crossing
    pub const GATE_REWARD: f32 = 100.0;
    /// Extra reward per gate index (later gates pay more)
    pub const GATE_REWARD_STEP: f32 = 10.0;
    /// Reward the driver reports when the car hits a wall
    pub const CRASH_PENALTY: f32 = -99.0;
    /// Reward the driver reports when the watchdog resets a stuck car
    pub const STUCK_PENALTY: f32 = -1.0;

    /// Sentinel distance used in nearest-point comparisons when one of the
    /// points is absent
    pub const FAR: f32 = 99_999.0;
}
