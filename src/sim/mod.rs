//! Deterministic simulation module
//!
//! All driving logic lives here. This module must be pure and deterministic:
//! - One tick of integration per call, no wall-clock input
//! - Stable wall and gate iteration order
//! - No rendering or platform dependencies

pub mod car;
pub mod gates;
pub mod geometry;
pub mod sensors;
pub mod tick;
pub mod track;

pub use car::{Car, CarState, Controls};
pub use gates::{GateQuery, GateTracker, nearest_gate};
pub use geometry::{Segment, distance_or_far, rotate_about, segment_intersection};
pub use sensors::SensorRig;
pub use tick::{Observation, Simulation};
pub use track::{Track, TrackLayout, Viewport};
