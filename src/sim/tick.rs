//! Simulation context and per-tick update
//!
//! One explicit context object owns the car, the track and the gate
//! tracker; whatever drives the loop holds the context. A tick is atomic:
//! kinematics, then sensors, then gate scoring, with the observation
//! returned as one value.

use glam::Vec2;

use super::car::{Car, CarState, Controls};
use super::gates::{GateQuery, GateTracker, nearest_gate};
use super::geometry::Segment;
use super::track::{Track, TrackLayout};
use crate::consts::SENSOR_COUNT;
use crate::tuning::SimConfig;

/// Everything the policy and renderer collaborators need from one tick.
#[derive(Debug, Clone)]
pub struct Observation {
    /// Sensor ray segments, normalized (project through a
    /// [`Viewport`](super::track::Viewport) for output space)
    pub rays: [Segment; SENSOR_COUNT],
    /// Nearest wall intersection per ray, normalized; `None` = nothing in reach
    pub hits: [Option<Vec2>; SENSOR_COUNT],
    /// Front-to-rear centerline
    pub skeleton: Segment,
    pub state: CarState,
    pub crashed: bool,
    pub reward: f32,
    pub nearest_gate: GateQuery,
    /// Gates crossed so far this run
    pub gates_crossed: usize,
}

impl Observation {
    /// Hit coordinates flattened for a policy input layer. Absent hits
    /// encode as the (0, 0) sentinel.
    pub fn sensor_features(&self) -> [f32; SENSOR_COUNT * 2] {
        let mut features = [0.0; SENSOR_COUNT * 2];
        for (i, hit) in self.hits.iter().enumerate() {
            if let Some(p) = hit {
                features[i * 2] = p.x;
                features[i * 2 + 1] = p.y;
            }
        }
        features
    }
}

/// The simulation context: car, track and gate progress, advanced one tick
/// at a time by an external driver.
#[derive(Debug, Clone)]
pub struct Simulation {
    car: Car,
    track: Track,
    gates: GateTracker,
}

impl Simulation {
    pub fn new(config: SimConfig, layout: TrackLayout) -> Self {
        let track = Track::new(layout);
        let gates = GateTracker::new(track.gate_count());
        Self {
            car: Car::new(&config),
            track,
            gates,
        }
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Mutable track access for the render boundary (`rescale`)
    pub fn track_mut(&mut self) -> &mut Track {
        &mut self.track
    }

    pub fn gate_progress(&self) -> &[bool] {
        self.gates.progress()
    }

    /// Advance one tick: integrate kinematics, cast sensors against the
    /// walls, score the skeleton against the gates.
    pub fn tick(&mut self, input: &Controls) -> Observation {
        self.car.advance(input);
        self.car.cast_sensors(self.track.walls());

        let skeleton = self.car.skeleton();
        let reward = self.gates.reward(self.track.gates(), &skeleton);

        Observation {
            rays: *self.car.sensors().rays(),
            hits: *self.car.sensors().hits(),
            skeleton,
            state: self.car.state,
            crashed: self.car.crashed,
            reward,
            nearest_gate: nearest_gate(self.track.gates(), &skeleton),
            gates_crossed: self.gates.crossed(),
        }
    }

    /// Full synchronous state replacement: the car returns to its
    /// construction-time position, gate progress clears. Track geometry is
    /// untouched.
    pub fn reset(&mut self) {
        log::debug!(
            "reset after {} of {} gates",
            self.gates.crossed(),
            self.track.gate_count()
        );
        self.car.reset();
        self.gates.reset();
    }
}
