//! Car kinematics
//!
//! A simplified jerk/friction/turn-rate model, not real vehicle dynamics:
//! throttle feeds a scalar acceleration, friction damps velocity every tick,
//! and steering authority scales with speed. The car also carries its sensor
//! rig and the sticky crash flag the rig raises.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Segment, rotate_about};
use super::sensors::SensorRig;
use crate::tuning::{SimConfig, Tuning};

/// Control input for a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Controls {
    /// Steering command in [-1, 1], negative turns left
    pub steer: f32,
    /// Throttle command in [-1, 1], negative reverses
    pub throttle: f32,
}

/// The car's scalar driving state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarState {
    /// Top-left corner of the unrotated body, normalized
    pub position: Vec2,
    pub velocity: f32,
    pub acceleration: f32,
    /// Heading in degrees, unbounded (trig wraps it implicitly)
    pub rotation: f32,
}

impl CarState {
    fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: 0.0,
            acceleration: 0.0,
            rotation: 0.0,
        }
    }
}

/// A single simulated car: pose, body extents, sensors and crash flag.
#[derive(Debug, Clone)]
pub struct Car {
    /// Construction-time start position; `reset` returns here, not to
    /// wherever the car happened to be
    origin: Vec2,
    pub state: CarState,
    /// Set by sensor casting on wall contact; cleared only by `reset`
    pub crashed: bool,
    sensors: SensorRig,
    tuning: Tuning,
}

impl Car {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            origin: config.start_position,
            state: CarState::at(config.start_position),
            crashed: false,
            sensors: SensorRig::new(),
            tuning: config.tuning,
        }
    }

    pub fn sensors(&self) -> &SensorRig {
        &self.sensors
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Body pivot: the point the car rotates about, a quarter of the way
    /// down the centerline.
    fn pivot(&self) -> Vec2 {
        self.state.position + Vec2::new(self.tuning.car_width / 2.0, self.tuning.car_height / 4.0)
    }

    /// Restore the construction-time pose and clear the crash flag.
    ///
    /// The sensor rig is rebuilt from scratch so no reading storage is ever
    /// shared with a previous run.
    pub fn reset(&mut self) {
        self.state = CarState::at(self.origin);
        self.crashed = false;
        self.sensors = SensorRig::new();
    }

    /// Integrate one tick of kinematics from the given control input.
    ///
    /// Crash state is deliberately not consulted here; reacting to a crash
    /// (reset-and-continue) is the driver's job.
    pub fn advance(&mut self, input: &Controls) {
        let t = &self.tuning;
        let s = &mut self.state;

        s.acceleration = if input.throttle != 0.0 {
            t.jerk * input.throttle
        } else {
            0.0
        };
        s.velocity = ((s.velocity + s.acceleration) * t.friction)
            .clamp(t.max_reverse_speed, t.max_forward_speed);

        // No steering authority while effectively stationary
        if input.steer != 0.0 && s.velocity.abs() > t.min_steer_speed {
            s.rotation += input.steer * t.turning_rate * s.velocity.abs();
        }

        // Lateral advance is half the longitudinal rate; behavioral parity
        // with the handling model the circuit was tuned against
        let r = s.rotation.to_radians();
        s.position.x += s.velocity * r.sin() / 2.0;
        s.position.y -= s.velocity * r.cos();
    }

    /// Re-derive the sensor rays for the current pose and cast them against
    /// the walls. Wall contact within the collision radius sets the sticky
    /// crash flag.
    pub fn cast_sensors(&mut self, walls: &[Segment]) {
        self.sensors.update_rays(
            self.state.position,
            self.state.rotation,
            self.pivot(),
            self.tuning.car_width,
            self.tuning.car_height,
            self.tuning.max_sensor_length,
        );
        if self.sensors.cast(walls, self.tuning.collision_radius) {
            self.crashed = true;
        }
    }

    /// Front-to-rear centerline, rotated with the body. Used for gate
    /// crossing and nearest-gate queries.
    pub fn skeleton(&self) -> Segment {
        let p = self.state.position;
        let half_w = self.tuning.car_width / 2.0;
        let pivot = self.pivot();
        let front = Vec2::new(p.x + half_w, p.y);
        let rear = Vec2::new(p.x + half_w, p.y + self.tuning.car_height);
        Segment::new(
            rotate_about(front, pivot, self.state.rotation),
            rotate_about(rear, pivot, self.state.rotation),
        )
    }
}
