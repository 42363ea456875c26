//! Gate-chasing autopilot

use std::f32::consts::{PI, TAU};

use super::Policy;
use crate::sim::{Controls, Observation, distance_or_far};

/// Deterministic heuristic driver: steer toward the nearest-gate heading
/// hint, lift off and brake when the front sensor shows a wall close ahead.
/// A demo driver and sanity baseline, not a learner; `reinforce` is a no-op.
#[derive(Debug, Clone)]
pub struct ChasePolicy {
    /// Heading error below which the wheel stays centered, radians
    pub deadband: f32,
    /// Front clearance below which the throttle reverses
    pub caution: f32,
}

impl Default for ChasePolicy {
    fn default() -> Self {
        Self {
            deadband: 0.05,
            caution: 0.04,
        }
    }
}

impl Policy for ChasePolicy {
    fn decide(&mut self, obs: &Observation) -> Controls {
        // Heading as a screen-space angle (y grows downward); rotation 0
        // points straight up
        let r = obs.state.rotation.to_radians();
        let heading = (-r.cos()).atan2(r.sin());

        // The hint points from the gate midpoint at the car; flip it around
        let target = obs.nearest_gate.angle + PI;

        let mut error = target - heading;
        while error > PI {
            error -= TAU;
        }
        while error < -PI {
            error += TAU;
        }

        let steer = if error.abs() < self.deadband {
            0.0
        } else {
            error.signum()
        };

        let clearance = distance_or_far(obs.hits[0], obs.rays[0].a);
        let throttle = if clearance < self.caution { -1.0 } else { 1.0 };

        Controls { steer, throttle }
    }

    fn reinforce(&mut self, _reward: f32, _obs: &Observation) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Simulation, TrackLayout};
    use crate::tuning::SimConfig;

    #[test]
    fn test_steers_toward_first_gate() {
        let mut sim = Simulation::new(SimConfig::default(), TrackLayout::default_circuit());
        let obs = sim.tick(&Controls::default());

        // From the start position the first gate sits up and slightly right
        let mut policy = ChasePolicy::default();
        let c = policy.decide(&obs);
        assert_eq!(c.steer, 1.0);
        assert_eq!(c.throttle, 1.0);
    }

    #[test]
    fn test_closed_loop_reaches_first_gate() {
        let mut sim = Simulation::new(SimConfig::default(), TrackLayout::default_circuit());
        let mut policy = ChasePolicy::default();

        let mut controls = Controls::default();
        for _ in 0..400 {
            let obs = sim.tick(&controls);
            if obs.gates_crossed > 0 {
                break;
            }
            controls = policy.decide(&obs);
        }
        assert!(sim.gate_progress()[0]);
    }

    #[test]
    fn test_brakes_when_wall_ahead() {
        // Park the car close to the top boundary, facing it
        let config = SimConfig {
            start_position: glam::Vec2::new(0.3, 0.05),
            ..Default::default()
        };
        let mut sim = Simulation::new(config, TrackLayout::default_circuit());
        let obs = sim.tick(&Controls::default());

        let clearance = distance_or_far(obs.hits[0], obs.rays[0].a);
        assert!(clearance < 0.04);

        let mut policy = ChasePolicy::default();
        assert_eq!(policy.decide(&obs).throttle, -1.0);
    }
}
