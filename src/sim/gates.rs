//! Sequential reward gates
//!
//! Gates must be crossed strictly in index order; a crossed gate stays
//! crossed until an explicit reset. Skipped prerequisites are business
//! logic, never errors.

use super::geometry::{Segment, segment_intersection};
use crate::consts::{FAR, GATE_REWARD, GATE_REWARD_STEP, STEP_PENALTY};

/// Distance and heading hint toward the closest gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateQuery {
    /// Distance from the car front to the closest gate's start point
    pub distance: f32,
    /// atan2 angle from that gate's midpoint to the car front, radians
    pub angle: f32,
}

/// Distance/angle from the skeleton's front point to the nearest gate.
///
/// "Nearest" compares against each gate's start endpoint under strict
/// less-than, so the first gate found wins ties. Crossing progress is
/// irrelevant here; this is a heading hint for an external policy.
pub fn nearest_gate(gates: &[Segment], skeleton: &Segment) -> GateQuery {
    let front = skeleton.a;
    let mut query = GateQuery {
        distance: FAR,
        angle: 0.0,
    };
    for gate in gates {
        let d = front.distance(gate.a);
        if d < query.distance {
            let mid = gate.midpoint();
            query = GateQuery {
                distance: d,
                angle: (front.y - mid.y).atan2(front.x - mid.x),
            };
        }
    }
    query
}

/// Tracks strictly-ordered gate crossings for one run.
#[derive(Debug, Clone)]
pub struct GateTracker {
    progress: Vec<bool>,
}

impl GateTracker {
    /// All gates uncrossed. `gate_count` must match the track's gate list;
    /// validating that is the constructing caller's job.
    pub fn new(gate_count: usize) -> Self {
        Self {
            progress: vec![false; gate_count],
        }
    }

    /// Per-gate crossing flags, same order as the gate list
    pub fn progress(&self) -> &[bool] {
        &self.progress
    }

    /// Number of gates crossed so far
    pub fn crossed(&self) -> usize {
        self.progress.iter().filter(|&&p| p).count()
    }

    pub fn reset(&mut self) {
        self.progress.fill(false);
    }

    /// Score one tick of the car's skeleton against the gates.
    ///
    /// Baseline is the per-tick step penalty. Each gate in index order is
    /// skipped when its predecessor is uncrossed (gate 0 exempt), when it is
    /// already crossed, or when the skeleton does not intersect it. A
    /// first-time crossing marks the gate and pays `GATE_REWARD` plus the
    /// per-index step. There is no early exit: every gate crossed this tick
    /// is marked, and the last one's reward stands.
    pub fn reward(&mut self, gates: &[Segment], skeleton: &Segment) -> f32 {
        let mut reward = STEP_PENALTY;
        for (i, gate) in gates.iter().enumerate() {
            if i > 0 && !self.progress[i - 1] {
                continue;
            }
            if self.progress[i] {
                continue;
            }
            if segment_intersection(skeleton, gate).is_none() {
                continue;
            }
            self.progress[i] = true;
            reward = GATE_REWARD + GATE_REWARD_STEP * i as f32;
            log::debug!("gate {i} crossed");
        }
        reward
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn vertical_gates() -> Vec<Segment> {
        [0.3f32, 0.5, 0.7]
            .iter()
            .map(|&x| Segment::new(Vec2::new(x, 0.0), Vec2::new(x, 1.0)))
            .collect()
    }

    /// Horizontal skeleton crossing x = `at`.
    fn skeleton_across(at: f32) -> Segment {
        Segment::new(Vec2::new(at - 0.05, 0.5), Vec2::new(at + 0.05, 0.5))
    }

    #[test]
    fn test_gate_out_of_order_is_ignored() {
        let gates = vertical_gates();
        let mut tracker = GateTracker::new(gates.len());

        // Gate 1 before gate 0: no credit
        let reward = tracker.reward(&gates, &skeleton_across(0.5));
        assert_eq!(reward, STEP_PENALTY);
        assert_eq!(tracker.progress(), &[false, false, false]);
    }

    #[test]
    fn test_gates_pay_in_sequence() {
        let gates = vertical_gates();
        let mut tracker = GateTracker::new(gates.len());

        assert_eq!(tracker.reward(&gates, &skeleton_across(0.3)), 100.0);
        assert_eq!(tracker.progress(), &[true, false, false]);

        assert_eq!(tracker.reward(&gates, &skeleton_across(0.5)), 110.0);
        assert_eq!(tracker.progress(), &[true, true, false]);

        assert_eq!(tracker.reward(&gates, &skeleton_across(0.7)), 120.0);
        assert_eq!(tracker.crossed(), 3);
    }

    #[test]
    fn test_crossed_gate_pays_only_once() {
        let gates = vertical_gates();
        let mut tracker = GateTracker::new(gates.len());

        tracker.reward(&gates, &skeleton_across(0.3));
        let again = tracker.reward(&gates, &skeleton_across(0.3));
        assert_eq!(again, STEP_PENALTY);
        assert_eq!(tracker.progress(), &[true, false, false]);
    }

    #[test]
    fn test_missed_gate_is_step_penalty() {
        let gates = vertical_gates();
        let mut tracker = GateTracker::new(gates.len());
        let reward = tracker.reward(&gates, &skeleton_across(0.1));
        assert_eq!(reward, STEP_PENALTY);
    }

    #[test]
    fn test_double_cross_in_one_tick_last_gate_wins() {
        // A skeleton long enough to span gates 0 and 1 at once. Both are
        // marked crossed, and the reward reflects only the later gate; this
        // pins down the no-early-exit, last-write-wins behavior.
        let gates = vertical_gates();
        let mut tracker = GateTracker::new(gates.len());

        let long = Segment::new(Vec2::new(0.25, 0.5), Vec2::new(0.55, 0.5));
        let reward = tracker.reward(&gates, &long);
        assert_eq!(tracker.progress(), &[true, true, false]);
        assert_eq!(reward, 110.0);
    }

    #[test]
    fn test_reset_clears_progress() {
        let gates = vertical_gates();
        let mut tracker = GateTracker::new(gates.len());
        tracker.reward(&gates, &skeleton_across(0.3));
        assert_eq!(tracker.crossed(), 1);

        tracker.reset();
        assert_eq!(tracker.progress(), &[false, false, false]);

        // Sequence restarts from gate 0
        assert_eq!(tracker.reward(&gates, &skeleton_across(0.5)), STEP_PENALTY);
    }

    #[test]
    fn test_nearest_gate_by_start_point() {
        let gates = vertical_gates();
        let skeleton = Segment::new(Vec2::ZERO, Vec2::new(0.0, 0.02));

        let query = nearest_gate(&gates, &skeleton);
        assert!((query.distance - 0.3).abs() < 1e-6);
        // Angle points from the gate midpoint (0.3, 0.5) back at the front
        let expected = (0.0f32 - 0.5).atan2(0.0 - 0.3);
        assert!((query.angle - expected).abs() < 1e-6);
    }

    #[test]
    fn test_nearest_gate_with_no_gates_is_far() {
        let skeleton = Segment::new(Vec2::ZERO, Vec2::new(0.0, 0.02));
        let query = nearest_gate(&[], &skeleton);
        assert_eq!(query.distance, FAR);
        assert_eq!(query.angle, 0.0);
    }
}
