//! Track geometry
//!
//! Walls and gates are authored in normalized unit-square coordinates and are
//! immutable for the lifetime of a run. The simulation operates on the
//! normalized data directly; `rescale` exists purely for the render boundary
//! and caches an output-space projection that is fully recomputed from the
//! source data on every call.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Segment;

/// Output surface dimensions; projects normalized geometry into output space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn project_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x * self.width, p.y * self.height)
    }

    #[inline]
    pub fn project(&self, s: &Segment) -> Segment {
        Segment::new(self.project_point(s.a), self.project_point(s.b))
    }
}

/// Normalized track source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackLayout {
    /// Collision surfaces
    pub walls: Vec<Segment>,
    /// Reward checkpoints; index order defines the required crossing sequence
    pub gates: Vec<Segment>,
}

impl TrackLayout {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The built-in demo circuit: a rectangular ring lane between an outer
    /// boundary and an inner block, with four gates walked counterclockwise
    /// from the default start position.
    pub fn default_circuit() -> Self {
        let seg = |ax: f32, ay: f32, bx: f32, by: f32| {
            Segment::new(Vec2::new(ax, ay), Vec2::new(bx, by))
        };
        Self {
            walls: vec![
                // Outer boundary
                seg(0.02, 0.02, 0.98, 0.02),
                seg(0.98, 0.02, 0.98, 0.98),
                seg(0.98, 0.98, 0.02, 0.98),
                seg(0.02, 0.98, 0.02, 0.02),
                // Inner block
                seg(0.20, 0.25, 0.80, 0.25),
                seg(0.80, 0.25, 0.80, 0.75),
                seg(0.80, 0.75, 0.20, 0.75),
                seg(0.20, 0.75, 0.20, 0.25),
            ],
            gates: vec![
                seg(0.02, 0.40, 0.20, 0.40), // left lane, heading up
                seg(0.50, 0.02, 0.50, 0.25), // top lane, heading right
                seg(0.80, 0.60, 0.98, 0.60), // right lane, heading down
                seg(0.50, 0.75, 0.50, 0.98), // bottom lane, heading left
            ],
        }
    }
}

/// Track geometry plus its cached output-space projection.
#[derive(Debug, Clone)]
pub struct Track {
    layout: TrackLayout,
    scaled_walls: Vec<Segment>,
    scaled_gates: Vec<Segment>,
}

impl Track {
    pub fn new(layout: TrackLayout) -> Self {
        // The cache starts as the identity projection (unit viewport)
        let scaled_walls = layout.walls.clone();
        let scaled_gates = layout.gates.clone();
        Self {
            layout,
            scaled_walls,
            scaled_gates,
        }
    }

    /// Normalized wall segments (simulation space)
    pub fn walls(&self) -> &[Segment] {
        &self.layout.walls
    }

    /// Normalized gate segments, in crossing order
    pub fn gates(&self) -> &[Segment] {
        &self.layout.gates
    }

    pub fn gate_count(&self) -> usize {
        self.layout.gates.len()
    }

    /// Recompute the output-space cache for a new surface size.
    ///
    /// Idempotent: always derived from the normalized source data, so a
    /// second call with a different viewport fully replaces the first.
    pub fn rescale(&mut self, viewport: Viewport) {
        self.scaled_walls = self.layout.walls.iter().map(|s| viewport.project(s)).collect();
        self.scaled_gates = self.layout.gates.iter().map(|s| viewport.project(s)).collect();
    }

    /// Output-space walls from the last `rescale` (render boundary)
    pub fn scaled_walls(&self) -> &[Segment] {
        &self.scaled_walls
    }

    /// Output-space gates from the last `rescale` (render boundary)
    pub fn scaled_gates(&self) -> &[Segment] {
        &self.scaled_gates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_json_round_trip() {
        let layout = TrackLayout::default_circuit();
        let json = serde_json::to_string(&layout).unwrap();
        let back = TrackLayout::from_json(&json).unwrap();
        assert_eq!(layout, back);
    }

    #[test]
    fn test_default_circuit_is_normalized() {
        let layout = TrackLayout::default_circuit();
        assert!(!layout.walls.is_empty());
        assert!(layout.gates.len() >= 2);
        for s in layout.walls.iter().chain(&layout.gates) {
            for p in [s.a, s.b] {
                assert!((0.0..=1.0).contains(&p.x));
                assert!((0.0..=1.0).contains(&p.y));
            }
        }
    }

    #[test]
    fn test_rescale_projects_both_axes() {
        let layout = TrackLayout {
            walls: vec![Segment::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.5))],
            gates: vec![Segment::new(Vec2::new(0.5, 0.5), Vec2::new(0.5, 1.0))],
        };
        let mut track = Track::new(layout);

        track.rescale(Viewport::new(200.0, 100.0));
        assert_eq!(track.scaled_walls()[0].b, Vec2::new(200.0, 50.0));
        assert_eq!(track.scaled_gates()[0].a, Vec2::new(100.0, 50.0));

        // A second rescale fully replaces the first
        track.rescale(Viewport::new(10.0, 10.0));
        assert_eq!(track.scaled_walls()[0].b, Vec2::new(10.0, 5.0));
        // Normalized source data is untouched
        assert_eq!(track.walls()[0].b, Vec2::new(1.0, 0.5));
    }
}
