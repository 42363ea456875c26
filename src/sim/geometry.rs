//! Planar segment geometry
//!
//! Pure functions over points and finite line segments. All degenerate cases
//! are policy, not failure: parallel segments simply have no intersection,
//! and distances against an absent point compare as "infinitely far".

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::FAR;

/// A finite line segment between two points.
///
/// Undirected for intersection purposes; directed (start `a`, far end `b`)
/// where sensor-ray semantics care about the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Midpoint of the segment
    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        self.a + 0.5 * (self.b - self.a)
    }
}

/// Intersection of two finite segments.
///
/// Solves the standard parametric 2x2 system. A zero denominator means the
/// segments are parallel or colinear and yields no intersection; otherwise
/// the crossing counts only when both parameters lie in [0,1] inclusive,
/// i.e. it falls within both segments rather than their infinite extensions.
pub fn segment_intersection(p: &Segment, q: &Segment) -> Option<Vec2> {
    let d1 = p.b - p.a;
    let d2 = q.b - q.a;

    let denominator = d2.y * d1.x - d2.x * d1.y;
    if denominator == 0.0 {
        return None;
    }

    let ua = (d2.x * (p.a.y - q.a.y) - d2.y * (p.a.x - q.a.x)) / denominator;
    let ub = (d1.x * (p.a.y - q.a.y) - d1.y * (p.a.x - q.a.x)) / denominator;
    if !(0.0..=1.0).contains(&ua) || !(0.0..=1.0).contains(&ub) {
        return None;
    }

    Some(p.a + ua * d1)
}

/// Distance from an optional point to `b`, or [`FAR`] when the point is
/// absent, so nearest-point comparisons degrade gracefully.
#[inline]
pub fn distance_or_far(a: Option<Vec2>, b: Vec2) -> f32 {
    match a {
        Some(a) => a.distance(b),
        None => FAR,
    }
}

/// Rotate `p` about `pivot` by `degrees`.
pub fn rotate_about(p: Vec2, pivot: Vec2, degrees: f32) -> Vec2 {
    let (s, c) = degrees.to_radians().sin_cos();
    let d = p - pivot;
    Vec2::new(d.x * c - d.y * s, d.x * s + d.y * c) + pivot
}
