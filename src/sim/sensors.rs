//! Sensor rig: eight fixed rays cast against track walls
//!
//! Ray anchors sit on the unrotated body rectangle (center of each edge plus
//! the four corners) and are rotated into the heading frame every tick; the
//! corner rays carry an extra fixed angular offset about their own start
//! point. Readings are recomputed wholesale per tick, never patched.

use glam::Vec2;

use super::geometry::{Segment, distance_or_far, rotate_about, segment_intersection};
use crate::consts::SENSOR_COUNT;

/// A fixed ring of distance sensors around the car body.
#[derive(Debug, Clone)]
pub struct SensorRig {
    rays: [Segment; SENSOR_COUNT],
    hits: [Option<Vec2>; SENSOR_COUNT],
}

impl Default for SensorRig {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorRig {
    pub fn new() -> Self {
        let zero = Segment::new(Vec2::ZERO, Vec2::ZERO);
        Self {
            rays: [zero; SENSOR_COUNT],
            hits: [None; SENSOR_COUNT],
        }
    }

    /// Ray segments from the last `update_rays`, normalized space.
    pub fn rays(&self) -> &[Segment; SENSOR_COUNT] {
        &self.rays
    }

    /// Nearest intersection per ray from the last `cast`; `None` where no
    /// wall was in reach.
    pub fn hits(&self) -> &[Option<Vec2>; SENSOR_COUNT] {
        &self.hits
    }

    /// Lay the eight rays out for the given body pose.
    ///
    /// `position` is the top-left corner of the unrotated body rectangle and
    /// `pivot` the point the body rotates about. Edge-center rays rotate
    /// start and end about the pivot; corner rays rotate their anchor about
    /// the pivot first, then swing the far end about that rotated anchor by
    /// the heading plus their fixed offset.
    pub fn update_rays(
        &mut self,
        position: Vec2,
        rotation: f32,
        pivot: Vec2,
        width: f32,
        height: f32,
        reach: f32,
    ) {
        let (x, y) = (position.x, position.y);
        let spin = |p: Vec2| rotate_about(p, pivot, rotation);
        let corner_ray = |anchor: Vec2, offset: f32| {
            let a = spin(anchor);
            let b = rotate_about(Vec2::new(a.x, a.y - reach), a, rotation + offset);
            Segment::new(a, b)
        };

        self.rays = std::array::from_fn(|i| match i {
            // Front center
            0 => {
                let a = Vec2::new(x + width / 2.0, y);
                let b = Vec2::new(a.x, a.y - reach);
                Segment::new(spin(a), spin(b))
            }
            // Front right corner, +45 degrees off heading
            1 => corner_ray(Vec2::new(x + width, y), 45.0),
            // Right center
            2 => {
                let a = Vec2::new(x + width, y + height / 2.0);
                let b = Vec2::new(a.x + reach, a.y);
                Segment::new(spin(a), spin(b))
            }
            // Rear right corner, +135 degrees
            3 => corner_ray(Vec2::new(x + width, y + height), 135.0),
            // Rear center
            4 => {
                let a = Vec2::new(x + width / 2.0, y + height);
                let b = Vec2::new(a.x, a.y + reach);
                Segment::new(spin(a), spin(b))
            }
            // Rear left corner, -135 degrees
            5 => corner_ray(Vec2::new(x, y + height), -135.0),
            // Left center
            6 => {
                let a = Vec2::new(x, y + height / 2.0);
                let b = Vec2::new(a.x - reach, a.y);
                Segment::new(spin(a), spin(b))
            }
            // Front left corner, -45 degrees
            7 => corner_ray(Vec2::new(x, y), -45.0),
            _ => unreachable!(),
        });
    }

    /// Cast every ray against every wall, keeping the candidate strictly
    /// nearest each ray's start (wall list order breaks ties). Returns true
    /// when any kept hit lies within `collision_radius` of its ray start.
    pub fn cast(&mut self, walls: &[Segment], collision_radius: f32) -> bool {
        let mut hits: [Option<Vec2>; SENSOR_COUNT] = [None; SENSOR_COUNT];

        for wall in walls {
            for (i, ray) in self.rays.iter().enumerate() {
                let Some(hit) = segment_intersection(wall, ray) else {
                    continue;
                };
                if hit.distance(ray.a) < distance_or_far(hits[i], ray.a) {
                    hits[i] = Some(hit);
                }
            }
        }

        self.hits = hits;
        self.hits
            .iter()
            .zip(&self.rays)
            .any(|(hit, ray)| matches!(hit, Some(p) if p.distance(ray.a) <= collision_radius))
    }
}
