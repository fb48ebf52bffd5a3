//! Axis-aligned bounding boxes, used to cheaply reject shape pairs
//! before the narrow phase looks at them.

use crate::math::Vec2;
use crate::shape::{Circle, Polygon, Shape};

/// The smallest axis-aligned box containing a shape's world-space
/// geometry at the time it was computed.
///
/// An AABB is a snapshot, not a live view: once the owning shape moves,
/// the box is stale until whoever owns it recomputes it. Colliders do
/// this in [`Collider::update_aabb`][super::Collider::update_aabb].
#[derive(Clone, Copy, Debug)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct AABB {
    pub min: Vec2,
    pub max: Vec2,
}

impl AABB {
    /// Compute the bounding box of a shape's current world-space geometry.
    pub fn of_shape(shape: &Shape) -> Self {
        match shape {
            Shape::Polygon(poly) => Self::of_polygon(poly),
            Shape::Circle(circle) => Self::of_circle(circle),
        }
    }

    /// The tight extent of a polygon's world-space vertex ring.
    ///
    /// # Panics
    /// If the vertex ring is empty, which [`Polygon::new`] rules out.
    pub fn of_polygon(poly: &Polygon) -> Self {
        let verts = poly.world_vertices();
        let mut min = verts[0];
        let mut max = verts[0];
        for v in &verts[1..] {
            if v.x < min.x {
                min.x = v.x;
            }
            if v.y < min.y {
                min.y = v.y;
            }
            if v.x > max.x {
                max.x = v.x;
            }
            if v.y > max.y {
                max.y = v.y;
            }
        }
        AABB { min, max }
    }

    /// The box spanning `center ± radius` on both axes.
    pub fn of_circle(circle: &Circle) -> Self {
        let r = Vec2::new(circle.radius, circle.radius);
        let center = circle.center();
        AABB {
            min: center - r,
            max: center + r,
        }
    }

    /// Whether two boxes overlap on both axes.
    ///
    /// The comparison is strict: boxes that merely touch at an edge or a
    /// corner are reported as non-overlapping. Downstream code relies on
    /// this boundary rule, so it stays even though the opposite call is
    /// defensible.
    #[inline]
    pub fn overlap(&self, other: &AABB) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// The smallest box containing both boxes.
    pub fn union(&self, other: &AABB) -> AABB {
        AABB {
            min: self.min.min_by_component(other.min),
            max: self.max.max_by_component(other.max),
        }
    }

    /// Whether a point is inside the box, boundary included.
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
