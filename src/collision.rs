//! Collision detection: AABB broad phase, SAT narrow phase,
//! and the collider wrapper dispatching between shape kinds.

pub mod aabb;
pub use aabb::AABB;

pub mod broadphase;

pub mod collider;
pub use collider::{CircleCollider, Collider, PairError, PolygonCollider};

pub mod narrowphase;

use crate::math::Vec2;

/// The outcome of a pairwise collision test.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Collision {
    /// Whether the two shapes overlap.
    pub collide: bool,
    /// Point of contact. Not computed by any test implemented so far;
    /// the field is carried so results can grow one without breaking
    /// callers.
    pub point: Option<Vec2>,
    /// The minimum-overlap separating axis, oriented from the first
    /// shape toward the second. Populated only on a positive
    /// polygon-polygon test, and not normalized.
    pub normal: Option<Vec2>,
}

impl Collision {
    /// A negative result: the shapes don't touch.
    #[inline]
    pub fn separated() -> Self {
        Collision::default()
    }

    /// A positive polygon-polygon result carrying the separating normal.
    #[inline]
    pub fn overlapping(normal: Vec2) -> Self {
        Collision {
            collide: true,
            point: None,
            normal: Some(normal),
        }
    }
}

impl From<Collision> for bool {
    #[inline]
    fn from(c: Collision) -> bool {
        c.collide
    }
}
