//! impact2d detects collisions between convex 2D shapes.
//!
//! Shapes are wrapped in [`Collider`]s, which cache an axis-aligned
//! bounding box used for cheap broad-phase rejection; pairs that survive
//! are tested precisely with the separating axis theorem. The narrow
//! phase currently covers convex polygon pairs and reports a separating
//! normal usable for resolving the overlap.

pub mod math;
#[cfg(feature = "serde-types")]
pub use math::serde_transform;
pub use math::{uv, Angle, Rotor2, Transform, TransformBuilder, Vec2};

pub mod shape;
pub use shape::{Circle, Polygon, Shape, ShapeKind};

pub mod collision;
pub use collision::{
    broadphase, narrowphase, CircleCollider, Collider, Collision, PairError, PolygonCollider, AABB,
};
