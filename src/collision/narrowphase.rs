//! Narrow-phase intersection tests.
//!
//! Convex polygon pairs are tested with the separating axis theorem:
//! two convex shapes are disjoint exactly when some axis exists onto
//! which their projections don't overlap, and the candidate axes are the
//! edge normals of both shapes. Only the polygon-polygon test exists so
//! far; circle tests surface as [`PairError`][super::PairError] at the
//! collider layer.

use super::collider::PolygonCollider;
use super::Collision;
use crate::math::{self as m, Vec2};

use itertools::Itertools;

/// Test two convex polygons for overlap.
///
/// Pairs whose cached bounding boxes don't overlap are rejected without
/// touching any vertices, and the result's normal stays unset. Otherwise
/// every edge normal of both vertex rings is tried as a separating axis;
/// the first axis that separates the projections ends the test.
///
/// On overlap, the returned normal is the candidate axis with the
/// smallest projection overlap, oriented from `p1`'s centroid toward
/// `p2`'s. Axes are left unnormalized: the separation tests don't
/// depend on axis length, but overlaps measured on axes of differing
/// edge lengths aren't on a common scale, so the "minimum" is an
/// approximation of the true minimum translation direction.
pub fn intersect_polygons(p1: &PolygonCollider, p2: &PolygonCollider) -> Collision {
    if !p1.aabb.overlap(&p2.aabb) {
        return Collision::separated();
    }

    let verts_a = p1.polygon.world_vertices();
    let verts_b = p2.polygon.world_vertices();

    let mut normal = Vec2::zero();
    let mut depth = f64::INFINITY;

    let edges_a = verts_a.iter().circular_tuple_windows();
    let edges_b = verts_b.iter().circular_tuple_windows();
    for (&va, &vb) in edges_a.chain(edges_b) {
        let edge = vb - va;
        let axis = m::left_normal(edge);

        let (min_a, max_a) = project_vertices(&verts_a, axis);
        let (min_b, max_b) = project_vertices(&verts_b, axis);
        if min_a >= max_b || min_b >= max_a {
            // a real separating axis, so the shapes can't touch
            return Collision::separated();
        }

        let axis_depth = (max_a - min_b).min(max_b - min_a);
        if axis_depth < depth {
            depth = axis_depth;
            normal = axis;
        }
    }

    // no axis separates them; orient the shallowest one from p1 toward p2
    let direction = arithmetic_mean(&verts_b) - arithmetic_mean(&verts_a);
    if direction.dot(normal) < 0.0 {
        normal = -normal;
    }

    Collision::overlapping(normal)
}

/// Project a vertex ring onto an axis, returning its `(min, max)` extent.
///
/// A single vertex projects to `min == max`.
///
/// # Panics
/// If `vertices` is empty.
pub fn project_vertices(vertices: &[Vec2], axis: Vec2) -> (f64, f64) {
    let first = vertices[0].dot(axis);
    let (mut min, mut max) = (first, first);
    for v in &vertices[1..] {
        let p = v.dot(axis);
        if p < min {
            min = p;
        } else if p > max {
            max = p;
        }
    }
    (min, max)
}

fn arithmetic_mean(vertices: &[Vec2]) -> Vec2 {
    let sum = vertices.iter().fold(Vec2::zero(), |acc, v| acc + *v);
    sum / vertices.len() as f64
}
