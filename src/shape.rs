//! The shapes colliders can be attached to: convex polygons and circles.

use crate::math::{self as m, Transform};

use std::fmt;

/// Any shape known to the collision system.
///
/// The set is closed on purpose: everything that consumes shapes matches
/// exhaustively, so adding a new kind is a compile-time decision point
/// rather than a runtime check.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Shape {
    Polygon(Polygon),
    Circle(Circle),
}

impl Shape {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    #[inline]
    pub fn transform(&self) -> &Transform {
        match self {
            Shape::Polygon(poly) => &poly.transform,
            Shape::Circle(circle) => &circle.transform,
        }
    }

    /// Mutable access to the shape's transform.
    ///
    /// Moving a shape does not touch any bounding box derived from it;
    /// the owner is responsible for refreshing those afterwards.
    #[inline]
    pub fn transform_mut(&mut self) -> &mut Transform {
        match self {
            Shape::Polygon(poly) => &mut poly.transform,
            Shape::Circle(circle) => &mut circle.transform,
        }
    }
}

impl From<Polygon> for Shape {
    fn from(poly: Polygon) -> Self {
        Shape::Polygon(poly)
    }
}
impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

/// Tag identifying a [`Shape`][self::Shape] variant, used in error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Polygon,
    Circle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Polygon => f.write_str("polygon"),
            ShapeKind::Circle => f.write_str("circle"),
        }
    }
}

/// A convex polygon: a ring of local-space vertices plus a transform.
///
/// Consecutive vertices are edge-adjacent and the last vertex connects
/// back to the first. Winding order is up to the caller as long as it is
/// consistent. Vertices must describe a convex shape; nothing verifies
/// this and collision results on concave input are meaningless.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Polygon {
    vertices: Vec<m::Vec2>,
    #[cfg_attr(
        feature = "serde-types",
        serde(with = "crate::math::serde_transform")
    )]
    pub transform: Transform,
}

impl Polygon {
    /// Create a polygon from local-space vertices.
    ///
    /// # Panics
    /// If fewer than three vertices are given.
    pub fn new(vertices: Vec<m::Vec2>, transform: Transform) -> Self {
        assert!(
            vertices.len() >= 3,
            "a polygon needs at least three vertices"
        );
        Polygon {
            vertices,
            transform,
        }
    }

    /// Create a rectangle centered on its transform's position.
    pub fn rect(width: f64, height: f64, transform: Transform) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Polygon::new(
            vec![
                m::Vec2::new(-hw, -hh),
                m::Vec2::new(hw, -hh),
                m::Vec2::new(hw, hh),
                m::Vec2::new(-hw, hh),
            ],
            transform,
        )
    }

    /// Create a regular polygon with the given circumradius.
    ///
    /// # Panics
    /// If `sides < 3`.
    pub fn regular(sides: usize, radius: f64, transform: Transform) -> Self {
        assert!(sides >= 3, "a polygon needs at least three vertices");
        let angle_incr = std::f64::consts::TAU / sides as f64;
        Polygon::new(
            (0..sides)
                .map(|i| {
                    let angle = i as f64 * angle_incr;
                    m::Vec2::new(radius * angle.cos(), radius * angle.sin())
                })
                .collect(),
            transform,
        )
    }

    /// The vertex ring in local space.
    #[inline]
    pub fn local_vertices(&self) -> &[m::Vec2] {
        &self.vertices
    }

    /// The vertex ring carried into world space by the current transform.
    ///
    /// Computed on every call, never cached; the order matches
    /// [`local_vertices`][Self::local_vertices].
    pub fn world_vertices(&self) -> Vec<m::Vec2> {
        self.vertices.iter().map(|v| self.transform * *v).collect()
    }
}

/// A circle: a transform giving its center plus a radius.
///
/// The radius is world-space as given; the transform's scaling applies to
/// polygon vertices only, not radii.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Circle {
    #[cfg_attr(
        feature = "serde-types",
        serde(with = "crate::math::serde_transform")
    )]
    pub transform: Transform,
    pub radius: f64,
}

impl Circle {
    /// Create a circle from a radius.
    ///
    /// # Panics
    /// If the radius is not strictly positive.
    pub fn new(radius: f64, transform: Transform) -> Self {
        assert!(radius > 0.0, "a circle needs a positive radius");
        Circle { transform, radius }
    }

    /// The circle's center in world space.
    #[inline]
    pub fn center(&self) -> m::Vec2 {
        self.transform.translation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Angle, TransformBuilder, Vec2};

    #[test]
    fn rect_spans_its_side_lengths() {
        let rect = Polygon::rect(2.0, 4.0, Transform::identity());
        let verts = rect.world_vertices();
        assert_eq!(verts.len(), 4);
        for v in &verts {
            assert!((v.x.abs() - 1.0).abs() < 1e-9);
            assert!((v.y.abs() - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn regular_polygon_sits_on_its_circumcircle() {
        let center = Vec2::new(5.0, -3.0);
        let hex = Polygon::regular(6, 2.0, TransformBuilder::from(center).build());
        let verts = hex.world_vertices();
        assert_eq!(verts.len(), 6);
        for v in &verts {
            assert!(((*v - center).mag() - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn world_vertices_follow_the_transform() {
        let tf = TransformBuilder::new()
            .with_position([10.0, 0.0])
            .with_rotation(Angle::Deg(90.0))
            .with_scale(2.0)
            .build();
        let tri = Polygon::new(
            vec![
                Vec2::new(1.0, 0.0),
                Vec2::new(-1.0, 0.0),
                Vec2::new(0.0, 1.0),
            ],
            tf,
        );
        let verts = tri.world_vertices();
        // (1, 0) scaled to (2, 0), rotated to (0, 2), moved to (10, 2)
        assert!((verts[0] - Vec2::new(10.0, 2.0)).mag() < 1e-9);
        assert!((verts[1] - Vec2::new(10.0, -2.0)).mag() < 1e-9);
        assert!((verts[2] - Vec2::new(8.0, 0.0)).mag() < 1e-9);
    }

    #[test]
    #[should_panic]
    fn too_few_vertices_panic() {
        let _ = Polygon::new(
            vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)],
            Transform::identity(),
        );
    }

    #[test]
    #[should_panic]
    fn nonpositive_radius_panics() {
        let _ = Circle::new(0.0, Transform::identity());
    }
}
