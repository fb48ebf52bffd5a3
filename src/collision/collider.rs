//! Colliders wrap a shape together with its cached bounding box and
//! dispatch pairwise queries to the right narrow-phase test.

use super::{narrowphase, AABB};
use crate::shape::{Circle, Polygon, Shape, ShapeKind};

/// Error returned when a collider pairing has no narrow-phase test.
///
/// This is a hard stop for that pair, not a negative result: "can't test
/// this" must never read as "definitely not colliding".
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairError {
    /// Both kinds have tests, just not against each other.
    #[error("collision test between {0} and {1} colliders is not implemented yet")]
    UnsupportedPair(ShapeKind, ShapeKind),
    /// The receiving kind has no narrow-phase tests at all.
    #[error("{0} colliders cannot run collision tests yet")]
    UnsupportedKind(ShapeKind),
}

/// A shape wrapped for collision queries, owning the shape and the
/// bounding box derived from it.
///
/// There is one collider per shape, created with
/// [`Collider::attach`][Self::attach]. The box is a snapshot: after
/// moving the shape (the variant fields are public for that), call
/// [`update_aabb`][Self::update_aabb] before the next query.
#[derive(Clone, Debug)]
pub enum Collider {
    Polygon(PolygonCollider),
    Circle(CircleCollider),
}

/// A collider around a convex polygon.
#[derive(Clone, Debug)]
pub struct PolygonCollider {
    pub polygon: Polygon,
    pub aabb: AABB,
}

/// A collider around a circle. Circles can carry a bounding box, but no
/// narrow-phase test accepts them yet; their queries all return
/// [`PairError::UnsupportedKind`].
#[derive(Clone, Debug)]
pub struct CircleCollider {
    pub circle: Circle,
    pub aabb: AABB,
}

impl Collider {
    /// Attach the matching collider variant to a shape.
    pub fn attach(shape: Shape) -> Self {
        let aabb = AABB::of_shape(&shape);
        match shape {
            Shape::Polygon(polygon) => Collider::Polygon(PolygonCollider { polygon, aabb }),
            Shape::Circle(circle) => Collider::Circle(CircleCollider { circle, aabb }),
        }
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Collider::Polygon(_) => ShapeKind::Polygon,
            Collider::Circle(_) => ShapeKind::Circle,
        }
    }

    /// The bounding box as of the last [`update_aabb`][Self::update_aabb]
    /// (or construction).
    #[inline]
    pub fn aabb(&self) -> &AABB {
        match self {
            Collider::Polygon(pc) => &pc.aabb,
            Collider::Circle(cc) => &cc.aabb,
        }
    }

    /// Recompute the bounding box from the shape's current transform.
    ///
    /// Nothing calls this automatically; whoever moves the shape calls it
    /// before the collider is queried again.
    pub fn update_aabb(&mut self) {
        match self {
            Collider::Polygon(pc) => pc.aabb = AABB::of_polygon(&pc.polygon),
            Collider::Circle(cc) => cc.aabb = AABB::of_circle(&cc.circle),
        }
    }

    /// Boolean collision query against another collider, `None` meaning
    /// "nothing there".
    ///
    /// This narrows the full [`Collision`][super::Collision] down to its
    /// boolean; callers that need the separating normal use
    /// [`narrowphase::intersect_polygons`] directly. Pairings without an
    /// implemented test are an error, never `Ok(false)`.
    pub fn collide_with(&self, other: Option<&Collider>) -> Result<bool, PairError> {
        match (self, other) {
            (Collider::Circle(_), _) => Err(PairError::UnsupportedKind(ShapeKind::Circle)),
            (Collider::Polygon(_), None) => Ok(false),
            (Collider::Polygon(p1), Some(Collider::Polygon(p2))) => {
                Ok(narrowphase::intersect_polygons(p1, p2).into())
            }
            (Collider::Polygon(_), Some(other)) => {
                Err(PairError::UnsupportedPair(ShapeKind::Polygon, other.kind()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Transform, TransformBuilder, Vec2};

    fn square_collider(x: f64, y: f64) -> Collider {
        Collider::attach(Shape::Polygon(Polygon::rect(
            1.0,
            1.0,
            TransformBuilder::from([x, y]).build(),
        )))
    }

    fn circle_collider() -> Collider {
        Collider::attach(Shape::Circle(Circle::new(1.0, Transform::identity())))
    }

    #[test]
    fn attach_picks_the_matching_variant() {
        assert_eq!(square_collider(0.0, 0.0).kind(), ShapeKind::Polygon);
        assert_eq!(circle_collider().kind(), ShapeKind::Circle);
    }

    #[test]
    fn polygon_queries_agree_with_the_narrow_phase() {
        let a = square_collider(0.0, 0.0);
        let b = square_collider(0.5, 0.0);
        let c = square_collider(4.0, 0.0);
        assert_eq!(a.collide_with(Some(&b)), Ok(true));
        assert_eq!(a.collide_with(Some(&c)), Ok(false));

        if let (Collider::Polygon(pa), Collider::Polygon(pb)) = (&a, &b) {
            assert_eq!(
                a.collide_with(Some(&b)).unwrap(),
                narrowphase::intersect_polygons(pa, pb).collide
            );
        }
    }

    #[test]
    fn nothing_there_is_not_a_collision() {
        assert_eq!(square_collider(0.0, 0.0).collide_with(None), Ok(false));
    }

    #[test]
    fn polygon_vs_circle_is_unsupported() {
        let poly = square_collider(0.0, 0.0);
        let circle = circle_collider();
        assert_eq!(
            poly.collide_with(Some(&circle)),
            Err(PairError::UnsupportedPair(
                ShapeKind::Polygon,
                ShapeKind::Circle
            ))
        );
    }

    #[test]
    fn circle_colliders_cannot_test_anything() {
        let circle = circle_collider();
        let expected = Err(PairError::UnsupportedKind(ShapeKind::Circle));
        assert_eq!(circle.collide_with(Some(&square_collider(0.0, 0.0))), expected);
        assert_eq!(circle.collide_with(Some(&circle_collider())), expected);
        assert_eq!(circle.collide_with(None), expected);
    }

    #[test]
    fn the_box_is_stale_until_updated() {
        let mut collider = square_collider(0.0, 0.0);
        let moved_center = Vec2::new(10.0, 0.0);
        if let Collider::Polygon(pc) = &mut collider {
            pc.polygon.transform.translation = moved_center;
        }
        // still the old snapshot
        assert!(collider.aabb().contains_point(Vec2::zero()));
        assert!(!collider.aabb().contains_point(moved_center));

        collider.update_aabb();
        assert!(collider.aabb().contains_point(moved_center));
    }
}
