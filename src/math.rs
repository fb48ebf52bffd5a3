//! Types, aliases and helper operations for doing math with `ultraviolet`.
use std::f64::consts::PI;
pub use ultraviolet as uv;

/// A Transform has a position, a rotation and a uniform scaling.
///
/// This is the transformation type attached to every shape in impact2d;
/// shapes are stored in local space and carried into world space through it.
pub type Transform = uv::DSimilarity2;
pub type Vec2 = uv::DVec2;
pub type Rotor2 = uv::DRotor2;

/// An angle in either degrees or radians.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Angle {
    Rad(f64),
    Deg(f64),
}
impl Angle {
    /// Get the angle as degrees.
    #[inline]
    pub fn deg(&self) -> f64 {
        match self {
            Angle::Rad(rad) => rad * 180.0 / PI,
            Angle::Deg(deg) => *deg,
        }
    }

    /// Get the angle as radians.
    #[inline]
    pub fn rad(&self) -> f64 {
        match self {
            Angle::Rad(rad) => *rad,
            Angle::Deg(deg) => deg * PI / 180.0,
        }
    }
}
impl Default for Angle {
    fn default() -> Self {
        Angle::Rad(0.0)
    }
}
impl From<Angle> for Rotor2 {
    #[inline]
    fn from(ang: Angle) -> Rotor2 {
        Rotor2::from_angle(ang.rad())
    }
}
impl From<Rotor2> for Angle {
    #[inline]
    fn from(rotor: Rotor2) -> Self {
        Angle::Rad(-rotor.bv.xy.atan2(rotor.s) * 2.0)
    }
}

/// A builder to create [`Transform`][self::Transform]s.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TransformBuilder {
    position: [f64; 2],
    rotation: Angle,
    scale: f64,
}
impl TransformBuilder {
    pub fn new() -> Self {
        TransformBuilder {
            position: [0.0, 0.0],
            rotation: Angle::default(),
            scale: 1.0,
        }
    }
    #[inline]
    pub fn with_position(mut self, pos: impl Into<[f64; 2]>) -> Self {
        self.position = pos.into();
        self
    }
    #[inline]
    pub fn with_rotation(mut self, angle: Angle) -> Self {
        self.rotation = angle;
        self
    }
    #[inline]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
    #[inline]
    pub fn build(self) -> Transform {
        Transform::new(
            Vec2::new(self.position[0], self.position[1]),
            self.rotation.into(),
            self.scale,
        )
    }
}
impl Default for TransformBuilder {
    fn default() -> Self {
        Self::new()
    }
}
impl From<TransformBuilder> for Transform {
    fn from(b: TransformBuilder) -> Transform {
        b.build()
    }
}
impl From<[f64; 2]> for TransformBuilder {
    fn from(vec: [f64; 2]) -> Self {
        TransformBuilder::new().with_position(vec)
    }
}
impl From<Vec2> for TransformBuilder {
    fn from(vec: Vec2) -> Self {
        TransformBuilder::new().with_position(vec)
    }
}
impl From<Angle> for TransformBuilder {
    fn from(angle: Angle) -> Self {
        TransformBuilder::new().with_rotation(angle)
    }
}
impl From<Transform> for TransformBuilder {
    fn from(tf: Transform) -> Self {
        TransformBuilder::new()
            .with_position(tf.translation)
            .with_rotation(Angle::from(tf.rotation))
            .with_scale(tf.scale)
    }
}

/// Module to serialize `Transform`s in `TransformBuilder` format without
/// manually converting, using the serde attribute
/// `#[serde(with = "serde_transform")]`.
#[cfg(feature = "serde-types")]
pub mod serde_transform {
    use super::*;

    pub fn serialize<S>(tf: &Transform, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::Serialize;
        TransformBuilder::from(*tf).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Transform, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::Deserialize;
        TransformBuilder::deserialize(deserializer).map(|b| b.build())
    }
}

// Vec2 utils

#[inline]
pub fn left_normal(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}
#[inline]
pub fn right_normal(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_position_rotation_scale() {
        let tf = TransformBuilder::new()
            .with_position([1.0, 2.0])
            .with_rotation(Angle::Deg(90.0))
            .with_scale(2.0)
            .build();
        // unit x rotated a quarter turn and doubled, then translated
        let p = tf * Vec2::new(1.0, 0.0);
        assert!((p.x - 1.0).abs() < 1e-9);
        assert!((p.y - 4.0).abs() < 1e-9);
    }

    #[cfg(feature = "serde-types")]
    #[test]
    fn builder_serde_roundtrip() {
        let b = TransformBuilder::new()
            .with_position([3.0, -1.5])
            .with_rotation(Angle::Deg(45.0))
            .with_scale(0.5);
        let s = ron::ser::to_string(&b).unwrap();
        let back: TransformBuilder = ron::de::from_str(&s).unwrap();
        let (p1, p2) = (b.build() * Vec2::unit_x(), back.build() * Vec2::unit_x());
        assert!((p1 - p2).mag() < 1e-9);
    }
}
