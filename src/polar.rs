//! Polar coordinates in the plane.

use crate::{
    angle::{Angle, Radians},
    num::Float,
    vector::Vector2,
};

/// A point in the plane given by its distance from the origin and the angle
/// from the positive x-axis, counter-clockwise.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PolarCoordinate<F> {
    pub radius: F,
    pub theta: Radians<F>,
}

impl<F: Float> PolarCoordinate<F> {
    pub fn new(radius: F, theta: impl Angle<F>) -> Self {
        Self {
            radius,
            theta: theta.as_radians(),
        }
    }

    /// Converts to cartesian coordinates.
    pub fn to_cartesian(&self) -> Vector2<F> {
        let (sin, cos) = self.theta.radians().sin_cos();
        Vector2::new(self.radius * cos, self.radius * sin)
    }
}

impl<F: Float> Vector2<F> {
    /// Creates the vector pointing to the given polar coordinate.
    #[inline]
    pub fn from_polar(polar: &PolarCoordinate<F>) -> Self {
        polar.to_cartesian()
    }

    /// Converts the vector to polar coordinates. The angle lies in
    /// `[-pi, pi]`, and the zero vector has angle zero.
    pub fn to_polar(&self) -> PolarCoordinate<F> {
        PolarCoordinate {
            radius: self.norm(),
            theta: Radians(self.y().atan2(self.x())),
        }
    }
}

impl<F: Float> From<PolarCoordinate<F>> for Vector2<F> {
    fn from(polar: PolarCoordinate<F>) -> Self {
        polar.to_cartesian()
    }
}

impl<F: Float> From<Vector2<F>> for PolarCoordinate<F> {
    fn from(vector: Vector2<F>) -> Self {
        vector.to_polar()
    }
}
