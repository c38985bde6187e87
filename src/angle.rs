//! Different units for angles.

use crate::num::Float;
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::{
    cmp::Ordering,
    ops::{Add, Div, Mul, Sub},
};

/// Represents an angle.
pub trait Angle<F: Float>: Copy {
    /// Creates a zero angle.
    fn zero() -> Self;

    /// Returns the angle as degrees.
    fn as_degrees(self) -> Degrees<F>;

    /// Returns the angle as radians.
    fn as_radians(self) -> Radians<F>;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> F;

    /// Returns the value of the angle in radians.
    fn radians(self) -> F;
}

// An angle in degrees.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Degrees<F>(pub F);

// An angle in radians.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Radians<F>(pub F);

impl<F: Float> Angle<F> for Degrees<F> {
    fn zero() -> Self {
        Self(F::ZERO)
    }

    fn as_degrees(self) -> Degrees<F> {
        self
    }

    fn as_radians(self) -> Radians<F> {
        Radians::from(self)
    }

    fn degrees(self) -> F {
        self.0
    }

    fn radians(self) -> F {
        degrees_to_radians(self.0)
    }
}

impl<F: Float> Angle<F> for Radians<F> {
    fn zero() -> Self {
        Self(F::ZERO)
    }

    fn as_degrees(self) -> Degrees<F> {
        Degrees::from(self)
    }

    fn as_radians(self) -> Radians<F> {
        self
    }

    fn degrees(self) -> F {
        radians_to_degrees(self.0)
    }

    fn radians(self) -> F {
        self.0
    }
}

impl<F: Float> From<Radians<F>> for Degrees<F> {
    fn from(rad: Radians<F>) -> Self {
        Self(radians_to_degrees(rad.0))
    }
}

impl<F: Float> From<Degrees<F>> for Radians<F> {
    fn from(deg: Degrees<F>) -> Self {
        Self(degrees_to_radians(deg.0))
    }
}

/// Implements arithmetic, mixed-unit comparison and approximate equality for
/// one angle unit, with the other unit given second.
macro_rules! impl_angle_ops {
    ($unit:ident, $other:ident) => {
        impl<F: Float> Add for $unit<F> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl<F: Float> Add<$other<F>> for $unit<F> {
            type Output = Self;
            fn add(self, rhs: $other<F>) -> Self {
                Self(self.0 + Self::from(rhs).0)
            }
        }

        impl<F: Float> Sub for $unit<F> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl<F: Float> Sub<$other<F>> for $unit<F> {
            type Output = Self;
            fn sub(self, rhs: $other<F>) -> Self {
                Self(self.0 - Self::from(rhs).0)
            }
        }

        impl<F: Float> Mul<F> for $unit<F> {
            type Output = Self;
            fn mul(self, rhs: F) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl<F: Float> Div<F> for $unit<F> {
            type Output = Self;
            fn div(self, rhs: F) -> Self {
                Self(self.0 / rhs)
            }
        }

        impl<F: Float> PartialEq<$other<F>> for $unit<F> {
            fn eq(&self, rhs: &$other<F>) -> bool {
                self.0 == Self::from(*rhs).0
            }
        }

        impl<F: Float> PartialOrd<$other<F>> for $unit<F> {
            fn partial_cmp(&self, rhs: &$other<F>) -> Option<Ordering> {
                self.0.partial_cmp(&Self::from(*rhs).0)
            }
        }

        impl<F: Float> AbsDiffEq for $unit<F> {
            type Epsilon = F;

            fn default_epsilon() -> F {
                F::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
                F::abs_diff_eq(&self.0, &other.0, epsilon)
            }
        }

        impl<F: Float> RelativeEq for $unit<F> {
            fn default_max_relative() -> F {
                F::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
                F::relative_eq(&self.0, &other.0, epsilon, max_relative)
            }
        }

        // SAFETY: The unit is a transparent wrapper around a `Pod` float.
        unsafe impl<F: Float> Zeroable for $unit<F> {}
        unsafe impl<F: Float> Pod for $unit<F> {}
    };
}

impl_angle_ops!(Degrees, Radians);
impl_angle_ops!(Radians, Degrees);

pub fn radians_to_degrees<F: Float>(radians: F) -> F {
    radians.to_degrees()
}

pub fn degrees_to_radians<F: Float>(degrees: F) -> F {
    degrees.to_radians()
}
