//! Vectors.

use crate::{
    error::{Result, VectorError},
    num::{Float, Scalar, SignedScalar},
};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use num_traits::{AsPrimitive, Float as _};
use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Div, Index, Mul},
};

/// A 2-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Vector2<T> {
    x: T,
    y: T,
}

/// A 3-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Vector3<T> {
    x: T,
    y: T,
    z: T,
}

/// A 4-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Vector4<T> {
    x: T,
    y: T,
    z: T,
    w: T,
}

/// Implements everything that is shared between the vector arities.
macro_rules! impl_vector {
    ($name:ident, $n:literal, [$($comp:ident => $idx:literal, $unit:ident);+]) => {
        impl<T: Scalar> $name<T> {
            /// The number of components.
            pub const ARITY: usize = $n;

            /// Creates a new vector with the given components.
            #[inline]
            pub const fn new($($comp: T),+) -> Self {
                Self { $($comp),+ }
            }

            /// Creates a new vector with all zeros.
            #[inline]
            pub const fn zeros() -> Self {
                Self::same(T::ZERO)
            }

            /// Creates a new vector with all ones.
            #[inline]
            pub const fn ones() -> Self {
                Self::same(T::ONE)
            }

            /// Creates a new vector with the same value for all components.
            #[inline]
            pub const fn same(value: T) -> Self {
                Self { $($comp: value),+ }
            }

            $(
                #[doc = concat!("The ", stringify!($comp), "-axis unit vector.")]
                #[inline]
                pub fn $unit() -> Self {
                    Self::unit($idx)
                }
            )+

            /// Creates a vector from the first elements of the given slice.
            ///
            /// # Errors
            /// Returns [`VectorError::InsufficientElements`] if the slice is
            /// shorter than the number of components.
            #[inline]
            pub fn from_slice(values: &[T]) -> Result<Self> {
                Self::from_slice_at(values, 0)
            }

            /// Creates a vector from consecutive elements of the given slice,
            /// starting at `offset`.
            ///
            /// # Errors
            /// Returns [`VectorError::InsufficientElements`] if fewer than the
            /// number of components remain after `offset`.
            pub fn from_slice_at(values: &[T], offset: usize) -> Result<Self> {
                let available = values.len().saturating_sub(offset);
                if available < $n {
                    return Err(VectorError::InsufficientElements {
                        required: $n,
                        available,
                    });
                }
                Ok(Self { $($comp: values[offset + $idx]),+ })
            }

            $(
                #[doc = concat!("The ", stringify!($comp), "-component.")]
                #[inline]
                pub const fn $comp(&self) -> T {
                    self.$comp
                }
            )+

            /// Returns the component at the given index.
            ///
            /// # Errors
            /// Returns [`VectorError::IndexOutOfRange`] if the index is not
            /// smaller than the number of components.
            #[inline]
            pub fn get(&self, index: usize) -> Result<T> {
                match index {
                    $($idx => Ok(self.$comp),)+
                    _ => Err(VectorError::IndexOutOfRange {
                        index,
                        arity: $n,
                    }),
                }
            }

            /// The components in order.
            #[inline]
            pub const fn to_array(&self) -> [T; $n] {
                [$(self.$comp),+]
            }

            /// Returns an iterator over the components in order.
            #[inline]
            pub fn iter(&self) -> std::array::IntoIter<T, $n> {
                self.to_array().into_iter()
            }

            /// Returns a vector with the given closure applied to each
            /// component.
            #[inline]
            pub fn mapped<U>(&self, mut f: impl FnMut(T) -> U) -> $name<U> {
                $name { $($comp: f(self.$comp)),+ }
            }

            /// Converts each component to the promoted type of the scalar.
            #[inline]
            pub fn promoted(&self) -> $name<T::Promoted> {
                self.mapped(T::promote)
            }

            /// Converts each component to the natural floating point type of
            /// the scalar.
            #[inline]
            pub fn to_real(&self) -> $name<T::Real> {
                self.mapped(T::to_real)
            }

            /// Converts each component to another scalar type with the
            /// semantics of an `as` cast. Integers are truncated to their
            /// low-order bits, signedness is reinterpreted and floats are
            /// truncated toward zero.
            #[inline]
            pub fn cast<U: Scalar>(&self) -> $name<U>
            where
                T: AsPrimitive<U>,
            {
                self.mapped(|component| component.as_())
            }

            /// Creates a vector by converting each component of the given
            /// vector like [`cast`](Self::cast) does.
            #[inline]
            pub fn truncating_from<S>(vector: $name<S>) -> Self
            where
                S: Scalar + AsPrimitive<T>,
            {
                vector.cast()
            }

            /// Computes the dot product of this vector with another.
            #[inline]
            pub fn dot(&self, other: &Self) -> T::Promoted {
                [$(self.$comp.promote() * other.$comp.promote()),+]
                    .into_iter()
                    .fold(<T::Promoted as Scalar>::ZERO, |sum, product| sum + product)
            }

            /// Computes the square of the norm of the vector. Like the dot
            /// product, this is exact but can overflow the promoted integer
            /// type.
            #[inline]
            pub fn norm_squared(&self) -> T::Promoted {
                self.dot(self)
            }

            /// Computes the norm (length) of the vector. The components are
            /// converted to the natural floating point type first, so integer
            /// components cannot overflow.
            #[inline]
            pub fn norm(&self) -> T::Real {
                self.to_real()
                    .iter()
                    .fold(<T::Real as Scalar>::ZERO, |sum, component| sum + component * component)
                    .sqrt()
            }

            /// Computes the normalized version of the vector. A vector whose
            /// norm does not exceed the smallest positive floating point value
            /// normalizes to zero.
            pub fn normalized(&self) -> $name<T::Real> {
                let norm = self.norm();
                if norm <= <T::Real as Float>::SMALLEST_POSITIVE {
                    $name::zeros()
                } else {
                    self.to_real().mapped(|component| component / norm)
                }
            }

            /// Returns a vector with the absolute value of each component.
            #[inline]
            pub fn component_abs(&self) -> Self {
                self.mapped(T::abs_value)
            }

            /// Multiplies each component by the corresponding component in
            /// another vector. The products are computed in the promoted type
            /// and truncated back.
            #[inline]
            pub fn component_mul(&self, other: &Self) -> Self {
                Self {
                    $($comp: T::demote(self.$comp.promote() * other.$comp.promote())),+
                }
            }

            /// Returns a vector where each component is the minimum of the
            /// corresponding component in this and another vector.
            #[inline]
            pub fn component_min(&self, other: &Self) -> Self {
                Self { $($comp: self.$comp.min_of(other.$comp)),+ }
            }

            /// Returns a vector where each component is the maximum of the
            /// corresponding component in this and another vector.
            #[inline]
            pub fn component_max(&self, other: &Self) -> Self {
                Self { $($comp: self.$comp.max_of(other.$comp)),+ }
            }

            /// Clamps each component to the range given by the corresponding
            /// components of `min` and `max`. The result is unspecified for
            /// components where `min` exceeds `max`.
            #[inline]
            pub fn component_clamp(&self, min: &Self, max: &Self) -> Self {
                self.component_min(max).component_max(min)
            }

            /// Returns the smallest component in the vector.
            #[inline]
            pub fn min_component(&self) -> T {
                let [first, rest @ ..] = self.to_array();
                rest.into_iter().fold(first, T::min_of)
            }

            /// Returns the largest component in the vector.
            #[inline]
            pub fn max_component(&self) -> T {
                let [first, rest @ ..] = self.to_array();
                rest.into_iter().fold(first, T::max_of)
            }

            /// Returns the sum of the components in the promoted type.
            #[inline]
            pub fn component_sum(&self) -> T::Promoted {
                self.iter()
                    .fold(<T::Promoted as Scalar>::ZERO, |sum, component| sum + component.promote())
            }

            /// Whether all components are non-zero.
            #[inline]
            pub fn all(&self) -> bool {
                $(self.$comp.is_nonzero())&&+
            }

            /// Whether any component is non-zero.
            #[inline]
            pub fn any(&self) -> bool {
                $(self.$comp.is_nonzero())||+
            }

            /// Whether the given predicate holds for all components.
            #[inline]
            pub fn all_by(&self, mut predicate: impl FnMut(T) -> bool) -> bool {
                $(predicate(self.$comp))&&+
            }

            /// Whether the given predicate holds for any component.
            #[inline]
            pub fn any_by(&self, mut predicate: impl FnMut(T) -> bool) -> bool {
                $(predicate(self.$comp))||+
            }

            /// Divides each component by the given scalar.
            ///
            /// # Errors
            /// Returns [`VectorError::DivideByZero`] if the vector holds
            /// integers and the divisor is zero. Float division never fails.
            pub fn checked_div(&self, divisor: T::Promoted) -> Result<$name<T::Promoted>> {
                if divisor.is_zero_divisor() {
                    log::debug!("Rejected division of {} by zero", self);
                    return Err(VectorError::DivideByZero);
                }
                Ok(*self / divisor)
            }

            fn unit(index: usize) -> Self {
                let mut components = [T::ZERO; $n];
                components[index] = T::ONE;
                Self::from(components)
            }

            impl_swizzles!($($comp),+);
        }

        impl<F: Float> $name<F> {
            /// Linearly interpolates between this vector (`t = 0`) and
            /// another (`t = 1`).
            #[inline]
            pub fn lerp(&self, other: &Self, t: F) -> Self {
                Self { $($comp: self.$comp + (other.$comp - self.$comp) * t),+ }
            }
        }

        impl<T> From<[T; $n]> for $name<T> {
            #[inline]
            fn from([$($comp),+]: [T; $n]) -> Self {
                Self { $($comp),+ }
            }
        }

        impl<T> From<$name<T>> for [T; $n] {
            #[inline]
            fn from(vector: $name<T>) -> Self {
                [$(vector.$comp),+]
            }
        }

        impl_binop!(Add, add, [T: Scalar], $name<T>, $name<T>, $name<T::Promoted>, |a, b| {
            $name { $($comp: a.$comp.promote() + b.$comp.promote()),+ }
        });

        impl_binop!(Sub, sub, [T: Scalar], $name<T>, $name<T>, $name<T::Promoted>, |a, b| {
            $name { $($comp: a.$comp.promote() - b.$comp.promote()),+ }
        });

        impl_unary_op!(Neg, neg, [T: SignedScalar], $name<T>, $name<T::Promoted>, |val| {
            $name { $($comp: val.$comp.negated()),+ }
        });

        impl<T: Scalar> Mul<T::Promoted> for $name<T> {
            type Output = $name<T::Promoted>;

            #[inline]
            fn mul(self, rhs: T::Promoted) -> Self::Output {
                $name { $($comp: self.$comp.promote() * rhs),+ }
            }
        }

        impl<T: Scalar> Div<T::Promoted> for $name<T> {
            type Output = $name<T::Promoted>;

            /// # Panics
            /// If the vector holds integers and `rhs` is zero.
            #[inline]
            fn div(self, rhs: T::Promoted) -> Self::Output {
                $name { $($comp: self.$comp.promote() / rhs),+ }
            }
        }

        impl_scalar_mul!($name; i32, u32, i64, u64, f32, f64);

        impl<T: Scalar> Index<usize> for $name<T> {
            type Output = T;

            #[inline]
            fn index(&self, idx: usize) -> &Self::Output {
                match idx {
                    $($idx => &self.$comp,)+
                    _ => panic!("index out of bounds"),
                }
            }
        }

        // SAFETY: All fields have the same `Pod` type and the layout is
        // `repr(C)`, so there is no padding.
        unsafe impl<T: Scalar> Zeroable for $name<T> {}
        unsafe impl<T: Scalar> Pod for $name<T> {}

        impl<T> AbsDiffEq for $name<T>
        where
            T: Scalar + AbsDiffEq<Epsilon = T>,
        {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                $(self.$comp.abs_diff_eq(&other.$comp, epsilon))&&+
            }
        }

        impl<T> RelativeEq for $name<T>
        where
            T: Scalar + RelativeEq + AbsDiffEq<Epsilon = T>,
        {
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                $(self.$comp.relative_eq(&other.$comp, epsilon, max_relative))&&+
            }
        }

        impl<T: Scalar> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("(")?;
                for (idx, component) in self.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(&component, f)?;
                }
                f.write_str(")")
            }
        }

        // Hashes bit patterns, with negative zero folded into zero so that
        // equal vectors hash equally.
        impl<T: Scalar> Hash for $name<T> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                $(
                    let component = if self.$comp == T::ZERO { T::ZERO } else { self.$comp };
                    component.to_bit_pattern().hash(state);
                )+
            }
        }

        impl<T: fmt::Debug> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    $(.field(stringify!($comp), &self.$comp))+
                    .finish()
            }
        }
    };
}

/// Implements `scalar * vector` for each of the given promoted scalar types.
macro_rules! impl_scalar_mul {
    ($name:ident; $($p:ty),+) => {
        $(
            impl<T: Scalar<Promoted = $p>> Mul<$name<T>> for $p {
                type Output = $name<$p>;

                #[inline]
                fn mul(self, rhs: $name<T>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}

impl_vector!(Vector2, 2, [x => 0, unit_x; y => 1, unit_y]);
impl_vector!(Vector3, 3, [x => 0, unit_x; y => 1, unit_y; z => 2, unit_z]);
impl_vector!(Vector4, 4, [x => 0, unit_x; y => 1, unit_y; z => 2, unit_z; w => 3, unit_w]);

impl<T: Scalar> Vector2<T> {
    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: T) -> Vector3<T> {
        Vector3::new(self.x, self.y, z)
    }
}

impl<T: Scalar> Vector3<T> {
    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: T) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// The 2D vector containing the x- and y-components of this vector.
    #[inline]
    pub const fn truncated(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }
}

impl<T: SignedScalar> Vector3<T> {
    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Vector3<T::Promoted> {
        let a = self.promoted();
        let b = other.promoted();
        Vector3::new(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        )
    }
}

impl<T: Scalar> Vector4<T> {
    /// The 3D vector containing the x-, y- and z-components of this vector.
    #[inline]
    pub const fn truncated(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use half::f16;
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-6;

    // === Construction and access ===

    #[test]
    fn same_fills_every_component() {
        assert_eq!(Vector3::same(7_u16), Vector3::new(7, 7, 7));
        assert_eq!(Vector4::<f64>::zeros(), Vector4::same(0.0));
        assert_eq!(Vector2::<i8>::ones(), Vector2::new(1, 1));
    }

    #[test]
    fn unit_vectors_have_single_one() {
        assert_eq!(Vector2::<i32>::unit_y(), Vector2::new(0, 1));
        assert_eq!(Vector3::<u8>::unit_z(), Vector3::new(0, 0, 1));
        assert_eq!(Vector4::<f32>::unit_w(), Vector4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn creating_vector2_from_slice_works() {
        let v = Vector2::<i32>::from_slice_at(&[1, 2], 0).unwrap();
        assert_eq!(v.x(), 1);
        assert_eq!(v.y(), 2);
    }

    #[test]
    fn creating_vector_from_slice_with_offset_works() {
        let values = [9_u64, 8, 7, 6, 5];
        assert_eq!(
            Vector3::from_slice_at(&values, 2).unwrap(),
            Vector3::new(7, 6, 5)
        );
        assert_eq!(
            Vector4::from_slice(&values).unwrap(),
            Vector4::new(9, 8, 7, 6)
        );
    }

    #[test]
    fn creating_vector_from_short_slice_fails() {
        assert_eq!(
            Vector2::<i32>::from_slice_at(&[1], 0),
            Err(VectorError::InsufficientElements {
                required: 2,
                available: 1
            })
        );
        assert_eq!(
            Vector3::<i32>::from_slice_at(&[1, 2, 3], 1),
            Err(VectorError::InsufficientElements {
                required: 3,
                available: 2
            })
        );
    }

    #[test]
    fn creating_vector_from_slice_with_offset_past_end_fails() {
        assert_eq!(
            Vector2::<f32>::from_slice_at(&[1.0, 2.0], 5),
            Err(VectorError::InsufficientElements {
                required: 2,
                available: 0
            })
        );
    }

    #[test]
    fn getting_component_by_index_works() {
        let v = Vector2::new(4_i16, -3);
        assert_eq!(v.get(0), Ok(4));
        assert_eq!(v.get(1), Ok(-3));
        assert_eq!(
            v.get(2),
            Err(VectorError::IndexOutOfRange { index: 2, arity: 2 })
        );
        assert_eq!(v[1], -3);
    }

    #[test]
    #[should_panic]
    fn indexing_out_of_range_panics() {
        let v = Vector4::<u8>::zeros();
        let _ = v[4];
    }

    #[test]
    fn to_array_preserves_component_order() {
        let v = Vector4::new(1_i64, 2, 3, 4);
        assert_eq!(v.to_array(), [1, 2, 3, 4]);
        assert_eq!(<[i64; 4]>::from(v), [1, 2, 3, 4]);
        assert_eq!(Vector4::from([1, 2, 3, 4]), v);
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    // === Swizzles ===

    #[test]
    fn identity_swizzle_gives_same_vector() {
        let v = Vector2::new(3_u32, 8);
        assert_eq!(v.xy(), v);

        let v = Vector3::new(1.0_f32, 2.0, 3.0);
        assert_eq!(v.xyz(), v);

        let v = Vector4::new(1_i8, 2, 3, 4);
        assert_eq!(v.xyzw(), v);
    }

    #[test]
    fn swizzles_select_and_repeat_components() {
        let v = Vector2::new(1_i32, 2);
        assert_eq!(v.yx(), Vector2::new(2, 1));
        assert_eq!(v.xxy(), Vector3::new(1, 1, 2));
        assert_eq!(v.yyyx(), Vector4::new(2, 2, 2, 1));

        let v = Vector4::new(1_u8, 2, 3, 4);
        assert_eq!(v.wz(), Vector2::new(4, 3));
        assert_eq!(v.zwx(), Vector3::new(3, 4, 1));
        assert_eq!(v.wzyx(), Vector4::new(4, 3, 2, 1));
    }

    #[test]
    fn extending_and_truncating_works() {
        let v = Vector2::new(1_i32, 2);
        assert_eq!(v.extended(3), Vector3::new(1, 2, 3));
        assert_eq!(v.extended(3).extended(4), Vector4::new(1, 2, 3, 4));
        assert_eq!(Vector4::new(1, 2, 3, 4).truncated().truncated(), v);
    }

    // === Arithmetic ===

    #[test]
    fn adding_and_subtracting_vectors_works() {
        let a = Vector3::new(1_i32, 2, 3);
        let b = Vector3::new(10_i32, 20, 30);
        assert_eq!(a + b, Vector3::new(11, 22, 33));
        assert_eq!(&a + &b, a + b);
        assert_eq!(b - a, Vector3::new(9, 18, 27));
        assert_eq!(&b - a, b - &a);
    }

    #[test]
    fn narrow_arithmetic_promotes_to_i32() {
        let a = Vector2::new(200_u8, 100);
        let b = Vector2::new(100_u8, 200);
        let sum: Vector2<i32> = a + b;
        assert_eq!(sum, Vector2::new(300, 300));
        assert_eq!(a - b, Vector2::new(100, -100));
        assert_eq!(a * 2, Vector2::new(400, 200));
        assert_eq!(-Vector2::new(-128_i8, 5), Vector2::new(128, -5));
    }

    #[test]
    fn half_arithmetic_promotes_to_f32() {
        let a = Vector2::new(f16::from_f32(1.5), f16::from_f32(-2.0));
        let doubled: Vector2<f32> = a * 2.0;
        assert_eq!(doubled, Vector2::new(3.0, -4.0));
        assert_eq!(-a, Vector2::new(-1.5, 2.0));
    }

    #[test]
    fn wide_arithmetic_keeps_its_type() {
        let a = Vector4::new(1_u64, 2, 3, 4);
        let product: Vector4<u64> = a * 3;
        assert_eq!(product, Vector4::new(3, 6, 9, 12));
        assert_eq!(3_u64 * a, product);
        assert_eq!(product / 3, a);
    }

    #[test]
    fn scalar_multiplication_commutes() {
        let v = Vector3::new(1.0_f64, -2.0, 0.5);
        assert_eq!(2.0_f64 * v, v * 2.0);
        let v = Vector2::new(-3_i16, 4);
        assert_eq!(5_i32 * v, v * 5);
    }

    #[test]
    fn negating_vector_works() {
        let v = Vector3::new(1_i64, -2, 3);
        assert_eq!(-v, Vector3::new(-1, 2, -3));
        assert_eq!(-&v, -v);
    }

    #[test]
    #[should_panic]
    fn dividing_integer_vector_by_zero_panics() {
        let _ = Vector2::new(1_i32, 2) / 0;
    }

    #[test]
    fn checked_division_by_zero_fails_for_integers() {
        assert_eq!(
            Vector2::new(1_u32, 2).checked_div(0),
            Err(VectorError::DivideByZero)
        );
        assert_eq!(
            Vector2::new(4_u32, 2).checked_div(2),
            Ok(Vector2::new(2, 1))
        );
    }

    #[test]
    fn dividing_float_vector_by_zero_follows_ieee() {
        let v = Vector2::new(1.0_f32, 0.0).checked_div(0.0).unwrap();
        assert_eq!(v.x(), f32::INFINITY);
        assert!(v.y().is_nan());
    }

    #[test]
    fn subtracting_vector_from_itself_gives_zero() {
        let v = Vector4::new(u8::MAX, 0, 17, 255);
        assert_eq!(v - v, Vector4::zeros());
    }

    // === Helpers ===

    #[test]
    fn unit_vectors_are_orthonormal() {
        macro_rules! assert_orthonormal {
            ($($t:ty),+) => {
                $(
                    let one = <$t as Scalar>::ONE.promote();
                    let zero = <<$t as Scalar>::Promoted as Scalar>::ZERO;
                    assert_eq!(Vector2::<$t>::unit_x().dot(&Vector2::unit_x()), one);
                    assert_eq!(Vector2::<$t>::unit_y().dot(&Vector2::unit_y()), one);
                    assert_eq!(Vector2::<$t>::unit_x().dot(&Vector2::unit_y()), zero);
                    assert_eq!(Vector3::<$t>::unit_z().dot(&Vector3::unit_x()), zero);
                    assert_eq!(Vector4::<$t>::unit_w().dot(&Vector4::unit_w()), one);
                )+
            };
        }
        assert_orthonormal!(i8, u8, i16, u16, i32, u32, i64, u64, f16, f32, f64);
    }

    #[test]
    fn norm_of_extreme_narrow_components_does_not_overflow() {
        assert_abs_diff_eq!(Vector2::new(u16::MAX, 0).norm(), 65535.0, epsilon = 1e-2);
        assert_abs_diff_eq!(
            Vector2::new(i16::MIN, i16::MIN).norm(),
            32768.0 * std::f32::consts::SQRT_2,
            epsilon = 1e-2
        );
        assert_eq!(Vector4::same(u8::MAX).norm(), 510.0);
    }

    #[test]
    fn norm_of_large_int_components_does_not_overflow() {
        assert_eq!(Vector2::new(50_000_i32, 0).norm(), 50000.0);
        assert_abs_diff_eq!(
            Vector3::new(i32::MAX, 0, 0).norm(),
            2_147_483_648.0,
            epsilon = 1.0
        );
        assert_relative_eq!(
            Vector2::new(i64::MAX, i64::MAX).norm(),
            9.223_372_036_854_776e18 * std::f64::consts::SQRT_2,
            max_relative = 1e-12
        );
    }

    #[test]
    fn normalizing_extreme_components_gives_unit_vector() {
        let half_sqrt_2 = std::f32::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(
            Vector2::new(i16::MIN, i16::MIN).normalized(),
            Vector2::new(-half_sqrt_2, -half_sqrt_2),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Vector2::new(0, u16::MAX).normalized(),
            Vector2::new(0.0, 1.0),
            epsilon = EPSILON
        );
        assert_eq!(
            Vector3::new(0, 0, -50_000_i32).normalized(),
            Vector3::new(0.0, 0.0, -1.0)
        );
    }

    #[test]
    fn equal_vectors_hash_equally() {
        fn hash_of(vector: &impl Hash) -> u64 {
            let mut hasher = std::hash::DefaultHasher::new();
            vector.hash(&mut hasher);
            hasher.finish()
        }
        assert_eq!(
            hash_of(&Vector3::new(1_u16, 2, 3)),
            hash_of(&Vector3::new(1_u16, 2, 3))
        );
        assert_ne!(
            hash_of(&Vector3::new(1_u16, 2, 3)),
            hash_of(&Vector3::new(3_u16, 2, 1))
        );
        assert_eq!(
            hash_of(&Vector2::new(0.0_f32, 1.5)),
            hash_of(&Vector2::new(-0.0_f32, 1.5))
        );
        assert_eq!(
            hash_of(&Vector4::same(f16::ONE)),
            hash_of(&Vector4::same(f16::ONE))
        );
    }

    #[test]
    fn dot_product_of_narrow_vectors_does_not_overflow() {
        let v = Vector4::same(255_u8);
        assert_eq!(v.dot(&v), 4 * 255 * 255);
        assert_eq!(v.norm_squared(), 260100);
    }

    #[test]
    fn computing_vector2_norm_works() {
        let v = Vector2::new(3_i32, 4);
        assert_abs_diff_eq!(v.norm(), 5.0, epsilon = EPSILON);
        assert_eq!(v.norm_squared(), 25);
    }

    #[test]
    fn norm_of_wide_integers_is_double_precision() {
        let v = Vector2::new(3_i64, 4);
        let norm: f64 = v.norm();
        assert_abs_diff_eq!(norm, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn normalizing_vector2_gives_unit_vector() {
        let normalized = Vector2::new(3_i32, 4).normalized();
        assert_abs_diff_eq!(normalized.norm(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(normalized, Vector2::new(0.6, 0.8), epsilon = EPSILON);
    }

    #[test]
    fn normalizing_zero_vector_gives_zero() {
        assert_eq!(Vector2::<f32>::zeros().normalized(), Vector2::zeros());
        assert_eq!(Vector3::<u16>::zeros().normalized(), Vector3::zeros());
        assert_eq!(Vector4::<f64>::zeros().normalized(), Vector4::zeros());
    }

    #[test]
    fn component_abs_min_max_work() {
        let a = Vector3::new(-1_i32, 5, -7);
        let b = Vector3::new(2_i32, -3, -8);
        assert_eq!(a.component_abs(), Vector3::new(1, 5, 7));
        assert_eq!(a.component_min(&b), Vector3::new(-1, -3, -8));
        assert_eq!(a.component_max(&b), Vector3::new(2, 5, -7));
    }

    #[test]
    fn clamping_vector_works() {
        let v = Vector4::new(-5.0_f32, 0.5, 10.0, 2.0);
        let min = Vector4::same(0.0);
        let max = Vector4::new(1.0, 1.0, 1.0, 3.0);
        assert_eq!(
            v.component_clamp(&min, &max),
            Vector4::new(0.0, 0.5, 1.0, 2.0)
        );
    }

    #[test]
    fn min_and_max_components_work() {
        let v = Vector4::new(3_i8, -9, 12, 0);
        assert_eq!(v.min_component(), -9);
        assert_eq!(v.max_component(), 12);
        assert_eq!(v.component_sum(), 6);
    }

    #[test]
    fn all_and_any_test_for_nonzero() {
        assert!(Vector3::new(1_u8, 2, 3).all());
        assert!(!Vector3::new(1_u8, 0, 3).all());
        assert!(Vector3::new(0_u8, 0, 3).any());
        assert!(!Vector3::<u8>::zeros().any());
        assert!(Vector2::new(f32::NAN, 1.0).all());
    }

    #[test]
    fn all_and_any_with_predicate_work() {
        let v = Vector4::new(2_i32, 4, 6, 7);
        assert!(!v.all_by(|c| c % 2 == 0));
        assert!(v.any_by(|c| c % 2 == 1));
        assert!(v.all_by(|c| c > 0));
    }

    #[test]
    fn mapping_can_change_scalar_type() {
        let v = Vector3::new(1_i32, -2, 3);
        assert_eq!(v.mapped(|c| c > 0), Vector3 { x: true, y: false, z: true });
        assert_eq!(v.mapped(|c| f64::from(c) * 0.5), Vector3::new(0.5, -1.0, 1.5));
    }

    #[test]
    fn component_mul_truncates_narrow_products() {
        let a = Vector2::new(20_u8, 3);
        let b = Vector2::new(15_u8, 4);
        assert_eq!(a.component_mul(&b), Vector2::new(44, 12));
        assert_eq!(
            Vector3::new(1.5_f32, 2.0, -1.0).component_mul(&Vector3::new(2.0, 0.5, 3.0)),
            Vector3::new(3.0, 1.0, -3.0)
        );
    }

    #[test]
    fn computing_cross_product_works() {
        let x = Vector3::<i32>::unit_x();
        let y = Vector3::<i32>::unit_y();
        assert_eq!(x.cross(&y), Vector3::unit_z());
        assert_eq!(y.cross(&x), -Vector3::<i32>::unit_z());
    }

    #[test]
    fn lerp_interpolates_between_endpoints() {
        let a = Vector2::new(0.0_f64, 10.0);
        let b = Vector2::new(10.0_f64, 20.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_abs_diff_eq!(a.lerp(&b, 0.25), Vector2::new(2.5, 12.5), epsilon = 1e-12);
    }

    // === Formatting and equality ===

    #[test]
    fn displaying_vector_lists_components() {
        assert_eq!(Vector2::new(1_i32, -2).to_string(), "(1, -2)");
        assert_eq!(
            format!("{:.2}", Vector3::new(1.0_f32, 0.5, -0.126)),
            "(1.00, 0.50, -0.13)"
        );
        assert_eq!(format!("{:+}", Vector4::new(1_i8, 2, 3, 4)), "(+1, +2, +3, +4)");
    }

    #[test]
    fn debug_output_names_components() {
        assert_eq!(
            format!("{:?}", Vector2::new(1_u8, 2)),
            "Vector2 { x: 1, y: 2 }"
        );
    }

    #[test]
    fn float_equality_is_exact() {
        let a = Vector2::new(0.1_f64 + 0.2, 0.0);
        let b = Vector2::new(0.3_f64, 0.0);
        assert_ne!(a, b);
        assert_abs_diff_eq!(a, b, epsilon = 1e-12);
    }

    #[test]
    fn vectors_are_plain_old_data() {
        let v = Vector3::new(1_u16, 2, 3);
        assert_eq!(bytemuck::bytes_of(&v).len(), 6);
        assert_eq!(size_of::<Vector4<f64>>(), 32);
        assert_eq!(bytemuck::cast::<[u16; 3], Vector3<u16>>([1, 2, 3]), v);
    }

    proptest! {
        #[test]
        fn integer_vector_addition_is_commutative(
            ax in -1_000_000..1_000_000_i32,
            ay in -1_000_000..1_000_000_i32,
            bx in -1_000_000..1_000_000_i32,
            by in -1_000_000..1_000_000_i32,
        ) {
            let a = Vector2::new(ax, ay);
            let b = Vector2::new(bx, by);
            prop_assert_eq!(a + b, b + a);
        }
    }

    proptest! {
        #[test]
        fn integer_vector_addition_is_associative(
            a in prop::array::uniform3(-1_000_000..1_000_000_i64),
            b in prop::array::uniform3(-1_000_000..1_000_000_i64),
            c in prop::array::uniform3(-1_000_000..1_000_000_i64),
        ) {
            let a = Vector3::from(a);
            let b = Vector3::from(b);
            let c = Vector3::from(c);
            prop_assert_eq!((a + b) + c, a + (b + c));
        }
    }

    proptest! {
        #[test]
        fn narrow_vector_minus_itself_is_zero(v in prop::array::uniform4(any::<u8>())) {
            let v = Vector4::from(v);
            prop_assert_eq!(v - v, Vector4::<i32>::zeros());
        }
    }

    proptest! {
        #[test]
        fn normalized_nonzero_vector_has_unit_norm(
            v in prop::array::uniform3(-1000..1000_i32)
                .prop_filter("non-zero", |v| v.iter().any(|&c| c != 0))
        ) {
            let normalized = Vector3::from(v).normalized();
            prop_assert!(approx::abs_diff_eq!(normalized.norm(), 1.0, epsilon = 1e-5));
        }
    }
}
