//! Scalar types that can be used as vector components.

use bytemuck::Pod;
use half::f16;
use num_traits::{self as nt, AsPrimitive};
use std::{
    fmt,
    io::{self, Read, Write},
};

/// A primitive number that can be stored in a vector.
///
/// Every scalar knows the type its arithmetic is carried out in
/// ([`Promoted`](Self::Promoted)) and the floating point type that lengths and
/// directions of vectors of the scalar are expressed in
/// ([`Real`](Self::Real)).
pub trait Scalar:
    Copy
    + Default
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Pod
    + nt::Num
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    /// Width of the binary representation.
    const BITS: u32;

    /// Type that arithmetic on this scalar produces. The 8- and 16-bit
    /// integers promote to `i32` and `f16` promotes to `f32`, the remaining
    /// scalars are their own promoted type.
    type Promoted: Scalar<Real = Self::Real>;

    /// Natural floating point type for this scalar.
    type Real: Float;

    /// Converts to the promoted type.
    fn promote(self) -> Self::Promoted;

    /// Converts from the promoted type, truncating or wrapping values outside
    /// the range of this type.
    fn demote(value: Self::Promoted) -> Self;

    /// Converts to the natural floating point type.
    fn to_real(self) -> Self::Real;

    /// Whether the value is anything other than zero. NaN counts as non-zero.
    #[inline]
    fn is_nonzero(self) -> bool {
        self != Self::ZERO
    }

    /// Whether dividing by this value is an error. Only integer zero is;
    /// float division follows IEEE 754.
    fn is_zero_divisor(self) -> bool;

    fn abs_value(self) -> Self;

    fn min_of(self, other: Self) -> Self;

    fn max_of(self, other: Self) -> Self;

    /// The raw bit pattern, zero-extended to 128 bits.
    fn to_bit_pattern(self) -> u128;

    /// Reconstructs a value from the lowest [`BITS`](Self::BITS) bits of the
    /// given pattern.
    fn from_bit_pattern(bits: u128) -> Self;

    /// Writes the little-endian byte representation.
    fn write_le(self, writer: &mut impl Write) -> io::Result<()>;

    /// Reads a value from its little-endian byte representation.
    fn read_le(reader: &mut impl Read) -> io::Result<Self>;
}

/// A scalar whose vectors support negation.
pub trait SignedScalar: Scalar {
    fn negated(self) -> Self::Promoted;
}

/// Gathers traits useful for working with generic floating point types.
pub trait Float:
    Scalar<Real = Self, Promoted = Self>
    + SignedScalar
    + nt::Float
    + approx::AbsDiffEq<Epsilon = Self>
    + approx::RelativeEq
{
    const TWO: Self;
    const PI: Self;
    const TWO_PI: Self;

    /// Smallest positive value, which is subnormal.
    const SMALLEST_POSITIVE: Self;
}

macro_rules! impl_integer_scalar {
    (
        $t:ty,
        bits_as = $u:ty,
        promoted = $p:ty,
        real = $r:ty,
        abs = |$v:ident| $abs:expr
    ) => {
        impl Scalar for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const BITS: u32 = <$t>::BITS;

            type Promoted = $p;
            type Real = $r;

            #[inline]
            fn promote(self) -> $p {
                self.as_()
            }

            #[inline]
            fn demote(value: $p) -> Self {
                value.as_()
            }

            #[inline]
            fn to_real(self) -> $r {
                self.as_()
            }

            #[inline]
            fn is_zero_divisor(self) -> bool {
                self == 0
            }

            #[inline]
            fn abs_value(self) -> Self {
                let $v = self;
                $abs
            }

            #[inline]
            fn min_of(self, other: Self) -> Self {
                Ord::min(self, other)
            }

            #[inline]
            fn max_of(self, other: Self) -> Self {
                Ord::max(self, other)
            }

            #[inline]
            fn to_bit_pattern(self) -> u128 {
                u128::from(self as $u)
            }

            #[inline]
            fn from_bit_pattern(bits: u128) -> Self {
                bits as $u as $t
            }

            fn write_le(self, writer: &mut impl Write) -> io::Result<()> {
                writer.write_all(&self.to_le_bytes())
            }

            fn read_le(reader: &mut impl Read) -> io::Result<Self> {
                let mut bytes = [0; size_of::<$t>()];
                reader.read_exact(&mut bytes)?;
                Ok(<$t>::from_le_bytes(bytes))
            }
        }
    };
}

macro_rules! impl_float_scalar {
    (
        $t:ty,
        bits_as = $u:ty,
        promoted = $p:ty,
        real = $r:ty,
        zero = $zero:expr,
        one = $one:expr
    ) => {
        impl Scalar for $t {
            const ZERO: Self = $zero;
            const ONE: Self = $one;
            const BITS: u32 = <$u>::BITS;

            type Promoted = $p;
            type Real = $r;

            #[inline]
            fn promote(self) -> $p {
                self.as_()
            }

            #[inline]
            fn demote(value: $p) -> Self {
                value.as_()
            }

            #[inline]
            fn to_real(self) -> $r {
                self.as_()
            }

            #[inline]
            fn is_zero_divisor(self) -> bool {
                false
            }

            #[inline]
            fn abs_value(self) -> Self {
                nt::Float::abs(self)
            }

            #[inline]
            fn min_of(self, other: Self) -> Self {
                nt::Float::min(self, other)
            }

            #[inline]
            fn max_of(self, other: Self) -> Self {
                nt::Float::max(self, other)
            }

            #[inline]
            fn to_bit_pattern(self) -> u128 {
                u128::from(self.to_bits())
            }

            #[inline]
            fn from_bit_pattern(bits: u128) -> Self {
                <$t>::from_bits(bits as $u)
            }

            fn write_le(self, writer: &mut impl Write) -> io::Result<()> {
                writer.write_all(&self.to_le_bytes())
            }

            fn read_le(reader: &mut impl Read) -> io::Result<Self> {
                let mut bytes = [0; size_of::<$t>()];
                reader.read_exact(&mut bytes)?;
                Ok(<$t>::from_le_bytes(bytes))
            }
        }

        impl SignedScalar for $t {
            #[inline]
            fn negated(self) -> $p {
                -self.promote()
            }
        }
    };
}

macro_rules! impl_signed_integer {
    ($($t:ty),+) => {
        $(
            impl SignedScalar for $t {
                #[inline]
                fn negated(self) -> Self::Promoted {
                    -self.promote()
                }
            }
        )+
    };
}

macro_rules! impl_float {
    ($f:tt) => {
        impl Float for $f {
            const TWO: Self = 2.0;
            const PI: Self = std::$f::consts::PI;
            const TWO_PI: Self = std::$f::consts::TAU;
            const SMALLEST_POSITIVE: Self = $f::from_bits(1);
        }
    };
}

impl_integer_scalar!(i8, bits_as = u8, promoted = i32, real = f32, abs = |v| v.abs());
impl_integer_scalar!(u8, bits_as = u8, promoted = i32, real = f32, abs = |v| v);
impl_integer_scalar!(i16, bits_as = u16, promoted = i32, real = f32, abs = |v| v.abs());
impl_integer_scalar!(u16, bits_as = u16, promoted = i32, real = f32, abs = |v| v);
impl_integer_scalar!(i32, bits_as = u32, promoted = i32, real = f32, abs = |v| v.abs());
impl_integer_scalar!(u32, bits_as = u32, promoted = u32, real = f32, abs = |v| v);
impl_integer_scalar!(i64, bits_as = u64, promoted = i64, real = f64, abs = |v| v.abs());
impl_integer_scalar!(u64, bits_as = u64, promoted = u64, real = f64, abs = |v| v);

impl_signed_integer!(i8, i16, i32, i64);

impl_float_scalar!(
    f16,
    bits_as = u16,
    promoted = f32,
    real = f32,
    zero = f16::ZERO,
    one = f16::ONE
);
impl_float_scalar!(f32, bits_as = u32, promoted = f32, real = f32, zero = 0.0, one = 1.0);
impl_float_scalar!(f64, bits_as = u64, promoted = f64, real = f64, zero = 0.0, one = 1.0);

impl_float!(f32);
impl_float!(f64);
