//! Lossless conversions between vectors of different scalar types.
//!
//! A vector converts with [`From`] into a vector of the same arity whenever
//! every value of the source scalar is exactly representable in the target
//! scalar (or, for the 64-bit integers, when the target is a floating point
//! type). Anything narrower goes through [`cast`](crate::Vector2::cast).

use crate::vector::{Vector2, Vector3, Vector4};
use half::f16;

macro_rules! impl_widening_from {
    ($($src:ty => [$($dst:ty),+]);+ $(;)?) => {
        $($(
            impl_widening_from!(@vector Vector2, $src, $dst);
            impl_widening_from!(@vector Vector3, $src, $dst);
            impl_widening_from!(@vector Vector4, $src, $dst);
        )+)+
    };
    (@vector $name:ident, $src:ty, $dst:ty) => {
        impl From<$name<$src>> for $name<$dst> {
            #[inline]
            fn from(vector: $name<$src>) -> Self {
                vector.cast()
            }
        }
    };
}

impl_widening_from!(
    i8 => [i16, i32, i64, f32, f64];
    u8 => [i16, u16, i32, u32, i64, u64, f32, f64];
    i16 => [i32, i64, f32, f64];
    u16 => [i32, u32, i64, u64, f32, f64];
    i32 => [i64, f32, f64];
    u32 => [i64, u64, f32, f64];
    i64 => [f32, f64];
    u64 => [f32, f64];
    f16 => [f32, f64];
    f32 => [f64];
);
