//! Fixed-size vectors with 2, 3 and 4 components over the primitive integer
//! types and half, single and double precision floats.
//!
//! Arithmetic on 8- and 16-bit integers is carried out in `i32`, and on `f16`
//! in `f32`, so `Vector2<u8> + Vector2<u8>` gives a `Vector2<i32>`. Lengths
//! and directions are computed in the natural floating point type of the
//! scalar, see [`Scalar`].

#[macro_use]
mod macros;

pub mod angle;
pub mod convert;
pub mod error;
#[cfg(feature = "glam")]
pub mod interop;
pub mod io;
pub mod num;
pub mod pack;
pub mod polar;
pub mod vector;

pub use angle::{Angle, Degrees, Radians};
pub use error::{Result, VectorError};
pub use half::f16;
pub use io::{BinaryVector, ReadVectorExt, WriteVectorExt};
pub use num::{Float, Scalar, SignedScalar};
pub use pack::Pack;
pub use polar::PolarCoordinate;
pub use vector::{Vector2, Vector3, Vector4};

macro_rules! define_vector_aliases {
    ($($suffix:ident => $t:ident),+ $(,)?) => {
        paste::paste! {
            $(
                #[doc = "A 2-dimensional vector of `" $t "`."]
                pub type [<Vector2 $suffix>] = Vector2<$t>;
                #[doc = "A 3-dimensional vector of `" $t "`."]
                pub type [<Vector3 $suffix>] = Vector3<$t>;
                #[doc = "A 4-dimensional vector of `" $t "`."]
                pub type [<Vector4 $suffix>] = Vector4<$t>;
            )+
        }
    };
}

define_vector_aliases!(
    sb => i8,
    b => u8,
    s => i16,
    us => u16,
    i => i32,
    ui => u32,
    l => i64,
    ul => u64,
    h => f16,
    f => f32,
    d => f64,
);
