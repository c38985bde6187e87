//! Conversions to and from [`glam`] vectors.

use crate::vector::{Vector2, Vector3, Vector4};

macro_rules! impl_glam_conversions {
    ($($name:ident<$t:ty> <=> $glam:ty),+ $(,)?) => {
        $(
            impl From<$glam> for $name<$t> {
                #[inline]
                fn from(vector: $glam) -> Self {
                    Self::from(vector.to_array())
                }
            }

            impl From<$name<$t>> for $glam {
                #[inline]
                fn from(vector: $name<$t>) -> Self {
                    <$glam>::from_array(vector.to_array())
                }
            }
        )+
    };
}

impl_glam_conversions!(
    Vector2<f32> <=> glam::Vec2,
    Vector3<f32> <=> glam::Vec3,
    Vector4<f32> <=> glam::Vec4,
    Vector2<f64> <=> glam::DVec2,
    Vector3<f64> <=> glam::DVec3,
    Vector4<f64> <=> glam::DVec4,
    Vector2<i32> <=> glam::IVec2,
    Vector3<i32> <=> glam::IVec3,
    Vector4<i32> <=> glam::IVec4,
    Vector2<u32> <=> glam::UVec2,
    Vector3<u32> <=> glam::UVec3,
    Vector4<u32> <=> glam::UVec4,
);
