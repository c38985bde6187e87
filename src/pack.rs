//! Packing vector components into a single unsigned integer.

use crate::{
    error::{Result, VectorError},
    num::Scalar,
    vector::{Vector2, Vector3, Vector4},
};
use half::f16;

/// Bit-level packing of the components of a vector into one unsigned integer.
///
/// Components are laid out consecutively with the first component occupying
/// the lowest bits. Signed components are packed by their two's complement bit
/// pattern and floats by their IEEE 754 bit pattern.
pub trait Pack: Sized {
    /// The unsigned integer type holding the packed components.
    type Packed: Copy;

    /// The number of bits to use for each component, one entry per component.
    type BitWidths;

    /// Concatenates the full bit patterns of all components.
    fn pack(&self) -> Self::Packed;

    /// Splits a value produced by [`pack`](Self::pack) back into components.
    fn unpack(packed: Self::Packed) -> Self;

    /// Packs the lowest `bits[i]` bits of component `i`. The higher bits of
    /// each component are discarded.
    ///
    /// # Errors
    /// Returns [`VectorError::InvalidBitWidth`] if any width exceeds the
    /// component width or the widths sum to more than the packed width.
    fn pack_bits(&self, bits: Self::BitWidths) -> Result<Self::Packed>;

    /// Packs the highest `bits[i]` bits of component `i`. The lower bits of
    /// each component are discarded.
    ///
    /// # Errors
    /// Returns [`VectorError::InvalidBitWidth`] under the same conditions as
    /// [`pack_bits`](Self::pack_bits).
    fn pack_high_bits(&self, bits: Self::BitWidths) -> Result<Self::Packed>;

    /// Extracts `bits[i]` bits for component `i` from the packed value and
    /// zero-extends them. This inverts [`pack_bits`](Self::pack_bits) for
    /// components whose bit pattern fits in their width, so negative signed
    /// components do not survive the round trip unless packed at full width.
    ///
    /// # Errors
    /// Returns [`VectorError::InvalidBitWidth`] under the same conditions as
    /// [`pack_bits`](Self::pack_bits).
    fn unpack_bits(bits: Self::BitWidths, packed: Self::Packed) -> Result<Self>;
}

macro_rules! impl_pack {
    ($name:ident, $n:literal => $($t:ty => $p:ty),+ $(,)?) => {
        $(
            impl Pack for $name<$t> {
                type Packed = $p;
                type BitWidths = [u32; $n];

                #[inline]
                fn pack(&self) -> $p {
                    let bits = [<$t as Scalar>::BITS; $n];
                    concat_bits(self.to_array().map(Scalar::to_bit_pattern), &bits) as $p
                }

                #[inline]
                fn unpack(packed: $p) -> Self {
                    let bits = [<$t as Scalar>::BITS; $n];
                    Self::from(split_bits(u128::from(packed), &bits).map(<$t>::from_bit_pattern))
                }

                fn pack_bits(&self, bits: [u32; $n]) -> Result<$p> {
                    validate_bit_widths(&bits, <$t as Scalar>::BITS, <$p>::BITS)?;
                    Ok(concat_bits(self.to_array().map(Scalar::to_bit_pattern), &bits) as $p)
                }

                fn pack_high_bits(&self, bits: [u32; $n]) -> Result<$p> {
                    let width = <$t as Scalar>::BITS;
                    validate_bit_widths(&bits, width, <$p>::BITS)?;
                    let patterns = self.to_array().map(Scalar::to_bit_pattern);
                    let high = std::array::from_fn(|idx| patterns[idx] >> (width - bits[idx]));
                    Ok(concat_bits(high, &bits) as $p)
                }

                fn unpack_bits(bits: [u32; $n], packed: $p) -> Result<Self> {
                    validate_bit_widths(&bits, <$t as Scalar>::BITS, <$p>::BITS)?;
                    Ok(Self::from(
                        split_bits(u128::from(packed), &bits).map(<$t>::from_bit_pattern),
                    ))
                }
            }
        )+
    };
}

impl_pack!(Vector2, 2 =>
    i8 => u16, u8 => u16,
    i16 => u32, u16 => u32, f16 => u32,
    i32 => u64, u32 => u64, f32 => u64,
    i64 => u128, u64 => u128, f64 => u128,
);

impl_pack!(Vector3, 3 =>
    i8 => u32, u8 => u32,
    i16 => u64, u16 => u64, f16 => u64,
    i32 => u128, u32 => u128, f32 => u128,
);

impl_pack!(Vector4, 4 =>
    i8 => u32, u8 => u32,
    i16 => u64, u16 => u64, f16 => u64,
    i32 => u128, u32 => u128, f32 => u128,
);

fn validate_bit_widths(bits: &[u32], component_bits: u32, packed_bits: u32) -> Result<()> {
    let fits_components = bits.iter().all(|&b| b <= component_bits);
    if fits_components && bits.iter().sum::<u32>() <= packed_bits {
        return Ok(());
    }
    log::debug!(
        "Rejected bit widths {bits:?} for {component_bits}-bit components packed into {packed_bits} bits"
    );
    Err(VectorError::InvalidBitWidth {
        bits: bits.to_vec(),
        component_bits,
        packed_bits,
    })
}

fn low_bit_mask(bits: u32) -> u128 {
    1_u128.checked_shl(bits).map_or(u128::MAX, |bit| bit - 1)
}

fn concat_bits<const N: usize>(patterns: [u128; N], bits: &[u32; N]) -> u128 {
    let mut packed = 0;
    let mut offset = 0;
    for (pattern, &width) in patterns.into_iter().zip(bits) {
        packed |= (pattern & low_bit_mask(width))
            .checked_shl(offset)
            .unwrap_or(0);
        offset += width;
    }
    packed
}

fn split_bits<const N: usize>(packed: u128, bits: &[u32; N]) -> [u128; N] {
    let mut offset = 0;
    bits.map(|width| {
        let pattern = packed.checked_shr(offset).unwrap_or(0) & low_bit_mask(width);
        offset += width;
        pattern
    })
}
