//! Binary serialization of vectors.
//!
//! A vector is encoded as its components in order, each in the little-endian
//! fixed-width encoding of its scalar type, with no header or padding.

use crate::{
    num::Scalar,
    vector::{Vector2, Vector3, Vector4},
};
use std::io::{self, Read, Write};

/// A vector with a fixed-width binary encoding.
pub trait BinaryVector: Sized {
    /// Number of bytes in the encoding.
    const ENCODED_LEN: usize;

    fn write_to(&self, writer: &mut impl Write) -> io::Result<()>;

    fn read_from(reader: &mut impl Read) -> io::Result<Self>;
}

/// Extends writers with a method for writing vectors.
pub trait WriteVectorExt: Write + Sized {
    /// Writes the binary encoding of the given vector.
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    fn write_vector<V: BinaryVector>(&mut self, vector: &V) -> io::Result<()> {
        log::trace!(
            "Writing {} ({} bytes)",
            std::any::type_name::<V>(),
            V::ENCODED_LEN
        );
        vector.write_to(self)
    }
}

/// Extends readers with a method for reading vectors.
pub trait ReadVectorExt: Read + Sized {
    /// Reads a vector from its binary encoding.
    ///
    /// # Errors
    /// Returns an error of kind [`io::ErrorKind::UnexpectedEof`] if the
    /// reader ends before the whole vector is read, or any other error from
    /// the underlying reader.
    fn read_vector<V: BinaryVector>(&mut self) -> io::Result<V> {
        log::trace!(
            "Reading {} ({} bytes)",
            std::any::type_name::<V>(),
            V::ENCODED_LEN
        );
        V::read_from(self)
    }
}

impl<W: Write> WriteVectorExt for W {}

impl<R: Read> ReadVectorExt for R {}

macro_rules! impl_binary_vector {
    ($($name:ident, $n:literal);+) => {
        $(
            impl<T: Scalar> BinaryVector for $name<T> {
                const ENCODED_LEN: usize = $n * size_of::<T>();

                fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
                    self.iter().try_for_each(|component| component.write_le(writer))
                }

                fn read_from(reader: &mut impl Read) -> io::Result<Self> {
                    let mut components = [T::ZERO; $n];
                    for component in &mut components {
                        *component = T::read_le(reader)?;
                    }
                    Ok(Self::from(components))
                }
            }
        )+
    };
}

impl_binary_vector!(Vector2, 2; Vector3, 3; Vector4, 4);
