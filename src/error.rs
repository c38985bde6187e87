//! Errors for fallible vector operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VectorError>;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum VectorError {
    #[error("Component index {index} is out of range for a vector with {arity} components")]
    IndexOutOfRange { index: usize, arity: usize },

    #[error("Need {required} elements to construct a vector, but only {available} are available")]
    InsufficientElements { required: usize, available: usize },

    #[error("Tried to divide an integer vector by zero")]
    DivideByZero,

    #[error(
        "Invalid bit widths {bits:?} for packing {component_bits}-bit components into {packed_bits} bits"
    )]
    InvalidBitWidth {
        bits: Vec<u32>,
        component_bits: u32,
        packed_bits: u32,
    },
}
