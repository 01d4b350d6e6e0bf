use thiserror::Error;

/// Errors raised while building, validating or staging uniform data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UniformError {
    #[error("expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("field `{field}` at offset {offset} is not aligned to {align} bytes")]
    Misaligned {
        field: &'static str,
        offset: usize,
        align: usize,
    },
    #[error("field `{field}` overlaps or precedes the previous field")]
    FieldOrder { field: &'static str },
    #[error("field `{field}` extends past the end of the struct")]
    FieldOutOfBounds { field: &'static str },
    #[error("`{name}` is {size} bytes, which breaks the 16-byte uniform struct rules")]
    StructSize { name: &'static str, size: usize },
    #[error("invalid projection: {0}")]
    InvalidProjection(String),
    #[error("uniform ring needs at least one slot")]
    EmptyRing,
    #[error("all {capacity} uniform slots are still in flight")]
    RingExhausted { capacity: usize },
    #[error("light index {0} is out of range")]
    LightIndex(usize),
}
