//! Byte-level layout descriptions for host/shader shared structs.
//!
//! Each uniform type lists its shader-visible members with the offset, size
//! and alignment the WGSL uniform address space assigns them. `validate`
//! checks the Rust side against those rules so a drifting field shows up as
//! an error instead of corrupted shading.

use std::fmt::Write;

use bytemuck::Pod;

use crate::error::UniformError;

/// Uniform buffer structs and their array elements are aligned to this.
pub const UNIFORM_ALIGNMENT: usize = 16;

/// One shader-visible member of a uniform struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: &'static str,
    pub offset: usize,
    pub size: usize,
    pub align: usize,
}

impl FieldLayout {
    pub const fn new(name: &'static str, offset: usize, size: usize, align: usize) -> Self {
        Self {
            name,
            offset,
            size,
            align,
        }
    }

    pub const fn end(&self) -> usize {
        self.offset + self.size
    }
}

/// A `Pod` struct whose memory is handed to a shader as-is.
pub trait UniformLayout: Pod {
    /// Name of the matching shader struct.
    const NAME: &'static str;
    /// Shader-visible members in declaration order. Padding is not listed.
    const FIELDS: &'static [FieldLayout];

    fn validate() -> Result<(), UniformError> {
        let size = std::mem::size_of::<Self>();
        if size == 0
            || size % UNIFORM_ALIGNMENT != 0
            || std::mem::align_of::<Self>() < UNIFORM_ALIGNMENT
        {
            return Err(UniformError::StructSize {
                name: Self::NAME,
                size,
            });
        }

        let mut cursor = 0;
        for field in Self::FIELDS {
            if field.offset < cursor {
                return Err(UniformError::FieldOrder { field: field.name });
            }
            if field.align == 0 || field.offset % field.align != 0 {
                return Err(UniformError::Misaligned {
                    field: field.name,
                    offset: field.offset,
                    align: field.align,
                });
            }
            if field.end() > size {
                return Err(UniformError::FieldOutOfBounds { field: field.name });
            }
            cursor = field.end();
        }

        Ok(())
    }
}

/// Renders the layout of `T` as a table.
pub fn describe<T: UniformLayout>() -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({} bytes, align {})",
        T::NAME,
        std::mem::size_of::<T>(),
        std::mem::align_of::<T>()
    );
    let _ = writeln!(out, "  {:<24} {:>6} {:>6} {:>6}", "field", "offset", "size", "align");
    for field in T::FIELDS {
        let _ = writeln!(
            out,
            "  {:<24} {:>6} {:>6} {:>6}",
            field.name, field.offset, field.size, field.align
        );
    }
    out
}
