//! Buffer access traits for wire encoding and decoding.
//!
//! This module provides:
//! - [`ReadBuffer`] trait for read-only buffer access
//! - [`WriteBuffer`] trait for read-write buffer access
//!
//! All multi-byte accessors use little-endian byte order, the single
//! endianness of the wire format.

use crate::error::{Error, Result};

/// Trait for read-only buffer access with primitive reads.
pub trait ReadBuffer {
    /// Returns the buffer as a byte slice.
    fn as_slice(&self) -> &[u8];

    /// Returns the length of the buffer in bytes.
    fn len(&self) -> usize;

    /// Returns true if the buffer is empty.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks that `len` bytes starting at `offset` lie inside the buffer.
    ///
    /// # Errors
    /// Returns [`Error::BufferTooShort`] when the range crosses the end of
    /// the buffer.
    fn check_range(&self, offset: usize, len: usize) -> Result<()> {
        match offset.checked_add(len) {
            Some(end) if end <= self.len() => Ok(()),
            _ => Err(Error::BufferTooShort {
                required: offset.saturating_add(len),
                available: self.len(),
            }),
        }
    }

    /// Reads a u8 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    #[inline(always)]
    fn get_u8(&self, offset: usize) -> u8 {
        self.as_slice()[offset]
    }

    /// Reads an i8 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    #[inline(always)]
    fn get_i8(&self, offset: usize) -> i8 {
        self.as_slice()[offset] as i8
    }

    /// Reads a u16 in little-endian at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    #[inline(always)]
    fn get_u16_le(&self, offset: usize) -> u16 {
        let bytes = &self.as_slice()[offset..offset + 2];
        u16::from_le_bytes([bytes[0], bytes[1]])
    }

    /// Reads an i16 in little-endian at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    #[inline(always)]
    fn get_i16_le(&self, offset: usize) -> i16 {
        let bytes = &self.as_slice()[offset..offset + 2];
        i16::from_le_bytes([bytes[0], bytes[1]])
    }

    /// Reads a u32 in little-endian at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    #[inline(always)]
    fn get_u32_le(&self, offset: usize) -> u32 {
        let bytes = &self.as_slice()[offset..offset + 4];
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Reads an i32 in little-endian at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    #[inline(always)]
    fn get_i32_le(&self, offset: usize) -> i32 {
        let bytes = &self.as_slice()[offset..offset + 4];
        i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Reads a u64 in little-endian at the given offset.
    ///
    /// The wire format has no u64 field kind; this accessor carries the bit
    /// pattern for [`ReadBuffer::get_f64_le`].
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    #[inline(always)]
    fn get_u64_le(&self, offset: usize) -> u64 {
        let bytes = &self.as_slice()[offset..offset + 8];
        u64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ])
    }

    /// Reads an f32 in little-endian at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    #[inline(always)]
    fn get_f32_le(&self, offset: usize) -> f32 {
        f32::from_bits(self.get_u32_le(offset))
    }

    /// Reads an f64 in little-endian at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    #[inline(always)]
    fn get_f64_le(&self, offset: usize) -> f64 {
        f64::from_bits(self.get_u64_le(offset))
    }

    /// Returns a slice of bytes at the given offset and length.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to start from
    /// * `len` - Number of bytes to read
    #[inline(always)]
    fn get_bytes(&self, offset: usize, len: usize) -> &[u8] {
        &self.as_slice()[offset..offset + len]
    }
}

/// Trait for read-write buffer access with primitive writes.
///
/// The encode path never range-checks: the builder allocates buffers of the
/// exact computed size before any write happens.
pub trait WriteBuffer: ReadBuffer {
    /// Returns the buffer as a mutable byte slice.
    fn as_mut_slice(&mut self) -> &mut [u8];

    /// Writes a u8 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `value` - Value to write
    #[inline(always)]
    fn put_u8(&mut self, offset: usize, value: u8) {
        self.as_mut_slice()[offset] = value;
    }

    /// Writes an i8 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `value` - Value to write
    #[inline(always)]
    fn put_i8(&mut self, offset: usize, value: i8) {
        self.as_mut_slice()[offset] = value as u8;
    }

    /// Writes a u16 in little-endian at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `value` - Value to write
    #[inline(always)]
    fn put_u16_le(&mut self, offset: usize, value: u16) {
        let bytes = value.to_le_bytes();
        self.as_mut_slice()[offset..offset + 2].copy_from_slice(&bytes);
    }

    /// Writes an i16 in little-endian at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `value` - Value to write
    #[inline(always)]
    fn put_i16_le(&mut self, offset: usize, value: i16) {
        let bytes = value.to_le_bytes();
        self.as_mut_slice()[offset..offset + 2].copy_from_slice(&bytes);
    }

    /// Writes a u32 in little-endian at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `value` - Value to write
    #[inline(always)]
    fn put_u32_le(&mut self, offset: usize, value: u32) {
        let bytes = value.to_le_bytes();
        self.as_mut_slice()[offset..offset + 4].copy_from_slice(&bytes);
    }

    /// Writes an i32 in little-endian at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `value` - Value to write
    #[inline(always)]
    fn put_i32_le(&mut self, offset: usize, value: i32) {
        let bytes = value.to_le_bytes();
        self.as_mut_slice()[offset..offset + 4].copy_from_slice(&bytes);
    }

    /// Writes a u64 in little-endian at the given offset.
    ///
    /// Carries the bit pattern for [`WriteBuffer::put_f64_le`].
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `value` - Value to write
    #[inline(always)]
    fn put_u64_le(&mut self, offset: usize, value: u64) {
        let bytes = value.to_le_bytes();
        self.as_mut_slice()[offset..offset + 8].copy_from_slice(&bytes);
    }

    /// Writes an f32 in little-endian at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `value` - Value to write
    #[inline(always)]
    fn put_f32_le(&mut self, offset: usize, value: f32) {
        self.put_u32_le(offset, value.to_bits());
    }

    /// Writes an f64 in little-endian at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `value` - Value to write
    #[inline(always)]
    fn put_f64_le(&mut self, offset: usize, value: f64) {
        self.put_u64_le(offset, value.to_bits());
    }

    /// Writes a byte slice at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to write to
    /// * `src` - Source bytes to copy
    #[inline(always)]
    fn put_bytes(&mut self, offset: usize, src: &[u8]) {
        self.as_mut_slice()[offset..offset + src.len()].copy_from_slice(src);
    }
}

/// Implement ReadBuffer for byte slices.
impl ReadBuffer for [u8] {
    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }
}

/// Implement ReadBuffer for `Vec<u8>`.
impl ReadBuffer for Vec<u8> {
    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// Implement WriteBuffer for `Vec<u8>`.
impl WriteBuffer for Vec<u8> {
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        self
    }
}
