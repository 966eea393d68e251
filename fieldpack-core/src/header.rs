//! Wire prefix types for variable-width fields.
//!
//! This module provides the two prefixes that precede variable-width
//! payloads:
//! - [`TextHeader`] - 4-byte length prefix for text fields
//! - [`ListHeader`] - 2-byte count prefix for text list fields
//!
//! Fixed-width fields carry no prefix; their width is implied by the type
//! tag alone.

use crate::buffer::{ReadBuffer, WriteBuffer};

/// Text field length prefix (4 bytes).
///
/// Every text payload is preceded by its byte length so the decoder can
/// walk past it without consulting anything but the field kind.
///
/// # Wire Format
/// ```text
/// +0: length (u32, 4 bytes, little-endian)
/// ```
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextHeader {
    /// Length of the UTF-8 payload in bytes.
    pub length: u32,
}

impl TextHeader {
    /// Encoded length of the text header in bytes.
    pub const ENCODED_LENGTH: usize = 4;

    /// Maximum payload length representable by the prefix.
    pub const MAX_PAYLOAD: usize = u32::MAX as usize;

    /// Creates a new text header with the specified payload length.
    ///
    /// # Arguments
    /// * `length` - Length of the UTF-8 payload in bytes
    #[must_use]
    pub const fn new(length: u32) -> Self {
        Self { length }
    }

    /// Wraps a buffer and decodes the text header at the given offset.
    ///
    /// # Arguments
    /// * `buffer` - Buffer to read from
    /// * `offset` - Byte offset to start reading
    ///
    /// # Panics
    /// Panics if the buffer is too short.
    #[inline(always)]
    #[must_use]
    pub fn wrap<B: ReadBuffer + ?Sized>(buffer: &B, offset: usize) -> Self {
        Self {
            length: buffer.get_u32_le(offset),
        }
    }

    /// Encodes the text header to the buffer at the given offset.
    ///
    /// # Arguments
    /// * `buffer` - Buffer to write to
    /// * `offset` - Byte offset to start writing
    #[inline(always)]
    pub fn encode<B: WriteBuffer + ?Sized>(&self, buffer: &mut B, offset: usize) {
        buffer.put_u32_le(offset, self.length);
    }

    /// Returns the total field size (header + payload).
    #[must_use]
    pub const fn total_size(&self) -> usize {
        Self::ENCODED_LENGTH + self.length as usize
    }

    /// Returns true if the payload is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// Text list count prefix (2 bytes).
///
/// A text list is a count prefix followed by that many text fields, each
/// carrying its own [`TextHeader`].
///
/// # Wire Format
/// ```text
/// +0: count (u16, 2 bytes, little-endian)
/// ```
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListHeader {
    /// Number of text entries in the list.
    pub count: u16,
}

impl ListHeader {
    /// Encoded length of the list header in bytes.
    pub const ENCODED_LENGTH: usize = 2;

    /// Maximum number of entries representable by the prefix.
    pub const MAX_ENTRIES: usize = u16::MAX as usize;

    /// Creates a new list header with the specified entry count.
    ///
    /// # Arguments
    /// * `count` - Number of text entries in the list
    #[must_use]
    pub const fn new(count: u16) -> Self {
        Self { count }
    }

    /// Wraps a buffer and decodes the list header at the given offset.
    ///
    /// # Arguments
    /// * `buffer` - Buffer to read from
    /// * `offset` - Byte offset to start reading
    ///
    /// # Panics
    /// Panics if the buffer is too short.
    #[inline(always)]
    #[must_use]
    pub fn wrap<B: ReadBuffer + ?Sized>(buffer: &B, offset: usize) -> Self {
        Self {
            count: buffer.get_u16_le(offset),
        }
    }

    /// Encodes the list header to the buffer at the given offset.
    ///
    /// # Arguments
    /// * `buffer` - Buffer to write to
    /// * `offset` - Byte offset to start writing
    #[inline(always)]
    pub fn encode<B: WriteBuffer + ?Sized>(&self, buffer: &mut B, offset: usize) {
        buffer.put_u16_le(offset, self.count);
    }

    /// Returns true if the list has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}
