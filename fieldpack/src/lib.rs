//! # Fieldpack
//!
//! Ordered binary field packing with out-of-band schemas.
//!
//! Fieldpack packs a heterogeneous sequence of typed values into one
//! exact-size byte buffer. Fixed-width fields carry no type information on
//! the wire; producer and consumer share the ordered [`Schema`] instead.
//! The two variable-width types (text and lists of text) carry little-endian
//! length prefixes so the decoder can walk them.
//!
//! ## Quick Start
//!
//! ```
//! use fieldpack::prelude::*;
//!
//! let (buffer, schema) = BufferBuilder::new()
//!     .string("hi")?
//!     .u8(200)
//!     .boolean(true)
//!     .build();
//! assert_eq!(buffer.len(), 8);
//!
//! let values = decode_sequence(&buffer, &schema)?;
//! assert_eq!(values[0].as_text(), Some("hi"));
//! assert_eq!(values[1].as_u8(), Some(200));
//! assert_eq!(values[2].as_bool(), Some(true));
//! # Ok::<(), fieldpack::Error>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`builder`] - Ordered field accumulation and buffer packing
//! - [`codec`] - Per-type decoding and size determination
//! - [`decoder`] - Schema-driven sequence decoding
//! - [`display`] - Buffer inspection helpers
//! - [`core`] - Core types (buffers, prefixes, tags, values, errors)

pub mod builder;
pub mod codec;
pub mod decoder;
pub mod display;
pub mod prelude;

/// Core types for the wire format.
pub mod core {
    pub use fieldpack_core::*;
}

// Re-export commonly used items at the crate root
pub use fieldpack_core::{
    Color3, DecodePolicy, Error, ListHeader, ReadBuffer, Result, Schema, TextHeader, Transform,
    TypeTag, Value, Vector3, WriteBuffer,
};

pub use builder::BufferBuilder;
pub use codec::{decode_field, determine_size};
pub use decoder::{decode_sequence, decode_sequence_with};
