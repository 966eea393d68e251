//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions. The
//! exported [`Result`] is the crate alias with the error type fixed, so
//! fallible signatures take the value type alone:
//!
//! ```
//! use fieldpack::prelude::*;
//!
//! fn round_trip() -> Result<()> {
//!     let (buffer, schema) = BufferBuilder::new().string("id")?.u8(7).build();
//!     let values = decode_sequence(&buffer, &schema)?;
//!     assert_eq!(values[1], Value::U8(7));
//!     Ok(())
//! }
//! round_trip().expect("round trip");
//! ```

// Core types
pub use fieldpack_core::buffer::{ReadBuffer, WriteBuffer};
pub use fieldpack_core::error::{Error, Result};
pub use fieldpack_core::header::{ListHeader, TextHeader};
pub use fieldpack_core::types::{DecodePolicy, Schema, TypeTag};
pub use fieldpack_core::value::{Color3, Transform, Value, Vector3};

// Builder and decode entry points
pub use crate::builder::BufferBuilder;
pub use crate::codec::{decode_field, determine_size};
pub use crate::decoder::{decode_sequence, decode_sequence_with};
