//! # Fieldpack Core
//!
//! Core types for the fieldpack wire format.
//!
//! This crate provides:
//! - Buffer traits for little-endian read/write access
//! - Wire prefix types (TextHeader, ListHeader)
//! - The type registry (TypeTag, Schema)
//! - Value types for decoded fields
//! - Error types for encoding/decoding operations

pub mod buffer;
pub mod error;
pub mod header;
pub mod types;
pub mod value;

pub use buffer::{ReadBuffer, WriteBuffer};
pub use error::{Error, Result};
pub use header::{ListHeader, TextHeader};
pub use types::{DecodePolicy, Schema, TypeTag};
pub use value::{Color3, Transform, Value, Vector3};
