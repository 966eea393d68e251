//! Type tags and schemas for the wire format.
//!
//! This module provides the [`TypeTag`] enumeration naming every encodable
//! field type, and the [`Schema`] sequence that records the tags of a packed
//! buffer in field order.

use std::fmt;

/// Wire type enumeration.
///
/// Every field in a packed buffer is one of these types. The tag is never
/// written to the wire; the producer and consumer share it out of band
/// through a [`Schema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// UTF-8 text with a 4-byte length prefix.
    Text,
    /// List of text entries with a 2-byte count prefix.
    TextList,
    /// Boolean (1 byte).
    Bool,
    /// Signed 8-bit integer.
    I8,
    /// Unsigned 8-bit integer.
    U8,
    /// Signed 16-bit integer.
    I16,
    /// Unsigned 16-bit integer.
    U16,
    /// Signed 32-bit integer.
    I32,
    /// Unsigned 32-bit integer.
    U32,
    /// 32-bit floating point.
    F32,
    /// 64-bit floating point.
    F64,
    /// Three-component vector at 32-bit precision (12 bytes).
    Vec3F32,
    /// Three-component vector at 64-bit precision (24 bytes).
    Vec3F64,
    /// RGB color quantized to one byte per channel (3 bytes).
    Color3,
    /// Position and rotation, both at 32-bit precision (24 bytes).
    Transform32,
    /// 64-bit position with 32-bit rotation (36 bytes).
    Transform64,
}

impl TypeTag {
    /// Returns the encoded width in bytes, or `None` for variable-width
    /// types.
    #[must_use]
    pub const fn fixed_width(&self) -> Option<usize> {
        match self {
            Self::Text | Self::TextList => None,
            Self::Bool | Self::I8 | Self::U8 => Some(1),
            Self::I16 | Self::U16 => Some(2),
            Self::Color3 => Some(3),
            Self::I32 | Self::U32 | Self::F32 => Some(4),
            Self::F64 => Some(8),
            Self::Vec3F32 => Some(12),
            Self::Vec3F64 | Self::Transform32 => Some(24),
            Self::Transform64 => Some(36),
        }
    }

    /// Returns the wire name of this type.
    #[must_use]
    pub const fn wire_name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextList => "list-of-text",
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::I16 => "i16",
            Self::U16 => "u16",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Vec3F32 => "vec3-32",
            Self::Vec3F64 => "vec3-64",
            Self::Color3 => "color3",
            Self::Transform32 => "transform-32",
            Self::Transform64 => "transform-64",
        }
    }

    /// Parses a type tag from its wire name.
    #[must_use]
    pub fn from_wire_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            "list-of-text" => Some(Self::TextList),
            "bool" => Some(Self::Bool),
            "i8" => Some(Self::I8),
            "u8" => Some(Self::U8),
            "i16" => Some(Self::I16),
            "u16" => Some(Self::U16),
            "i32" => Some(Self::I32),
            "u32" => Some(Self::U32),
            "f32" => Some(Self::F32),
            "f64" => Some(Self::F64),
            "vec3-32" => Some(Self::Vec3F32),
            "vec3-64" => Some(Self::Vec3F64),
            "color3" => Some(Self::Color3),
            "transform-32" => Some(Self::Transform32),
            "transform-64" => Some(Self::Transform64),
            _ => None,
        }
    }

    /// Returns true if the encoded width depends on the payload.
    #[must_use]
    pub const fn is_variable_width(&self) -> bool {
        matches!(self, Self::Text | Self::TextList)
    }

    /// Returns true if this is a scalar numeric type.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::U8
                | Self::I16
                | Self::U16
                | Self::I32
                | Self::U32
                | Self::F32
                | Self::F64
        )
    }

    /// Returns true if this is a multi-component type.
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(
            self,
            Self::Vec3F32 | Self::Vec3F64 | Self::Color3 | Self::Transform32 | Self::Transform64
        )
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Decode-time handling of malformed bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DecodePolicy {
    /// Malformed boolean bytes decode as false with a warning; invalid
    /// UTF-8 is replaced lossily.
    #[default]
    Permissive,
    /// Malformed boolean bytes and invalid UTF-8 are decode errors.
    Strict,
}

impl DecodePolicy {
    /// Parses a decode policy from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "permissive" | "lenient" => Some(Self::Permissive),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }
}

/// Ordered sequence of type tags describing a packed buffer.
///
/// The builder emits a schema alongside every buffer it packs; the decoder
/// replays the same schema to recover the fields. The schema itself never
/// travels on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema(Vec<TypeTag>);

impl Schema {
    /// Creates a schema from a tag sequence.
    #[must_use]
    pub const fn new(tags: Vec<TypeTag>) -> Self {
        Self(tags)
    }

    /// Returns the tags in field order.
    #[must_use]
    pub fn tags(&self) -> &[TypeTag] {
        &self.0
    }

    /// Returns an iterator over the tags in field order.
    pub fn iter(&self) -> std::slice::Iter<'_, TypeTag> {
        self.0.iter()
    }

    /// Returns the number of fields described by the schema.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the schema describes no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<TypeTag>> for Schema {
    fn from(tags: Vec<TypeTag>) -> Self {
        Self(tags)
    }
}

impl FromIterator<TypeTag> for Schema {
    fn from_iter<I: IntoIterator<Item = TypeTag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a TypeTag;
    type IntoIter = std::slice::Iter<'a, TypeTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(tag.wire_name())?;
        }
        Ok(())
    }
}
