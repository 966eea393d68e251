//! Ordered field accumulation and buffer packing.
//!
//! [`BufferBuilder`] collects typed fields in append order, computing each
//! field's wire length as it arrives, then packs them all into one
//! exact-size buffer. Appends consume and return the builder, so a chain
//! reads top to bottom in field order; `build` takes the builder by value,
//! which makes appending to a finished builder a compile error.

use fieldpack_core::{
    Color3, Error, ListHeader, Result, Schema, TextHeader, Transform, Value, Vector3,
};

use crate::codec::encode_field;

/// One appended field: its wire length and the value to encode.
#[derive(Debug, Clone)]
struct FieldDef {
    len: usize,
    value: Value,
}

/// Ordered builder packing typed fields into a single buffer.
///
/// # Example
/// ```
/// use fieldpack::BufferBuilder;
///
/// let (buffer, schema) = BufferBuilder::new()
///     .u16(512)
///     .boolean(true)
///     .build();
/// assert_eq!(buffer.len(), 3);
/// assert_eq!(schema.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BufferBuilder {
    fields: Vec<FieldDef>,
}

impl BufferBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    fn push(mut self, value: Value) -> Self {
        self.fields.push(FieldDef {
            len: value.encoded_len(),
            value,
        });
        self
    }

    /// Appends a text field.
    ///
    /// # Errors
    /// Returns [`Error::TextTooLong`] when the UTF-8 payload does not fit
    /// the 4-byte length prefix.
    pub fn string(self, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.len() > TextHeader::MAX_PAYLOAD {
            return Err(Error::TextTooLong {
                length: text.len(),
                max: TextHeader::MAX_PAYLOAD,
            });
        }
        Ok(self.push(Value::Text(text)))
    }

    /// Appends a text list field.
    ///
    /// # Errors
    /// Returns [`Error::ListTooLong`] when the entry count does not fit the
    /// 2-byte count prefix, or [`Error::TextTooLong`] when an entry does not
    /// fit its own length prefix.
    pub fn string_list<I, S>(self, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        if entries.len() > ListHeader::MAX_ENTRIES {
            return Err(Error::ListTooLong {
                count: entries.len(),
                max: ListHeader::MAX_ENTRIES,
            });
        }
        for entry in &entries {
            if entry.len() > TextHeader::MAX_PAYLOAD {
                return Err(Error::TextTooLong {
                    length: entry.len(),
                    max: TextHeader::MAX_PAYLOAD,
                });
            }
        }
        Ok(self.push(Value::TextList(entries)))
    }

    /// Appends a boolean field.
    #[must_use]
    pub fn boolean(self, value: bool) -> Self {
        self.push(Value::Bool(value))
    }

    /// Appends an i8 field.
    #[must_use]
    pub fn i8(self, value: i8) -> Self {
        self.push(Value::I8(value))
    }

    /// Appends a u8 field.
    #[must_use]
    pub fn u8(self, value: u8) -> Self {
        self.push(Value::U8(value))
    }

    /// Appends an i16 field.
    #[must_use]
    pub fn i16(self, value: i16) -> Self {
        self.push(Value::I16(value))
    }

    /// Appends a u16 field.
    #[must_use]
    pub fn u16(self, value: u16) -> Self {
        self.push(Value::U16(value))
    }

    /// Appends an i32 field.
    #[must_use]
    pub fn i32(self, value: i32) -> Self {
        self.push(Value::I32(value))
    }

    /// Appends a u32 field.
    #[must_use]
    pub fn u32(self, value: u32) -> Self {
        self.push(Value::U32(value))
    }

    /// Appends an f32 field.
    #[must_use]
    pub fn f32(self, value: f32) -> Self {
        self.push(Value::F32(value))
    }

    /// Appends an f64 field.
    #[must_use]
    pub fn f64(self, value: f64) -> Self {
        self.push(Value::F64(value))
    }

    /// Appends a vector at 32-bit wire precision.
    #[must_use]
    pub fn vec3_32(self, value: Vector3) -> Self {
        self.push(Value::Vec3F32(value))
    }

    /// Appends a vector at 64-bit wire precision.
    #[must_use]
    pub fn vec3_64(self, value: Vector3) -> Self {
        self.push(Value::Vec3F64(value))
    }

    /// Appends a quantized RGB color field.
    #[must_use]
    pub fn color3(self, value: Color3) -> Self {
        self.push(Value::Color3(value))
    }

    /// Appends a transform at 32-bit wire precision.
    #[must_use]
    pub fn transform_32(self, value: Transform) -> Self {
        self.push(Value::Transform32(value))
    }

    /// Appends a transform with 64-bit position and 32-bit rotation.
    #[must_use]
    pub fn transform_64(self, value: Transform) -> Self {
        self.push(Value::Transform64(value))
    }

    /// Returns the number of fields appended so far.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields have been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the total byte size `build` will produce.
    #[must_use]
    pub fn encoded_size(&self) -> usize {
        self.fields.iter().map(|field| field.len).sum()
    }

    /// Returns the schema of the fields appended so far.
    #[must_use]
    pub fn schema(&self) -> Schema {
        self.fields.iter().map(|field| field.value.tag()).collect()
    }

    /// Packs the fields into an exact-size buffer.
    ///
    /// Fields are encoded in append order at cumulative offsets; the
    /// returned schema is the out-of-band contract a decoder needs to read
    /// the buffer back.
    #[must_use]
    pub fn build(self) -> (Vec<u8>, Schema) {
        let mut buffer = vec![0u8; self.encoded_size()];
        let mut tags = Vec::with_capacity(self.fields.len());
        let mut offset = 0;
        for field in &self.fields {
            encode_field(&mut buffer, offset, &field.value);
            tags.push(field.value.tag());
            offset += field.len;
        }
        (buffer, Schema::new(tags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode_sequence;
    use fieldpack_core::TypeTag;
    use hex_literal::hex;

    #[test]
    fn test_build_concrete_layout() {
        let (buffer, schema) = BufferBuilder::new()
            .string("hi")
            .expect("append")
            .u8(200)
            .boolean(true)
            .build();

        assert_eq!(buffer, hex!("02 00 00 00 68 69 C8 01"));
        assert_eq!(
            schema.tags(),
            &[TypeTag::Text, TypeTag::U8, TypeTag::Bool]
        );
    }

    #[test]
    fn test_build_empty() {
        let (buffer, schema) = BufferBuilder::new().build();
        assert!(buffer.is_empty());
        assert!(schema.is_empty());
    }

    #[test]
    fn test_introspection_tracks_appends() {
        let builder = BufferBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.encoded_size(), 0);

        let builder = builder.u16(7).f64(1.0).string("abc").expect("append");
        assert_eq!(builder.field_count(), 3);
        assert!(!builder.is_empty());
        assert_eq!(builder.encoded_size(), 2 + 8 + (4 + 3));
        assert_eq!(
            builder.schema().tags(),
            &[TypeTag::U16, TypeTag::F64, TypeTag::Text]
        );
    }

    #[test]
    fn test_build_length_is_sum_of_field_lengths() {
        let (buffer, schema) = BufferBuilder::new()
            .i16(-2)
            .vec3_32(Vector3::new(1.0, 2.0, 3.0))
            .color3(Color3::BLACK)
            .transform_64(Transform::IDENTITY)
            .build();

        assert_eq!(buffer.len(), 2 + 12 + 3 + 36);
        assert_eq!(schema.len(), 4);
    }

    #[test]
    fn test_append_order_is_byte_order() {
        let (buffer, _) = BufferBuilder::new().u8(0xAA).u8(0xBB).u8(0xCC).build();
        assert_eq!(buffer, hex!("AA BB CC"));
    }

    #[test]
    fn test_string_accepts_str_and_string() {
        let builder = BufferBuilder::new()
            .string("borrowed")
            .expect("append")
            .string(String::from("owned"))
            .expect("append");
        assert_eq!(builder.field_count(), 2);
    }

    #[test]
    fn test_string_list_at_count_cap() {
        let entries = vec![String::new(); ListHeader::MAX_ENTRIES];
        let builder = BufferBuilder::new().string_list(entries).expect("append");
        assert_eq!(builder.encoded_size(), 2 + 65_535 * 4);

        let (buffer, schema) = builder.build();
        assert_eq!(buffer.len(), 2 + 65_535 * 4);
        assert_eq!(buffer[..2], hex!("FF FF"));

        let values = decode_sequence(&buffer, &schema).expect("decode");
        let decoded = values[0].as_text_list().expect("list");
        assert_eq!(decoded.len(), ListHeader::MAX_ENTRIES);
    }

    #[test]
    fn test_string_list_over_count_cap() {
        let entries = vec![String::new(); ListHeader::MAX_ENTRIES + 1];
        let err = BufferBuilder::new().string_list(entries).unwrap_err();
        assert_eq!(
            err,
            Error::ListTooLong {
                count: 65_536,
                max: 65_535,
            }
        );
    }

    #[test]
    fn test_default_matches_new() {
        let (buffer, schema) = BufferBuilder::default().u32(9).build();
        assert_eq!(buffer.len(), 4);
        assert_eq!(schema.tags(), &[TypeTag::U32]);
    }
}
