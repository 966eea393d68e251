//! Per-type field encoding and decoding.
//!
//! This module provides the wire codec for every [`TypeTag`]:
//! [`determine_size`] measures the span a field occupies at an offset, and
//! [`decode_field`] recovers its [`Value`]. The encode half is internal to
//! the builder, which is the only producer of packed buffers.
//!
//! Decoding never reads past the supplied buffer: every prefix and payload
//! span is checked before it is dereferenced, and violations surface as
//! [`Error::BufferTooShort`].

use fieldpack_core::{
    Color3, DecodePolicy, Error, ListHeader, ReadBuffer, Result, TextHeader, Transform, TypeTag,
    Value, Vector3, WriteBuffer,
};

/// Measures the encoded span of one field at the given offset.
///
/// Fixed-width tags resolve from the type registry; text reads its 4-byte
/// length prefix; a text list reads its 2-byte count prefix and walks the
/// entry spans. Usable on its own to skip fields given a partial schema.
///
/// # Arguments
/// * `buffer` - Buffer containing the field
/// * `tag` - Type of the field at `offset`
/// * `offset` - Byte offset where the field starts
///
/// # Errors
/// Returns [`Error::BufferTooShort`] when the field would cross the end of
/// the buffer.
pub fn determine_size<B: ReadBuffer + ?Sized>(
    buffer: &B,
    tag: TypeTag,
    offset: usize,
) -> Result<usize> {
    if let Some(width) = tag.fixed_width() {
        buffer.check_range(offset, width)?;
        return Ok(width);
    }
    if tag == TypeTag::Text {
        text_span(buffer, offset)
    } else {
        list_span(buffer, offset)
    }
}

/// Decodes one field at the given offset.
///
/// # Arguments
/// * `buffer` - Buffer containing the field
/// * `tag` - Type of the field at `offset`
/// * `offset` - Byte offset where the field starts
/// * `policy` - Handling of malformed bytes
///
/// # Errors
/// Returns [`Error::BufferTooShort`] when the field would cross the end of
/// the buffer, and [`Error::InvalidBoolByte`] or [`Error::InvalidUtf8`]
/// under [`DecodePolicy::Strict`].
pub fn decode_field<B: ReadBuffer + ?Sized>(
    buffer: &B,
    tag: TypeTag,
    offset: usize,
    policy: DecodePolicy,
) -> Result<Value> {
    if let Some(width) = tag.fixed_width() {
        buffer.check_range(offset, width)?;
    }
    match tag {
        TypeTag::Text => decode_text(buffer, offset, policy).map(|(text, _)| Value::Text(text)),
        TypeTag::TextList => decode_text_list(buffer, offset, policy).map(Value::TextList),
        TypeTag::Bool => decode_bool(buffer, offset, policy).map(Value::Bool),
        TypeTag::I8 => Ok(Value::I8(buffer.get_i8(offset))),
        TypeTag::U8 => Ok(Value::U8(buffer.get_u8(offset))),
        TypeTag::I16 => Ok(Value::I16(buffer.get_i16_le(offset))),
        TypeTag::U16 => Ok(Value::U16(buffer.get_u16_le(offset))),
        TypeTag::I32 => Ok(Value::I32(buffer.get_i32_le(offset))),
        TypeTag::U32 => Ok(Value::U32(buffer.get_u32_le(offset))),
        TypeTag::F32 => Ok(Value::F32(buffer.get_f32_le(offset))),
        TypeTag::F64 => Ok(Value::F64(buffer.get_f64_le(offset))),
        TypeTag::Vec3F32 => Ok(Value::Vec3F32(decode_vec3_f32(buffer, offset))),
        TypeTag::Vec3F64 => Ok(Value::Vec3F64(decode_vec3_f64(buffer, offset))),
        TypeTag::Color3 => Ok(Value::Color3(Color3::from_rgb8(
            buffer.get_u8(offset),
            buffer.get_u8(offset + 1),
            buffer.get_u8(offset + 2),
        ))),
        TypeTag::Transform32 => Ok(Value::Transform32(Transform::new(
            decode_vec3_f32(buffer, offset),
            decode_vec3_f32(buffer, offset + 12),
        ))),
        TypeTag::Transform64 => Ok(Value::Transform64(Transform::new(
            decode_vec3_f64(buffer, offset),
            decode_vec3_f32(buffer, offset + 24),
        ))),
    }
}

/// Encodes one value at the given offset.
///
/// The builder allocates the exact buffer size up front and the lengths of
/// variable-width values were validated at append time, so encoding cannot
/// fail.
pub(crate) fn encode_field<B: WriteBuffer + ?Sized>(buffer: &mut B, offset: usize, value: &Value) {
    match value {
        Value::Text(s) => encode_text(buffer, offset, s),
        Value::TextList(entries) => {
            ListHeader::new(entries.len() as u16).encode(buffer, offset);
            let mut cursor = offset + ListHeader::ENCODED_LENGTH;
            for entry in entries {
                encode_text(buffer, cursor, entry);
                cursor += TextHeader::ENCODED_LENGTH + entry.len();
            }
        }
        Value::Bool(b) => buffer.put_u8(offset, u8::from(*b)),
        Value::I8(v) => buffer.put_i8(offset, *v),
        Value::U8(v) => buffer.put_u8(offset, *v),
        Value::I16(v) => buffer.put_i16_le(offset, *v),
        Value::U16(v) => buffer.put_u16_le(offset, *v),
        Value::I32(v) => buffer.put_i32_le(offset, *v),
        Value::U32(v) => buffer.put_u32_le(offset, *v),
        Value::F32(v) => buffer.put_f32_le(offset, *v),
        Value::F64(v) => buffer.put_f64_le(offset, *v),
        Value::Vec3F32(v) => encode_vec3_f32(buffer, offset, v),
        Value::Vec3F64(v) => encode_vec3_f64(buffer, offset, v),
        Value::Color3(c) => {
            let (r, g, b) = c.to_rgb8();
            buffer.put_u8(offset, r);
            buffer.put_u8(offset + 1, g);
            buffer.put_u8(offset + 2, b);
        }
        Value::Transform32(t) => {
            encode_vec3_f32(buffer, offset, &t.position);
            encode_vec3_f32(buffer, offset + 12, &t.rotation);
        }
        Value::Transform64(t) => {
            encode_vec3_f64(buffer, offset, &t.position);
            encode_vec3_f32(buffer, offset + 24, &t.rotation);
        }
    }
}

fn text_span<B: ReadBuffer + ?Sized>(buffer: &B, offset: usize) -> Result<usize> {
    buffer.check_range(offset, TextHeader::ENCODED_LENGTH)?;
    let header = TextHeader::wrap(buffer, offset);
    let total = header.total_size();
    buffer.check_range(offset, total)?;
    Ok(total)
}

fn list_span<B: ReadBuffer + ?Sized>(buffer: &B, offset: usize) -> Result<usize> {
    buffer.check_range(offset, ListHeader::ENCODED_LENGTH)?;
    let header = ListHeader::wrap(buffer, offset);
    let mut cursor = offset + ListHeader::ENCODED_LENGTH;
    for _ in 0..header.count {
        cursor += text_span(buffer, cursor)?;
    }
    Ok(cursor - offset)
}

fn encode_text<B: WriteBuffer + ?Sized>(buffer: &mut B, offset: usize, text: &str) {
    TextHeader::new(text.len() as u32).encode(buffer, offset);
    buffer.put_bytes(offset + TextHeader::ENCODED_LENGTH, text.as_bytes());
}

/// Decodes a text field, returning the string and its wire span.
///
/// The span comes from the length prefix, not from the decoded string:
/// lossy replacement can change the character count.
fn decode_text<B: ReadBuffer + ?Sized>(
    buffer: &B,
    offset: usize,
    policy: DecodePolicy,
) -> Result<(String, usize)> {
    buffer.check_range(offset, TextHeader::ENCODED_LENGTH)?;
    let header = TextHeader::wrap(buffer, offset);
    let payload_offset = offset + TextHeader::ENCODED_LENGTH;
    let payload_len = header.length as usize;
    buffer.check_range(payload_offset, payload_len)?;
    let bytes = buffer.get_bytes(payload_offset, payload_len);
    let text = match policy {
        DecodePolicy::Permissive => String::from_utf8_lossy(bytes).into_owned(),
        DecodePolicy::Strict => match std::str::from_utf8(bytes) {
            Ok(s) => s.to_string(),
            Err(e) => {
                return Err(Error::InvalidUtf8 {
                    offset: payload_offset + e.valid_up_to(),
                });
            }
        },
    };
    Ok((text, header.total_size()))
}

fn decode_text_list<B: ReadBuffer + ?Sized>(
    buffer: &B,
    offset: usize,
    policy: DecodePolicy,
) -> Result<Vec<String>> {
    buffer.check_range(offset, ListHeader::ENCODED_LENGTH)?;
    let header = ListHeader::wrap(buffer, offset);
    let count = header.count as usize;
    let mut entries = Vec::with_capacity(count);
    let mut cursor = offset + ListHeader::ENCODED_LENGTH;
    for _ in 0..count {
        let (entry, span) = decode_text(buffer, cursor, policy)?;
        entries.push(entry);
        cursor += span;
    }
    Ok(entries)
}

fn decode_bool<B: ReadBuffer + ?Sized>(
    buffer: &B,
    offset: usize,
    policy: DecodePolicy,
) -> Result<bool> {
    match buffer.get_u8(offset) {
        1 => Ok(true),
        0 => Ok(false),
        value => match policy {
            DecodePolicy::Permissive => {
                tracing::warn!(
                    "Malformed boolean byte {:#04x} at offset {}, decoding as false",
                    value,
                    offset
                );
                Ok(false)
            }
            DecodePolicy::Strict => Err(Error::InvalidBoolByte { value, offset }),
        },
    }
}

fn encode_vec3_f32<B: WriteBuffer + ?Sized>(buffer: &mut B, offset: usize, v: &Vector3) {
    buffer.put_f32_le(offset, v.x as f32);
    buffer.put_f32_le(offset + 4, v.y as f32);
    buffer.put_f32_le(offset + 8, v.z as f32);
}

fn encode_vec3_f64<B: WriteBuffer + ?Sized>(buffer: &mut B, offset: usize, v: &Vector3) {
    buffer.put_f64_le(offset, v.x);
    buffer.put_f64_le(offset + 8, v.y);
    buffer.put_f64_le(offset + 16, v.z);
}

fn decode_vec3_f32<B: ReadBuffer + ?Sized>(buffer: &B, offset: usize) -> Vector3 {
    Vector3::new(
        f64::from(buffer.get_f32_le(offset)),
        f64::from(buffer.get_f32_le(offset + 4)),
        f64::from(buffer.get_f32_le(offset + 8)),
    )
}

fn decode_vec3_f64<B: ReadBuffer + ?Sized>(buffer: &B, offset: usize) -> Vector3 {
    Vector3::new(
        buffer.get_f64_le(offset),
        buffer.get_f64_le(offset + 8),
        buffer.get_f64_le(offset + 16),
    )
}
