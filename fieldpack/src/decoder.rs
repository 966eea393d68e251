//! Schema-driven sequence decoding.
//!
//! A packed buffer is opaque without its [`Schema`]: the decoder replays the
//! tags in order, measuring and decoding one field at a time. The schema is
//! the caller's contract; a wrong schema whose field widths happen to line
//! up decodes without error into wrong values, and only span violations are
//! detectable.

use fieldpack_core::{DecodePolicy, ReadBuffer, Result, Schema, Value};

use crate::codec::{decode_field, determine_size};

/// Decodes a packed buffer under the default permissive policy.
///
/// Bytes past the last schema field are ignored.
///
/// # Arguments
/// * `buffer` - Packed buffer to decode
/// * `schema` - Ordered tags the buffer was packed with
///
/// # Errors
/// Returns [`Error::BufferTooShort`](fieldpack_core::Error::BufferTooShort)
/// when a field would cross the end of the buffer.
pub fn decode_sequence<B: ReadBuffer + ?Sized>(buffer: &B, schema: &Schema) -> Result<Vec<Value>> {
    decode_sequence_with(buffer, schema, DecodePolicy::default())
}

/// Decodes a packed buffer under an explicit policy.
///
/// # Arguments
/// * `buffer` - Packed buffer to decode
/// * `schema` - Ordered tags the buffer was packed with
/// * `policy` - Handling of malformed bytes
///
/// # Errors
/// Returns [`Error::BufferTooShort`](fieldpack_core::Error::BufferTooShort)
/// when a field would cross the end of the buffer; under
/// [`DecodePolicy::Strict`] also
/// [`Error::InvalidBoolByte`](fieldpack_core::Error::InvalidBoolByte) and
/// [`Error::InvalidUtf8`](fieldpack_core::Error::InvalidUtf8).
pub fn decode_sequence_with<B: ReadBuffer + ?Sized>(
    buffer: &B,
    schema: &Schema,
    policy: DecodePolicy,
) -> Result<Vec<Value>> {
    let mut values = Vec::with_capacity(schema.len());
    let mut offset = 0;
    for &tag in schema {
        let size = determine_size(buffer, tag, offset)?;
        values.push(decode_field(buffer, tag, offset, policy)?);
        offset += size;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BufferBuilder;
    use fieldpack_core::{Error, TypeTag, Vector3};
    use hex_literal::hex;

    #[test]
    fn test_decode_heterogeneous_sequence() {
        let (buffer, schema) = BufferBuilder::new()
            .string("position")
            .expect("append")
            .vec3_64(Vector3::new(1.0, 2.0, 3.0))
            .i32(-7)
            .boolean(false)
            .build();

        let values = decode_sequence(&buffer, &schema).expect("decode");
        assert_eq!(values.len(), 4);
        assert_eq!(values[0].as_text(), Some("position"));
        assert_eq!(values[1].as_vector3(), Some(Vector3::new(1.0, 2.0, 3.0)));
        assert_eq!(values[2].as_i32(), Some(-7));
        assert_eq!(values[3].as_bool(), Some(false));
    }

    #[test]
    fn test_decode_empty_schema() {
        let schema = Schema::default();
        let empty: &[u8] = &[];
        assert_eq!(decode_sequence(empty, &schema), Ok(Vec::new()));
        // Trailing bytes are ignored.
        assert_eq!(decode_sequence(&[1u8, 2, 3][..], &schema), Ok(Vec::new()));
    }

    #[test]
    fn test_decode_short_buffer_mid_sequence() {
        let schema = Schema::new(vec![TypeTag::U16, TypeTag::U32]);
        let buffer = hex!("01 02 03");
        assert_eq!(
            decode_sequence(&buffer[..], &schema),
            Err(Error::BufferTooShort {
                required: 6,
                available: 3,
            })
        );
    }

    #[test]
    fn test_decode_malformed_bool_continues_permissive() {
        // 0x2A is neither 0 nor 1; the u8 after it must still decode.
        let buffer = hex!("2A C8");
        let schema = Schema::new(vec![TypeTag::Bool, TypeTag::U8]);

        let values = decode_sequence(&buffer[..], &schema).expect("decode");
        assert_eq!(values[0].as_bool(), Some(false));
        assert_eq!(values[1].as_u8(), Some(200));
    }

    #[test]
    fn test_decode_malformed_bool_strict() {
        let buffer = hex!("2A C8");
        let schema = Schema::new(vec![TypeTag::Bool, TypeTag::U8]);

        assert_eq!(
            decode_sequence_with(&buffer[..], &schema, DecodePolicy::Strict),
            Err(Error::InvalidBoolByte {
                value: 0x2A,
                offset: 0,
            })
        );
    }

    #[test]
    fn test_mismatched_schema_decodes_wrong_values() {
        // A u16 read back as two u8 fields: widths line up, so nothing can
        // flag the mismatch.
        let (buffer, _) = BufferBuilder::new().u16(0x0102).build();
        let wrong = Schema::new(vec![TypeTag::U8, TypeTag::U8]);

        let values = decode_sequence(&buffer, &wrong).expect("decode");
        assert_eq!(values[0].as_u8(), Some(0x02));
        assert_eq!(values[1].as_u8(), Some(0x01));
    }

    #[test]
    fn test_decode_list_then_fixed() {
        let (buffer, schema) = BufferBuilder::new()
            .string_list(["a", "bb"])
            .expect("append")
            .f32(0.5)
            .build();

        let values = decode_sequence(&buffer, &schema).expect("decode");
        assert_eq!(
            values[0].as_text_list(),
            Some(&["a".to_string(), "bb".to_string()][..])
        );
        assert_eq!(values[1].as_f32(), Some(0.5));
    }
}
