//! Decoded value types.
//!
//! This module provides the composite payload types ([`Vector3`],
//! [`Color3`], [`Transform`]) and the [`Value`] union the decoder produces,
//! one variant per type tag.

use crate::header::{ListHeader, TextHeader};
use crate::types::TypeTag;

/// Three-component vector.
///
/// One vector type serves both wire precisions; `vec3-32` narrows each
/// component through `f32` on encode.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new vector from its components.
    ///
    /// # Arguments
    /// * `x` - X component
    /// * `y` - Y component
    /// * `z` - Z component
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// RGB color with normalized channels in `[0, 1]`.
///
/// The wire form quantizes each channel to one byte via
/// `floor(channel * 255)` after clamping into range; decoding divides the
/// byte by 255.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color3 {
    /// Red channel in `[0, 1]`.
    pub r: f64,
    /// Green channel in `[0, 1]`.
    pub g: f64,
    /// Blue channel in `[0, 1]`.
    pub b: f64,
}

impl Color3 {
    /// Black (all channels zero).
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Creates a new color from normalized channels.
    ///
    /// # Arguments
    /// * `r` - Red channel in `[0, 1]`
    /// * `g` - Green channel in `[0, 1]`
    /// * `b` - Blue channel in `[0, 1]`
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from 8-bit channels.
    ///
    /// # Arguments
    /// * `r` - Red channel byte
    /// * `g` - Green channel byte
    /// * `b` - Blue channel byte
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Quantizes the channels to 8-bit values.
    ///
    /// Channels are clamped into `[0, 1]` before quantization so out-of-range
    /// inputs saturate instead of wrapping.
    #[must_use]
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (
            quantize_channel(self.r),
            quantize_channel(self.g),
            quantize_channel(self.b),
        )
    }
}

/// Truncating byte quantization of a normalized channel.
fn quantize_channel(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).floor() as u8
}

/// Position and orientation.
///
/// The rotation vector holds Euler angles in radians, applied about X, then
/// Y, then Z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    /// Translation component.
    pub position: Vector3,
    /// Euler rotation angles in radians.
    pub rotation: Vector3,
}

impl Transform {
    /// The identity transform (zero position, zero rotation).
    pub const IDENTITY: Self = Self {
        position: Vector3::ZERO,
        rotation: Vector3::ZERO,
    };

    /// Creates a new transform.
    ///
    /// # Arguments
    /// * `position` - Translation component
    /// * `rotation` - Euler rotation angles in radians
    #[must_use]
    pub const fn new(position: Vector3, rotation: Vector3) -> Self {
        Self { position, rotation }
    }

    /// Creates an unrotated transform at the given position.
    #[must_use]
    pub const fn from_position(position: Vector3) -> Self {
        Self {
            position,
            rotation: Vector3::ZERO,
        }
    }
}

/// A decoded field value.
///
/// One variant per [`TypeTag`]. Both vector precisions decode to [`Vector3`]
/// and both transform precisions to [`Transform`]; the variant records which
/// wire form the value came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// UTF-8 text.
    Text(String),
    /// List of text entries.
    TextList(Vec<String>),
    /// Boolean.
    Bool(bool),
    /// Signed 8-bit integer.
    I8(i8),
    /// Unsigned 8-bit integer.
    U8(u8),
    /// Signed 16-bit integer.
    I16(i16),
    /// Unsigned 16-bit integer.
    U16(u16),
    /// Signed 32-bit integer.
    I32(i32),
    /// Unsigned 32-bit integer.
    U32(u32),
    /// 32-bit floating point.
    F32(f32),
    /// 64-bit floating point.
    F64(f64),
    /// Vector carried at 32-bit precision.
    Vec3F32(Vector3),
    /// Vector carried at 64-bit precision.
    Vec3F64(Vector3),
    /// Quantized RGB color.
    Color3(Color3),
    /// Transform carried at 32-bit precision.
    Transform32(Transform),
    /// Transform with 64-bit position and 32-bit rotation.
    Transform64(Transform),
}

impl Value {
    /// Returns the type tag of this value.
    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        match self {
            Self::Text(_) => TypeTag::Text,
            Self::TextList(_) => TypeTag::TextList,
            Self::Bool(_) => TypeTag::Bool,
            Self::I8(_) => TypeTag::I8,
            Self::U8(_) => TypeTag::U8,
            Self::I16(_) => TypeTag::I16,
            Self::U16(_) => TypeTag::U16,
            Self::I32(_) => TypeTag::I32,
            Self::U32(_) => TypeTag::U32,
            Self::F32(_) => TypeTag::F32,
            Self::F64(_) => TypeTag::F64,
            Self::Vec3F32(_) => TypeTag::Vec3F32,
            Self::Vec3F64(_) => TypeTag::Vec3F64,
            Self::Color3(_) => TypeTag::Color3,
            Self::Transform32(_) => TypeTag::Transform32,
            Self::Transform64(_) => TypeTag::Transform64,
        }
    }

    /// Returns the encoded byte length of this value, prefixes included.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        match self {
            Self::Text(s) => TextHeader::ENCODED_LENGTH + s.len(),
            Self::TextList(entries) => {
                ListHeader::ENCODED_LENGTH
                    + entries
                        .iter()
                        .map(|entry| TextHeader::ENCODED_LENGTH + entry.len())
                        .sum::<usize>()
            }
            Self::Bool(_) | Self::I8(_) | Self::U8(_) => 1,
            Self::I16(_) | Self::U16(_) => 2,
            Self::Color3(_) => 3,
            Self::I32(_) | Self::U32(_) | Self::F32(_) => 4,
            Self::F64(_) => 8,
            Self::Vec3F32(_) => 12,
            Self::Vec3F64(_) | Self::Transform32(_) => 24,
            Self::Transform64(_) => 36,
        }
    }

    /// Returns the text payload, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list entries, if this is a text list value.
    #[must_use]
    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            Self::TextList(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the boolean payload, if this is a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the i8 payload, if this is an i8 value.
    #[must_use]
    pub const fn as_i8(&self) -> Option<i8> {
        match self {
            Self::I8(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the u8 payload, if this is a u8 value.
    #[must_use]
    pub const fn as_u8(&self) -> Option<u8> {
        match self {
            Self::U8(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the i16 payload, if this is an i16 value.
    #[must_use]
    pub const fn as_i16(&self) -> Option<i16> {
        match self {
            Self::I16(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the u16 payload, if this is a u16 value.
    #[must_use]
    pub const fn as_u16(&self) -> Option<u16> {
        match self {
            Self::U16(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the i32 payload, if this is an i32 value.
    #[must_use]
    pub const fn as_i32(&self) -> Option<i32> {
        match self {
            Self::I32(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the u32 payload, if this is a u32 value.
    #[must_use]
    pub const fn as_u32(&self) -> Option<u32> {
        match self {
            Self::U32(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the f32 payload, if this is an f32 value.
    #[must_use]
    pub const fn as_f32(&self) -> Option<f32> {
        match self {
            Self::F32(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the f64 payload, if this is an f64 value.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the vector payload at either precision.
    #[must_use]
    pub const fn as_vector3(&self) -> Option<Vector3> {
        match self {
            Self::Vec3F32(v) | Self::Vec3F64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the color payload, if this is a color value.
    #[must_use]
    pub const fn as_color3(&self) -> Option<Color3> {
        match self {
            Self::Color3(c) => Some(*c),
            _ => None,
        }
    }

    /// Returns the transform payload at either precision.
    #[must_use]
    pub const fn as_transform(&self) -> Option<Transform> {
        match self {
            Self::Transform32(t) | Self::Transform64(t) => Some(*t),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_tag() {
        assert_eq!(Value::Text(String::new()).tag(), TypeTag::Text);
        assert_eq!(Value::TextList(Vec::new()).tag(), TypeTag::TextList);
        assert_eq!(Value::Bool(true).tag(), TypeTag::Bool);
        assert_eq!(Value::I8(0).tag(), TypeTag::I8);
        assert_eq!(Value::U8(0).tag(), TypeTag::U8);
        assert_eq!(Value::I16(0).tag(), TypeTag::I16);
        assert_eq!(Value::U16(0).tag(), TypeTag::U16);
        assert_eq!(Value::I32(0).tag(), TypeTag::I32);
        assert_eq!(Value::U32(0).tag(), TypeTag::U32);
        assert_eq!(Value::F32(0.0).tag(), TypeTag::F32);
        assert_eq!(Value::F64(0.0).tag(), TypeTag::F64);
        assert_eq!(Value::Vec3F32(Vector3::ZERO).tag(), TypeTag::Vec3F32);
        assert_eq!(Value::Vec3F64(Vector3::ZERO).tag(), TypeTag::Vec3F64);
        assert_eq!(Value::Color3(Color3::BLACK).tag(), TypeTag::Color3);
        assert_eq!(
            Value::Transform32(Transform::IDENTITY).tag(),
            TypeTag::Transform32
        );
        assert_eq!(
            Value::Transform64(Transform::IDENTITY).tag(),
            TypeTag::Transform64
        );
    }

    #[test]
    fn test_value_encoded_len_variable() {
        assert_eq!(Value::Text(String::new()).encoded_len(), 4);
        assert_eq!(Value::Text("hi".to_string()).encoded_len(), 6);
        assert_eq!(Value::TextList(Vec::new()).encoded_len(), 2);
        assert_eq!(
            Value::TextList(vec!["ab".to_string(), String::new()]).encoded_len(),
            2 + (4 + 2) + (4 + 0)
        );
    }

    #[test]
    fn test_value_encoded_len_matches_registry() {
        let fixed = [
            Value::Bool(true),
            Value::I8(0),
            Value::U8(0),
            Value::I16(0),
            Value::U16(0),
            Value::I32(0),
            Value::U32(0),
            Value::F32(0.0),
            Value::F64(0.0),
            Value::Vec3F32(Vector3::ZERO),
            Value::Vec3F64(Vector3::ZERO),
            Value::Color3(Color3::BLACK),
            Value::Transform32(Transform::IDENTITY),
            Value::Transform64(Transform::IDENTITY),
        ];
        for value in fixed {
            assert_eq!(Some(value.encoded_len()), value.tag().fixed_width());
        }
    }

    #[test]
    fn test_value_accessors() {
        let text = Value::Text("hello".to_string());
        assert_eq!(text.as_text(), Some("hello"));
        assert_eq!(text.as_bool(), None);

        let list = Value::TextList(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(
            list.as_text_list(),
            Some(&["a".to_string(), "b".to_string()][..])
        );

        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::I8(-5).as_i8(), Some(-5));
        assert_eq!(Value::U8(200).as_u8(), Some(200));
        assert_eq!(Value::I16(-1000).as_i16(), Some(-1000));
        assert_eq!(Value::U16(60000).as_u16(), Some(60000));
        assert_eq!(Value::I32(-1).as_i32(), Some(-1));
        assert_eq!(Value::U32(7).as_u32(), Some(7));
        assert_eq!(Value::F32(1.5).as_f32(), Some(1.5));
        assert_eq!(Value::F64(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::U8(200).as_i8(), None);
    }

    #[test]
    fn test_value_merging_accessors() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(Value::Vec3F32(v).as_vector3(), Some(v));
        assert_eq!(Value::Vec3F64(v).as_vector3(), Some(v));
        assert_eq!(Value::F32(0.0).as_vector3(), None);

        let t = Transform::from_position(v);
        assert_eq!(Value::Transform32(t).as_transform(), Some(t));
        assert_eq!(Value::Transform64(t).as_transform(), Some(t));
        assert_eq!(Value::Vec3F32(v).as_transform(), None);
    }

    #[test]
    fn test_vector3_constants() {
        assert_eq!(Vector3::ZERO, Vector3::new(0.0, 0.0, 0.0));
        let v = Vector3::new(1.0, -2.0, 3.5);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, -2.0);
        assert_eq!(v.z, 3.5);
    }

    #[test]
    fn test_color3_quantization_truncates() {
        assert_eq!(Color3::new(0.5, 0.5, 0.5).to_rgb8(), (127, 127, 127));
        assert_eq!(Color3::new(0.0, 1.0, 0.999).to_rgb8(), (0, 255, 254));
    }

    #[test]
    fn test_color3_quantization_clamps() {
        assert_eq!(Color3::new(1.5, -0.25, 2.0).to_rgb8(), (255, 0, 255));
    }

    #[test]
    fn test_color3_rgb8_round_trip() {
        for channel in 0..=255u8 {
            let color = Color3::from_rgb8(channel, channel, channel);
            assert_eq!(color.to_rgb8(), (channel, channel, channel));
        }
    }

    #[test]
    fn test_transform_constants() {
        assert_eq!(Transform::IDENTITY.position, Vector3::ZERO);
        assert_eq!(Transform::IDENTITY.rotation, Vector3::ZERO);

        let pos = Vector3::new(1.0, 2.0, 3.0);
        let t = Transform::from_position(pos);
        assert_eq!(t.position, pos);
        assert_eq!(t.rotation, Vector3::ZERO);
    }
}
