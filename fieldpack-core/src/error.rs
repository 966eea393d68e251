//! Error types for fieldpack operations.

use thiserror::Error;

/// Error type for encode and decode operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Text payload does not fit its u32 length prefix.
    #[error("text payload of {length} bytes exceeds length prefix capacity of {max} bytes")]
    TextTooLong {
        /// Payload length in bytes.
        length: usize,
        /// Maximum encodable payload length.
        max: usize,
    },

    /// Text list does not fit its u16 count prefix.
    #[error("list of {count} entries exceeds count prefix capacity of {max} entries")]
    ListTooLong {
        /// Number of entries supplied.
        count: usize,
        /// Maximum encodable entry count.
        max: usize,
    },

    /// Buffer is too short for the requested read.
    #[error("buffer too short: required {required} bytes, available {available} bytes")]
    BufferTooShort {
        /// Required buffer size in bytes.
        required: usize,
        /// Available buffer size in bytes.
        available: usize,
    },

    /// Boolean field holds a byte other than 0 or 1 (strict decoding only).
    #[error("invalid boolean byte {value:#04x} at offset {offset}")]
    InvalidBoolByte {
        /// Byte value encountered.
        value: u8,
        /// Byte offset of the field.
        offset: usize,
    },

    /// Invalid UTF-8 encoding in a text field (strict decoding only).
    #[error("invalid UTF-8 at offset {offset}")]
    InvalidUtf8 {
        /// Byte offset where invalid UTF-8 was found.
        offset: usize,
    },
}

/// Result type alias for fieldpack operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_text_too_long() {
        let err = Error::TextTooLong {
            length: 5_000_000_000,
            max: 4_294_967_295,
        };
        let msg = err.to_string();
        assert!(msg.contains("5000000000"));
        assert!(msg.contains("4294967295"));
    }

    #[test]
    fn test_error_display_list_too_long() {
        let err = Error::ListTooLong {
            count: 65_536,
            max: 65_535,
        };
        let msg = err.to_string();
        assert!(msg.contains("65536"));
        assert!(msg.contains("65535"));
    }

    #[test]
    fn test_error_display_buffer_too_short() {
        let err = Error::BufferTooShort {
            required: 100,
            available: 50,
        };
        let msg = err.to_string();
        assert!(msg.contains("buffer too short"));
        assert!(msg.contains("100"));
        assert!(msg.contains("50"));
    }

    #[test]
    fn test_error_display_invalid_bool_byte() {
        let err = Error::InvalidBoolByte {
            value: 0x2A,
            offset: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("0x2a"));
        assert!(msg.contains("7"));
    }

    #[test]
    fn test_error_display_invalid_utf8() {
        let err = Error::InvalidUtf8 { offset: 42 };
        let msg = err.to_string();
        assert!(msg.contains("UTF-8"));
        assert!(msg.contains("42"));
    }

    #[test]
    fn test_error_equality() {
        let a = Error::BufferTooShort {
            required: 8,
            available: 4,
        };
        let b = Error::BufferTooShort {
            required: 8,
            available: 4,
        };
        assert_eq!(a, b);
        assert_ne!(
            a,
            Error::BufferTooShort {
                required: 8,
                available: 5,
            }
        );
    }
}
