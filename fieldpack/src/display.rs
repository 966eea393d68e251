//! Buffer inspection helpers.
//!
//! Small free functions for sizing and rendering packed buffers in logs and
//! diagnostics. None of them interpret the wire format; for that, decode
//! with a schema.

/// Returns the byte length of a packed buffer.
#[must_use]
pub fn byte_size(buffer: &[u8]) -> usize {
    buffer.len()
}

/// Returns the UTF-8 byte length a text payload occupies on the wire,
/// excluding its 4-byte length prefix.
#[must_use]
pub fn text_byte_size(text: &str) -> usize {
    text.len()
}

/// Renders a one-line summary of a buffer, e.g. `Buffer (8 B)`.
#[must_use]
pub fn summary(buffer: &[u8]) -> String {
    format!("Buffer ({} B)", buffer.len())
}

/// Renders the raw bytes as a string, replacing invalid UTF-8.
#[must_use]
pub fn raw_string(buffer: &[u8]) -> String {
    String::from_utf8_lossy(buffer).into_owned()
}

/// Renders the bytes as space-separated two-digit hex.
#[must_use]
pub fn hex_string(buffer: &[u8]) -> String {
    let mut out = String::with_capacity(buffer.len() * 3);
    for (i, byte) in buffer.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{:02x}", byte));
    }
    out
}
