//! Percent-encoding for values embedded in request URLs.

#[cfg(test)]
#[path = "encode_test.rs"]
mod encode_test;

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Encode `value` with `encodeURIComponent` semantics. In the browser this is
/// the native function; host builds use [`encode_component_bytes`].
pub fn encode_component(value: &str) -> String {
    #[cfg(feature = "csr")]
    {
        String::from(js_sys::encode_uri_component(value))
    }
    #[cfg(not(feature = "csr"))]
    {
        encode_component_bytes(value)
    }
}

/// ASCII alphanumerics and `-_.!~*'()` pass through, every other UTF-8 byte
/// is written as `%XX`.
pub fn encode_component_bytes(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')') {
            out.push(char::from(byte));
        } else {
            out.push('%');
            out.push(char::from(HEX[usize::from(byte >> 4)]));
            out.push(char::from(HEX[usize::from(byte & 0x0F)]));
        }
    }
    out
}
