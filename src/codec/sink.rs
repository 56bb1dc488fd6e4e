use bytes::{BufMut, Bytes, BytesMut};

use crate::codec::cursor::UUID_BYTE_ORDER;
use crate::internal::error::{Error, Result};

/// An append-only growable byte sink, the encode-side mirror of
/// [`ByteCursor`](crate::codec::cursor::ByteCursor).
///
/// All multi-byte integers are written little-endian.
#[derive(Debug, Default)]
pub struct ByteSink {
    buf: BytesMut,
}

impl ByteSink {
    pub fn new() -> Self {
        ByteSink { buf: BytesMut::new() }
    }

    pub fn put_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    pub fn put_u16(&mut self, value: u16) {
        self.buf.put_u16_le(value);
    }

    pub fn put_u32(&mut self, value: u32) {
        self.buf.put_u32_le(value);
    }

    pub fn put_u64(&mut self, value: u64) {
        self.buf.put_u64_le(value);
    }

    /// Writes a hyphenated UUID string as 16 wire bytes, applying the
    /// inverse of the cursor's byte reordering (the permutation is its own
    /// inverse).
    pub fn put_uuid(&mut self, uuid: &str) -> Result<()> {
        let hex: String = uuid.chars().filter(|c| *c != '-').collect();
        let bytes = hex::decode(&hex)
            .map_err(|_| Error::InvalidAccountId(uuid.to_string()))?;
        if bytes.len() != 16 {
            return Err(Error::InvalidAccountId(uuid.to_string()));
        }
        for &index in &UUID_BYTE_ORDER {
            self.buf.put_u8(bytes[index]);
        }
        Ok(())
    }

    /// Writes a string as UTF-16LE code units followed by a zero terminator
    /// unit.
    pub fn put_utf16_string(&mut self, value: &str) {
        for unit in value.encode_utf16() {
            self.buf.put_u16_le(unit);
        }
        self.buf.put_u16_le(0);
    }

    /// Writes a 1-byte count followed by the values as u16 LE.
    ///
    /// The count must fit in a byte; longer input is a caller contract
    /// violation, never silently truncated.
    pub fn put_u16_array(&mut self, values: &[u16]) {
        assert!(values.len() <= u8::MAX as usize, "array length exceeds u8 count prefix");
        self.buf.put_u8(values.len() as u8);
        for &value in values {
            self.buf.put_u16_le(value);
        }
    }

    /// Writes a 1-byte count followed by the values as u32 LE.
    ///
    /// The count must fit in a byte; longer input is a caller contract
    /// violation, never silently truncated.
    pub fn put_u32_array(&mut self, values: &[u32]) {
        assert!(values.len() <= u8::MAX as usize, "array length exceeds u8 count prefix");
        self.buf.put_u8(values.len() as u8);
        for &value in values {
            self.buf.put_u32_le(value);
        }
    }

    /// Consumes the sink and returns the final byte sequence.
    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::cursor::ByteCursor;

    #[test]
    fn test_integer_writes_are_little_endian() {
        let mut sink = ByteSink::new();
        sink.put_u8(0x2A);
        sink.put_u16(0x1234);
        sink.put_u32(0x12345678);
        sink.put_u64(1);
        assert_eq!(
            sink.into_bytes().as_ref(),
            [0x2A, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12, 1, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_put_uuid_inverts_cursor_read() {
        let mut sink = ByteSink::new();
        sink.put_uuid("04030201-0605-0807-090A-0B0C0D0E0F10").unwrap();
        let bytes = sink.into_bytes();
        let expected: Vec<u8> = (1..=16).collect();
        assert_eq!(bytes.as_ref(), expected.as_slice());

        let mut cursor = ByteCursor::new(&bytes);
        assert_eq!(
            cursor.read_uuid().unwrap(),
            "04030201-0605-0807-090A-0B0C0D0E0F10"
        );
    }

    #[test]
    fn test_put_uuid_rejects_malformed_input() {
        let mut sink = ByteSink::new();
        assert!(matches!(
            sink.put_uuid("not-a-uuid"),
            Err(Error::InvalidAccountId(_))
        ));
        assert!(matches!(
            sink.put_uuid("04030201-0605-0807-090A"),
            Err(Error::InvalidAccountId(_))
        ));
    }

    #[test]
    fn test_put_utf16_string_appends_terminator() {
        let mut sink = ByteSink::new();
        sink.put_utf16_string("Hi");
        assert_eq!(sink.into_bytes().as_ref(), [0x48, 0x00, 0x69, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_length_prefixed_arrays() {
        let mut sink = ByteSink::new();
        sink.put_u16_array(&[51, 35]);
        sink.put_u32_array(&[]);
        assert_eq!(sink.into_bytes().as_ref(), [2, 51, 0, 35, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "u8 count prefix")]
    fn test_oversized_array_panics() {
        let mut sink = ByteSink::new();
        sink.put_u16_array(&[0; 256]);
    }
}
