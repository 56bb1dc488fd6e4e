use byteorder::{ByteOrder, LittleEndian};

use crate::internal::error::{Error, Result};

/// Byte index permutation between wire order and the canonical hyphenated
/// UUID form (RFC 4122 mixed-endian). The table is an involution, so the
/// same mapping serves both directions.
pub(crate) const UUID_BYTE_ORDER: [usize; 16] =
    [3, 2, 1, 0, 5, 4, 7, 6, 8, 9, 10, 11, 12, 13, 14, 15];

/// A forward-only read cursor over a fixed byte buffer.
///
/// Every read is bounds-checked and converts an overrun into
/// [`Error::TruncatedPayload`]; the chatlink format carries no total-length
/// field to validate against up front.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        ByteCursor { data, offset: 0 }
    }

    /// Number of unread bytes left in the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// True once the offset has reached the end of the buffer.
    pub fn at_end(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// Takes the next `count` bytes, advancing the offset.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        if self.remaining() < count {
            return Err(Error::TruncatedPayload {
                offset: self.offset,
                needed: count - self.remaining(),
            });
        }
        let bytes = &self.data[self.offset..self.offset + count];
        self.offset += count;
        Ok(bytes)
    }

    /// Advances the offset by `count` bytes without interpreting them.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.read_bytes(count).map(|_| ())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.read_bytes(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.read_bytes(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(LittleEndian::read_u64(self.read_bytes(8)?))
    }

    /// Reads 16 bytes and formats them as a canonical uppercase UUID,
    /// applying the mixed-endian byte reordering.
    pub fn read_uuid(&mut self) -> Result<String> {
        let bytes = self.read_bytes(16)?;
        let mut ordered = [0u8; 16];
        for (slot, &index) in ordered.iter_mut().zip(UUID_BYTE_ORDER.iter()) {
            *slot = bytes[index];
        }
        let hex = hex::encode_upper(ordered);
        Ok(format!(
            "{}-{}-{}-{}-{}",
            &hex[..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..]
        ))
    }

    /// Reads a UTF-16LE string terminated by a zero code unit.
    ///
    /// The terminator is a unit-level zero, not a byte-level one: for plain
    /// Latin text every high byte is already zero.
    pub fn read_utf16_string(&mut self) -> Result<String> {
        let mut units = Vec::new();
        loop {
            let unit = self.read_u16()?;
            if unit == 0 {
                break;
            }
            units.push(unit);
        }
        String::from_utf16(&units)
            .map_err(|_| Error::MalformedToken("invalid UTF-16 string data".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_reads() {
        let data = [0x2A, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_u8().unwrap(), 0x2A);
        assert_eq!(cursor.read_u16().unwrap(), 0x1234);
        assert_eq!(cursor.read_u32().unwrap(), 0x12345678);
        assert!(cursor.at_end());
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_read_u64_little_endian() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_u64().unwrap(), 0x0807060504030201);
    }

    #[test]
    fn test_overrun_is_truncated_payload() {
        let mut cursor = ByteCursor::new(&[0x01, 0x02]);
        assert_eq!(
            cursor.read_u32(),
            Err(Error::TruncatedPayload { offset: 0, needed: 2 })
        );
        // A failed read does not advance the offset.
        assert_eq!(cursor.read_u16().unwrap(), 0x0201);
        assert!(cursor.read_u8().is_err());
    }

    #[test]
    fn test_skip_past_end_fails() {
        let mut cursor = ByteCursor::new(&[0x00; 4]);
        cursor.skip(3).unwrap();
        assert!(cursor.skip(2).is_err());
        cursor.skip(1).unwrap();
        assert!(cursor.at_end());
    }

    #[test]
    fn test_read_uuid_permutation() {
        let data: Vec<u8> = (1..=16).collect();
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(
            cursor.read_uuid().unwrap(),
            "04030201-0605-0807-090A-0B0C0D0E0F10"
        );
    }

    #[test]
    fn test_read_utf16_string() {
        // "Hi" + terminator, then one trailing byte
        let data = [0x48, 0x00, 0x69, 0x00, 0x00, 0x00, 0xFF];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_utf16_string().unwrap(), "Hi");
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn test_read_utf16_string_unterminated() {
        let data = [0x48, 0x00, 0x69, 0x00];
        let mut cursor = ByteCursor::new(&data);
        assert!(matches!(
            cursor.read_utf16_string(),
            Err(Error::TruncatedPayload { .. })
        ));
    }
}
