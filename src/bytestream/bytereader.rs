//! ByteReader: buffered sequential byte source for the preprocessor.
//!
//! NOTE: This module can read from any I/O source that supports the read() call.
//!

const BUFFER_SIZE: usize = 1024 * 1024;

/// Reads a sequential byte stream through an internal buffer.
#[derive(Debug)]
pub struct ByteReader<R> {
    buffer: Vec<u8>,
    cursor: usize,
    source: R,
}

impl<R: std::io::Read> ByteReader<R> {
    /// Creates a new ByteReader (with a 1Mbyte buffer).
    pub fn new(source: R) -> Self {
        Self {
            buffer: vec![0; BUFFER_SIZE],
            cursor: BUFFER_SIZE,
            source,
        }
    }

    /// Check (and refill) the buffer. Returns true if we have data, false when
    /// the source is exhausted.
    fn have_data(&mut self) -> bool {
        // Only try to read more data when the cursor has reached the end of the buffer.
        // The buffer only ever shrinks, so cursor == len stays true once the
        // source runs dry and exhaustion is stable across repeated calls.
        if self.cursor == self.buffer.len() {
            let size = self
                .source
                .read(&mut self.buffer)
                .expect("Unable to read source data");
            // If nothing came back from our read attempt, then we have no more data.
            if size == 0 {
                return false;
            }
            // Adjust the buffer if we read less than the buffer size
            self.buffer.truncate(size);
            self.cursor = 0;
        }
        true
    }

    /// True while the source still has at least one byte to deliver.
    pub fn has_more(&mut self) -> bool {
        self.have_data()
    }

    /// Return the next byte as an Option<u8>, or None if there is no more data
    /// to read.
    pub fn byte(&mut self) -> Option<u8> {
        if !self.have_data() {
            return None;
        }
        let byte = self.buffer[self.cursor];
        self.cursor += 1;
        Some(byte)
    }

    /// Return the next four bytes as a big-endian Option<u32>, or None if the
    /// source cannot supply all four.
    pub fn u32_be(&mut self) -> Option<u32> {
        let mut result = 0_u32;
        for _ in 0..4 {
            result = result << 8 | self.byte()? as u32;
        }
        Some(result)
    }

    /// Drain whatever remains of the source as one block. May be empty.
    pub fn block(&mut self) -> Vec<u8> {
        let mut result = Vec::new();
        while self.have_data() {
            result.extend_from_slice(&self.buffer[self.cursor..]);
            self.cursor = self.buffer.len();
        }
        result
    }
}

#[cfg(test)]
mod test {
    use super::ByteReader;

    #[test]
    fn byte_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = ByteReader::new(x);
        assert_eq!(br.byte(), Some(b'H'));
        assert_eq!(br.byte(), Some(b'e'));
        assert_eq!(br.byte(), Some(b'l'));
        assert_eq!(br.byte(), Some(b'l'));
    }

    #[test]
    fn exhaustion_test() {
        let x = [42_u8].as_slice();
        let mut br = ByteReader::new(x);
        assert!(br.has_more());
        assert_eq!(br.byte(), Some(42));
        assert!(!br.has_more());
        assert_eq!(br.byte(), None);
    }

    #[test]
    fn u32_be_test() {
        let x = [0x00_u8, 0x00, 0x01, 0x02, 0xff].as_slice();
        let mut br = ByteReader::new(x);
        assert_eq!(br.u32_be(), Some(258));
        assert_eq!(br.byte(), Some(0xff));
    }

    #[test]
    fn u32_be_short_test() {
        let x = [0x00_u8, 0x01, 0x02].as_slice();
        let mut br = ByteReader::new(x);
        assert_eq!(br.u32_be(), None);
    }

    #[test]
    fn block_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = ByteReader::new(x);
        assert_eq!(br.byte(), Some(b'H'));
        assert_eq!(br.block(), "ello, world!".as_bytes().to_vec());
        assert_eq!(br.block(), Vec::<u8>::new());
    }
}
