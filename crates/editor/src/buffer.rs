//! Append-only buffers an edit view is rendered into.

use std::io::{self, Write};

/// A sink the editor appends view bytes to, finalized exactly once.
pub trait ViewBuffer: Write {
    /// Consume the buffer, yielding everything written so far.
    fn into_bytes(self) -> Vec<u8>;
}

impl ViewBuffer for Vec<u8> {
    fn into_bytes(self) -> Vec<u8> {
        self
    }
}

/// A buffer that refuses writes past a fixed byte limit.
///
/// A refused write leaves the buffer unchanged.
#[derive(Debug)]
pub struct BoundedBuffer {
    buf: Vec<u8>,
    limit: usize,
}

impl BoundedBuffer {
    pub fn new(limit: usize) -> Self {
        Self {
            buf: Vec::new(),
            limit,
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl Write for BoundedBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > self.limit {
            return Err(io::Error::new(
                io::ErrorKind::OutOfMemory,
                format!(
                    "view would grow to {} bytes, limit is {}",
                    self.buf.len() + data.len(),
                    self.limit
                ),
            ));
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl ViewBuffer for BoundedBuffer {
    fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_writes_up_to_limit() {
        let mut buf = BoundedBuffer::new(8);
        buf.write_all(b"12345678").unwrap();
        assert_eq!(buf.len(), 8);
        assert_eq!(buf.into_bytes(), b"12345678");
    }

    #[test]
    fn rejects_write_past_limit_without_partial_append() {
        let mut buf = BoundedBuffer::new(4);
        buf.write_all(b"ab").unwrap();
        let err = buf.write_all(b"cde").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::OutOfMemory);
        assert_eq!(buf.into_bytes(), b"ab");
    }

    #[test]
    fn zero_limit_rejects_first_write() {
        let mut buf = BoundedBuffer::new(0);
        assert!(buf.write_all(b"<").is_err());
        assert!(buf.is_empty());
    }
}
