//! Size-capped response body accumulator.

/// Collects response bytes up to a fixed limit.
#[derive(Debug)]
pub struct BodyBuffer {
    data: Vec<u8>,
    limit: usize,
    truncated: bool,
}

impl BodyBuffer {
    pub fn new(limit: usize) -> Self {
        Self {
            data: Vec::new(),
            limit,
            truncated: false,
        }
    }

    /// Appends as much of `chunk` as fits and returns the number of bytes
    /// accepted. Returning less than `chunk.len()` makes curl abort the
    /// transfer with a write error.
    pub fn push(&mut self, chunk: &[u8]) -> usize {
        let room = self.limit.saturating_sub(self.data.len());
        if chunk.len() > room {
            self.data.extend_from_slice(&chunk[..room]);
            self.truncated = true;
            return 0;
        }
        self.data.extend_from_slice(chunk);
        chunk.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Lossy UTF-8 decode of the collected bytes.
    pub fn into_text(self) -> String {
        match String::from_utf8(self.data) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_until_limit() {
        let mut b = BodyBuffer::new(8);
        assert_eq!(b.push(b"<html>"), 6);
        assert!(!b.truncated());
        assert_eq!(b.push(b"<body>"), 0);
        assert!(b.truncated());
        assert_eq!(b.len(), 8);
        assert_eq!(b.into_text(), "<html><b");
    }

    #[test]
    fn exact_fit_is_not_truncated() {
        let mut b = BodyBuffer::new(4);
        assert_eq!(b.push(b"abcd"), 4);
        assert!(!b.truncated());
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut b = BodyBuffer::new(16);
        b.push(&[b'a', 0xff, b'b']);
        assert_eq!(b.into_text(), "a\u{fffd}b");
    }
}
