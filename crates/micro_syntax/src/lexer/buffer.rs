//! Capped accumulation buffer for identifier and integer runs.

/// Holds the characters of the token being scanned, up to a fixed cap.
///
/// Runs are ASCII, so the cap counts bytes. Characters past the cap are dropped, and the buffer remembers that it overflowed until the next [`clear`].
///
/// [`clear`]: ScanBuffer::clear
#[derive(Debug, Clone)]
pub struct ScanBuffer {
    text: String,
    cap: usize,
    overflowed: bool,
}

impl ScanBuffer {
    pub fn new(cap: usize) -> Self {
        Self {
            text: String::with_capacity(cap),
            cap,
            overflowed: false,
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.overflowed = false;
    }

    /// Append `c`, or mark the buffer overflowed if it is already full.
    pub fn push(&mut self, c: char) {
        if self.text.len() < self.cap {
            self.text.push(c);
        } else {
            self.overflowed = true;
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn overflowed(&self) -> bool {
        self.overflowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_and_clear() {
        let mut buffer = ScanBuffer::new(2);
        for c in "abc".chars() {
            buffer.push(c);
        }
        assert_eq!(buffer.as_str(), "ab");
        assert!(buffer.overflowed());

        buffer.clear();
        buffer.push('z');
        assert_eq!(buffer.as_str(), "z");
        assert!(!buffer.overflowed());
    }
}
