//! Fixed-capacity formatting buffer for the serial path.

use core::fmt;

use heapless::String;

/// Stack-allocated message buffer that formats into at most `CAP - 1`
/// bytes and silently drops the rest, keeping the cut on a UTF-8
/// character boundary.
pub struct MessageBuffer<const CAP: usize> {
    text: String<CAP>,
}

impl<const CAP: usize> MessageBuffer<CAP> {
    const LIMIT: usize = CAP - 1;

    pub const fn new() -> Self {
        Self { text: String::new() }
    }

    /// Format `args` into the buffer, truncating on overflow.
    pub fn write_args(&mut self, args: fmt::Arguments<'_>) {
        let _ = fmt::Write::write_fmt(self, args);
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl<const CAP: usize> Default for MessageBuffer<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize> fmt::Write for MessageBuffer<CAP> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = Self::LIMIT.saturating_sub(self.text.len());
        if s.len() <= remaining {
            let _ = self.text.push_str(s);
        } else {
            let mut end = remaining;
            while end > 0 && !s.is_char_boundary(end) {
                end -= 1;
            }
            let _ = self.text.push_str(&s[..end]);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_write() {
        let mut buf = MessageBuffer::<32>::new();
        buf.write_args(format_args!("hello"));
        assert_eq!(buf.as_str(), "hello");
        assert_eq!(buf.len(), 5);
    }

    #[test]
    fn formatted_write() {
        let mut buf = MessageBuffer::<32>::new();
        buf.write_args(format_args!("value={} tag={}", 42, "net"));
        assert_eq!(buf.as_str(), "value=42 tag=net");
    }

    #[test]
    fn truncates_one_below_capacity() {
        let mut buf = MessageBuffer::<8>::new();
        buf.write_args(format_args!("abcdefghij"));
        assert_eq!(buf.as_str(), "abcdefg");
        assert_eq!(buf.len(), 7);
    }

    #[test]
    fn truncation_respects_char_boundary() {
        // "é" is two bytes; a byte-level cut at 7 would split it.
        let mut buf = MessageBuffer::<8>::new();
        buf.write_args(format_args!("abcdef{}", 'é'));
        assert_eq!(buf.as_str(), "abcdef");
    }

    #[test]
    fn accumulates_across_writes() {
        let mut buf = MessageBuffer::<16>::new();
        buf.write_args(format_args!("one "));
        buf.write_args(format_args!("two"));
        assert_eq!(buf.as_str(), "one two");
    }

    #[test]
    fn empty_buffer() {
        let buf = MessageBuffer::<16>::new();
        assert!(buf.is_empty());
        assert_eq!(buf.as_str(), "");
    }
}
