//! Read successive lines from a `BufRead`.

use crate::Result;
use std::io::BufRead;

/// Yields lines one at a time, reusing a single buffer.
#[derive(Debug)]
pub(crate) struct Lines<R: BufRead> {
    read: R,
    buffer: Vec<u8>,
    line_number: u64,
}

impl<R: BufRead> Lines<R> {
    pub(crate) fn new(read: R) -> Lines<R> {
        Lines {
            read,
            buffer: Vec::new(),
            line_number: 0,
        }
    }

    /// Reads the next line, without its `\n` or `\r\n` terminator.
    ///
    /// Returns `None` at the end of input. A line that isn't valid UTF-8 still counts as read.
    pub(crate) fn next_line(&mut self) -> Result<Option<&str>> {
        self.buffer.clear();
        if self.read.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        if self.buffer.last() == Some(&b'\n') {
            let _ = self.buffer.pop();
            if self.buffer.last() == Some(&b'\r') {
                let _ = self.buffer.pop();
            }
        }
        let line = std::str::from_utf8(&self.buffer)?;
        Ok(Some(line))
    }

    /// The number of lines read so far, which is also the one-based number of the last line.
    pub(crate) fn line_number(&self) -> u64 {
        self.line_number
    }

    pub(crate) fn into_inner(self) -> R {
        self.read
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::io::Cursor;

    #[test]
    fn strips_terminators() {
        let mut lines = Lines::new(Cursor::new("a\nb\r\nc"));
        assert_eq!(Some("a"), lines.next_line().unwrap());
        assert_eq!(Some("b"), lines.next_line().unwrap());
        assert_eq!(Some("c"), lines.next_line().unwrap());
        assert_eq!(None, lines.next_line().unwrap());
        assert_eq!(3, lines.line_number());
    }

    #[test]
    fn empty_lines_are_lines() {
        let mut lines = Lines::new(Cursor::new("\n\n"));
        assert_eq!(Some(""), lines.next_line().unwrap());
        assert_eq!(Some(""), lines.next_line().unwrap());
        assert_eq!(None, lines.next_line().unwrap());
    }

    #[test]
    fn invalid_utf8() {
        let mut lines = Lines::new(Cursor::new(b"\xff\xfe\nok\n".to_vec()));
        assert!(matches!(lines.next_line().unwrap_err(), Error::Utf8(_)));
        assert_eq!(1, lines.line_number());
        assert_eq!(Some("ok"), lines.next_line().unwrap());
    }
}
