//! Scan headers.
//!
//! Every scan starts with ten lines:
//!
//! ```text
//! columns
//! rows
//! scanner origin x y z
//! scanner x axis x y z
//! scanner y axis x y z
//! scanner z axis x y z
//! rotation row 0
//! rotation row 1
//! rotation row 2
//! translation x y z
//! ```
//!
//! The scanner origin and axes have to be valid vectors, but they aren't kept.

use crate::{
    Error, Matrix3, RasterDimensions, Registration, Result,
    lines::Lines,
    parse::{parse_count, parse_vector},
    tokenizer::{Tokenizer, Tokens},
};
use std::io::BufRead;

/// The number of lines in a scan header.
pub const HEADER_LINES: usize = 10;

/// Everything a scan header tells us.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScanInfo {
    /// The size of the scan's grid.
    pub dimensions: RasterDimensions,
    /// The scan's placement in the common coordinate frame.
    pub registration: Registration,
}

/// The result of trying to read a header.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeaderStatus {
    /// A header was read, and its points come next.
    Scan(ScanInfo),
    /// There are no more scans.
    End(End),
}

/// Why a reader stopped looking for scans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum End {
    /// The input ran out where a header would start.
    Eof,
    /// A header started, but couldn't be parsed.
    ///
    /// PTX has no way to tell a corrupt header from trailing junk, so by default this ends the
    /// scans quietly. See [ReaderOptions::with_strict_headers](crate::ReaderOptions::with_strict_headers).
    Malformed {
        /// The one-based line number where parsing failed.
        line: u64,
    },
}

#[derive(Debug)]
pub(crate) enum Parsed {
    Scan(ScanInfo),
    Eof,
    Malformed { line: u64, error: Error },
}

impl HeaderStatus {
    /// Returns the scan info, if a header was read.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptx::{End, HeaderStatus};
    /// assert_eq!(None, HeaderStatus::End(End::Eof).scan_info());
    /// ```
    pub fn scan_info(&self) -> Option<&ScanInfo> {
        match self {
            HeaderStatus::Scan(info) => Some(info),
            HeaderStatus::End(_) => None,
        }
    }
}

/// Reads one header.
///
/// A header can't start with a blank line, but blank lines running to the end of the input are
/// a clean end. I/O errors are returned as errors, every other problem is a malformed header.
pub(crate) fn read_from<R: BufRead>(
    lines: &mut Lines<R>,
    tokenizer: &mut Tokenizer,
) -> Result<Parsed> {
    let (columns, blank) = match lines.next_line() {
        Ok(None) => return Ok(Parsed::Eof),
        Ok(Some(line)) => (
            parse_count(&tokenizer.tokenize(line)),
            line.trim().is_empty(),
        ),
        Err(Error::Io(err)) => return Err(Error::Io(err)),
        Err(err) => (Err(err), false),
    };
    let columns = match columns {
        Err(error) if blank => {
            let line = lines.line_number();
            return if only_blank_lines_remain(lines)? {
                Ok(Parsed::Eof)
            } else {
                Ok(Parsed::Malformed { line, error })
            };
        }
        columns => columns,
    };
    match columns.and_then(|columns| read_rest(lines, tokenizer, columns)) {
        Ok(info) => Ok(Parsed::Scan(info)),
        Err(Error::Io(err)) => Err(Error::Io(err)),
        Err(error) => Ok(Parsed::Malformed {
            line: lines.line_number(),
            error,
        }),
    }
}

fn only_blank_lines_remain<R: BufRead>(lines: &mut Lines<R>) -> Result<bool> {
    loop {
        match lines.next_line() {
            Ok(None) => return Ok(true),
            Ok(Some(line)) if line.trim().is_empty() => {}
            Ok(Some(_)) => return Ok(false),
            Err(Error::Io(err)) => return Err(Error::Io(err)),
            Err(_) => return Ok(false),
        }
    }
}

fn read_rest<R: BufRead>(
    lines: &mut Lines<R>,
    tokenizer: &mut Tokenizer,
    columns: u32,
) -> Result<ScanInfo> {
    let rows = next(lines, tokenizer, 1, parse_count)?;
    for n in 2..6 {
        let _ = next(lines, tokenizer, n, parse_vector)?;
    }
    let rotation = Matrix3 {
        rows: [
            next(lines, tokenizer, 6, parse_vector)?,
            next(lines, tokenizer, 7, parse_vector)?,
            next(lines, tokenizer, 8, parse_vector)?,
        ],
    };
    let translation = next(lines, tokenizer, 9, parse_vector)?;
    Ok(ScanInfo {
        dimensions: RasterDimensions::new(columns, rows),
        registration: Registration {
            rotation,
            translation,
        },
    })
}

/// Parses the next header line, which is line `read` (zero-based) of the header.
fn next<R, T, F>(lines: &mut Lines<R>, tokenizer: &mut Tokenizer, read: usize, parse: F) -> Result<T>
where
    R: BufRead,
    F: FnOnce(&Tokens<'_>) -> Result<T>,
{
    match lines.next_line()? {
        Some(line) => parse(&tokenizer.tokenize(line)),
        None => Err(Error::TruncatedHeader { read }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector;
    use std::io::Cursor;

    const HEADER: &str = "3\n4\n0 0 0\n1 0 0\n0 1 0\n0 0 1\n0 -1 0\n1 0 0\n0 0 1\n10 20 30\n";

    fn parse(s: &str) -> Parsed {
        let mut lines = Lines::new(Cursor::new(s.as_bytes()));
        let mut tokenizer = Tokenizer::new(' ');
        read_from(&mut lines, &mut tokenizer).unwrap()
    }

    #[test]
    fn header() {
        let Parsed::Scan(info) = parse(HEADER) else {
            panic!("expected a scan");
        };
        assert_eq!(RasterDimensions::new(3, 4), info.dimensions);
        assert_eq!(
            Matrix3::from([[0., -1., 0.], [1., 0., 0.], [0., 0., 1.]]),
            info.registration.rotation
        );
        assert_eq!(Vector::new(10., 20., 30.), info.registration.translation);
    }

    #[test]
    fn consumes_exactly_ten_lines() {
        let input = format!("{}next", HEADER);
        let mut lines = Lines::new(Cursor::new(input.as_bytes()));
        let mut tokenizer = Tokenizer::new(' ');
        let _ = read_from(&mut lines, &mut tokenizer).unwrap();
        assert_eq!(HEADER_LINES as u64, lines.line_number());
        assert_eq!(Some("next"), lines.next_line().unwrap());
    }

    #[test]
    fn empty() {
        assert!(matches!(parse(""), Parsed::Eof));
        assert!(matches!(parse("\n  \n\n"), Parsed::Eof));
    }

    #[test]
    fn blank_line_before_a_header() {
        let input = format!("\n\n{}", HEADER);
        let Parsed::Malformed { line, error } = parse(&input) else {
            panic!("expected a malformed header");
        };
        assert_eq!(1, line);
        assert!(matches!(
            error,
            Error::TokenCount {
                expected: 1,
                found: 0
            }
        ));
    }

    #[test]
    fn truncated() {
        let Parsed::Malformed { line, error } = parse("3\n4\n0 0 0\n") else {
            panic!("expected a malformed header");
        };
        assert_eq!(3, line);
        assert!(matches!(error, Error::TruncatedHeader { read: 3 }));
    }

    #[test]
    fn not_numeric() {
        let input = HEADER.replace("10 20 30", "10 twenty 30");
        let Parsed::Malformed { line, error } = parse(&input) else {
            panic!("expected a malformed header");
        };
        assert_eq!(10, line);
        assert!(matches!(error, Error::ParseFloat { .. }));
    }

    #[test]
    fn bad_scanner_axis() {
        let input = HEADER.replace("1 0 0\n0 1 0", "1 0\n0 1 0");
        assert!(matches!(
            parse(&input),
            Parsed::Malformed {
                line: 4,
                error: Error::TokenCount { .. }
            }
        ));
    }

    #[test]
    fn negative_dimension() {
        let input = HEADER.replacen("4\n", "-4\n", 1);
        assert!(matches!(parse(&input), Parsed::Malformed { line: 2, .. }));
    }

    #[test]
    fn point_record_instead_of_header() {
        assert!(matches!(
            parse("1 2 3 0.5 1 2 3\n"),
            Parsed::Malformed { line: 1, .. }
        ));
    }
}
