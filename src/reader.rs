//! Read PTX scans.
//!
//! If you're reading from anything other than a path, make sure you hand the reader a `BufRead`:
//!
//! ```
//! use std::fs::File;
//! use std::io::BufReader;
//! use ptx::Reader;
//!
//! let read = BufReader::new(File::open("tests/data/two_scans.ptx").unwrap());
//! let reader = Reader::new(read);
//! ```
//!
//! `Reader::from_path` does this for you:
//!
//! ```
//! use ptx::Reader;
//! let reader = Reader::from_path("tests/data/two_scans.ptx").unwrap();
//! ```
//!
//! Use `Reader::read_scans` to push every point into sinks of your choice, or drive the reader
//! yourself with `Reader::read_header` and `Reader::read_point`:
//!
//! ```
//! use ptx::{HeaderStatus, Reader};
//! let mut reader = Reader::from_path("tests/data/two_scans.ptx").unwrap();
//! while let HeaderStatus::Scan(info) = reader.read_header().unwrap() {
//!     let mut sampled = 0;
//!     while let Some(point) = reader.read_point().unwrap() {
//!         if point.is_sampled() {
//!             sampled += 1;
//!         }
//!     }
//!     println!("{} of {} cells sampled", sampled, info.dimensions.len());
//! }
//! ```

use crate::{
    End, Error, HeaderStatus, Point, RasterDimensions, Result, ScanInfo,
    header::{self, Parsed},
    lines::Lines,
    sink::Insert,
    tokenizer::Tokenizer,
};
use log::{Level, log};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Options for Reader.
///
/// # Examples
///
/// ```
/// use ptx::ReaderOptions;
/// let options = ReaderOptions::default().with_strict_headers(true);
/// assert!(options.strict_headers());
/// assert_eq!(' ', options.delimiter());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReaderOptions {
    strict_headers: bool,
    delimiter: char,
}

impl ReaderOptions {
    /// Report malformed headers as errors.
    ///
    /// By default, a header that can't be parsed is treated as the end of the scans, just like
    /// the end of the input. With strict headers, `Reader::read_header` returns
    /// `Error::MalformedHeader` instead. A clean end of input is never an error.
    pub fn with_strict_headers(mut self, strict_headers: bool) -> Self {
        self.strict_headers = strict_headers;
        self
    }

    /// Change the field delimiter.
    ///
    /// Runs of the delimiter count as one.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Returns true if malformed headers are errors.
    pub fn strict_headers(&self) -> bool {
        self.strict_headers
    }

    /// Returns the field delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }
}

impl Default for ReaderOptions {
    fn default() -> Self {
        ReaderOptions {
            strict_headers: false,
            delimiter: ' ',
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum State {
    AwaitingHeader,
    StreamingPoints {
        dimensions: RasterDimensions,
        index: u64,
    },
    Done(End),
}

/// Reads PTX data.
#[derive(Debug)]
pub struct Reader<R: BufRead> {
    lines: Lines<R>,
    tokenizer: Tokenizer,
    options: ReaderOptions,
    state: State,
    scans_read: u64,
}

impl Reader<BufReader<File>> {
    /// Creates a new reader from a path.
    ///
    /// The underlying `File` is wrapped in a `BufReader` for performance reasons.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptx::Reader;
    /// let reader = Reader::from_path("tests/data/two_scans.ptx").unwrap();
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Reader<BufReader<File>>> {
        File::open(path)
            .map_err(Error::from)
            .map(|file| Reader::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Reader<R> {
    /// Creates a new reader with default options.
    ///
    /// Nothing is read until you ask for a header.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use ptx::Reader;
    /// let reader = Reader::new(Cursor::new(""));
    /// ```
    pub fn new(read: R) -> Reader<R> {
        Reader::with_options(read, ReaderOptions::default())
    }

    /// Creates a new reader with custom options.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use ptx::{Reader, ReaderOptions};
    /// let options = ReaderOptions::default().with_strict_headers(true);
    /// let reader = Reader::with_options(Cursor::new(""), options);
    /// ```
    pub fn with_options(read: R, options: ReaderOptions) -> Reader<R> {
        Reader {
            lines: Lines::new(read),
            tokenizer: Tokenizer::new(options.delimiter),
            options,
            state: State::AwaitingHeader,
            scans_read: 0,
        }
    }

    /// Returns this reader's options.
    pub fn options(&self) -> ReaderOptions {
        self.options
    }

    /// Reads the next scan header.
    ///
    /// Returns `HeaderStatus::End` when there are no more scans, after which the reader is done
    /// and further calls return `Error::ClosedReader`. All points of the previous scan must have
    /// been read first.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptx::{HeaderStatus, Reader};
    /// let mut reader = Reader::from_path("tests/data/two_scans.ptx").unwrap();
    /// if let HeaderStatus::Scan(info) = reader.read_header().unwrap() {
    ///     println!("{} columns", info.dimensions.columns);
    /// }
    /// ```
    pub fn read_header(&mut self) -> Result<HeaderStatus> {
        match self.state {
            State::AwaitingHeader => {}
            State::StreamingPoints { dimensions, index } => {
                return Err(Error::ScanInProgress {
                    remaining: dimensions.len() - index,
                });
            }
            State::Done(_) => return Err(Error::ClosedReader),
        }
        let end = match header::read_from(&mut self.lines, &mut self.tokenizer)? {
            Parsed::Scan(info) => {
                log!(
                    Level::Debug,
                    "read header of scan {} ending at line {}: {} columns by {} rows",
                    self.scans_read,
                    self.lines.line_number(),
                    info.dimensions.columns,
                    info.dimensions.rows
                );
                self.scans_read += 1;
                self.state = State::StreamingPoints {
                    dimensions: info.dimensions,
                    index: 0,
                };
                return Ok(HeaderStatus::Scan(info));
            }
            Parsed::Eof => End::Eof,
            Parsed::Malformed { line, error } => {
                self.state = State::Done(End::Malformed { line });
                if self.options.strict_headers {
                    return Err(Error::MalformedHeader {
                        line,
                        source: Box::new(error),
                    });
                }
                log!(
                    Level::Warn,
                    "Malformed header at line {}, no more scans will be read: {}",
                    line,
                    error
                );
                End::Malformed { line }
            }
        };
        self.state = State::Done(end);
        Ok(HeaderStatus::End(end))
    }

    /// Reads the next point of the current scan.
    ///
    /// Returns `None` once every point of the scan has been read, or if there is no current scan.
    /// A record that can't be parsed is an error, and its line is consumed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptx::Reader;
    /// let mut reader = Reader::from_path("tests/data/two_scans.ptx").unwrap();
    /// let _ = reader.read_header().unwrap();
    /// let point = reader.read_point().unwrap().unwrap();
    /// assert_eq!(0, point.position.column);
    /// assert_eq!(0, point.position.row);
    /// ```
    pub fn read_point(&mut self) -> Result<Option<Point>> {
        let State::StreamingPoints { dimensions, index } = self.state else {
            return Ok(None);
        };
        let Some(position) = dimensions.position(index) else {
            log!(
                Level::Trace,
                "finished scan {} at line {}",
                self.scans_read - 1,
                self.lines.line_number()
            );
            self.state = State::AwaitingHeader;
            return Ok(None);
        };
        let line_number = self.lines.line_number() + 1;
        let line = match self.lines.next_line() {
            Ok(Some(line)) => line,
            Ok(None) => {
                return Err(Error::TruncatedScan {
                    expected: dimensions.len(),
                    read: index,
                });
            }
            Err(Error::Io(err)) => return Err(Error::Io(err)),
            Err(err) => {
                self.state = State::StreamingPoints {
                    dimensions,
                    index: index + 1,
                };
                return Err(Error::InvalidRecord {
                    line: line_number,
                    source: Box::new(err),
                });
            }
        };
        self.state = State::StreamingPoints {
            dimensions,
            index: index + 1,
        };
        Point::from_tokens(&self.tokenizer.tokenize(line), position)
            .map(Some)
            .map_err(|err| Error::InvalidRecord {
                line: line_number,
                source: Box::new(err),
            })
    }

    /// Reads every remaining scan, handing each point to a sink.
    ///
    /// `new_scan` is called once per scan, in file order, before any of that scan's points are
    /// read. It returns the sink for that scan, and the sink receives every point of the scan in
    /// raster order. The sinks are returned once the scans run out.
    ///
    /// Errors in point records, and errors returned by a sink, stop the read. Points that were
    /// already inserted stay inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptx::{Point, Reader, sink::Sampled};
    /// let mut reader = Reader::from_path("tests/data/two_scans.ptx").unwrap();
    /// let scans = reader
    ///     .read_scans(|info| Sampled::new(Vec::<Point>::with_capacity(info.dimensions.len() as usize)))
    ///     .unwrap();
    /// assert_eq!(2, scans.len());
    /// assert_eq!(673, scans[0].get_ref().len());
    /// ```
    pub fn read_scans<F, S>(&mut self, mut new_scan: F) -> Result<Vec<S>>
    where
        F: FnMut(&ScanInfo) -> S,
        S: Insert,
    {
        let mut sinks = Vec::new();
        while let HeaderStatus::Scan(info) = self.read_header()? {
            let mut sink = new_scan(&info);
            while let Some(point) = self.read_point()? {
                sink.insert(point)?;
            }
            sinks.push(sink);
        }
        Ok(sinks)
    }

    /// Returns why this reader stopped, or `None` if it hasn't.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use ptx::{End, Reader};
    /// let mut reader = Reader::new(Cursor::new(""));
    /// assert_eq!(None, reader.end());
    /// let _ = reader.read_header().unwrap();
    /// assert_eq!(Some(End::Eof), reader.end());
    /// ```
    pub fn end(&self) -> Option<End> {
        match self.state {
            State::Done(end) => Some(end),
            _ => None,
        }
    }

    /// Returns the number of headers read so far.
    pub fn scans_read(&self) -> u64 {
        self.scans_read
    }

    /// Returns the number of lines read so far.
    pub fn line_number(&self) -> u64 {
        self.lines.line_number()
    }

    /// Consumes this reader, returning the underlying `BufRead`.
    pub fn into_inner(self) -> R {
        self.lines.into_inner()
    }
}
