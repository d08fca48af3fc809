use std::{
    num::{ParseFloatError, ParseIntError},
    str::Utf8Error,
};

/// Crate-specific error enum.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The `Reader` has already reached the end of its scans.
    #[error("the reader has stopped reading scans")]
    ClosedReader,

    /// A sink refused a point.
    #[error("point rejected by sink")]
    Rejected(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A record line could not be turned into a point.
    #[error("invalid point record at line {line}")]
    InvalidRecord {
        /// The one-based line number of the record.
        line: u64,

        /// The underlying problem.
        #[source]
        source: Box<Error>,
    },

    /// Wrapper around `std::io::Error`.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A header could not be parsed and the reader was configured with strict headers.
    #[error("malformed scan header at line {line}")]
    MalformedHeader {
        /// The one-based line number where parsing failed.
        line: u64,

        /// The underlying problem.
        #[source]
        source: Box<Error>,
    },

    /// An integer was parsed, but it doesn't fit in the requested type.
    #[error("{token} is out of range for {type_name}")]
    OutOfRange {
        /// The token.
        token: String,

        /// The name of the type we tried to narrow into.
        type_name: &'static str,
    },

    /// A token is not a valid float.
    #[error("could not parse '{token}' as a float")]
    ParseFloat {
        /// The token.
        token: String,

        /// The parse error.
        #[source]
        source: ParseFloatError,
    },

    /// A token is not a valid unsigned integer.
    #[error("could not parse '{token}' as an unsigned integer")]
    ParseInt {
        /// The token.
        token: String,

        /// The parse error.
        #[source]
        source: ParseIntError,
    },

    /// A header was requested while points of the current scan remain unread.
    #[error("{remaining} points of the current scan have not been read")]
    ScanInProgress {
        /// The number of unread points.
        remaining: u64,
    },

    /// A line didn't have the expected number of tokens.
    #[error("expected {expected} tokens, found {found}")]
    TokenCount {
        /// The expected number of tokens.
        expected: usize,

        /// The number of tokens we found.
        found: usize,
    },

    /// The input ended partway through a scan header.
    #[error("the input ended after {read} of {} header lines", crate::header::HEADER_LINES)]
    TruncatedHeader {
        /// The number of header lines that were read.
        read: usize,
    },

    /// The input ended before every point of a scan was read.
    #[error("the scan has {expected} points, but the input ended after {read}")]
    TruncatedScan {
        /// The number of points in the scan.
        expected: u64,

        /// The number of points read before the input ended.
        read: u64,
    },

    /// A line isn't valid UTF-8.
    #[error(transparent)]
    Utf8(#[from] Utf8Error),
}

impl Error {
    /// Wraps any error as a sink rejection.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptx::Error;
    /// let error = Error::rejected("no room left");
    /// assert_eq!("point rejected by sink", error.to_string());
    /// ```
    pub fn rejected<E>(error: E) -> Error
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Rejected(error.into())
    }
}
