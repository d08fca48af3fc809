//! Read [PTX](https://paulbourke.net/dataformats/ptx/) point cloud data.
//!
//! A PTX file is text. It holds one or more scans, each a ten-line header followed by one line
//! per cell of the scan's grid:
//!
//! ```text
//! <columns>
//! <rows>
//! <scanner origin>
//! <scanner x axis>
//! <scanner y axis>
//! <scanner z axis>
//! <rotation row 0>
//! <rotation row 1>
//! <rotation row 2>
//! <translation>
//! x y z intensity r g b
//! ...
//! ```
//!
//! # Reading
//!
//! Create a `Reader` from a `Path`:
//!
//! ```
//! use ptx::Reader;
//! let reader = Reader::from_path("tests/data/two_scans.ptx").unwrap();
//! ```
//!
//! Or anything that implements `BufRead`:
//!
//! ```
//! use std::io::BufReader;
//! use std::fs::File;
//! use ptx::Reader;
//! let read = BufReader::new(File::open("tests/data/two_scans.ptx").unwrap());
//! let reader = Reader::new(read);
//! ```
//!
//! ## Read scans
//!
//! `Reader::read_scans` asks for a sink at the start of each scan and fills it with that scan's
//! points. Cells without a laser return are stored as the origin, and `sink::Sampled` drops
//! them:
//!
//! ```
//! use ptx::{Point, Reader, sink::Sampled};
//! let mut reader = Reader::from_path("tests/data/two_scans.ptx").unwrap();
//! let mut infos = Vec::new();
//! let scans = reader
//!     .read_scans(|info| {
//!         infos.push(*info);
//!         Sampled::new(Vec::<Point>::new())
//!     })
//!     .unwrap();
//! for (info, points) in infos.iter().zip(&scans) {
//!     println!(
//!         "{} of {} cells sampled, translation {:?}",
//!         points.get_ref().len(),
//!         info.dimensions.len(),
//!         info.registration.translation,
//!     );
//! }
//! ```
//!
//! ## Malformed headers
//!
//! PTX can't tell the end of the last scan from a corrupt header, so by default both just end
//! the read. `Reader::end` tells you which one it was, and `ReaderOptions::with_strict_headers`
//! turns malformed headers into errors:
//!
//! ```
//! use std::io::Cursor;
//! use ptx::{End, Point, Reader, ReaderOptions};
//! let mut reader = Reader::new(Cursor::new("not a header\n"));
//! let scans = reader.read_scans(|_| Vec::<Point>::new()).unwrap();
//! assert!(scans.is_empty());
//! assert_eq!(Some(End::Malformed { line: 1 }), reader.end());
//!
//! let options = ReaderOptions::default().with_strict_headers(true);
//! let mut reader = Reader::with_options(Cursor::new("not a header\n"), options);
//! assert!(reader.read_scans(|_| Vec::<Point>::new()).is_err());
//! ```
//!
//! Broken point records are always errors.

#![deny(
    missing_docs,
    missing_debug_implementations,
    unsafe_code,
    unstable_features,
    unused_import_braces
)]

pub mod header;
pub mod point;
pub mod raster;
pub mod reader;
pub mod registration;
pub mod sink;

mod color;
mod error;
mod lines;
mod parse;
mod tokenizer;
mod vector;

pub use color::Color;
pub use error::Error;
pub use header::{End, HeaderStatus, ScanInfo};
pub use point::Point;
pub use raster::{RasterDimensions, RasterPosition};
pub use reader::{Reader, ReaderOptions};
pub use registration::{Matrix3, Registration};
pub use vector::Vector;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
