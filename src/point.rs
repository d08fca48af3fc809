//! PTX points.

use crate::{
    Color, Error, RasterPosition, Result,
    parse::{parse_float, parse_unsigned},
    tokenizer::Tokens,
};

/// The number of fields in a point record.
pub const FIELD_COUNT: usize = 7;

/// A point is one cell of a scan's raster.
///
/// Cells without a laser return are stored as the origin, see [Point::is_unsampled].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Where this point sits in its scan's grid.
    pub position: RasterPosition,
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
    /// The z coordinate.
    pub z: f64,
    /// The return intensity.
    ///
    /// Most scanners write values between zero and one.
    pub intensity: f64,
    /// The point's color.
    pub color: Color,
}

impl Point {
    /// Returns true if this cell had no laser return.
    ///
    /// PTX marks these by setting all three coordinates to exactly zero. Intensity and color don't
    /// matter.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptx::Point;
    /// let point = Point { intensity: 0.5, ..Default::default() };
    /// assert!(point.is_unsampled());
    /// let point = Point { z: 1e-12, ..Default::default() };
    /// assert!(!point.is_unsampled());
    /// ```
    pub fn is_unsampled(&self) -> bool {
        self.x == 0. && self.y == 0. && self.z == 0.
    }

    /// Returns true if this cell had a laser return.
    pub fn is_sampled(&self) -> bool {
        !self.is_unsampled()
    }

    /// Creates a point from the seven tokens of a record line.
    pub(crate) fn from_tokens(tokens: &Tokens<'_>, position: RasterPosition) -> Result<Point> {
        if tokens.len() != FIELD_COUNT {
            return Err(Error::TokenCount {
                expected: FIELD_COUNT,
                found: tokens.len(),
            });
        }
        let field = |i| tokens.get(i).unwrap_or_default();
        Ok(Point {
            position,
            x: parse_float(field(0))?,
            y: parse_float(field(1))?,
            z: parse_float(field(2))?,
            intensity: parse_float(field(3))?,
            color: Color {
                red: parse_unsigned(field(4))?,
                green: parse_unsigned(field(5))?,
                blue: parse_unsigned(field(6))?,
            },
        })
    }
}
