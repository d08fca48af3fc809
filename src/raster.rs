//! The grid of point records in a scan.
//!
//! Records are stored column-major: the record index increments fastest down a column, so the
//! first `rows` records make up column zero, the next `rows` make up column one, and so on.

/// The location of a point in its scan's grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RasterPosition {
    /// The zero-based column.
    pub column: u32,
    /// The zero-based row.
    pub row: u32,
}

/// The size of a scan's grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RasterDimensions {
    /// The number of columns.
    pub columns: u32,
    /// The number of rows.
    pub rows: u32,
}

impl RasterPosition {
    /// Creates a new raster position.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptx::RasterPosition;
    /// let position = RasterPosition::new(1, 2);
    /// assert_eq!(1, position.column);
    /// assert_eq!(2, position.row);
    /// ```
    pub fn new(column: u32, row: u32) -> RasterPosition {
        RasterPosition { column, row }
    }
}

impl RasterDimensions {
    /// Creates new raster dimensions.
    pub fn new(columns: u32, rows: u32) -> RasterDimensions {
        RasterDimensions { columns, rows }
    }

    /// Returns the number of records in the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptx::RasterDimensions;
    /// assert_eq!(12, RasterDimensions::new(3, 4).len());
    /// ```
    pub fn len(&self) -> u64 {
        u64::from(self.columns) * u64::from(self.rows)
    }

    /// Returns true if the grid holds no records.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptx::RasterDimensions;
    /// assert!(RasterDimensions::new(0, 4).is_empty());
    /// assert!(!RasterDimensions::new(1, 1).is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maps a record index to its raster position.
    ///
    /// Returns `None` if the index is past the last record.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptx::{RasterDimensions, RasterPosition};
    /// let dimensions = RasterDimensions::new(3, 4);
    /// assert_eq!(Some(RasterPosition::new(0, 3)), dimensions.position(3));
    /// assert_eq!(Some(RasterPosition::new(1, 0)), dimensions.position(4));
    /// assert_eq!(None, dimensions.position(12));
    /// ```
    pub fn position(&self, index: u64) -> Option<RasterPosition> {
        if index >= self.len() {
            return None;
        }
        let rows = u64::from(self.rows);
        // Both quotient and remainder are bounded by the u32 dimensions.
        Some(RasterPosition {
            column: u32::try_from(index / rows).ok()?,
            row: u32::try_from(index % rows).ok()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_column_major() {
        let dimensions = RasterDimensions::new(2, 3);
        let positions: Vec<_> = (0..dimensions.len())
            .map(|i| dimensions.position(i).unwrap())
            .collect();
        assert_eq!(
            vec![
                RasterPosition::new(0, 0),
                RasterPosition::new(0, 1),
                RasterPosition::new(0, 2),
                RasterPosition::new(1, 0),
                RasterPosition::new(1, 1),
                RasterPosition::new(1, 2),
            ],
            positions
        );
    }

    #[test]
    fn every_cell_exactly_once() {
        let dimensions = RasterDimensions::new(7, 5);
        let mut seen = std::collections::HashSet::new();
        for i in 0..dimensions.len() {
            assert!(seen.insert(dimensions.position(i).unwrap()));
        }
        assert_eq!(35, seen.len());
        for column in 0..7 {
            for row in 0..5 {
                assert!(seen.contains(&RasterPosition::new(column, row)));
            }
        }
    }

    #[test]
    fn empty_dimensions() {
        let dimensions = RasterDimensions::new(5, 0);
        assert!(dimensions.is_empty());
        assert_eq!(None, dimensions.position(0));
    }

    #[test]
    fn len_does_not_overflow() {
        let dimensions = RasterDimensions::new(u32::MAX, u32::MAX);
        assert_eq!(u64::from(u32::MAX) * u64::from(u32::MAX), dimensions.len());
        assert_eq!(
            Some(RasterPosition::new(u32::MAX - 1, u32::MAX - 1)),
            dimensions.position(dimensions.len() - 1)
        );
    }
}
