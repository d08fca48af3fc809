//! The rigid-body transform that places a scan in a common coordinate frame.
//!
//! This crate parses registration parameters and hands them to you, but never applies them to
//! the points.

use crate::Vector;

/// A 3x3 matrix, stored as rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3 {
    /// The three rows.
    pub rows: [Vector<f64>; 3],
}

/// A rotation and a translation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Registration {
    /// The rotation matrix.
    pub rotation: Matrix3,
    /// The translation vector.
    pub translation: Vector<f64>,
}

impl Matrix3 {
    /// Returns the identity matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptx::Matrix3;
    /// let identity = Matrix3::identity();
    /// assert_eq!(1., identity.get(1, 1));
    /// assert_eq!(0., identity.get(1, 2));
    /// ```
    pub fn identity() -> Matrix3 {
        Matrix3 {
            rows: [
                Vector::new(1., 0., 0.),
                Vector::new(0., 1., 0.),
                Vector::new(0., 0., 1.),
            ],
        }
    }

    /// Returns the value at `row` and `column`.
    ///
    /// # Panics
    ///
    /// Panics if either index is greater than two.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptx::{Matrix3, Vector};
    /// let matrix = Matrix3 {
    ///     rows: [
    ///         Vector::new(1., 2., 3.),
    ///         Vector::new(4., 5., 6.),
    ///         Vector::new(7., 8., 9.),
    ///     ],
    /// };
    /// assert_eq!(6., matrix.get(1, 2));
    /// ```
    pub fn get(&self, row: usize, column: usize) -> f64 {
        let row = &self.rows[row];
        match column {
            0 => row.x,
            1 => row.y,
            2 => row.z,
            _ => panic!("column index out of range: {}", column),
        }
    }
}

impl Default for Matrix3 {
    fn default() -> Matrix3 {
        Matrix3::identity()
    }
}

impl From<[[f64; 3]; 3]> for Matrix3 {
    fn from(rows: [[f64; 3]; 3]) -> Matrix3 {
        Matrix3 {
            rows: rows.map(Vector::from),
        }
    }
}
