/// An xyz collection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector<T> {
    /// X
    pub x: T,
    /// Y
    pub y: T,
    /// Z
    pub z: T,
}

impl<T> Vector<T> {
    /// Creates a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use ptx::Vector;
    /// let vector = Vector::new(1., 2., 3.);
    /// assert_eq!(2., vector.y);
    /// ```
    pub fn new(x: T, y: T, z: T) -> Vector<T> {
        Vector { x, y, z }
    }
}

impl<T> From<[T; 3]> for Vector<T> {
    fn from([x, y, z]: [T; 3]) -> Vector<T> {
        Vector { x, y, z }
    }
}

impl<T> From<Vector<T>> for [T; 3] {
    fn from(vector: Vector<T>) -> [T; 3] {
        [vector.x, vector.y, vector.z]
    }
}
