//! Receivers for the points of a scan.
//!
//! [Reader::read_scans](crate::Reader::read_scans) asks you for a new sink at the start of every
//! scan and then hands it each of that scan's points, in raster order. Anything that implements
//! [Insert] will do:
//!
//! ```
//! use ptx::{Point, sink::Insert};
//! let mut points: Vec<Point> = Vec::new();
//! // `Vec::insert` shadows the trait method, so name the trait.
//! Insert::insert(&mut points, Point::default()).unwrap();
//! assert_eq!(1, points.len());
//! ```
//!
//! Wrap a sink in [Sampled] to drop the cells that had no laser return, or build one out of a
//! closure with [from_fn].

use crate::{Point, Result};

/// Receives points.
pub trait Insert {
    /// Takes one point.
    ///
    /// Returning an error stops the read, and the error is handed back to the caller of
    /// `read_scans`. Use [Error::rejected](crate::Error::rejected) to wrap your own errors.
    fn insert(&mut self, point: Point) -> Result<()>;
}

impl Insert for Vec<Point> {
    fn insert(&mut self, point: Point) -> Result<()> {
        self.push(point);
        Ok(())
    }
}

impl<T: Insert + ?Sized> Insert for &mut T {
    fn insert(&mut self, point: Point) -> Result<()> {
        (**self).insert(point)
    }
}

impl<T: Insert + ?Sized> Insert for Box<T> {
    fn insert(&mut self, point: Point) -> Result<()> {
        (**self).insert(point)
    }
}

/// A sink made from a closure.
///
/// This struct is created by [from_fn].
#[derive(Clone, Copy, Debug)]
pub struct FromFn<F>(F);

/// Creates a sink that calls `f` with every point.
///
/// # Examples
///
/// ```
/// use ptx::{Point, sink::{self, Insert}};
/// let mut count = 0;
/// let mut sink = sink::from_fn(|_| {
///     count += 1;
///     Ok(())
/// });
/// sink.insert(Point::default()).unwrap();
/// sink.insert(Point::default()).unwrap();
/// drop(sink);
/// assert_eq!(2, count);
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut(Point) -> Result<()>,
{
    FromFn(f)
}

impl<F> Insert for FromFn<F>
where
    F: FnMut(Point) -> Result<()>,
{
    fn insert(&mut self, point: Point) -> Result<()> {
        (self.0)(point)
    }
}

/// Forwards only sampled points to the inner sink.
///
/// # Examples
///
/// ```
/// use ptx::{Point, sink::{Insert, Sampled}};
/// let mut sink = Sampled::new(Vec::<Point>::new());
/// sink.insert(Point::default()).unwrap();
/// sink.insert(Point { x: 1., ..Default::default() }).unwrap();
/// assert_eq!(1, sink.into_inner().len());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Sampled<S> {
    inner: S,
}

impl<S> Sampled<S> {
    /// Wraps a sink.
    pub fn new(inner: S) -> Sampled<S> {
        Sampled { inner }
    }

    /// Returns a reference to the inner sink.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Returns the inner sink.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Insert> Insert for Sampled<S> {
    fn insert(&mut self, point: Point) -> Result<()> {
        if point.is_sampled() {
            self.inner.insert(point)
        } else {
            Ok(())
        }
    }
}
