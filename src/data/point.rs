use array_init::array_init;
use num_traits::Zero;
use std::ops::Index;

use crate::{Error, EPSILON};

mod add;
mod div;
mod mul;
mod sub;

/// A point (or a vector) in 3D space.
///
/// The optional `tag` is an opaque identifier carried along by the
/// triangulation so that output vertices can be traced back to the input.
/// Arithmetic never propagates it and equality ignores it.
#[derive(Debug, Clone, Copy)]
pub struct Point {
  pub array: [f64; 3],
  pub tag: Option<usize>,
}

impl Point {
  pub const fn new(array: [f64; 3]) -> Point {
    Point { array, tag: None }
  }

  pub const fn tagged(array: [f64; 3], tag: usize) -> Point {
    Point {
      array,
      tag: Some(tag),
    }
  }

  #[must_use]
  pub fn with_tag(self, tag: usize) -> Point {
    Point {
      tag: Some(tag),
      ..self
    }
  }

  // Same as num_traits::Zero::zero but usable without importing the trait.
  pub fn zero() -> Point {
    Point::new([0.0; 3])
  }

  /// Exact test, not approximate. Used to detect a missing normal.
  pub fn is_zero(&self) -> bool {
    self.array.iter().all(|c| *c == 0.0)
  }

  pub fn dot(&self, rhs: &Point) -> f64 {
    self
      .array
      .iter()
      .zip(rhs.array.iter())
      .map(|(a, b)| a * b)
      .sum()
  }

  pub fn cross(&self, rhs: &Point) -> Point {
    let [ax, ay, az] = self.array;
    let [bx, by, bz] = rhs.array;
    Point::new([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
  }

  pub fn magnitude(&self) -> f64 {
    self.dot(self).sqrt()
  }

  /// Unit vector pointing the same way. Zero-length vectors normalize to the
  /// zero vector rather than failing: degenerate edges must not abort a
  /// triangulation.
  pub fn normalize(&self) -> Point {
    let m = self.magnitude();
    if m != 0.0 {
      Point::new(array_init(|i| self.array[i] / m))
    } else {
      Point::zero()
    }
  }

  /// Divide every coordinate by `rhs`.
  ///
  /// # Errors
  /// Returns [`Error::DivisionByZero`] if `rhs` is exactly zero.
  pub fn checked_div(&self, rhs: f64) -> Result<Point, Error> {
    if rhs == 0.0 {
      Err(Error::DivisionByZero)
    } else {
      Ok(Point::new(array_init(|i| self.array[i] / rhs)))
    }
  }

  /// Approximate equality: every axis has to be within [`EPSILON`].
  pub fn approx_eq(&self, other: &Point) -> bool {
    self
      .array
      .iter()
      .zip(other.array.iter())
      .all(|(a, b)| (a - b).abs() <= EPSILON)
  }
}

impl PartialEq for Point {
  fn eq(&self, other: &Point) -> bool {
    self.approx_eq(other)
  }
}

impl Zero for Point {
  fn zero() -> Point {
    Point::zero()
  }

  fn is_zero(&self) -> bool {
    Point::is_zero(self)
  }
}

impl Index<usize> for Point {
  type Output = f64;
  fn index(&self, key: usize) -> &f64 {
    self.array.index(key)
  }
}

impl From<[f64; 3]> for Point {
  fn from(array: [f64; 3]) -> Point {
    Point::new(array)
  }
}
