//! Triangulation of simple polygons embedded in 3D space.
//!
//! Convex polygons are split with a fan anchored at their first vertex,
//! concave polygons are ear-clipped. The polygon does not have to be
//! axis-aligned: orientation is measured against a best-fit normal computed
//! with Newell's method.
//!
//! ```rust
//! # use polytri::data::Point;
//! let square = vec![
//!   Point::new([0.0, 0.0, 0.0]),
//!   Point::new([1.0, 0.0, 0.0]),
//!   Point::new([1.0, 1.0, 0.0]),
//!   Point::new([0.0, 1.0, 0.0]),
//! ];
//! let (triangles, normal) = polytri::triangulate(square);
//! assert_eq!(triangles.len(), 2);
//! // Counter-clockwise when seen from +z, so the normal points down.
//! assert_eq!(normal, Point::new([0.0, 0.0, -1.0]));
//! ```
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]

pub mod algorithms;
pub mod data;
pub mod obj;
mod orientation;

pub use algorithms::triangulation::{triangulate, try_triangulate, Triangulation};
pub use orientation::TurnDirection;

/// Tolerance used by approximate point equality and by the containment
/// predicate.
pub const EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  /// Ear-clipping ran out of ears before the polygon was reduced to a
  /// triangle. The polygon is self-intersecting or otherwise not simple.
  NoEarFound,
  DivisionByZero,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::NoEarFound => write!(f, "No ear found"),
      Error::DivisionByZero => write!(f, "Division by zero"),
    }
  }
}

impl std::error::Error for Error {}

#[cfg(test)]
pub mod testing;
