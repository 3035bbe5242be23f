pub(crate) mod point;
pub mod polygon;
mod triangle;

pub use point::Point;
pub use polygon::Polygon;
pub use triangle::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
