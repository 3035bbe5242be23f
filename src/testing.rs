// This module contains strategies for:
//  * points
//  * triangles
//  * polygons
// A Strategy is a way to generate a shrinkable value. Polygons are generated
// from a seed so they shrink towards fewer vertices rather than towards
// invalid shapes.
use crate::data::{Point, Polygon, Triangle};

use proptest::array::uniform3;
use proptest::collection::vec;
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::ops::Range;

const COORDINATES: Range<f64> = -100.0..100.0;
const CONVEX_SIZES: Range<usize> = 3..40;
// Star polygons beyond this size get thin enough spikes for the containment
// tolerance to matter.
const STAR_SIZES: Range<usize> = 3..24;

///////////////////////////////////////////////////////////////////////////////
// Points

/// Finite points with every coordinate in `-100..100`.
pub fn any_point() -> impl Strategy<Value = Point> {
  uniform3(COORDINATES).prop_map(Point::new)
}

///////////////////////////////////////////////////////////////////////////////
// Triangles

/// Triangles that are neither tiny nor needle-like.
pub fn any_triangle() -> impl Strategy<Value = Triangle> {
  uniform3(any_point())
    .prop_map(Triangle::new)
    .prop_filter("Triangle too thin", |t| {
      let [a, b, c] = t.0;
      let edges = (b - a).dot(&(b - a)) + (c - b).dot(&(c - b)) + (a - c).dot(&(a - c));
      let area = t.area_squared().sqrt();
      area >= 1.0 && area / edges > 0.02
    })
}

///////////////////////////////////////////////////////////////////////////////
// Polygons

/// Strictly convex polygons in a random plane, tagged by index.
pub fn convex_polygon() -> impl Strategy<Value = Polygon> {
  (CONVEX_SIZES, any::<u64>()).prop_map(|(n, seed)| {
    let rng = &mut SmallRng::seed_from_u64(seed);
    Polygon::random_convex(n, rng)
  })
}

/// Star-shaped polygons in a random plane, tagged by index. Mostly concave.
pub fn star_polygon() -> impl Strategy<Value = Polygon> {
  (STAR_SIZES, any::<u64>()).prop_map(|(n, seed)| {
    let rng = &mut SmallRng::seed_from_u64(seed);
    Polygon::random_star(n, rng)
  })
}

/// Star-shaped polygons where every point may be repeated a few times, and
/// the first point may be repeated at the end.
pub fn polygon_with_duplicates() -> impl Strategy<Value = Polygon> {
  (
    star_polygon(),
    vec(0usize..3, STAR_SIZES.end),
    any::<bool>(),
  )
    .prop_map(|(polygon, repeats, close)| {
      let mut points: Vec<Point> = polygon
        .iter()
        .zip(repeats.iter().cycle())
        .flat_map(|(pt, n)| std::iter::repeat(*pt).take(n + 1))
        .collect();
      if close {
        points.push(polygon[0]);
      }
      Polygon::new(points)
    })
}

#[cfg(test)]
mod tests {
  use super::*;

  use test_strategy::proptest;

  #[proptest]
  fn points_are_finite(#[strategy(any_point())] pt: Point) {
    prop_assert!(pt.array.iter().all(|c| c.is_finite()));
  }

  #[proptest]
  fn duplicates_collapse_to_source(#[strategy(polygon_with_duplicates())] p: Polygon) {
    let clean = p.remove_consecutive_duplicates();
    prop_assert!(clean.len() >= 3);
    prop_assert!(clean.len() <= p.len());
    let tags: Vec<Option<usize>> = clean.iter().map(|pt| pt.tag).collect();
    prop_assert_eq!(tags, (0..clean.len()).map(Some).collect::<Vec<_>>());
  }
}
