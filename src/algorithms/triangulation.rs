use tracing::debug;

use crate::data::{Point, Polygon, Triangle};
use crate::Error;

pub mod earclip;
pub mod fan;

/// Triangles cut from a polygon, along with the normal that was used to
/// orient them.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangulation {
  pub triangles: Vec<Triangle>,
  pub normal: Point,
}

impl Triangulation {
  fn empty() -> Triangulation {
    Triangulation {
      triangles: vec![],
      normal: Point::zero(),
    }
  }
}

/// $O(n^3)$ Triangulate a simple polygon, convex or concave, lying in any
/// plane.
///
/// Consecutive duplicate points are removed first. A triangle is returned as
/// is, with its own normal. Otherwise the normal is computed with Newell's
/// method and convex polygons are fanned from their first point while
/// concave polygons are ear-clipped.
///
/// # Errors
/// * [`Error::InsufficientVertices`] when fewer than three distinct points
///   remain.
/// * [`Error::NoEarFound`] when ear-clipping gets stuck, ie. the polygon is
///   not simple.
pub fn try_triangulate(polygon: impl Into<Polygon>) -> Result<Triangulation, Error> {
  let polygon = polygon.into().remove_consecutive_duplicates();
  match polygon.len() {
    0..=2 => Err(Error::InsufficientVertices),
    3 => {
      let triangle = Triangle::new([polygon[0], polygon[1], polygon[2]]);
      Ok(Triangulation {
        normal: triangle.normal(),
        triangles: vec![triangle],
      })
    }
    _ => {
      let normal = polygon.normal();
      let triangles = if polygon.is_convex(&normal) {
        fan::fan(polygon.points())
      } else {
        earclip::earclip(polygon, &normal)?
      };
      Ok(Triangulation { triangles, normal })
    }
  }
}

/// Like [`try_triangulate`] but failures give an empty triangle list and a
/// zero normal.
///
/// ```rust
/// # use polytri::data::Point;
/// let (triangles, normal) = polytri::triangulate(vec![Point::zero(), Point::zero()]);
/// assert!(triangles.is_empty());
/// assert!(normal.is_zero());
/// ```
pub fn triangulate(polygon: impl Into<Polygon>) -> (Vec<Triangle>, Point) {
  match try_triangulate(polygon) {
    Ok(Triangulation { triangles, normal }) => (triangles, normal),
    Err(err) => {
      debug!(%err, "polygon not triangulated");
      let Triangulation { triangles, normal } = Triangulation::empty();
      (triangles, normal)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use claims::{assert_err_eq, assert_ok};
  use proptest::prelude::*;
  use std::collections::BTreeSet;
  use test_strategy::proptest;

  // Triangles as sets of input tags, independent of winding and order.
  fn tag_sets(triangles: &[Triangle]) -> BTreeSet<[usize; 3]> {
    triangles
      .iter()
      .map(|t| {
        let mut tags = t.tags().map(|tag| tag.unwrap_or(usize::MAX));
        tags.sort_unstable();
        tags
      })
      .collect()
  }

  #[test]
  fn triangle_short_circuit() {
    let p = Polygon::tagged(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    let t = assert_ok!(try_triangulate(p));
    assert_eq!(t.triangles.len(), 1);
    assert_eq!(t.triangles[0].tags(), [Some(0), Some(1), Some(2)]);
    assert_eq!(t.normal, Point::new([0.0, 0.0, -1.0]));
  }

  #[test]
  fn too_few_points() {
    let p = Polygon::tagged(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 0.0]]);
    assert_err_eq!(try_triangulate(p.clone()), Error::InsufficientVertices);
    let (triangles, normal) = triangulate(p);
    assert!(triangles.is_empty());
    assert!(normal.is_zero());
  }

  #[test]
  fn figure_eight_fails() {
    let p = Polygon::tagged(&[
      [0.0, 0.0, 0.0],
      [4.0, 4.0, 0.0],
      [5.0, 2.0, 0.0],
      [4.0, 0.0, 0.0],
      [0.0, 4.0, 0.0],
      [-2.0, 2.0, 0.0],
    ]);
    assert_err_eq!(try_triangulate(p.clone()), Error::NoEarFound);
    let (triangles, normal) = triangulate(p);
    assert!(triangles.is_empty());
    assert!(normal.is_zero());
  }

  #[test]
  fn empty_triangulation() {
    let t = Triangulation::empty();
    assert!(t.triangles.is_empty());
    assert!(t.normal.is_zero());
  }

  #[proptest]
  fn convex_gives_n_minus_two(#[strategy(convex_polygon())] p: Polygon) {
    let n = p.len();
    let (triangles, normal) = triangulate(p);
    prop_assert_eq!(triangles.len(), n - 2);
    prop_assert!((normal.magnitude() - 1.0).abs() < 1e-9);
  }

  #[proptest]
  fn star_gives_n_minus_two(#[strategy(star_polygon())] p: Polygon) {
    let n = p.len();
    let (triangles, _) = triangulate(p);
    prop_assert_eq!(triangles.len(), n - 2);
  }

  #[proptest]
  fn triangles_contain_their_corners(#[strategy(star_polygon())] p: Polygon) {
    let (triangles, _) = triangulate(p);
    for t in &triangles {
      for corner in t.points() {
        prop_assert!(t.view().contains(corner));
      }
    }
  }

  #[proptest]
  fn orientation_invariance(#[strategy(star_polygon())] p: Polygon) {
    let (forward, _) = triangulate(p.clone());
    let (backward, _) = triangulate(p.reverse_from_first());
    prop_assert_eq!(tag_sets(&forward), tag_sets(&backward));
  }

  #[proptest]
  fn duplicates_do_not_matter(#[strategy(polygon_with_duplicates())] p: Polygon) {
    let clean = p.remove_consecutive_duplicates();
    let (dirty, _) = triangulate(p);
    let (clean, _) = triangulate(clean);
    prop_assert_eq!(tag_sets(&dirty), tag_sets(&clean));
  }
}
