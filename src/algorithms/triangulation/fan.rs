use crate::data::{Point, Triangle};

/// $O(n)$ Fan triangulation anchored at the first point.
///
/// Only valid for convex polygons. Emits `(p[0], p[i], p[i+1])` for
/// `i = 1..n-2`, in that order, so `n` points yield `n - 2` triangles and
/// fewer than three points yield none.
pub fn fan(points: &[Point]) -> Vec<Triangle> {
  match points.split_first() {
    Some((anchor, rest)) => rest
      .windows(2)
      .map(|pair| Triangle::new([*anchor, pair[0], pair[1]]))
      .collect(),
    None => vec![],
  }
}
