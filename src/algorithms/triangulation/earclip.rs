use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use tracing::debug;

use crate::data::{Point, Polygon, Triangle, TriangleView};
use crate::{Error, TurnDirection};

// Force clockwise winding. Then, until only a triangle is left:
//   Find every ear. O(n^2)
//   Pick the one with the largest area, the first one on ties.
//   Emit (prev, ear, next) and unlink the ear. O(1)
// Picking the largest ear keeps slivers out of the output for as long as
// possible, which also keeps the containment tests well conditioned.
/// $O(n^3)$ Ear-clipping triangulation of a simple polygon.
///
/// `normal` is the polygon's normal, normally [`Polygon::normal`]. The
/// points are expected to be free of consecutive duplicates.
///
/// # Errors
/// * [`Error::InsufficientVertices`] for fewer than three points.
/// * [`Error::NoEarFound`] if the polygon runs out of ears, which happens for
///   self-intersecting polygons.
pub fn earclip(mut polygon: Polygon, normal: &Point) -> Result<Vec<Triangle>, Error> {
  polygon.make_clockwise(normal);
  let points = polygon.into_points();
  if points.len() < 3 {
    return Err(Error::InsufficientVertices);
  }

  let mut vertices = List::new(points.len());
  let mut triangles = Vec::with_capacity(points.len() - 2);
  while vertices.len() >= 3 {
    let focus = match biggest_ear(&points, &vertices, normal) {
      Some(focus) => focus,
      None => {
        debug!(
          remaining = vertices.len(),
          clipped = triangles.len(),
          "no ear left to clip"
        );
        return Err(Error::NoEarFound);
      }
    };
    let prev = vertices.prev(focus);
    let next = vertices.next(focus);
    triangles.push(Triangle::new([points[prev], points[focus], points[next]]));
    vertices.delete(focus);
  }
  debug_assert_eq!(triangles.len(), points.len() - 2);
  Ok(triangles)
}

/// Whether the vertex at `index` is an ear of `polygon`: it turns right
/// around `normal` and no other vertex lies inside or on the triangle it
/// forms with its neighbours. Every vertex of a triangle is an ear.
pub fn is_ear(polygon: &Polygon, index: usize, normal: &Point) -> bool {
  let points = polygon.points();
  if points.len() < 3 {
    return false;
  }
  let vertices = List::new(points.len());
  is_listed_ear(points, &vertices, index % points.len(), normal)
}

fn biggest_ear(points: &[Point], vertices: &List, normal: &Point) -> Option<usize> {
  if vertices.len() == 3 {
    return Some(vertices.head());
  }
  vertices
    .iter()
    .enumerate()
    .filter(|&(_, focus)| is_listed_ear(points, vertices, focus, normal))
    .map(|(position, focus)| {
      let trig = TriangleView::new([
        &points[vertices.prev(focus)],
        &points[focus],
        &points[vertices.next(focus)],
      ]);
      (focus, OrderedFloat(trig.area_squared()), Reverse(position))
    })
    .max_by_key(|&(_, area, position)| (area, position))
    .map(|(focus, _, _)| focus)
}

fn is_listed_ear(points: &[Point], vertices: &List, b: usize, normal: &Point) -> bool {
  match vertices.len() {
    0..=2 => return false,
    3 => return true,
    _ => (),
  }
  let a = vertices.prev(b);
  let c = vertices.next(b);
  if TurnDirection::at(&points[a], &points[b], &points[c], normal) != TurnDirection::Right {
    return false;
  }
  let trig = TriangleView::new([&points[a], &points[b], &points[c]]);
  let mut focus = vertices.next(c);
  while focus != a {
    if trig.contains(&points[focus]) {
      return false;
    }
    focus = vertices.next(focus);
  }
  true
}

///////////////////////////////////////////////////////////////////////////////
// Linked list over vertex indices that supports deletions.

struct List {
  prev: Vec<usize>,
  next: Vec<usize>,
  head: usize,
  len: usize,
}

impl List {
  fn new(size: usize) -> List {
    let mut prev = Vec::with_capacity(size);
    let mut next = Vec::with_capacity(size);
    prev.resize(size, 0);
    next.resize(size, 0);
    for i in 0..size {
      prev[(i + 1) % size] = i;
      next[i] = (i + 1) % size;
    }
    List {
      prev,
      next,
      head: 0,
      len: size,
    }
  }

  fn len(&self) -> usize {
    self.len
  }

  // Lowest remaining index. Deletions never reorder the list, so walking from
  // the head visits vertices in their original order.
  fn head(&self) -> usize {
    self.head
  }

  fn prev(&self, vertex: usize) -> usize {
    self.prev[vertex]
  }

  fn next(&self, vertex: usize) -> usize {
    self.next[vertex]
  }

  fn iter(&self) -> impl Iterator<Item = usize> + '_ {
    std::iter::successors(Some(self.head), move |&vertex| Some(self.next(vertex))).take(self.len)
  }

  fn delete(&mut self, vertex: usize) {
    let prev = self.prev[vertex];
    let next = self.next[vertex];
    self.next[prev] = next;
    self.prev[next] = prev;
    if vertex == self.head {
      self.head = next;
    }
    self.len -= 1;
  }
}
