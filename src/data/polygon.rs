use rand::Rng;
use std::f64::consts::TAU;
use std::iter::FromIterator;
use std::ops::Index;

use crate::data::Point;
use crate::TurnDirection;

/// An ordered ring of points. Consecutive points are joined by an edge and
/// the last point connects back to the first.
///
/// A `Polygon` is not validated on construction: it may be non-planar,
/// self-intersecting or contain duplicate points. The triangulation cleans up
/// duplicates itself and reports what it cannot handle.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
  pub(crate) points: Vec<Point>,
}

impl Polygon {
  pub fn new(points: Vec<Point>) -> Polygon {
    Polygon { points }
  }

  /// Build a polygon whose points are tagged with their position in
  /// `coordinates`.
  pub fn tagged(coordinates: &[[f64; 3]]) -> Polygon {
    coordinates
      .iter()
      .enumerate()
      .map(|(i, c)| Point::tagged(*c, i))
      .collect()
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn points(&self) -> &[Point] {
    &self.points
  }

  pub fn into_points(self) -> Vec<Point> {
    self.points
  }

  pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
    self.points.iter()
  }

  /// `(prev, item, next)` for every vertex, in order, wrapping around.
  pub fn corners(&self) -> impl Iterator<Item = (&Point, &Point, &Point)> + '_ {
    let n = self.points.len();
    (0..n).map(move |i| {
      (
        &self.points[(i + n - 1) % n],
        &self.points[i],
        &self.points[(i + 1) % n],
      )
    })
  }

  /// $O(n)$ Drop every point that equals (within `EPSILON`) the point kept
  /// before it. A trailing run equal to the first point is dropped as well
  /// since the ring closes there.
  ///
  /// Applying this twice gives the same polygon as applying it once.
  #[must_use]
  pub fn remove_consecutive_duplicates(&self) -> Polygon {
    let mut points: Vec<Point> = Vec::with_capacity(self.points.len());
    for pt in self.points.iter() {
      if points.last() != Some(pt) {
        points.push(*pt);
      }
    }
    while points.len() > 1 && points.last() == points.first() {
      points.pop();
    }
    Polygon { points }
  }

  // Newell's method, not normalized. Its length is twice the area of a planar
  // polygon.
  fn newell(&self) -> Point {
    let n = self.points.len();
    let mut v = Point::zero();
    if n < 3 {
      return v;
    }
    for (i, item) in self.points.iter().enumerate() {
      let next = &self.points[(i + 1) % n];
      v += Point::new([
        (next[1] - item[1]) * (next[2] + item[2]),
        (next[2] - item[2]) * (next[0] + item[0]),
        (next[0] - item[0]) * (next[1] + item[1]),
      ]);
    }
    v
  }

  /// $O(n)$ Best-fit plane normal (Newell's method). Tolerates noisy,
  /// slightly non-planar input.
  ///
  /// The zero vector is returned for fewer than three points or when the
  /// points do not span an area. Reversing the point order negates the
  /// normal.
  pub fn normal(&self) -> Point {
    self.newell().normalize()
  }

  /// $O(n)$ Area of a planar polygon.
  pub fn area(&self) -> f64 {
    self.newell().magnitude() / 2.0
  }

  /// $O(n)$ All turns, ignoring colinear vertices, go the same way around
  /// `normal`.
  ///
  /// Polygons with fewer than three points are never convex; triangles
  /// always are.
  pub fn is_convex(&self, normal: &Point) -> bool {
    match self.points.len() {
      0..=2 => return false,
      3 => return true,
      _ => (),
    }
    let mut polygon_turn = TurnDirection::NoTurn;
    for (prev, item, next) in self.corners() {
      let turn = TurnDirection::at(prev, item, next, normal);
      if turn.is_no_turn() {
        continue;
      }
      if polygon_turn.is_no_turn() {
        polygon_turn = turn;
      }
      if polygon_turn != turn {
        return false;
      }
    }
    true
  }

  /// $O(n)$ Winding relative to `normal`, seen from the side `normal` points
  /// to.
  ///
  /// Uses the signed area projected onto `normal`. Summing the turn at every
  /// corner instead gets concave polygons wrong: one sharp reflex corner can
  /// outweigh all the others.
  pub fn is_clockwise(&self, normal: &Point) -> bool {
    let n = self.points.len();
    if n < 3 {
      return false;
    }
    let sum: f64 = self
      .points
      .iter()
      .enumerate()
      .map(|(i, item)| item.cross(&self.points[(i + 1) % n]).dot(normal))
      .sum();
    sum < 0.0
  }

  /// Reverse the point order unless the polygon already winds clockwise
  /// around `normal`.
  pub fn make_clockwise(&mut self, normal: &Point) {
    if self.points.len() < 3 {
      return;
    }
    if !self.is_clockwise(normal) {
      self.points.reverse();
    }
  }

  #[must_use]
  pub fn reverse(&self) -> Polygon {
    let mut points = self.points.clone();
    points.reverse();
    Polygon { points }
  }

  /// Same ring walked the other way around, starting from the same first
  /// point: `[v0, v(n-1), ..., v1]`.
  #[must_use]
  pub fn reverse_from_first(&self) -> Polygon {
    let mut points = self.points.clone();
    if points.len() > 1 {
      points[1..].reverse();
    }
    Polygon { points }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Random polygons

impl Polygon {
  /// $O(n)$ Random strictly convex polygon with `n` vertices (at least 3),
  /// inscribed in a circle, lying in a random plane. Points are tagged with
  /// their index.
  pub fn random_convex<R>(n: usize, rng: &mut R) -> Polygon
  where
    R: Rng + ?Sized,
  {
    let radius = rng.gen_range(1.0..10.0);
    Polygon::random_ring(n, rng, |_| radius)
  }

  /// $O(n)$ Random star-shaped (and therefore simple) polygon with `n`
  /// vertices (at least 3), lying in a random plane. Usually concave. Points
  /// are tagged with their index.
  pub fn random_star<R>(n: usize, rng: &mut R) -> Polygon
  where
    R: Rng + ?Sized,
  {
    Polygon::random_ring(n, rng, |rng| rng.gen_range(1.0..10.0))
  }

  fn random_ring<R, F>(n: usize, rng: &mut R, mut radius: F) -> Polygon
  where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> f64,
  {
    let n = n.max(3);
    let (origin, e1, e2) = random_plane(rng);
    let slice = TAU / n as f64;
    (0..n)
      .map(|i| {
        // Keep angles apart so that neighbouring vertices never collapse.
        let angle = (i as f64 + rng.gen_range(0.1..0.9)) * slice;
        let r = radius(&mut *rng);
        let (s, c) = angle.sin_cos();
        (origin + e1 * (r * c) + e2 * (r * s)).with_tag(i)
      })
      .collect()
  }
}

// Origin and orthonormal in-plane axes of a random plane.
fn random_plane<R>(rng: &mut R) -> (Point, Point, Point)
where
  R: Rng + ?Sized,
{
  let origin = Point::new([
    rng.gen_range(-100.0..100.0),
    rng.gen_range(-100.0..100.0),
    rng.gen_range(-100.0..100.0),
  ]);
  let normal = loop {
    let v = Point::new([
      rng.gen_range(-1.0..1.0),
      rng.gen_range(-1.0..1.0),
      rng.gen_range(-1.0..1.0),
    ]);
    let m = v.magnitude();
    if m > 0.1 && m <= 1.0 {
      break v.normalize();
    }
  };
  let helper = if normal[0].abs() < 0.5 {
    Point::new([1.0, 0.0, 0.0])
  } else {
    Point::new([0.0, 1.0, 0.0])
  };
  let e1 = normal.cross(&helper).normalize();
  let e2 = normal.cross(&e1);
  (origin, e1, e2)
}

impl Index<usize> for Polygon {
  type Output = Point;
  fn index(&self, key: usize) -> &Point {
    self.points.index(key)
  }
}

impl FromIterator<Point> for Polygon {
  fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Polygon {
    Polygon {
      points: iter.into_iter().collect(),
    }
  }
}

impl From<Vec<Point>> for Polygon {
  fn from(points: Vec<Point>) -> Polygon {
    Polygon { points }
  }
}

impl From<Polygon> for Vec<Point> {
  fn from(polygon: Polygon) -> Vec<Point> {
    polygon.points
  }
}
