use super::{Point, PointLocation};
use crate::EPSILON;

/// Weights returned for a degenerate triangle. All three are below `-EPSILON`
/// so that no point is ever considered inside.
const DEGENERATE: [f64; 3] = [-2.0 * EPSILON, -2.0 * EPSILON, -2.0 * EPSILON];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle(pub [Point; 3]);

impl Triangle {
  pub fn new(pts: [Point; 3]) -> Triangle {
    Triangle(pts)
  }

  pub fn points(&self) -> &[Point; 3] {
    &self.0
  }

  pub fn tags(&self) -> [Option<usize>; 3] {
    [self.0[0].tag, self.0[1].tag, self.0[2].tag]
  }

  // O(1)
  pub fn locate(&self, pt: &Point) -> PointLocation {
    self.view().locate(pt)
  }

  pub fn barycentric(&self, pt: &Point) -> [f64; 3] {
    self.view().barycentric(pt)
  }

  /// Unit face normal, `cross(p2 - p1, p1 - p0)` scaled to length one (zero
  /// for a degenerate triangle). The raw cross product is twice the area
  /// long; use [`area_squared`](Triangle::area_squared) for sizes. Follows the
  /// same handedness as [`Polygon::normal`](crate::data::Polygon::normal), so
  /// a triangle and the polygon it was cut from agree.
  pub fn normal(&self) -> Point {
    self.view().normal()
  }

  pub fn area_squared(&self) -> f64 {
    self.view().area_squared()
  }

  /// Same corners, opposite winding.
  #[must_use]
  pub fn reverse(&self) -> Triangle {
    let [a, b, c] = self.0;
    Triangle([a, c, b])
  }

  pub fn view(&'_ self) -> TriangleView<'_> {
    TriangleView([&self.0[0], &self.0[1], &self.0[2]])
  }
}

pub struct TriangleView<'a>([&'a Point; 3]);

impl<'a> TriangleView<'a> {
  pub fn new(pts: [&'a Point; 3]) -> TriangleView<'a> {
    TriangleView(pts)
  }

  pub fn to_triangle(&self) -> Triangle {
    let [a, b, c] = self.0;
    Triangle([*a, *b, *c])
  }

  /// Barycentric weights `[alpha, beta, gamma]` of `pt`, where `alpha`
  /// weighs the third corner, `beta` the second and `gamma` the first.
  ///
  /// When the triangle is too thin to solve the system reliably every weight
  /// is `-2 * EPSILON`, ie. the point is reported outside.
  pub fn barycentric(&self, pt: &Point) -> [f64; 3] {
    let [a, b, c] = self.0;
    let v0 = c - a;
    let v1 = b - a;
    let v2 = pt - a;

    let dot00 = v0.dot(&v0);
    let dot01 = v0.dot(&v1);
    let dot02 = v0.dot(&v2);
    let dot11 = v1.dot(&v1);
    let dot12 = v1.dot(&v2);

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom.abs() < EPSILON {
      return DEGENERATE;
    }

    let alpha = (dot11 * dot02 - dot01 * dot12) / denom;
    let beta = (dot00 * dot12 - dot01 * dot02) / denom;
    [alpha, beta, 1.0 - alpha - beta]
  }

  // O(1)
  pub fn locate(&self, pt: &Point) -> PointLocation {
    let weights = self.barycentric(pt);
    if weights.iter().any(|w| *w < -EPSILON) {
      PointLocation::Outside
    } else if weights.iter().any(|w| *w <= EPSILON) {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }

  /// Inside or on an edge, within `EPSILON`.
  pub fn contains(&self, pt: &Point) -> bool {
    self.locate(pt) != PointLocation::Outside
  }

  /// Normalized `cross(p2 - p1, p1 - p0)`, not the raw cross product.
  pub fn normal(&self) -> Point {
    let [p0, p1, p2] = self.0;
    let u = p1 - p0;
    let v = p2 - p1;
    v.cross(&u).normalize()
  }

  /// Squared area. Cheaper than the area and orders triangles the same way.
  pub fn area_squared(&self) -> f64 {
    let [a, b, c] = self.0;
    let m = (b - a).cross(&(c - a)).magnitude();
    m * m / 4.0
  }
}
