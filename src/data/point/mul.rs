use array_init::array_init;
use std::ops::Mul;

use super::Point;

impl Mul<f64> for Point {
  type Output = Point;

  fn mul(self: Point, other: f64) -> Self::Output {
    Point::new(array_init(|i| self.array[i] * other))
  }
}

impl Mul<f64> for &Point {
  type Output = Point;

  fn mul(self, other: f64) -> Point {
    Point::new(array_init(|i| self.array[i] * other))
  }
}
