use array_init::array_init;
use std::ops::Index;
use std::ops::Neg;
use std::ops::Sub;

use super::Point;

// &point - &point = point
impl<'a, 'b> Sub<&'a Point> for &'b Point {
  type Output = Point;

  fn sub(self: &'b Point, other: &'a Point) -> Self::Output {
    Point::new(array_init(|i| self.array.index(i) - other.array.index(i)))
  }
}

// point - point = point
impl Sub<Point> for Point {
  type Output = Point;

  fn sub(self: Point, other: Point) -> Self::Output {
    Sub::sub(&self, &other)
  }
}

// point - &point = point
impl Sub<&Point> for Point {
  type Output = Point;

  fn sub(self: Point, other: &Point) -> Self::Output {
    Sub::sub(&self, other)
  }
}

impl Neg for Point {
  type Output = Point;

  fn neg(self) -> Self::Output {
    Point::new(array_init(|i| -self.array[i]))
  }
}

impl Neg for &Point {
  type Output = Point;

  fn neg(self) -> Self::Output {
    Point::new(array_init(|i| -self.array[i]))
  }
}
