use array_init::array_init;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Index;

use super::Point;

// &point + &point = point
impl<'a, 'b> Add<&'a Point> for &'b Point {
  type Output = Point;

  fn add(self: &'b Point, other: &'a Point) -> Self::Output {
    Point::new(array_init(|i| self.array.index(i) + other.array.index(i)))
  }
}

// point + point = point
impl Add<Point> for Point {
  type Output = Point;

  fn add(self: Point, other: Point) -> Self::Output {
    Add::add(&self, &other)
  }
}

// point + &point = point
impl Add<&Point> for Point {
  type Output = Point;

  fn add(self: Point, other: &Point) -> Self::Output {
    Add::add(&self, other)
  }
}

// point += &point
impl AddAssign<&Point> for Point {
  fn add_assign(&mut self, other: &Point) {
    for i in 0..3 {
      self.array[i] += other.array.index(i)
    }
  }
}

// point += point
impl AddAssign<Point> for Point {
  fn add_assign(&mut self, other: Point) {
    AddAssign::add_assign(self, &other)
  }
}
