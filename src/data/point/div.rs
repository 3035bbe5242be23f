use std::ops::Div;

use super::Point;

// Dividing by an exact zero is a programmer error. Use Point::checked_div to
// handle it as a value.
impl Div<f64> for Point {
  type Output = Point;

  fn div(self: Point, other: f64) -> Self::Output {
    Div::div(&self, other)
  }
}

impl Div<f64> for &Point {
  type Output = Point;

  fn div(self, other: f64) -> Point {
    match self.checked_div(other) {
      Ok(point) => point,
      Err(err) => panic!("point {:?}: {}", self.array, err.to_string().to_lowercase()),
    }
  }
}
