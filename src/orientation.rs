use crate::data::Point;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum TurnDirection {
  Right,
  Left,
  NoTurn,
}

impl TurnDirection {
  /// Determine the direction you have to turn at the end of the unit
  /// direction `u` (leaving `prev`) in order to reach `next`, as seen against
  /// the reference normal `normal`.
  ///
  /// The sign test is exact: only a product of exactly zero counts as
  /// [`NoTurn`](TurnDirection::NoTurn). Nearly colinear vertices can
  /// therefore land on either side.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use polytri::data::Point;
  /// # use polytri::TurnDirection;
  /// let down = Point::new([0.0, 0.0, -1.0]);
  /// let prev = Point::new([0.0, 0.0, 0.0]);
  /// let u = Point::new([1.0, 0.0, 0.0]);
  /// // (0,0) -> (1,0) -> (1,1) turns right when looking along -z.
  /// assert!(TurnDirection::new(&prev, &u, &down, &Point::new([1.0, 1.0, 0.0])).is_right());
  /// assert!(TurnDirection::new(&prev, &u, &down, &Point::new([1.0, -1.0, 0.0])).is_left());
  /// assert!(TurnDirection::new(&prev, &u, &down, &Point::new([2.0, 0.0, 0.0])).is_no_turn());
  /// ```
  pub fn new(prev: &Point, u: &Point, normal: &Point, next: &Point) -> TurnDirection {
    let d = (next - prev).cross(u).dot(normal);
    if d > 0.0 {
      TurnDirection::Right
    } else if d < 0.0 {
      TurnDirection::Left
    } else {
      TurnDirection::NoTurn
    }
  }

  /// Turn taken at `item` when walking `prev -> item -> next`.
  pub fn at(prev: &Point, item: &Point, next: &Point, normal: &Point) -> TurnDirection {
    let u = (item - prev).normalize();
    TurnDirection::new(prev, &u, normal, next)
  }

  pub fn is_right(self) -> bool {
    matches!(self, TurnDirection::Right)
  }

  pub fn is_left(self) -> bool {
    matches!(self, TurnDirection::Left)
  }

  pub fn is_no_turn(self) -> bool {
    matches!(self, TurnDirection::NoTurn)
  }

  #[must_use]
  pub fn reverse(self) -> TurnDirection {
    match self {
      TurnDirection::Right => TurnDirection::Left,
      TurnDirection::Left => TurnDirection::Right,
      TurnDirection::NoTurn => TurnDirection::NoTurn,
    }
  }
}
