use std::io::Write;

use super::error::{ObjError, ObjResult};
use crate::data::{Point, Polygon, Triangle};

/// An `f` record. Corners are kept as written (`v`, `v/vt`, `v//vn` or
/// `v/vt/vn`) so that triangles can reuse them verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face<'a> {
  corners: Vec<&'a str>,
}

impl<'a> Face<'a> {
  /// Parse the words following the `f` keyword.
  pub fn parse<I>(words: I) -> Face<'a>
  where
    I: IntoIterator<Item = &'a str>,
  {
    Face {
      corners: words.into_iter().collect(),
    }
  }

  pub fn corners(&self) -> &[&'a str] {
    &self.corners
  }

  pub fn len(&self) -> usize {
    self.corners.len()
  }

  pub fn is_empty(&self) -> bool {
    self.corners.is_empty()
  }

  /// Look up every corner's position in `vertices`. Points are tagged with
  /// the slot of their corner.
  ///
  /// # Errors
  /// Malformed or out of range vertex references.
  pub fn polygon(&self, vertices: &[Point]) -> ObjResult<Polygon> {
    self
      .corners
      .iter()
      .enumerate()
      .map(|(slot, corner)| {
        let index = vertex_index(corner, vertices.len())?;
        Ok(vertices[index].with_tag(slot))
      })
      .collect::<ObjResult<Vec<Point>>>()
      .map(Polygon::new)
  }

  /// Write one `f` record per triangle, reusing the corner text.
  ///
  /// # Errors
  /// Triangles whose points do not carry a slot of this face, and I/O
  /// failures.
  /// Nothing is written unless every triangle resolves.
  pub fn write_triangles<W: Write>(&self, triangles: &[Triangle], writer: &mut W) -> ObjResult<()> {
    let records = triangles
      .iter()
      .map(|triangle| match triangle.tags().map(|tag| self.corner(tag)) {
        [Some(a), Some(b), Some(c)] => Ok([a, b, c]),
        _ => Err(ObjError::invalid_content("triangle vertex not found in face")),
      })
      .collect::<ObjResult<Vec<_>>>()?;
    for [a, b, c] in records {
      writeln!(writer, "f {a} {b} {c}")?;
    }
    Ok(())
  }

  fn corner(&self, tag: Option<usize>) -> Option<&'a str> {
    tag.and_then(|slot| self.corners.get(slot).copied())
  }

  /// Write the record back out unchanged, modulo whitespace.
  pub fn write<W: Write>(&self, writer: &mut W) -> ObjResult<()> {
    writeln!(writer, "f {}", self.corners.join(" "))?;
    Ok(())
  }
}

/// Resolve the vertex reference of a corner to a 0-based index. Positive
/// references count from 1, negative ones count back from the last vertex
/// read so far.
///
/// # Errors
/// Zero, out of range and unparseable references.
pub fn vertex_index(corner: &str, vertex_count: usize) -> ObjResult<usize> {
  let reference = corner.split('/').next().unwrap_or_default();
  if reference.is_empty() {
    return Err(ObjError::invalid_content(format!(
      "corner '{corner}' has no vertex"
    )));
  }
  let reference: i64 = reference.parse()?;
  let index = match reference {
    0 => None,
    r if r > 0 => usize::try_from(r - 1).ok(),
    r => usize::try_from(r.unsigned_abs())
      .ok()
      .and_then(|back| vertex_count.checked_sub(back)),
  };
  match index {
    Some(index) if index < vertex_count => Ok(index),
    _ => Err(ObjError::invalid_content(format!(
      "vertex {reference} out of range, {vertex_count} vertices defined"
    ))),
  }
}

/// Parse the coordinates of a `v` record. A fourth (weight) coordinate is
/// ignored.
///
/// # Errors
/// Fewer than three coordinates, or unparseable ones.
pub fn parse_vertex<'a, I>(words: I) -> ObjResult<Point>
where
  I: IntoIterator<Item = &'a str>,
{
  let mut words = words.into_iter();
  let mut array = [0.0; 3];
  for coordinate in array.iter_mut() {
    let word = words
      .next()
      .ok_or_else(|| ObjError::invalid_content("vertex needs three coordinates"))?;
    *coordinate = word.parse()?;
  }
  Ok(Point::new(array))
}
