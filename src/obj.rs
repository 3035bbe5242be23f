//! Rewrite Wavefront OBJ files so that every face is a triangle.
//!
//! Only `f` records are touched. Every other record (vertices, texture
//! coordinates, normals, groups, materials, comments) is copied through, and
//! triangles reuse the original corner text so `v/vt/vn` references survive.
//!
//! ```rust
//! # use polytri::obj::ObjTriangulator;
//! let source = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
//! let mut target = Vec::new();
//! let stats = ObjTriangulator::default().rewrite(source.as_bytes(), &mut target).unwrap();
//! assert_eq!(stats.triangles, 2);
//! assert_eq!(
//!   String::from_utf8(target).unwrap(),
//!   "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3\nf 1 3 4\n"
//! );
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::data::Point;
use crate::try_triangulate;

mod error;
mod face;

pub use error::{ObjError, ObjResult};
pub use face::{parse_vertex, vertex_index, Face};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjOptions {
  /// Leave out faces that cannot be triangulated instead of copying them
  /// through unchanged.
  pub drop_failed_faces: bool,
  /// Replace an existing target file in [`ObjTriangulator::rewrite_file`].
  pub overwrite: bool,
}

/// What happened to the faces of a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjStats {
  pub faces: usize,
  pub triangulated_faces: usize,
  pub failed_faces: usize,
  pub triangles: usize,
}

impl std::fmt::Display for ObjStats {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    write!(
      f,
      "{} faces, {} triangulated into {} triangles, {} failed",
      self.faces, self.triangulated_faces, self.triangles, self.failed_faces
    )
  }
}

#[derive(Debug, Clone, Default)]
pub struct ObjTriangulator {
  options: ObjOptions,
}

impl ObjTriangulator {
  pub fn new(options: ObjOptions) -> ObjTriangulator {
    ObjTriangulator { options }
  }

  pub fn options(&self) -> &ObjOptions {
    &self.options
  }

  /// Copy `reader` to `writer` line by line, triangulating faces on the way.
  /// Lines are trimmed and blank lines dropped.
  ///
  /// # Errors
  /// I/O failures and malformed `v` or `f` records. Faces that are well
  /// formed but cannot be triangulated are not errors, they are counted in
  /// [`ObjStats::failed_faces`].
  pub fn rewrite<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> ObjResult<ObjStats> {
    let mut vertices: Vec<Point> = Vec::new();
    let mut stats = ObjStats::default();

    for (number, line) in reader.lines().enumerate() {
      let number = number + 1;
      let line = line?;
      let trimmed = line.trim();
      if trimmed.is_empty() {
        continue;
      }

      let mut words = trimmed.split_whitespace();
      match words.next() {
        Some("v") => {
          vertices.push(parse_vertex(words).map_err(|err| err.at_line(number))?);
          writeln!(writer, "{trimmed}")?;
        }
        Some("f") => {
          stats.faces += 1;
          let face = Face::parse(words);
          self
            .rewrite_face(&face, &vertices, &mut writer, &mut stats)
            .map_err(|err| err.at_line(number))?;
        }
        _ => writeln!(writer, "{trimmed}")?,
      }
    }
    writer.flush()?;

    info!(
      faces = stats.faces,
      triangulated = stats.triangulated_faces,
      failed = stats.failed_faces,
      triangles = stats.triangles,
      "rewrote OBJ"
    );
    Ok(stats)
  }

  fn rewrite_face<W: Write>(
    &self,
    face: &Face<'_>,
    vertices: &[Point],
    writer: &mut W,
    stats: &mut ObjStats,
  ) -> ObjResult<()> {
    if face.is_empty() {
      return Err(ObjError::invalid_content("face without corners"));
    }
    let polygon = face.polygon(vertices)?;
    match try_triangulate(polygon) {
      Ok(triangulation) => {
        face.write_triangles(&triangulation.triangles, writer)?;
        stats.triangulated_faces += 1;
        stats.triangles += triangulation.triangles.len();
      }
      Err(err) => {
        stats.failed_faces += 1;
        if self.options.drop_failed_faces {
          warn!(corners = face.len(), %err, "dropping face");
        } else {
          warn!(corners = face.len(), %err, "keeping face as is");
          face.write(writer)?;
        }
      }
    }
    Ok(())
  }

  /// [`rewrite`](ObjTriangulator::rewrite) between two files.
  ///
  /// # Errors
  /// A missing `source`, an existing `target` (unless
  /// [`ObjOptions::overwrite`] is set) and everything `rewrite` reports. On
  /// error `target` is left as it was.
  pub fn rewrite_file(&self, source: impl AsRef<Path>, target: impl AsRef<Path>) -> ObjResult<ObjStats> {
    let source = source.as_ref();
    let target = target.as_ref();
    if !source.exists() {
      return Err(ObjError::FileNotFound {
        path: source.to_path_buf(),
      });
    }
    if target.exists() && !self.options.overwrite {
      return Err(ObjError::TargetExists {
        path: target.to_path_buf(),
      });
    }
    debug!(source = %source.display(), target = %target.display(), "rewriting");

    // Write next to the target and move it into place once the whole file
    // went through. A failed rewrite leaves no target behind.
    let directory = match target.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent,
      _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(directory)?;
    let reader = BufReader::new(File::open(source)?);
    let stats = self.rewrite(reader, BufWriter::new(staged.as_file_mut()))?;
    staged.persist(target).map_err(|err| err.error)?;
    Ok(stats)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::{assert_matches, assert_ok};

  fn run(options: ObjOptions, source: &str) -> (ObjResult<ObjStats>, String) {
    let mut target = Vec::new();
    let stats = ObjTriangulator::new(options).rewrite(source.as_bytes(), &mut target);
    (stats, String::from_utf8_lossy(&target).into_owned())
  }

  const ARROW: &str = "v 0 0 0\nv 2 1 0\nv 0 2 0\nv 1 1 0\n";
  const FIGURE_EIGHT: &str = "v 0 0 0\nv 4 4 0\nv 5 2 0\nv 4 0 0\nv 0 4 0\nv -2 2 0\nf 1 2 3 4 5 6\n";

  #[test]
  fn concave_face() {
    let (stats, out) = run(ObjOptions::default(), &format!("{ARROW}f 1/1 2/2 3/3 4/4\n"));
    let stats = assert_ok!(stats);
    assert_eq!(stats.triangles, 2);
    assert!(out.ends_with("f 4/4 1/1 2/2\nf 4/4 2/2 3/3\n"), "{out}");
  }

  #[test]
  fn other_records_pass_through() {
    let source = "# comment\n\n  mtllib a.mtl  \nv 0 0 0\nvt 0 0\nvn 0 0 1\ng group\nusemtl red\ns off\n";
    let (stats, out) = run(ObjOptions::default(), source);
    assert_eq!(assert_ok!(stats), ObjStats::default());
    assert_eq!(
      out,
      "# comment\nmtllib a.mtl\nv 0 0 0\nvt 0 0\nvn 0 0 1\ng group\nusemtl red\ns off\n"
    );
  }

  #[test]
  fn negative_references() {
    let (stats, out) = run(ObjOptions::default(), &format!("{ARROW}f -4 -3 -2 -1\n"));
    assert_eq!(assert_ok!(stats).triangles, 2);
    assert!(out.ends_with("f -1 -4 -3\nf -1 -3 -2\n"), "{out}");
  }

  #[test]
  fn failed_faces_are_kept() {
    let (stats, out) = run(ObjOptions::default(), FIGURE_EIGHT);
    let stats = assert_ok!(stats);
    assert_eq!(stats.failed_faces, 1);
    assert_eq!(stats.triangles, 0);
    assert!(out.ends_with("f 1 2 3 4 5 6\n"));
  }

  #[test]
  fn failed_faces_can_be_dropped() {
    let options = ObjOptions {
      drop_failed_faces: true,
      ..ObjOptions::default()
    };
    let (stats, out) = run(options, &format!("{FIGURE_EIGHT}f 1 2\n"));
    let stats = assert_ok!(stats);
    assert_eq!(stats.faces, 2);
    assert_eq!(stats.failed_faces, 2);
    assert!(!out.contains('f'));
  }

  #[test]
  fn bad_records_report_their_line() {
    let (stats, _) = run(ObjOptions::default(), "v 0 0 0\n\nv 1 x 0\n");
    assert_matches!(stats, Err(ObjError::InvalidContent { line: 3, .. }));
    let (stats, _) = run(ObjOptions::default(), "v 0 0 0\nf 1 2 3\n");
    assert_matches!(stats, Err(ObjError::InvalidContent { line: 2, .. }));
    let (stats, _) = run(ObjOptions::default(), "f\n");
    assert_matches!(stats, Err(ObjError::InvalidContent { line: 1, .. }));
  }

  #[test]
  fn stats_display() {
    let stats = ObjStats {
      faces: 3,
      triangulated_faces: 2,
      failed_faces: 1,
      triangles: 5,
    };
    assert_eq!(stats.to_string(), "3 faces, 2 triangulated into 5 triangles, 1 failed");
  }
}
