//! Errors raised while rewriting OBJ files.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for OBJ operations.
pub type ObjResult<T> = Result<T, ObjError>;

#[derive(Debug, Error)]
pub enum ObjError {
  #[error("file not found: {path}")]
  FileNotFound { path: PathBuf },

  /// The target is never overwritten unless asked for.
  #[error("file already exists: {path}")]
  TargetExists { path: PathBuf },

  /// Malformed record. `line` is 1-based, or 0 when not known yet.
  #[error("line {line}: {message}")]
  InvalidContent { line: usize, message: String },

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("float parsing error: {0}")]
  ParseFloat(#[from] std::num::ParseFloatError),

  #[error("integer parsing error: {0}")]
  ParseInt(#[from] std::num::ParseIntError),
}

impl ObjError {
  #[must_use]
  pub fn invalid_content(message: impl Into<String>) -> Self {
    Self::InvalidContent {
      line: 0,
      message: message.into(),
    }
  }

  /// Attach a line number. Parse failures become
  /// [`InvalidContent`](ObjError::InvalidContent) so that every record error
  /// points at its line. I/O errors are left alone.
  #[must_use]
  pub fn at_line(self, line: usize) -> Self {
    match self {
      Self::InvalidContent { message, .. } => Self::InvalidContent { line, message },
      Self::ParseFloat(err) => Self::InvalidContent {
        line,
        message: format!("invalid number: {err}"),
      },
      Self::ParseInt(err) => Self::InvalidContent {
        line,
        message: format!("invalid index: {err}"),
      },
      other => other,
    }
  }
}
