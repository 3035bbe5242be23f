//! Triangulate every face of a Wavefront OBJ file.

use anyhow::{Context, Result};
use clap::Parser;
use polytri::obj::{ObjOptions, ObjTriangulator};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "polytri")]
#[command(about = "Rewrite an OBJ file so that every face is a triangle", long_about = None)]
struct Cli {
  /// OBJ file to read
  #[arg(value_name = "SOURCE")]
  source: PathBuf,

  /// OBJ file to write
  #[arg(value_name = "TARGET")]
  target: PathBuf,

  /// Overwrite TARGET if it exists
  #[arg(short, long)]
  force: bool,

  /// Leave out faces that cannot be triangulated
  #[arg(long)]
  drop_failed: bool,

  /// Verbose output
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
    .init();

  let triangulator = ObjTriangulator::new(ObjOptions {
    drop_failed_faces: cli.drop_failed,
    overwrite: cli.force,
  });
  let stats = triangulator
    .rewrite_file(&cli.source, &cli.target)
    .with_context(|| {
      format!(
        "Failed to rewrite {} to {}",
        cli.source.display(),
        cli.target.display()
      )
    })?;

  println!(
    "{} -> {}: {}",
    cli.source.display(),
    cli.target.display(),
    stats
  );
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::CommandFactory;

  #[test]
  fn verify_cli() {
    Cli::command().debug_assert();
  }

  #[test]
  fn flags() {
    let cli = Cli::parse_from(["polytri", "in.obj", "out.obj", "--force", "-v"]);
    assert_eq!(cli.source, PathBuf::from("in.obj"));
    assert!(cli.force);
    assert!(cli.verbose);
    assert!(!cli.drop_failed);
  }
}
