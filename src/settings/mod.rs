use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "Meshport")]
#[command(version)]
#[command(about = "Exports triangulated Wavefront OBJ meshes as engine .meshresource files")]
pub struct CliArgs {
    /// Source OBJ file. Must carry vertex normals.
    pub input: PathBuf,

    /// Destination path. Defaults to the input path with its extension
    /// swapped for .meshresource.
    #[arg(long, env = "MESHPORT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Write the destination file in place instead of staging through a
    /// temporary sibling that is renamed over it on success.
    #[arg(long)]
    pub direct_write: bool,
}
