use clap::Parser;
use log::{debug, info};

use crate::export::exporter::{ExportSettings, MeshExporter};
use crate::io::obj::loader::ObjLoader;
use crate::settings::CliArgs;

mod common;
mod export;
mod io;
mod settings;

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let args = CliArgs::parse();
    log::trace!("Starting with args: {:?}", args);

    let destination = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension(meshport_files::FILE_EXTENSION));

    let mesh = ObjLoader::load_from_path(&args.input)?;
    debug!("Loaded {:?} from {}", mesh, args.input.display());

    MeshExporter::export(
        &mesh,
        &ExportSettings {
            destination,
            direct_write: args.direct_write,
        },
    )?;

    info!("Export finished");
    Ok(())
}
