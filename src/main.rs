use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tessera_mesh::{CullingMesher, RegistryReader, SimpleMesher};
use tessera_voxels::VoxelRegistry;

mod report;
mod scene;

use report::MeshReport;
use scene::{SceneConfig, UvOriginArg};

#[derive(Parser, Debug)]
#[command(name = "tessera", version, about = "Resolve voxel definitions and mesh voxel scenes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve voxel definitions and list the resulting types
    Resolve {
        /// Directory with one TOML file per voxel type, or a single TOML file
        #[arg(long, default_value = "assets/voxels")]
        voxels: PathBuf,
    },
    /// Mesh a scene file and report quad counts
    Mesh {
        #[arg(long, default_value = "assets/voxels")]
        voxels: PathBuf,
        #[arg(long)]
        scene: PathBuf,
        /// Sweep a padded copy of the volume
        #[arg(long)]
        border: bool,
        /// Share lattice vertices between quads
        #[arg(long)]
        shared: bool,
        /// Emit every face of every solid cell without culling
        #[arg(long)]
        simple: bool,
        #[arg(long, value_enum)]
        uv_origin: Option<UvOriginArg>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let res = match cli.command {
        Command::Resolve { voxels } => run_resolve(&voxels),
        Command::Mesh {
            voxels,
            scene,
            border,
            shared,
            simple,
            uv_origin,
        } => run_mesh(&voxels, &scene, border, shared, simple, uv_origin),
    };
    if let Err(e) = res {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run_resolve(voxels: &Path) -> Result<(), Box<dyn Error>> {
    let reg = VoxelRegistry::load_from_path(voxels)?;
    for ty in reg.iter_sorted() {
        println!(
            "{:<16} {:#018x} {} component(s)",
            ty.name,
            ty.id,
            ty.components.len()
        );
    }
    Ok(())
}

fn run_mesh(
    voxels: &Path,
    scene_path: &Path,
    border: bool,
    shared: bool,
    simple: bool,
    uv_origin: Option<UvOriginArg>,
) -> Result<(), Box<dyn Error>> {
    let reg = VoxelRegistry::load_from_path(voxels)?;
    let scene = SceneConfig::load(scene_path)?.into_scene(&reg)?;
    let settings = scene.mesher.with_flags(border, shared, uv_origin);
    log::info!(
        "meshing {} ({}x{}x{}) with {:?}",
        scene_path.display(),
        scene.dims.width,
        scene.dims.height,
        scene.dims.depth,
        settings
    );

    let reader = RegistryReader::new(&reg);
    let out = if simple {
        if settings.add_border {
            log::warn!("--simple ignores add_border");
        }
        SimpleMesher::new(scene.dims)
            .with_mode(settings.output_mode())
            .with_uv_origin(settings.uv_origin.into())
            .eval(&scene.cells, &reader)
    } else {
        CullingMesher::new(scene.dims)
            .with_border(settings.add_border)
            .with_mode(settings.output_mode())
            .with_uv_origin(settings.uv_origin.into())
            .eval(&scene.cells, &reader)
    };
    print!("{}", MeshReport::from_result(&out, &reg));
    Ok(())
}
