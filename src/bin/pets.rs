use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use pets::{
    AssetsConfig, AssetsProvider, Capabilities, ImageAnimator, PetsAssetsProvider, Rect,
    RectExt as _, ScanDepth, Size, SpeciesAssets, World,
};

#[derive(Parser, Debug)]
#[command(name = "pets", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the asset files of a species.
    Assets(SpeciesArgs),
    /// List every species found under the asset roots.
    Species(RootArgs),
    /// Show the animations of a species with their frame counts.
    Animations(AnimationsArgs),
    /// Drop a pet into an empty world and print where it goes.
    Simulate(SimulateArgs),
}

#[derive(Args, Debug)]
struct RootArgs {
    /// Asset root directory (repeatable). Defaults to `./PetsAssets`.
    #[arg(long = "root")]
    roots: Vec<PathBuf>,

    /// JSON config listing the asset roots.
    #[arg(long, conflicts_with = "roots")]
    config: Option<PathBuf>,

    /// Also search subdirectories of each `--root`.
    #[arg(long, default_value_t = false)]
    recursive: bool,
}

#[derive(Args, Debug)]
struct SpeciesArgs {
    #[command(flatten)]
    roots: RootArgs,

    /// Species identifier, e.g. `mushroom`.
    #[arg(long)]
    species: String,
}

#[derive(Args, Debug)]
struct AnimationsArgs {
    #[command(flatten)]
    target: SpeciesArgs,

    /// Decode every frame and print its dimensions.
    #[arg(long, default_value_t = false)]
    decode: bool,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    target: SpeciesArgs,

    /// Number of world updates.
    #[arg(long, default_value_t = 40)]
    steps: u32,

    /// Seconds per update.
    #[arg(long, default_value_t = 0.125)]
    dt: f64,

    /// World width in pixels.
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// World height in pixels.
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Walking speed in pixels per second.
    #[arg(long, default_value_t = 30.0)]
    speed: f64,

    /// Crawl along the screen edges instead of walking on the floor.
    #[arg(long, default_value_t = false)]
    crawl: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Assets(args) => cmd_assets(args),
        Command::Species(args) => cmd_species(args),
        Command::Animations(args) => cmd_animations(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn make_provider(args: &RootArgs) -> anyhow::Result<Box<dyn SpeciesAssets>> {
    if let Some(path) = &args.config {
        let cfg = AssetsConfig::from_path(path)?;
        return Ok(Box::new(cfg.to_provider()?));
    }
    if args.roots.is_empty() {
        return Ok(Box::new(PetsAssetsProvider::from_base_dir(".")?));
    }
    let depth = if args.recursive {
        ScanDepth::Recursive
    } else {
        ScanDepth::Direct
    };
    Ok(Box::new(AssetsProvider::with_depth(
        args.roots.iter().cloned(),
        depth,
    )?))
}

fn cmd_assets(args: SpeciesArgs) -> anyhow::Result<()> {
    let provider = make_provider(&args.roots)?;
    let found = provider.all_assets_for_species(&args.species)?;
    if found.is_empty() {
        eprintln!("no assets for species '{}'", args.species);
    }
    for path in found {
        println!("{}", path.display());
    }
    Ok(())
}

fn cmd_species(args: RootArgs) -> anyhow::Result<()> {
    let provider = make_provider(&args)?;
    for species in provider.all_species()? {
        println!("{species}");
    }
    Ok(())
}

fn cmd_animations(args: AnimationsArgs) -> anyhow::Result<()> {
    let provider = make_provider(&args.target.roots)?;
    let anims = provider.animations_for_species(&args.target.species)?;
    if anims.is_empty() {
        eprintln!("no assets for species '{}'", args.target.species);
        return Ok(());
    }

    for tag in anims.tags() {
        let frames = anims.frames(tag).unwrap_or_default();
        println!("{tag}: {} frames", frames.len());
        if args.decode {
            for path in frames {
                let sprite = pets::load_sprite(path)?;
                println!("  {} {}x{}", file_name(path), sprite.width, sprite.height);
            }
        }
    }
    println!("total: {} frames", anims.total_frames());
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    if !(args.dt.is_finite() && args.dt > 0.0) {
        anyhow::bail!("--dt must be a positive number of seconds");
    }

    let provider = make_provider(&args.target.roots)?;
    let species = &args.target.species;
    let anims = provider.animations_for_species(species)?;

    let size = match anims.first_frame_of(["front", "idle", "walk"]) {
        Some(path) => {
            let sprite = pets::load_sprite(path)
                .with_context(|| format!("load first frame of '{species}'"))?;
            Size::new(f64::from(sprite.width), f64::from(sprite.height))
        }
        None => {
            tracing::warn!(%species, "no frames found, simulating a placeholder");
            Size::new(64.0, 64.0)
        }
    };

    let bounds = Rect::from_size(Size::new(args.width, args.height));
    let mut world = World::new(bounds);
    let capabilities = if args.crawl {
        Capabilities::crawler()
    } else {
        Capabilities::walker()
    };
    let start = Rect::from_size(size).offset(bounds.center().x - size.width / 2.0, 0.0);
    let pet = world.spawn_pet(species.as_str(), start, args.speed, capabilities);

    let walk: Vec<PathBuf> = anims.frames("walk").unwrap_or_default().to_vec();
    let mut animator = ImageAnimator::new(format!("{species}_walk"), walk);

    for step in 1..=args.steps {
        world.update(args.dt);
        let shown = animator
            .next_frame(args.dt)
            .map(|p| file_name(p))
            .unwrap_or_default();
        let e = world
            .entity(pet)
            .context("pet disappeared from the world")?;
        println!(
            "{step:>4} x={:>8.2} y={:>8.2} state={:?} {shown}",
            e.frame.min_x(),
            e.frame.min_y(),
            e.state
        );
    }
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
