use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use particlegen_core::config::{self, GeneratorConfig, ResampleFilter};
use particlegen_core::{generate, GenerateError, VERSION};

#[derive(Parser, Debug)]
#[command(name = "particlegen", version = VERSION, about = "Turn a logo into particle position/scale/color textures")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
    /// Without a subcommand, generate with the built-in defaults
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sample a logo and write the three particle textures
    Generate(GenerateArgs),
    /// Load a YAML config and print the resolved values
    InspectConfig { path: PathBuf },
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    /// YAML config to start from; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Logo image (PNG, JPEG, BMP, GIF or WebP)
    #[arg(short, long)]
    input: Option<PathBuf>,
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
    /// Side length the logo is resampled to before sampling
    #[arg(long)]
    texture_size: Option<u32>,
    #[arg(long)]
    min_grid_dim: Option<u32>,
    #[arg(long)]
    white_threshold: Option<u8>,
    #[arg(long)]
    alpha_threshold: Option<u8>,
    /// nearest, triangle, catmull_rom, gaussian or lanczos3
    #[arg(long)]
    filter: Option<ResampleFilter>,
    /// Also write a JSON sidecar with particle count and grid size
    #[arg(long)]
    metadata: bool,
}

impl GenerateArgs {
    fn resolve(self) -> Result<GeneratorConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from_path(path).with_context(|| format!("loading config {}", path.display()))?,
            None => GeneratorConfig::default(),
        };
        if let Some(v) = self.input {
            cfg.source_path = v;
        }
        if let Some(v) = self.output_dir {
            cfg.output_dir = v;
        }
        if let Some(v) = self.texture_size {
            cfg.texture_size = v;
        }
        if let Some(v) = self.min_grid_dim {
            cfg.min_grid_dim = v;
        }
        if let Some(v) = self.white_threshold {
            cfg.white_threshold = v;
        }
        if let Some(v) = self.alpha_threshold {
            cfg.alpha_threshold = v;
        }
        if let Some(v) = self.filter {
            cfg.filter = v;
        }
        if self.metadata {
            cfg.write_metadata = true;
        }
        Ok(cfg)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still wins over the flags
    let default_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match cli.cmd.unwrap_or(Command::Generate(GenerateArgs::default())) {
        Command::Generate(args) => run_generate(&args.resolve()?),
        Command::InspectConfig { path } => {
            let cfg = config::load_from_path(&path).with_context(|| format!("loading config {}", path.display()))?;
            println!("Loaded config: {}", path.display());
            println!("  source: {}", cfg.source_path.display());
            println!("  output dir: {}", cfg.output_dir.display());
            println!("  texture size: {}x{} ({:?})", cfg.texture_size, cfg.texture_size, cfg.filter);
            println!("  min grid dim: {}", cfg.min_grid_dim);
            println!("  thresholds: white<{}, alpha>{}", cfg.white_threshold, cfg.alpha_threshold);
            println!("  fill: position={:?}, color={:?}, scale={}", cfg.fill.position, cfg.fill.color, cfg.fill.scale);
            println!("  outputs: {}, {}, {}", cfg.names.color, cfg.names.scale, cfg.names.position);
            if cfg.write_metadata {
                println!("  metadata: {}", cfg.names.metadata);
            }
            Ok(())
        }
    }
}

fn missing_input_message(path: &Path) -> String {
    format!("Error: Logo file not found: {}", path.display())
}

fn run_generate(cfg: &GeneratorConfig) -> Result<()> {
    let report = match generate(cfg) {
        Ok(report) => report,
        Err(GenerateError::MissingInput(path)) => {
            println!("{}", missing_input_message(&path));
            return Ok(());
        }
        Err(e) => return Err(e).context("particle texture generation failed"),
    };

    println!("Generated {} particles from logo", report.num_particles);
    println!("Output texture size: {}x{}", report.tex_dim, report.tex_dim);
    println!();
    println!("Textures generated successfully!");
    println!("Files created:");
    println!("  - {} (color)", report.paths.color.display());
    println!("  - {} (scale)", report.paths.scale.display());
    println!("  - {} (position)", report.paths.position.display());
    if let Some(meta) = &report.paths.metadata {
        println!("  - {} (metadata)", meta.display());
    }
    Ok(())
}
