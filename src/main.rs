use clap::{Parser, Subcommand};
use photo_renumber::{config, output, pipeline};
use std::path::PathBuf;

/// Shared overrides for commands that take a target directory.
///
/// Precedence: stock defaults < `renumber.toml` in the directory < flags.
#[derive(clap::Args, Clone)]
struct RunArgs {
    /// Gallery directory to renumber
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Floor for new allocations
    #[arg(long)]
    start: Option<u32>,

    /// Zero-pad assigned numbers to this many digits (0 = no padding)
    #[arg(long)]
    pad: Option<usize>,

    /// Lower bound of the protected range
    #[arg(long)]
    protected_min: Option<u32>,

    /// Upper bound of the protected range
    #[arg(long)]
    protected_max: Option<u32>,

    /// Manifest filename, written inside the target directory
    #[arg(long)]
    manifest: Option<String>,
}

#[derive(Parser)]
#[command(name = "photo-renumber")]
#[command(about = "Renumber gallery images and emit a display manifest")]
#[command(long_about = "\
Renumber gallery images and emit a display manifest

Files named with a bare number keep their names; everything else is moved
into the next free numeric slots, starting at the configured floor. Numbers
1-19 are protected by default for hand-curated ordering.

  before                after
  ├── 1.png             ├── 1.png          (protected)
  ├── 5.jpg             ├── 5.jpg          (protected)
  ├── beach.jpg         ├── 20.jpg         (was beach.jpg)
  └── vacation.png      ├── 21.png         (was vacation.png)
                        └── manifest.js    (presentation order)

Run 'photo-renumber gen-config' for a documented renumber.toml.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Renumber the directory and write its manifest
    Run(RunArgs),
    /// Show what a run would do without touching anything
    Check(RunArgs),
    /// Print a stock renumber.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => {
            let config = load_with_overrides(&args)?;
            let summary = pipeline::run(&args.dir, &config)?;
            output::print_summary(&summary);
        }
        Command::Check(args) => {
            let config = load_with_overrides(&args)?;
            let summary = pipeline::plan(&args.dir, &config)?;
            output::print_plan(&summary);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the directory's config and apply CLI flag overrides on top.
fn load_with_overrides(args: &RunArgs) -> Result<config::RenumberConfig, config::ConfigError> {
    let mut config = config::load_config(&args.dir)?;
    if let Some(start) = args.start {
        config.start_number = start;
    }
    if let Some(pad) = args.pad {
        config.zero_pad_width = pad;
    }
    if let Some(min) = args.protected_min {
        config.protected.min = min;
    }
    if let Some(max) = args.protected_max {
        config.protected.max = max;
    }
    if let Some(manifest) = &args.manifest {
        config.manifest_file = manifest.clone();
    }
    config.validate()?;
    Ok(config)
}
