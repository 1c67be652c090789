use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use pubfig_render::style::FigureStyle;
use tracing_subscriber::EnvFilter;

mod boxplot;
mod dual_axis;

/// Seed of the grouped observations when `--seed` is not given.
pub(crate) const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Which figures to generate
    #[command(subcommand)]
    mode: Option<Mode>,
    #[command(flatten)]
    figure: FigureArg,
    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Subcommand)]
enum Mode {
    /// Generate both figures
    #[default]
    All,
    /// Generate the dual-axis line chart only
    DualAxis,
    /// Generate the annotated box plot only
    Boxplot,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct FigureArg {
    /// Directory the figures are written into
    #[arg(long, default_value = ".", global = true)]
    output_dir: PathBuf,
    /// Seed for the grouped observations
    #[arg(long, default_value_t = DEFAULT_SEED, global = true)]
    seed: u64,
    /// Seed for the time-series noise (fresh noise on every run when omitted)
    #[arg(long, global = true)]
    noise_seed: Option<u64>,
}

impl FigureArg {
    fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(args.verbose);
    let message = execute(args.mode.unwrap_or_default(), &args.figure)?;
    println!("{message}");
    Ok(())
}

/// Installs the global stderr subscriber. Must be called at most once per process.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Log level used when `RUST_LOG` is not set.
fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Writes the figures selected by `mode` and returns the confirmation line.
fn execute(mode: Mode, arg: &FigureArg) -> anyhow::Result<String> {
    create_output_dir(&arg.output_dir)?;
    let style = FigureStyle::default();
    let message = match mode {
        Mode::All => {
            let dual_axis = dual_axis::generate(arg, &style)?;
            let boxplot = boxplot::generate(arg, &style)?;
            format!(
                "Generated figures: {} and {}",
                file_name(&dual_axis),
                file_name(&boxplot)
            )
        }
        Mode::DualAxis => {
            let path = dual_axis::generate(arg, &style)?;
            format!("Generated figure: {}", file_name(&path))
        }
        Mode::Boxplot => {
            let path = boxplot::generate(arg, &style)?;
            format!("Generated figure: {}", file_name(&path))
        }
    };
    Ok(message)
}

fn create_output_dir(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
