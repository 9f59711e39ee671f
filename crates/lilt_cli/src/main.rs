//! Lilt CLI - simulate spring trajectories
//!
//! Runs a spring through a fixed frame cadence and prints every frame, which
//! is handy for tuning strength and dampness before wiring a spring into a UI.

mod config;
mod simulate;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use lilt_spring::{SpringConfig, SpringSection};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::{LiltConfig, SimulationConfig};

#[derive(Parser, Debug)]
#[command(name = "lilt")]
#[command(about = "Simulate damped springs for UI animation")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Animate a spring from one value to another and print each frame
    Simulate(SimulateArgs),

    /// List the built-in spring presets
    Presets,
}

#[derive(clap::Args, Debug)]
struct SimulateArgs {
    /// Config file, or a directory containing lilt.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Named preset (see `lilt presets`)
    #[arg(short, long)]
    preset: Option<String>,

    /// Stiffness coefficient
    #[arg(long)]
    strength: Option<f32>,

    /// Damping ratio
    #[arg(long)]
    dampness: Option<f32>,

    /// Starting value
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    from: f32,

    /// Target value
    #[arg(long, default_value = "100", allow_negative_numbers = true)]
    to: f32,

    /// Elapsed milliseconds per frame
    #[arg(long)]
    frame_ms: Option<f32>,

    /// Stop after this many simulated milliseconds
    #[arg(long)]
    max_ms: Option<f32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Table,
    Json,
}

impl SimulateArgs {
    /// Merge the config file (if any) with command-line overrides
    fn resolve(&self) -> Result<(SpringConfig, SimulationConfig)> {
        let file = match &self.config {
            Some(path) => LiltConfig::load(path)?,
            None => LiltConfig::default(),
        };

        let spring = SpringSection {
            preset: self.preset.clone().or(file.spring.preset),
            strength: self.strength.or(file.spring.strength),
            dampness: self.dampness.or(file.spring.dampness),
        }
        .resolve()?;

        let cadence = SimulationConfig {
            frame_ms: self.frame_ms.unwrap_or(file.simulation.frame_ms),
            max_ms: self.max_ms.unwrap_or(file.simulation.max_ms),
        };

        Ok((spring, cadence))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Simulate(args) => {
            let (spring, cadence) = args.resolve()?;
            tracing::info!(
                strength = spring.strength(),
                dampness = spring.dampness(),
                from = args.from,
                to = args.to,
                "simulating spring"
            );

            let simulation = simulate::run(spring, args.from, args.to, cadence)?;
            match args.format {
                Format::Table => simulation.write_table(&mut out)?,
                Format::Json => simulation.write_json(&mut out)?,
            }
        }
        Commands::Presets => simulate::write_presets(&mut out)?,
    }

    Ok(())
}
