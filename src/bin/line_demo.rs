//! line-demo - draw a random Bresenham line with marked endpoints.
//!
//! Picks two endpoints inside the padded surface (or takes them from the
//! command line), marks the start red and the end green, draws the line in
//! white on black and writes the frame as PNG and/or terminal text.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use bresenham_line::config::DemoConfig;
use bresenham_line::geometry::{LineSegment, Point};
use bresenham_line::output::{PngEncoder, TerminalEncoder, TerminalMode};
use bresenham_line::scene::Scene;

/// Draw a random Bresenham line with marked endpoints
#[derive(Parser, Debug)]
#[command(name = "line-demo")]
#[command(version)]
#[command(about = "Draw a Bresenham line with marked endpoints", long_about = None)]
struct Cli {
    /// Config file path (default: <config dir>/bresenham-line/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible random endpoints
    #[arg(long)]
    seed: Option<u64>,

    /// Start point as X,Y (random when omitted)
    #[arg(long, value_parser = parse_point, requires = "to", allow_hyphen_values = true)]
    from: Option<Point>,

    /// End point as X,Y (random when omitted)
    #[arg(long, value_parser = parse_point, requires = "from", allow_hyphen_values = true)]
    to: Option<Point>,

    /// Surface width, overrides the config file
    #[arg(long)]
    width: Option<u32>,

    /// Surface height, overrides the config file
    #[arg(long)]
    height: Option<u32>,

    /// Write the frame to a PNG file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the frame to the terminal (default when no --output is given)
    #[arg(short, long)]
    terminal: bool,

    /// Use 24-bit ANSI colors for terminal output
    #[arg(long)]
    ansi: bool,

    /// Terminal output width in characters
    #[arg(long, default_value = "80")]
    columns: u32,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_point(s: &str) -> std::result::Result<Point, String> {
    s.parse::<Point>().map_err(|e| e.to_string())
}

fn load_config(cli: &Cli) -> Result<DemoConfig> {
    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => DemoConfig::default_path().map(DemoConfig::load_or_default).unwrap_or_default(),
    };

    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    config.validate()?;

    Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    let scene = match (cli.from, cli.to) {
        (Some(from), Some(to)) => Scene::new(LineSegment::new(from, to)),
        _ => match cli.seed {
            Some(seed) => Scene::random(&config, &mut StdRng::seed_from_u64(seed)),
            None => Scene::random(&config, &mut rand::thread_rng()),
        },
    };

    println!("{scene}");

    let fb = scene.render(&config).context("failed to create framebuffer")?;

    if let Some(path) = &cli.output {
        PngEncoder::write_to_file(&fb, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    if cli.terminal || cli.output.is_none() {
        let mode = if cli.ansi { TerminalMode::AnsiTrueColor } else { TerminalMode::Ascii };
        TerminalEncoder::new().mode(mode).width(cli.columns).print(&fb);
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
