use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use landing_area::config::{ConfigSearch, DEFAULT_PLATFORM_SIZE, FileConfig};
use landing_area::logging::init_logger;
use landing_area::{LandingArea, LandingResult, Position};

/// Check a sequence of rocket landings against a square platform
///
/// Examples:
///   # Two rockets on a 10x10 platform, the second one too close
///   landing-area -s 10 10,10 11,11
///
///   # Read one X,Y pair per line from stdin, JSON output
///   cat rockets.txt | landing-area -s 50 --json
#[derive(Parser, Debug)]
#[command(name = "landing-area")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches landing-area.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Platform side length (1-95); defaults to the config file value, then 10
    #[arg(short = 's', long)]
    platform_size: Option<u8>,

    /// Print one JSON object per landing instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Landing coordinates as X,Y; read from stdin when omitted
    positions: Vec<Position>,
}

#[derive(Debug, Serialize)]
struct Report {
    #[serde(flatten)]
    position: Position,
    result: LandingResult,
}

fn build_area(platform_size: u8) -> Result<LandingArea> {
    LandingArea::new(platform_size).context("Invalid platform size")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let search = match args.config {
        Some(ref path) => ConfigSearch {
            config: Some(FileConfig::from_path(path)?),
            ..Default::default()
        },
        None => FileConfig::load(),
    };
    let file_config = search.config.as_ref();

    let verbose = args.verbose || file_config.is_some_and(|c| c.verbose);
    let json = args.json || file_config.is_some_and(|c| c.json);
    let platform_size = args
        .platform_size
        .or_else(|| file_config.and_then(|c| c.platform_size))
        .unwrap_or(DEFAULT_PLATFORM_SIZE);

    init_logger(verbose);
    search.log_skipped();

    let mut area = build_area(platform_size)?;

    let positions = if args.positions.is_empty() {
        read_positions(io::stdin().lock())?
    } else {
        args.positions
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for position in positions {
        let result = area.check(position);
        if json {
            let report = Report { position, result };
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else {
            writeln!(out, "{}: {}", position, result)?;
        }
    }

    Ok(())
}

/// Parse one `X,Y` per line, skipping blanks and `#` comments
fn read_positions(reader: impl BufRead) -> Result<Vec<Position>> {
    let mut positions = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let position = trimmed
            .parse::<Position>()
            .with_context(|| format!("Line {}", index + 1))?;
        positions.push(position);
    }
    Ok(positions)
}
