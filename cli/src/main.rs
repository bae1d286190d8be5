use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use sapper_core::{BoardConfig, BoardGenerator, Coord, Grid, RandomBoardGenerator, annotate};

#[derive(Parser)]
#[command(name = "sapper", version, about = "Generate and annotate minesweeper boards")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a board with randomly placed mines and print it in dot form.
    Generate {
        /// Board width in cells.
        width: Coord,
        /// Board height in cells.
        height: Coord,
        /// Seed for reproducible boards; derived from the clock when omitted.
        #[arg(long)]
        seed: Option<u64>,
        /// Print the board as JSON instead of dot form.
        #[arg(long)]
        json: bool,
    },
    /// Read a dot-form board, replace empty cells with neighbor mine counts.
    Annotate {
        /// Board file; reads stdin when omitted.
        file: Option<PathBuf>,
        /// Space-separated display output instead of the dot form.
        #[arg(long, conflicts_with = "json")]
        pretty: bool,
        /// Print the board as JSON instead of dot form.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .init();

    match cli.command {
        Command::Generate {
            width,
            height,
            seed,
            json,
        } => generate(width, height, seed, json),
        Command::Annotate { file, pretty, json } => run_annotate(file.as_deref(), pretty, json),
    }
}

fn generate(width: Coord, height: Coord, seed: Option<u64>, json: bool) -> anyhow::Result<()> {
    let seed = seed.unwrap_or_else(clock_seed);
    log::debug!("generating {width}x{height} board with seed {seed}");

    let config = BoardConfig::with_standard_density((height, width));
    let grid = RandomBoardGenerator::new(seed).generate(config);

    emit(&grid, false, json)
}

fn run_annotate(file: Option<&std::path::Path>, pretty: bool, json: bool) -> anyhow::Result<()> {
    let input = match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            buffer
        }
    };

    let mut grid: Grid = input.parse().context("parsing board")?;
    annotate(&mut grid);

    emit(&grid, pretty, json)
}

fn emit(grid: &Grid, pretty: bool, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(grid).context("encoding board")?);
    } else if pretty {
        print!("{grid:#}");
    } else {
        print!("{grid}");
    }
    Ok(())
}

/// Entropy for unseeded runs; board generation itself is always seeded.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
