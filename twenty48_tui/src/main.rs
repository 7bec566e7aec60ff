use std::fs::File;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    crossterm::{
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use twenty48::{tile_value, GameState, Status};

use crate::recording::Recorder;

mod app;
mod keys;
mod recording;
mod ui;

#[derive(Parser)]
struct Args {
    /// Exponent of the tile that wins the game, e.g. 11 for 2048
    #[arg(short, long, default_value_t = 11)]
    goal: u8,

    /// Number of rows and columns of the board
    #[arg(short, long, default_value_t = 4)]
    size: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Write a JSON recording of the game into this directory
    #[arg(short, long)]
    record_to: Option<PathBuf>,

    /// Write logs to this file. Nothing is logged without it, since the
    /// terminal is taken by the game.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        initialize_logging(path, args.log_level)?;
    }

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);

    let mut game = GameState::new(args.goal, args.size, StdRng::seed_from_u64(seed))?;
    let mut recorder = match args.record_to {
        Some(dir_path) => Some(Recorder::new(dir_path, seed, &game)?),
        None => None,
    };

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| app::run(&mut terminal, &mut game, &mut recorder));
    // Restore the terminal before reporting any error
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    let status = result?;

    if let Some(recorder) = recorder {
        let path = recorder.write_game_recording(status)?;
        info!(path = %path.display(), "Wrote game recording");
    }

    println!("{}", game.grid());
    match status {
        Status::Won => println!("you win"),
        Status::Stuck => println!("no more moves"),
        Status::Playing => {}
    }
    println!(
        "goal: {} / {}",
        tile_value(game.highest_exponent()),
        tile_value(game.goal_exponent())
    );
    Ok(())
}

fn initialize_logging(path: &Path, level: LevelFilter) -> anyhow::Result<()> {
    let file = File::create(path)?;

    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .init();
    Ok(())
}
