use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, error::ErrorKind};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use sweeper_core::{
    Board, CellCount, Coord, DEFAULT_PROPAGATION_THRESHOLD, GameConfig, GameState,
    RandomMineGenerator,
};

mod game;
mod input;
mod logging;
mod render;
mod session;

/// Minesweeper in the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board width in cells
    #[arg(value_parser = clap::value_parser!(u8).range(1..))]
    width: Coord,

    /// Board height in cells
    #[arg(value_parser = clap::value_parser!(u8).range(1..))]
    height: Coord,

    /// Number of mines, at least one cell must stay safe
    mines: CellCount,

    #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
    seed: Option<u64>,

    /// Flood fill spreads through cells with fewer neighbouring mines than this
    #[arg(
        long,
        default_value_t = DEFAULT_PROPAGATION_THRESHOLD,
        value_parser = clap::value_parser!(u8).range(1..=9)
    )]
    spread_below: u8,

    /// Write log records to this file instead of stderr, which only shows warnings and errors
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose.log_level_filter(), cli.log_file.as_deref())?;

    let config = match GameConfig::new((cli.width, cli.height), cli.mines) {
        Ok(config) => config.with_spread_below(cli.spread_below),
        Err(err) => Cli::command().error(ErrorKind::ValueValidation, err).exit(),
    };

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!(
        "Starting {}x{} board with {} mines, seed {}",
        config.size.0,
        config.size.1,
        config.mines,
        seed
    );
    let mut board = Board::start(config, RandomMineGenerator::new(seed))?;

    let state = {
        let mut session = session::TerminalSession::start().context("entering raw mode")?;
        game::play(&mut board, session.out(), input::next_command)?
    };

    match state {
        GameState::Won => log::info!("Won in {} moves", board.move_count()),
        GameState::Lost => log::info!("Lost at {:?}", board.triggered()),
        GameState::Playing => log::info!("Left unfinished"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_board_arguments() {
        let cli = Cli::try_parse_from(["sweeper", "9", "9", "10", "--seed", "42"]).unwrap();
        assert_eq!((cli.width, cli.height, cli.mines), (9, 9, 10));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.spread_below, DEFAULT_PROPAGATION_THRESHOLD);
    }

    #[test]
    fn rejects_bad_arguments() {
        let cases: [&[&str]; 5] = [
            &["sweeper", "9", "9"],
            &["sweeper", "0", "9", "1"],
            &["sweeper", "9", "x", "1"],
            &["sweeper", "300", "9", "1"],
            &["sweeper", "9", "9", "1", "--spread-below", "0"],
        ];
        for args in cases {
            assert!(Cli::try_parse_from(args).is_err(), "{args:?}");
        }
    }
}
