use std::io::{self, Write};

use anyhow::Context;
use sweeper_core::{Board, Command, GameState};

use crate::render::Renderer;

/// Runs the read, apply, draw loop until the game ends or the player quits.
///
/// `next_command` blocks for input; `Ok(None)` means an event that maps to
/// no command. An input error ends the loop and is returned to the caller.
pub fn play(
    board: &mut Board,
    out: &mut impl Write,
    mut next_command: impl FnMut() -> io::Result<Option<Command>>,
) -> anyhow::Result<GameState> {
    let mut renderer = Renderer::new();
    renderer.draw_help(out).context("drawing help")?;
    renderer.draw(out, board).context("drawing board")?;

    loop {
        let Some(command) = next_command().context("reading input")? else {
            continue;
        };

        if command == Command::Quit {
            log::info!("Quit after {} moves", board.move_count());
            break;
        }

        let outcome = board.apply(command);
        log::debug!("{:?} -> {:?}", command, outcome);

        if outcome.has_update() {
            renderer.draw(out, board).context("drawing board")?;
        }
        if outcome.is_terminal() {
            log::info!("Game finished: {:?}", board.state());
            break;
        }
    }

    Ok(board.state())
}
