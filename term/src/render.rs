//! Inline board renderer.
//!
//! Frames are drawn in place under the help line: each redraw moves the
//! cursor back up over the previous frame and overwrites it, so the last
//! frame stays on screen after the program exits.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveToPreviousLine,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use sweeper_core::{Board, GameState, Tile};

const C_CURSOR: Color = Color::AnsiValue(154);
const C_MINE: Color = Color::AnsiValue(196);
const C_HIDDEN: Color = Color::AnsiValue(250);
const C_FLAGGED: Color = Color::AnsiValue(226);
const C_TEXT: Color = Color::AnsiValue(7);

const C_MINES_LOW: Color = Color::AnsiValue(43);
const C_MINES_MID: Color = Color::AnsiValue(214);
const C_MINES_HIGH: Color = Color::AnsiValue(196);

const CH_CUR_A: char = '(';
const CH_CUR_B: char = ')';
const CH_MINE: char = '*';
const CH_HIDDEN: char = '.';
const CH_FLAGGED: char = 'x';

pub const HELP: &str = "WASD or arrows to move, F to place a flag, Space to clear, Q to quit";

/// Character and colour used to draw one tile.
pub fn glyph(tile: Tile) -> (char, Color) {
    match tile {
        Tile::Hidden => (CH_HIDDEN, C_HIDDEN),
        Tile::Flagged => (CH_FLAGGED, C_FLAGGED),
        Tile::Mine => (CH_MINE, C_MINE),
        Tile::Exploded => (CH_MINE, C_FLAGGED),
        Tile::Open(0) => (' ', C_TEXT),
        Tile::Open(count) => (char::from(b'0' + count), count_colour(count)),
    }
}

fn count_colour(count: u8) -> Color {
    match count {
        5.. => C_MINES_HIGH,
        3.. => C_MINES_MID,
        _ => C_MINES_LOW,
    }
}

pub fn status_line(board: &Board) -> String {
    let counters = format!(
        "Mines: {}  Moves: {}",
        board.mines_remaining(),
        board.move_count()
    );
    match board.state() {
        GameState::Playing => counters,
        GameState::Won => format!("{counters}  YOU WON!"),
        GameState::Lost => format!("{counters}  KABOOM!"),
    }
}

#[derive(Debug, Default)]
pub struct Renderer {
    lines_drawn: u16,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_help(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, SetForegroundColor(C_CURSOR), Print(HELP), Print("\r\n\r\n"))?;
        out.flush()
    }

    /// Draws `board`, replacing the frame drawn by the previous call.
    pub fn draw(&mut self, out: &mut impl Write, board: &Board) -> io::Result<()> {
        if self.lines_drawn > 0 {
            queue!(out, MoveToPreviousLine(self.lines_drawn))?;
        }

        let (width, height) = board.size();
        let cursor = board.cursor();
        for y in 0..height {
            for x in 0..width {
                let is_cursor = cursor == (x, y);
                if is_cursor {
                    queue!(out, SetForegroundColor(C_CURSOR), Print(CH_CUR_A))?;
                } else {
                    queue!(out, Print(' '))?;
                }

                let (ch, colour) = glyph(board.tile_at((x, y)));
                queue!(out, SetForegroundColor(colour), Print(ch))?;

                if is_cursor {
                    queue!(out, SetForegroundColor(C_CURSOR), Print(CH_CUR_B))?;
                } else {
                    queue!(out, Print(' '))?;
                }
            }
            queue!(out, Print("\r\n"))?;
        }

        let status_colour = match board.state() {
            GameState::Playing => C_TEXT,
            GameState::Won => C_FLAGGED,
            GameState::Lost => C_MINE,
        };
        queue!(
            out,
            SetForegroundColor(status_colour),
            Print(status_line(board)),
            Clear(ClearType::UntilNewLine),
            ResetColor,
            Print("\r\n")
        )?;
        out.flush()?;

        self.lines_drawn = u16::from(height) + 1;
        Ok(())
    }
}
