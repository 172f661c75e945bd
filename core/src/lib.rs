//! Game-state engine for a single-player terminal minesweeper.
//!
//! The [`Board`] owns the mine layout, per-cell visibility, cursor and
//! counters. Front-ends feed it [`Command`]s and draw it through the
//! read-only accessors.

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use command::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod board;
mod command;
mod error;
mod generator;
mod tile;
mod types;

/// Flood fill propagates through cells whose neighbour-mine-count is strictly
/// below this value: cells touching at most one mine keep spreading. Use `1`
/// to spread through zero cells only.
pub const DEFAULT_PROPAGATION_THRESHOLD: u8 = 2;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
    pub spread_below: u8,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self {
            size,
            mines,
            spread_below: DEFAULT_PROPAGATION_THRESHOLD,
        }
    }

    /// Validated configuration: both dimensions non-zero and at least one
    /// cell left free of mines.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(validate_size(size)?, mines);
        config.check_mine_count()?;
        Ok(config)
    }

    pub const fn with_spread_below(mut self, spread_below: u8) -> Self {
        self.spread_below = spread_below;
        self
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn check_mine_count(&self) -> Result<()> {
        let cells = self.total_cells();
        if self.mines >= cells {
            Err(GameError::TooManyMines {
                mines: self.mines,
                cells,
            })
        } else {
            Ok(())
        }
    }
}

pub fn validate_size(size: Coord2) -> Result<Coord2> {
    if size.0 == 0 || size.1 == 0 {
        Err(GameError::InvalidSize)
    } else {
        Ok(size)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    /// A layout of the given size without any mines.
    pub fn empty(size: Coord2) -> Result<Self> {
        let size = validate_size(size)?;
        Ok(Self {
            mine_mask: Array2::default(grid_shape(size)),
            mine_count: 0,
        })
    }

    pub(crate) fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Layout with mines at exactly the given coordinates. Duplicates count once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let size = validate_size(size)?;
        let mut mine_mask: Array2<bool> = Array2::default(grid_shape(size));

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        (cols as Coord, rows as Coord)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// Result of applying one command to a [`Board`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    NoChange,
    Changed,
    Won,
    Lost,
}

impl ActionOutcome {
    pub const fn has_update(self) -> bool {
        use ActionOutcome::*;
        match self {
            NoChange => false,
            Changed => true,
            Won => true,
            Lost => true,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}
