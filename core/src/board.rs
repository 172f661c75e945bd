use std::collections::VecDeque;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Complete state of one game: mine layout, visibility grid, cursor and counters.
///
/// All mutation goes through [`Board::apply`] (or the per-action methods it
/// dispatches to). Every action is either a no-op or a well-defined
/// transition, and once the game is won or lost nothing changes any more.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    mine_layout: MineLayout,
    cells: Array2<Visibility>,
    cursor: Coord2,
    move_count: u32,
    mines_remaining: i32,
    spread_below: u8,
    state: GameState,
    triggered: Option<Coord2>,
}

impl Board {
    /// Empty board: no mines, every cell hidden.
    pub fn new(width: Coord, height: Coord) -> Result<Self> {
        Ok(Self::from_layout(MineLayout::empty((width, height))?))
    }

    /// Fresh game on a prepared layout.
    pub fn from_layout(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        let mines_remaining = i32::from(mine_layout.mine_count());
        Self {
            mine_layout,
            cells: Array2::default(grid_shape(size)),
            cursor: (0, 0),
            move_count: 0,
            mines_remaining,
            spread_below: DEFAULT_PROPAGATION_THRESHOLD,
            state: GameState::Playing,
            triggered: None,
        }
    }

    /// Board sized from `config`, seeded by `generator`.
    pub fn start(config: GameConfig, generator: impl MineGenerator) -> Result<Self> {
        let mut board = Self::new(config.size.0, config.size.1)?;
        board.set_spread_below(config.spread_below);
        board.reset(config.mines, generator)?;
        Ok(board)
    }

    /// Seeds `mines` mines and starts a new game on the same dimensions.
    ///
    /// The cursor stays where it is; everything else goes back to its
    /// initial value.
    pub fn reset(&mut self, mines: CellCount, generator: impl MineGenerator) -> Result<()> {
        let config = GameConfig::new(self.size(), mines)?.with_spread_below(self.spread_below);
        let mine_layout = generator.generate(config)?;
        if mine_layout.size() != self.size() {
            return Err(GameError::InvalidSize);
        }

        log::debug!(
            "New {}x{} game with {} mines",
            config.size.0,
            config.size.1,
            mine_layout.mine_count()
        );

        self.mines_remaining = i32::from(mine_layout.mine_count());
        self.mine_layout = mine_layout;
        self.cells.fill(Visibility::Hidden);
        self.move_count = 0;
        self.state = GameState::Playing;
        self.triggered = None;
        Ok(())
    }

    pub fn set_spread_below(&mut self, spread_below: u8) {
        self.spread_below = spread_below;
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn cursor(&self) -> Coord2 {
        self.cursor
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Mines placed minus flags set; negative when over-flagged.
    pub fn mines_remaining(&self) -> i32 {
        self.mines_remaining
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// The revealed mine, or the wrongly flagged cell, that lost the game.
    pub fn triggered(&self) -> Option<Coord2> {
        self.triggered
    }

    pub fn visibility_at(&self, coords: Coord2) -> Visibility {
        self.cells[coords.to_nd_index()]
    }

    /// Renderer view of a cell. Mines are only exposed once revealed.
    pub fn tile_at(&self, coords: Coord2) -> Tile {
        match self.visibility_at(coords) {
            Visibility::Hidden => Tile::Hidden,
            Visibility::Flagged => Tile::Flagged,
            Visibility::Revealed if self.triggered == Some(coords) => Tile::Exploded,
            Visibility::Revealed if self.mine_layout[coords] => Tile::Mine,
            Visibility::Revealed => Tile::Open(self.count_neighbour_mines(coords)),
        }
    }

    pub fn count_neighbour_mines(&self, coords: Coord2) -> u8 {
        self.mine_layout.adjacent_mine_count(coords)
    }

    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_hidden()).count()
    }

    /// Cells opened by revealing `start`, in row-major order.
    ///
    /// Empty when `start` is out of bounds, a mine or flagged. Otherwise the
    /// set holds `start` plus every non-mine, non-flagged cell reachable
    /// through cells whose neighbour-mine-count is below the spread
    /// threshold. Cells at or above the threshold are included but stop the
    /// spread.
    pub fn reveal_set(&self, start: Coord2) -> Vec<Coord2> {
        if self.mine_layout.validate_coords(start).is_err() || !self.can_open(start) {
            return Vec::new();
        }

        let mut included: Array2<bool> = Array2::default(self.cells.dim());
        let mut to_visit = VecDeque::from([start]);
        included[start.to_nd_index()] = true;

        while let Some(visit_coords) = to_visit.pop_front() {
            if self.count_neighbour_mines(visit_coords) >= self.spread_below {
                continue;
            }

            for pos in self.mine_layout.iter_neighbors(visit_coords) {
                if included[pos.to_nd_index()] || !self.can_open(pos) {
                    continue;
                }
                included[pos.to_nd_index()] = true;
                to_visit.push_back(pos);
            }
        }

        included
            .indexed_iter()
            .filter(|&(_, &is_included)| is_included)
            .map(|((y, x), _)| (x as Coord, y as Coord))
            .collect()
    }

    pub fn apply(&mut self, command: Command) -> ActionOutcome {
        use Command::*;
        match command {
            MoveUp => self.move_cursor(Direction::Up),
            MoveDown => self.move_cursor(Direction::Down),
            MoveLeft => self.move_cursor(Direction::Left),
            MoveRight => self.move_cursor(Direction::Right),
            Reveal => self.reveal(),
            ToggleFlag => self.toggle_flag(),
            Quit => ActionOutcome::NoChange,
        }
    }

    pub fn move_cursor(&mut self, direction: Direction) -> ActionOutcome {
        if self.is_finished() {
            return ActionOutcome::NoChange;
        }

        match apply_delta(self.cursor, direction.delta(), self.size()) {
            Some(cursor) => {
                self.cursor = cursor;
                self.move_count += 1;
                ActionOutcome::Changed
            }
            None => ActionOutcome::NoChange,
        }
    }

    /// Opens the cell under the cursor.
    pub fn reveal(&mut self) -> ActionOutcome {
        let coords = self.cursor;
        if self.is_finished() || !self.visibility_at(coords).is_hidden() {
            return ActionOutcome::NoChange;
        }

        self.move_count += 1;

        if self.mine_layout[coords] {
            log::debug!("Mine hit at {:?}", coords);
            self.cells[coords.to_nd_index()] = Visibility::Revealed;
            self.end_game(false, Some(coords));
            return ActionOutcome::Lost;
        }

        let reveal_set = self.reveal_set(coords);
        log::trace!("Reveal at {:?} covers {} cells", coords, reveal_set.len());
        for pos in reveal_set {
            let cell = &mut self.cells[pos.to_nd_index()];
            if cell.is_hidden() {
                *cell = Visibility::Revealed;
            }
        }

        self.check_completion()
    }

    /// Flags or unflags the cell under the cursor.
    pub fn toggle_flag(&mut self) -> ActionOutcome {
        let coords = self.cursor;
        if self.is_finished() {
            return ActionOutcome::NoChange;
        }

        match self.visibility_at(coords) {
            Visibility::Hidden => {
                self.cells[coords.to_nd_index()] = Visibility::Flagged;
                self.mines_remaining -= 1;
            }
            Visibility::Flagged => {
                self.cells[coords.to_nd_index()] = Visibility::Hidden;
                self.mines_remaining += 1;
            }
            Visibility::Revealed => return ActionOutcome::NoChange,
        }

        self.move_count += 1;
        self.check_completion()
    }

    fn can_open(&self, coords: Coord2) -> bool {
        !self.mine_layout[coords] && !self.visibility_at(coords).is_flagged()
    }

    /// Decides the game once no hidden cells remain.
    ///
    /// A flag left on a safe cell at that point explodes: the first one in
    /// row-major order becomes the triggered cell and the game is lost.
    fn check_completion(&mut self) -> ActionOutcome {
        if self.hidden_count() > 0 {
            return ActionOutcome::Changed;
        }

        let wrong_flag = self
            .cells
            .indexed_iter()
            .find(|&((y, x), cell)| {
                cell.is_flagged() && !self.mine_layout[(x as Coord, y as Coord)]
            })
            .map(|((y, x), _)| (x as Coord, y as Coord));

        match wrong_flag {
            Some(coords) => {
                log::debug!("Incorrect flag at {:?} exploded", coords);
                self.end_game(false, Some(coords));
                ActionOutcome::Lost
            }
            None => {
                self.end_game(true, None);
                ActionOutcome::Won
            }
        }
    }

    /// Terminal transition: every cell except correctly flagged mines is revealed.
    fn end_game(&mut self, won: bool, triggered: Option<Coord2>) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won { GameState::Won } else { GameState::Lost };
        self.triggered = triggered;
        log::debug!("Game over: {:?} after {} moves", self.state, self.move_count);

        for ((y, x), cell) in self.cells.indexed_iter_mut() {
            let correct_flag = cell.is_flagged() && self.mine_layout[(x as Coord, y as Coord)];
            if !correct_flag {
                *cell = Visibility::Revealed;
            }
        }
    }
}
