//! Game state and move handling.
//!
//! This module contains the [`Game`] struct, which owns the board, the tracked player position and
//! the list of collected treasures, and applies one command at a time to them.

#[cfg(test)]
use color_eyre::eyre::{OptionExt as _, Result};
use log::{debug, info, trace};

use crate::{
    board::{Board, Cell, Position},
    types::{Command, Direction, GameState, MoveOutcome},
};

/// Number of treasures needed to win.
pub const TREASURE_GOAL: usize = 3;

/// Label recorded in the collected list for every pickup.
pub const TREASURE_LABEL: &str = "Treasure";

/// Message shown when a treasure is picked up.
pub const PICKUP_MESSAGE: &str = "You collected a treasure!";

/// Message shown once every treasure has been collected.
pub const WIN_MESSAGE: &str = "You collected all treasures. You win!";

/// State of a single run of the game.
///
/// The player position always points at the only [`Cell::Player`] marker on the board, and the
/// collected list only ever grows. Its length is both the score and the win counter.
#[derive(Clone, Debug)]
pub struct Game {
    /// Play area, mutated in place as the player moves.
    board: Board,
    /// Tracked position of the player marker.
    player: Position,
    /// Labels of the treasures picked up so far, in pickup order.
    collected: Vec<String>,
    /// Current lifecycle state.
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Starts a new run on the built-in board, with the player at the top-left corner.
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            player: Position::new(0, 0),
            collected: Vec::new(),
            state: GameState::Playing,
        }
    }

    /// Starts a new run on a custom board, for tests that need another layout.
    ///
    /// # Errors
    ///
    /// This function returns an error if the board has no player marker.
    #[cfg(test)]
    pub(crate) fn with_board(board: Board) -> Result<Self> {
        let player = board
            .player()
            .ok_or_eyre("failed to find player marker on board")?;

        Ok(Self {
            board,
            player,
            collected: Vec::new(),
            state: GameState::Playing,
        })
    }

    /// Returns the current board.
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the tracked player position.
    pub const fn player(&self) -> Position {
        self.player
    }

    /// Returns the treasures collected so far.
    pub fn collected(&self) -> &[String] {
        &self.collected
    }

    /// Returns the number of treasures collected so far.
    pub fn score(&self) -> usize {
        self.collected.len()
    }

    /// Returns the current lifecycle state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the closing summary line.
    pub fn summary(&self) -> String {
        format!("Game Over. Treasures collected: {}", self.score())
    }

    /// Feeds a raw move token to the game.
    ///
    /// Unknown tokens are ignored without touching any state.
    pub fn handle_token(&mut self, token: char) -> MoveOutcome {
        match Command::from_token(token) {
            Some(command) => self.apply(command),
            None => {
                trace!("ignoring token {token:?}");
                MoveOutcome::Ignored
            }
        }
    }

    /// Applies a parsed command.
    ///
    /// Commands received after the game has ended are ignored.
    pub fn apply(&mut self, command: Command) -> MoveOutcome {
        if self.state != GameState::Playing {
            return MoveOutcome::Ignored;
        }

        match command {
            Command::Quit => {
                self.quit();
                MoveOutcome::Quit
            }
            Command::Move(direction) => self.step(direction),
        }
    }

    /// Ends a game in progress. Finished games keep their state.
    pub fn quit(&mut self) {
        if self.state == GameState::Playing {
            self.state = GameState::Quit;
            info!("game quit with {} treasure(s) collected", self.score());
        }
    }

    /// Moves the player one cell, collecting treasure and checking the win condition.
    fn step(&mut self, direction: Direction) -> MoveOutcome {
        let Some(target) = self.target(direction) else {
            trace!("rejecting {direction:?} off the board from {:?}", self.player);
            return MoveOutcome::Blocked;
        };

        let outcome = match self.board.get(target) {
            None | Some(Cell::Obstacle) => {
                trace!("rejecting {direction:?} into {target:?}");
                return MoveOutcome::Blocked;
            }
            Some(Cell::Treasure) => {
                self.collected.push(TREASURE_LABEL.to_owned());
                debug!("collected treasure at {target:?}, total {}", self.score());
                MoveOutcome::Collected
            }
            Some(Cell::Empty | Cell::Player) => {
                debug!("moved {direction:?} to {target:?}");
                MoveOutcome::Moved
            }
        };

        self.board.set(self.player, Cell::Empty);
        self.board.set(target, Cell::Player);
        self.player = target;

        if self.score() >= TREASURE_GOAL {
            self.state = GameState::Won;
            info!("game won with {} treasure(s) collected", self.score());
        }

        outcome
    }

    /// Computes the cell a step would land on, or `None` if it falls off the board.
    fn target(&self, direction: Direction) -> Option<Position> {
        let (d_row, d_col) = direction.delta();
        let row = isize::try_from(self.player.row).ok()?.checked_add(d_row)?;
        let col = isize::try_from(self.player.col).ok()?.checked_add(d_col)?;

        if !Board::is_valid_move(row, col) {
            return None;
        }

        Some(Position::new(
            usize::try_from(row).ok()?,
            usize::try_from(col).ok()?,
        ))
    }
}
