//! Type definitions and enums shared by the game state and its frontends.

use clap::{Parser, ValueEnum};

/// Command line arguments of the game binary.
///
/// Board size, layout and treasure count are fixed; the arguments only pick how the game is
/// presented and how chatty the log output on standard error is.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Interface used to play the game.
    #[arg(short, long, value_enum, default_value_t = Frontend::Console)]
    pub frontend: Frontend,
    /// Raise log verbosity on standard error (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available user interfaces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Frontend {
    /// Line-oriented play over standard input and output.
    #[default]
    Console,
    /// Full-screen terminal interface with single keypress input.
    Tui,
}

/// Direction of a single player step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// One row towards the top of the board.
    Up,
    /// One row towards the bottom of the board.
    Down,
    /// One column towards the left edge.
    Left,
    /// One column towards the right edge.
    Right,
}

impl Direction {
    /// Returns the `(row, column)` offset applied by a step in this direction.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Action selected by a single move token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Step the player one cell in a direction.
    Move(Direction),
    /// End the game right away.
    Quit,
}

impl Command {
    /// Parses a move token, ignoring case.
    ///
    /// `W`, `A`, `S` and `D` map to up, left, down and right; `Q` quits. Any other character yields
    /// `None` and is meant to be ignored by the caller.
    pub const fn from_token(token: char) -> Option<Self> {
        match token.to_ascii_uppercase() {
            'W' => Some(Self::Move(Direction::Up)),
            'A' => Some(Self::Move(Direction::Left)),
            'S' => Some(Self::Move(Direction::Down)),
            'D' => Some(Self::Move(Direction::Right)),
            'Q' => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Lifecycle of a single run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameState {
    /// Moves are being accepted.
    #[default]
    Playing,
    /// Every treasure was collected.
    Won,
    /// The player asked to stop, or input ran out.
    Quit,
}

/// Result of feeding one token to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The token was not a command, or the game is already over.
    Ignored,
    /// The step would leave the board or walk into an obstacle.
    Blocked,
    /// The player stepped onto an empty cell.
    Moved,
    /// The player stepped onto a treasure and picked it up.
    Collected,
    /// The game ended on the player's request.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_from_token_lowercase() {
        assert_eq!(Command::from_token('w'), Some(Command::Move(Direction::Up)));
        assert_eq!(Command::from_token('a'), Some(Command::Move(Direction::Left)));
        assert_eq!(Command::from_token('s'), Some(Command::Move(Direction::Down)));
        assert_eq!(
            Command::from_token('d'),
            Some(Command::Move(Direction::Right))
        );
        assert_eq!(Command::from_token('q'), Some(Command::Quit));
    }

    #[test]
    fn test_command_from_token_uppercase() {
        assert_eq!(Command::from_token('W'), Some(Command::Move(Direction::Up)));
        assert_eq!(Command::from_token('A'), Some(Command::Move(Direction::Left)));
        assert_eq!(Command::from_token('S'), Some(Command::Move(Direction::Down)));
        assert_eq!(
            Command::from_token('D'),
            Some(Command::Move(Direction::Right))
        );
        assert_eq!(Command::from_token('Q'), Some(Command::Quit));
    }

    #[test]
    fn test_command_from_token_unknown() {
        for token in ['x', 'j', '1', ' ', '\n', '\u{e9}'] {
            assert_eq!(Command::from_token(token), None, "token {token:?}");
        }
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (0, 1));
    }

    #[test]
    fn test_game_state_default() {
        assert_eq!(GameState::default(), GameState::Playing);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["treasure-grid"]).expect("failed to parse empty arguments");

        assert_eq!(cli.frontend, Frontend::Console);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_frontend_and_verbosity() {
        let cli = Cli::try_parse_from(["treasure-grid", "--frontend", "tui", "-vv"])
            .expect("failed to parse arguments");

        assert_eq!(cli.frontend, Frontend::Tui);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_rejects_unknown_frontend() {
        assert!(Cli::try_parse_from(["treasure-grid", "--frontend", "web"]).is_err());
    }
}
