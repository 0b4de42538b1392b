//! Line-oriented frontend over standard input and output.
//!
//! This module drives a [`Game`] from any buffered reader and writes the transcript to any writer,
//! which keeps the whole loop testable with in-memory buffers.

use std::{
    collections::VecDeque,
    io::{BufRead, Write},
};

use color_eyre::eyre::Result;
use log::info;

use crate::{
    game::{Game, PICKUP_MESSAGE, WIN_MESSAGE},
    types::{GameState, MoveOutcome},
};

/// Greeting printed once before the first board.
pub const BANNER: &str = "Welcome to the Treasure Game!";

/// Prompt printed after every board.
pub const PROMPT: &str = "Move (W/A/S/D) or Q to quit: ";

/// Splits a buffered reader into single-character move tokens.
///
/// Whitespace, including line breaks, separates tokens and is never returned. A line holding
/// several characters yields one token per character. Bytes that are not valid UTF-8 come out as
/// [`char::REPLACEMENT_CHARACTER`], which the game ignores like any other unknown token.
#[derive(Debug)]
pub struct TokenReader<R> {
    /// Underlying source of input lines.
    input: R,
    /// Characters of the current line not yet handed out.
    pending: VecDeque<char>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a buffered reader.
    pub const fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next non-whitespace character, or `None` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`] when reading from the underlying input fails
    pub fn next_token(&mut self) -> Result<Option<char>> {
        loop {
            while let Some(token) = self.pending.pop_front() {
                if !token.is_whitespace() {
                    return Ok(Some(token));
                }
            }

            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(String::from_utf8_lossy(&line).chars());
        }
    }
}

/// Plays a game to completion, reading tokens from `input` and writing to `output`.
///
/// The board is printed before every prompt. The loop ends when the game is won, when a quit token
/// is read, or when the input runs out, which counts as quitting. A summary with the number of
/// collected treasures is always printed last.
///
/// # Errors
///
/// - [`std::io::Error`] when reading input or writing output fails
pub fn run<R: BufRead, W: Write>(game: &mut Game, input: R, output: &mut W) -> Result<()> {
    let mut tokens = TokenReader::new(input);

    writeln!(output, "{BANNER}")?;
    info!("starting console game");

    while game.state() == GameState::Playing {
        write!(output, "{}", game.board())?;
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(token) = tokens.next_token()? else {
            writeln!(output)?;
            info!("input exhausted, quitting");
            game.quit();
            break;
        };

        if game.handle_token(token) == MoveOutcome::Collected {
            writeln!(output, "{PICKUP_MESSAGE}")?;
        }
        if game.state() == GameState::Won {
            writeln!(output, "{WIN_MESSAGE}")?;
        }
    }

    writeln!(output, "{}", game.summary())?;
    output.flush()?;

    Ok(())
}
