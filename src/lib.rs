//! This crate contains the game logic and frontends for the treasure grid game.
//!
//! A player walks a fixed 5x5 board, steps around obstacles and picks up treasure until all three
//! are collected or the player quits. The [`game::Game`] state machine is shared by a
//! line-oriented console frontend and a full-screen terminal frontend.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

pub mod board;
pub mod console;
pub mod game;
pub mod types;

mod app;
mod events;
mod ui;

use std::io;

use color_eyre::eyre::Result;
use log::LevelFilter;

pub use crate::{
    game::Game,
    types::{Cli, Frontend},
};

/// Sets up the logger on standard error.
///
/// The base level is `warn`, raised to `info` by one `-v` and to `debug` by more. A `RUST_LOG`
/// environment variable takes precedence over the base level.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    let mut builder = env_logger::Builder::new();
    let _ = builder.filter_level(level).parse_default_env();
    if builder.try_init().is_err() {
        log::debug!("logger was already initialised");
    }
}

/// Plays one game with the frontend picked on the command line.
///
/// The closing summary is printed to standard output by both frontends; the terminal frontend
/// prints it after the terminal has been restored.
///
/// # Errors
///
/// - [`std::io::Error`] when reading input, writing output or drawing the terminal fails
pub fn run(cli: &Cli) -> Result<()> {
    let game = match cli.frontend {
        Frontend::Console => {
            let mut game = Game::new();
            console::run(&mut game, io::stdin().lock(), &mut io::stdout().lock())?;
            game
        }
        Frontend::Tui => {
            let mut app = app::App::new();
            let mut terminal = ratatui::init();
            let result = app.run(&mut terminal);
            ratatui::restore();
            result?;

            println!("{}", app.game.summary());
            app.game
        }
    };

    log::info!(
        "finished in state {:?} with {} treasure(s)",
        game.state(),
        game.score()
    );

    Ok(())
}
