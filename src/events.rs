//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use log::debug;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::{
    app::App,
    game::{PICKUP_MESSAGE, WIN_MESSAGE},
    types::{GameState, MoveOutcome},
};

/// Polls for a keyboard event and applies it to the application state.
///
/// This function uses a timeout so the caller can redraw regularly even without input.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            handle_key(app, key);
        }
    }

    Ok(())
}

/// Applies a single key event to the application state.
///
/// While the game is running, `Esc` quits and character keys are fed to the game as move tokens.
/// Quitting leaves the application right away; once the game has been won, any further key press
/// dismisses the final screen.
pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.game.state() != GameState::Playing {
        app.exit = true;
        return;
    }

    let outcome = match key.code {
        KeyCode::Esc => {
            app.game.quit();
            MoveOutcome::Quit
        }
        KeyCode::Char(token) => app.game.handle_token(token),
        _ => MoveOutcome::Ignored,
    };
    debug!("key {:?} produced {outcome:?}", key.code);

    match outcome {
        MoveOutcome::Quit => app.exit = true,
        MoveOutcome::Collected if app.game.state() == GameState::Won => {
            app.message = Some(WIN_MESSAGE);
        }
        MoveOutcome::Collected => app.message = Some(PICKUP_MESSAGE),
        MoveOutcome::Moved => app.message = None,
        MoveOutcome::Ignored | MoveOutcome::Blocked => {}
    }
}
