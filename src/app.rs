//! Application state for the full-screen terminal frontend.

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{events, game::Game, ui};

/// Application state container for the terminal frontend.
///
/// This structure holds the game being played together with the bits of presentation state that
/// only exist on screen, which is to say the structure from which Ratatui renders a frame and
/// Crossterm key events write to.
#[derive(Debug, Default)]
pub(crate) struct App {
    /// Application exit flag.
    ///
    /// This field starts off `false` and is set once the user quits or dismisses the final screen.
    pub(crate) exit: bool,
    /// Game driven by the key events.
    pub(crate) game: Game,
    /// Feedback line for the most recent keypress.
    ///
    /// This field holds the pickup or win message to show under the board, if the last key
    /// produced one.
    pub(crate) message: Option<&'static str>,
}

impl App {
    /// Creates an application around a fresh game.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Runs the main loop of the application.
    ///
    /// This function draws a frame and then waits for input, until the exit condition is `true`,
    /// after which the function returns to the call site with the finished game still in place.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub(crate) fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| ui::draw(self, frame).map_err(std::io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameState;

    #[test]
    fn test_app_new() {
        let app = App::new();

        assert!(!app.exit);
        assert_eq!(app.message, None);
        assert_eq!(app.game.state(), GameState::Playing);
        assert_eq!(app.game.score(), 0);
    }
}
