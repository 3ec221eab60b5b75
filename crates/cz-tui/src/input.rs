//! Input handling - convert key events to commands
//!
//! Bindings mirror the original visualizer's button set: add a single
//! orbit, evolve 1..N on a timer, stop, pause, reset.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Something the user asked the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Prompt for a number and plot its orbit
    AddOrbit,
    /// Prompt for N and start automatic evolution 1..=N
    StartEvolution,
    /// Cancel a running evolution
    StopEvolution,
    /// Pause/resume a running evolution
    TogglePause,
    /// Clear all orbits and counts
    Reset,
    /// Toggle orbit value readout under the chart
    ToggleLabels,
    /// Show the key binding overlay
    Help,
    /// Redraw the screen
    Redraw,
    /// Leave the program
    Quit,
}

/// Convert a key event to a command.
///
/// These are the bindings active in the normal chart view; prompt and
/// help overlays consume keys themselves in app.rs.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    // Ctrl key combos
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),   // Ctrl+C: quit
            KeyCode::Char('r') => Some(Command::Redraw), // Ctrl+R: redraw screen
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('a') | KeyCode::Char('n') => Some(Command::AddOrbit), // a : add orbit
        KeyCode::Char('e') => Some(Command::StartEvolution), // e : evolve 1..N
        KeyCode::Char('s') => Some(Command::StopEvolution),  // s : stop evolution
        KeyCode::Char(' ') | KeyCode::Char('p') => Some(Command::TogglePause), // space : pause
        KeyCode::Char('R') => Some(Command::Reset),          // R : reset session
        KeyCode::Char('l') => Some(Command::ToggleLabels),   // l : toggle labels
        KeyCode::Char('?') | KeyCode::Char('h') => Some(Command::Help), // ? : help
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit), // q : quit
        _ => None,
    }
}
