//! cz-tui: Terminal UI layer using ratatui
//!
//! Renders the orbit chart, the leading-digit histogram, and the
//! status line, and translates key events into session operations.

pub mod app;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::{App, UiMode};
pub use input::Command;
pub use theme::Theme;
