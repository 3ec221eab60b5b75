//! Application state and main UI controller

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use cz_core::{Session, StepResult, parse_positive};

use crate::input::{Command, key_to_command};
use crate::theme::Theme;
use crate::widgets::{HistogramWidget, OrbitChartWidget, StatusWidget};

/// UI mode - what the app is currently displaying/waiting for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMode {
    /// Normal chart view
    Normal,
    /// Typing a number for a single orbit
    EnterNumber { input: String },
    /// Typing the upper bound for automatic evolution
    EnterMaxN { input: String },
    /// Showing help
    Help,
}

/// Application state
pub struct App {
    /// Session owning orbits, tally, and evolution state
    session: Session,

    /// Should quit
    should_quit: bool,

    /// Current UI mode
    mode: UiMode,

    /// Orbit value readout under the chart
    show_labels: bool,

    /// Last status message
    message: Option<String>,

    /// Whether the last message reports an error
    message_is_error: bool,

    /// Color theme (adapts to light/dark terminal background)
    theme: Theme,
}

impl App {
    pub fn new(session: Session, theme: Theme) -> Self {
        Self {
            session,
            should_quit: false,
            mode: UiMode::Normal,
            show_labels: true,
            message: None,
            message_is_error: false,
            theme,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn mode(&self) -> &UiMode {
        &self.mode
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.message_is_error = false;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.message_is_error = true;
    }

    /// One timer tick: advance automatic evolution by one orbit
    pub fn on_tick(&mut self) {
        match self.session.step() {
            StepResult::Advanced(n) => {
                self.set_message(format!("recorded orbit of {}", n));
            }
            StepResult::Skipped { n, error } => {
                self.set_error(format!("skipped {}: {}", n, error));
            }
            StepResult::Finished => {
                self.set_message("evolution finished");
            }
            StepResult::Idle => {}
        }
    }

    /// Feed a terminal event into the app
    pub fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.mode.clone() {
            UiMode::Normal => {
                if let Some(command) = key_to_command(key) {
                    self.execute(command);
                }
            }
            UiMode::EnterNumber { input } => {
                self.handle_prompt_input(key, input, false);
            }
            UiMode::EnterMaxN { input } => {
                self.handle_prompt_input(key, input, true);
            }
            UiMode::Help => {
                // Any key closes help
                self.mode = UiMode::Normal;
            }
        }
    }

    /// Run a command from the normal chart view
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::AddOrbit => {
                self.mode = UiMode::EnterNumber {
                    input: String::new(),
                };
            }
            Command::StartEvolution => {
                self.mode = UiMode::EnterMaxN {
                    input: String::new(),
                };
            }
            Command::StopEvolution => {
                if self.session.is_evolving() {
                    self.session.stop_evolution();
                    self.set_message("evolution stopped");
                }
            }
            Command::TogglePause => {
                if self.session.is_evolving() {
                    if self.session.toggle_pause() {
                        self.set_message("paused");
                    } else {
                        self.set_message("resumed");
                    }
                }
            }
            Command::Reset => {
                self.session.reset();
                self.set_message("session reset");
            }
            Command::ToggleLabels => {
                self.show_labels = !self.show_labels;
            }
            Command::Help => {
                self.mode = UiMode::Help;
            }
            Command::Redraw => {
                // The terminal is redrawn on every loop iteration anyway.
            }
            Command::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Digit-only line editing shared by both prompts
    fn handle_prompt_input(&mut self, key: KeyEvent, mut input: String, is_max_n: bool) {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() && input.len() < 19 => {
                input.push(c);
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Esc => {
                self.mode = UiMode::Normal;
                return;
            }
            KeyCode::Enter => {
                self.mode = UiMode::Normal;
                if is_max_n {
                    self.submit_max_n(&input);
                } else {
                    self.submit_number(&input);
                }
                return;
            }
            _ => {}
        }
        self.mode = if is_max_n {
            UiMode::EnterMaxN { input }
        } else {
            UiMode::EnterNumber { input }
        };
    }

    /// Plot a single orbit from the prompt input.
    /// A rejected input leaves the session untouched.
    fn submit_number(&mut self, raw: &str) {
        let n = match parse_positive(raw) {
            Ok(n) => n,
            Err(e) => {
                self.set_error(e.to_string());
                return;
            }
        };
        match self.session.add_orbit(n) {
            Ok(orbit) => {
                let message = format!(
                    "orbit of {}: {} values, peak {}",
                    n,
                    orbit.len(),
                    orbit.max_value()
                );
                self.set_message(message);
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Start automatic evolution from the prompt input
    fn submit_max_n(&mut self, raw: &str) {
        let max_n = match parse_positive(raw) {
            Ok(n) => n,
            Err(e) => {
                self.set_error(e.to_string());
                return;
            }
        };
        match self.session.start_evolution(max_n) {
            Ok(()) => self.set_message(format!("evolving 1..={}", max_n)),
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Layout: orbit chart on top, histogram below, status at bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),    // Orbit chart
                Constraint::Length(14), // Histogram
                Constraint::Length(2),  // Status lines
            ])
            .split(frame.area());

        let orbit_widget =
            OrbitChartWidget::new(self.session.orbits(), &self.theme, self.show_labels);
        frame.render_widget(orbit_widget, chunks[0]);

        let histogram_widget = HistogramWidget::new(self.session.tally(), &self.theme);
        frame.render_widget(histogram_widget, chunks[1]);

        let status_widget = StatusWidget::new(
            &self.session,
            self.message.as_deref(),
            self.message_is_error,
            &self.theme,
        );
        frame.render_widget(status_widget, chunks[2]);

        // Render modal overlays based on mode
        match self.mode.clone() {
            UiMode::Normal => {}
            UiMode::EnterNumber { input } => {
                self.render_prompt(frame, "Add orbit of n", &input);
            }
            UiMode::EnterMaxN { input } => {
                self.render_prompt(frame, "Evolve from 1 up to N", &input);
            }
            UiMode::Help => self.render_help(frame),
        }
    }

    /// Render a one-line number prompt overlay
    fn render_prompt(&self, frame: &mut Frame, title: &str, input: &str) {
        let area = centered_rect(40, 3, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_action));

        let paragraph = Paragraph::new(format!("> {}_", input))
            .block(block)
            .style(Style::default().fg(self.theme.text));
        frame.render_widget(paragraph, area);
    }

    fn render_help(&self, frame: &mut Frame) {
        let area = centered_rect(46, 16, frame.area());
        frame.render_widget(Clear, area);

        let help_text = r#"Orbits:
  a, n   Add a single orbit
  e      Evolve 1..N, one orbit per tick
  s      Stop evolution
  SPACE  Pause / resume evolution
  R      Reset session

View:
  l      Toggle orbit value readout
  ^R     Redraw screen

Meta:
  ?, h   This help
  q, ESC Quit

Press any key to close"#;

        let block = Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));

        let paragraph = Paragraph::new(help_text)
            .block(block)
            .style(Style::default().fg(self.theme.text));
        frame.render_widget(paragraph, area);
    }
}

/// Fixed-size rect centered in `r`, clamped to fit
fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn press_code(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> App {
        App::new(Session::new(), Theme::dark())
    }

    #[test]
    fn test_add_orbit_via_prompt() {
        let mut app = app();
        app.handle_event(press('a'));
        assert!(matches!(app.mode(), UiMode::EnterNumber { .. }));

        app.handle_event(press('2'));
        app.handle_event(press('7'));
        app.handle_event(press_code(KeyCode::Enter));

        assert_eq!(app.mode(), &UiMode::Normal);
        assert_eq!(app.session().orbits().len(), 1);
        assert_eq!(app.session().orbits()[0].start(), 27);
    }

    #[test]
    fn test_prompt_rejects_empty_input() {
        let mut app = app();
        app.handle_event(press('a'));
        app.handle_event(press_code(KeyCode::Enter));

        assert!(app.session().orbits().is_empty());
        assert!(app.message_is_error);
    }

    #[test]
    fn test_prompt_ignores_non_digits() {
        let mut app = app();
        app.handle_event(press('a'));
        app.handle_event(press('x'));
        app.handle_event(press('-'));
        app.handle_event(press('6'));
        match app.mode() {
            UiMode::EnterNumber { input } => assert_eq!(input, "6"),
            mode => panic!("unexpected mode: {:?}", mode),
        }
    }

    #[test]
    fn test_escape_cancels_prompt() {
        let mut app = app();
        app.handle_event(press('e'));
        app.handle_event(press('5'));
        app.handle_event(press_code(KeyCode::Esc));
        assert_eq!(app.mode(), &UiMode::Normal);
        assert!(!app.session().is_evolving());
    }

    #[test]
    fn test_evolution_runs_on_ticks() {
        let mut app = app();
        app.handle_event(press('e'));
        app.handle_event(press('3'));
        app.handle_event(press_code(KeyCode::Enter));
        assert!(app.session().is_evolving());

        for _ in 0..4 {
            app.on_tick();
        }
        assert_eq!(app.session().orbits().len(), 3);
        assert!(!app.session().is_evolving());
    }

    #[test]
    fn test_pause_blocks_ticks() {
        let mut app = app();
        app.handle_event(press('e'));
        app.handle_event(press('9'));
        app.handle_event(press_code(KeyCode::Enter));

        app.on_tick();
        app.handle_event(press(' '));
        app.on_tick();
        app.on_tick();
        assert_eq!(app.session().orbits().len(), 1);

        app.handle_event(press(' '));
        app.on_tick();
        assert_eq!(app.session().orbits().len(), 2);
    }

    #[test]
    fn test_reset_clears_session() {
        let mut app = app();
        app.handle_event(press('a'));
        app.handle_event(press('6'));
        app.handle_event(press_code(KeyCode::Enter));
        assert_eq!(app.session().tally().total(), 9);

        app.handle_event(press('R'));
        assert_eq!(app.session().tally().total(), 0);
        assert!(app.session().orbits().is_empty());
    }

    #[test]
    fn test_help_opens_and_any_key_closes() {
        let mut app = app();
        app.handle_event(press('?'));
        assert_eq!(app.mode(), &UiMode::Help);
        app.handle_event(press('x'));
        assert_eq!(app.mode(), &UiMode::Normal);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_event(press('q'));
        assert!(app.should_quit());
    }
}
