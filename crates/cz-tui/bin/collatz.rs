//! Collatz orbit visualizer
//!
//! Main entry point for the terminal UI.

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use cz_core::Session;
use cz_tui::{App, Theme};

/// Collatz orbit visualizer
#[derive(Parser, Debug)]
#[command(name = "collatz")]
#[command(author, version, about = "Plot Collatz orbits against Benford's law", long_about = None)]
struct Args {
    /// Orbit(s) to plot at startup (repeatable)
    #[arg(short = 'n', long = "number")]
    numbers: Vec<u64>,

    /// Start automatic evolution from 1 up to N
    #[arg(short = 'e', long = "evolve")]
    evolve: Option<u64>,

    /// Tick interval for automatic evolution, in milliseconds
    #[arg(short = 'i', long = "interval", default_value_t = 300)]
    interval_ms: u64,

    /// Per-orbit step cap (guards against non-termination)
    #[arg(long = "max-steps", default_value_t = Session::DEFAULT_MAX_STEPS)]
    max_steps: u64,

    /// Force the light terminal background theme
    #[arg(long = "light")]
    light: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> io::Result<()> {
    // Parse command-line arguments before terminal setup
    let args = Args::parse();

    // Show version info
    if args.verbose {
        println!("collatz {}", env!("CARGO_PKG_VERSION"));
        println!("Collatz orbits vs Benford's law, rendered with ratatui");
        return Ok(());
    }

    let theme = if args.light {
        Theme::light()
    } else {
        Theme::detect()
    };

    // Seed the session from the command line; a bad seed becomes the
    // first status message instead of aborting.
    let mut session = Session::with_max_steps(args.max_steps.max(1));
    let mut startup_message = None;
    for &n in &args.numbers {
        if let Err(e) = session.add_orbit(n) {
            startup_message = Some(e.to_string());
        }
    }
    if let Some(max_n) = args.evolve
        && let Err(e) = session.start_evolution(max_n)
    {
        startup_message = Some(e.to_string());
    }

    let mut app = App::new(session, theme);
    if let Some(message) = startup_message {
        app.set_error(message);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Evolution advances one orbit per poll timeout
    let tick = Duration::from_millis(args.interval_ms.max(16));
    let result = run(&mut terminal, &mut app, tick);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick: Duration,
) -> io::Result<()> {
    // Main loop
    loop {
        // Draw
        terminal.draw(|frame| app.render(frame))?;

        // Handle input, or advance evolution when the poll times out
        if event::poll(tick)? {
            let event = event::read()?;
            app.handle_event(event);
        } else {
            app.on_tick();
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
