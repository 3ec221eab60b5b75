//! Session state machine driving orbit accumulation
//!
//! Owns every piece of mutable state (orbit store, digit tally,
//! evolution bookkeeping) so the UI layer never touches ambient state.
//! Automatic evolution advances exactly one orbit per `step()` call;
//! the caller decides the trigger (timer tick, key press).

use crate::digits::DigitTally;
use crate::errors::CollatzError;
use crate::orbit::{self, Orbit, collatz_orbit_capped};

/// Parse user input as a positive integer.
///
/// Whitespace is trimmed; anything else that fails to parse, including
/// zero and negative numbers, is an `InvalidInput`.
pub fn parse_positive(raw: &str) -> Result<u64, CollatzError> {
    let trimmed = raw.trim();
    match trimmed.parse::<u64>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(CollatzError::InvalidInput {
            raw: trimmed.to_string(),
        }),
    }
}

/// Result of one evolution tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult {
    /// Recorded the orbit of `n`, evolution continues
    Advanced(u64),
    /// Orbit of `n` was skipped (cap or overflow); tally untouched,
    /// evolution continues
    Skipped { n: u64, error: CollatzError },
    /// Evolution reached max_n and returned to idle
    Finished,
    /// No evolution running, or it is paused
    Idle,
}

/// Automatic-evolution lifecycle: iterate n = 1..=max_n, one orbit per
/// trigger, with cooperative stop and pause flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evolution {
    running: bool,
    paused: bool,
    current_n: u64,
    max_n: u64,
}

impl Evolution {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Next starting value to be processed
    pub fn current_n(&self) -> u64 {
        self.current_n
    }

    pub fn max_n(&self) -> u64 {
        self.max_n
    }

    /// True once every n up to max_n has been handed out
    pub fn is_completed(&self) -> bool {
        self.max_n > 0 && self.current_n > self.max_n
    }

    fn start(&mut self, max_n: u64) {
        self.running = true;
        self.paused = false;
        self.current_n = 1;
        self.max_n = max_n;
    }

    fn stop(&mut self) {
        self.running = false;
        self.paused = false;
    }

    /// Hand out the current n and advance the counter
    fn next_n(&mut self) -> u64 {
        let n = self.current_n;
        self.current_n += 1;
        n
    }
}

/// One visualizer session: all orbits plotted so far plus the running
/// leading-digit tally.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Every orbit recorded this session, in insertion order
    orbits: Vec<Orbit>,

    /// Cumulative leading-digit counts over all orbit values
    tally: DigitTally,

    /// Automatic-evolution state
    evolution: Evolution,

    /// Per-orbit step cap
    max_steps: u64,
}

impl Session {
    pub const DEFAULT_MAX_STEPS: u64 = orbit::DEFAULT_MAX_STEPS;

    pub fn new() -> Self {
        Self::with_max_steps(Self::DEFAULT_MAX_STEPS)
    }

    pub fn with_max_steps(max_steps: u64) -> Self {
        Self {
            orbits: Vec::new(),
            tally: DigitTally::new(),
            evolution: Evolution::default(),
            max_steps,
        }
    }

    pub fn orbits(&self) -> &[Orbit] {
        &self.orbits
    }

    pub fn tally(&self) -> &DigitTally {
        &self.tally
    }

    pub fn evolution(&self) -> &Evolution {
        &self.evolution
    }

    pub fn is_evolving(&self) -> bool {
        self.evolution.is_running()
    }

    pub fn max_steps(&self) -> u64 {
        self.max_steps
    }

    /// Compute the orbit of `n`, record its values, and store it.
    /// On error nothing is mutated.
    pub fn add_orbit(&mut self, n: u64) -> Result<&Orbit, CollatzError> {
        let orbit = collatz_orbit_capped(n, self.max_steps)?;
        self.tally.record(orbit.values().iter().copied());
        self.orbits.push(orbit);
        Ok(&self.orbits[self.orbits.len() - 1])
    }

    /// Clear the session and arm automatic evolution for n = 1..=max_n.
    pub fn start_evolution(&mut self, max_n: u64) -> Result<(), CollatzError> {
        if max_n == 0 {
            return Err(CollatzError::InvalidInput {
                raw: "0".to_string(),
            });
        }
        self.orbits.clear();
        self.tally.reset();
        self.evolution.start(max_n);
        Ok(())
    }

    /// Advance one unit of work: the orbit of the next n.
    ///
    /// A failed orbit (cap exceeded, overflow) is reported as `Skipped`
    /// and evolution moves on; the tally is unaffected for that orbit.
    pub fn step(&mut self) -> StepResult {
        if !self.evolution.is_running() || self.evolution.is_paused() {
            return StepResult::Idle;
        }
        if self.evolution.is_completed() {
            self.evolution.stop();
            return StepResult::Finished;
        }

        let n = self.evolution.next_n();
        match self.add_orbit(n) {
            Ok(_) => StepResult::Advanced(n),
            Err(error) => StepResult::Skipped { n, error },
        }
    }

    /// Cancellation flag checked between units of work
    pub fn stop_evolution(&mut self) {
        self.evolution.stop();
    }

    /// Toggle the pause flag; returns the new paused state.
    /// No effect while idle.
    pub fn toggle_pause(&mut self) -> bool {
        if self.evolution.is_running() {
            self.evolution.paused = !self.evolution.paused;
        }
        self.evolution.is_paused()
    }

    /// Drop all orbits and counts and return to idle
    pub fn reset(&mut self) {
        self.orbits.clear();
        self.tally.reset();
        self.evolution = Evolution::default();
    }
}
