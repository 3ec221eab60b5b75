//! cz-core: Collatz orbit and leading-digit logic
//!
//! This crate contains all computation with no I/O dependencies.
//! It is designed to be pure and testable: the TUI layer only calls
//! into [`Session`] and reads its state back out for rendering.

pub mod digits;
pub mod errors;
pub mod orbit;
pub mod session;

pub use digits::{DigitTally, benford, leading_digit};
pub use errors::CollatzError;
pub use orbit::{Orbit, collatz_orbit, collatz_orbit_capped, collatz_step, inverse_children};
pub use session::{Evolution, Session, StepResult, parse_positive};
