//! Error types shared across the crate
//!
//! All errors are local and non-fatal: the driver reports them and keeps
//! waiting for new input.

use thiserror::Error;

/// Errors produced by orbit computation and input validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollatzError {
    #[error("not a positive integer: '{raw}'")]
    InvalidInput { raw: String },

    #[error("orbit of {start} exceeded the {max_steps}-step cap")]
    SequenceTooLong { start: u64, max_steps: u64 },

    #[error("3n+1 overflowed u64 at n = {value}")]
    Overflow { value: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CollatzError::InvalidInput {
            raw: "-3".to_string(),
        };
        assert!(err.to_string().contains("not a positive integer"));
        assert!(err.to_string().contains("-3"));

        let err = CollatzError::SequenceTooLong {
            start: 27,
            max_steps: 50,
        };
        assert!(err.to_string().contains("27"));
        assert!(err.to_string().contains("50-step cap"));
    }
}
