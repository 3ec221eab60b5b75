//! Collatz map, orbit generation, and inverse-graph predecessors
//!
//! The forward map is `n -> n/2` for even n and `n -> 3n+1` for odd n.
//! Termination at 1 is the (unproven) Collatz conjecture, so orbit
//! generation carries a step cap rather than trusting it.

use crate::errors::CollatzError;

/// Default cap on orbit length. The longest known orbit for any start
/// below 2^64 is under 3000 steps, so hitting this means either a
/// conjecture counterexample or a caller asking for trouble.
pub const DEFAULT_MAX_STEPS: u64 = 10_000;

/// One application of the Collatz map.
///
/// Errors with `InvalidInput` for 0 and `Overflow` when `3n+1` does not
/// fit in a u64 (the original tool ran on arbitrary-precision integers).
pub fn collatz_step(n: u64) -> Result<u64, CollatzError> {
    if n == 0 {
        return Err(CollatzError::InvalidInput {
            raw: "0".to_string(),
        });
    }
    if n % 2 == 0 {
        Ok(n / 2)
    } else {
        n.checked_mul(3)
            .and_then(|m| m.checked_add(1))
            .ok_or(CollatzError::Overflow { value: n })
    }
}

/// Compute the Collatz orbit of `n` down to 1 inclusive, using the
/// default step cap.
pub fn collatz_orbit(n: u64) -> Result<Orbit, CollatzError> {
    collatz_orbit_capped(n, DEFAULT_MAX_STEPS)
}

/// Compute the Collatz orbit of `n` down to 1 inclusive.
///
/// The orbit of 1 is `[1]`. `max_steps` bounds the number of map
/// applications; exceeding it surfaces `SequenceTooLong` and yields
/// no partial orbit.
pub fn collatz_orbit_capped(n: u64, max_steps: u64) -> Result<Orbit, CollatzError> {
    if n == 0 {
        return Err(CollatzError::InvalidInput {
            raw: "0".to_string(),
        });
    }

    let mut values = vec![n];
    let mut current = n;
    let mut steps: u64 = 0;
    while current != 1 {
        if steps >= max_steps {
            return Err(CollatzError::SequenceTooLong { start: n, max_steps });
        }
        current = collatz_step(current)?;
        values.push(current);
        steps += 1;
    }
    Ok(Orbit { values })
}

/// Predecessors of `m` under the Collatz map, in ascending order.
///
/// `2m` is always a predecessor. The odd predecessor `(m-1)/3` exists
/// exactly when `m % 6 == 4`; writing `m = 6k+4` gives `(m-1)/3 = 2k+1`,
/// so that candidate is always odd when the divisibility holds.
pub fn inverse_children(m: u64) -> Result<Vec<u64>, CollatzError> {
    if m == 0 {
        return Err(CollatzError::InvalidInput {
            raw: "0".to_string(),
        });
    }

    let mut preds = Vec::with_capacity(2);
    if m % 6 == 4 {
        preds.push((m - 1) / 3);
    }
    let even_pred = m
        .checked_mul(2)
        .ok_or(CollatzError::Overflow { value: m })?;
    preds.push(even_pred);
    Ok(preds)
}

/// A computed Collatz orbit. Immutable once built: first element is the
/// starting value, last element is 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orbit {
    values: Vec<u64>,
}

impl Orbit {
    /// Starting value of the orbit
    pub fn start(&self) -> u64 {
        self.values[0]
    }

    /// Number of values in the orbit (steps + 1)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// An orbit always holds at least its starting value
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Largest value reached along the orbit
    pub fn max_value(&self) -> u64 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// (step, value) pairs for plotting
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v as f64))
            .collect()
    }

    /// (step, log10(value)) pairs; the orbit chart plots on a log scale
    pub fn points_log10(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, (v as f64).log10()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_orbit_of_one_is_singleton() {
        let orbit = collatz_orbit(1).unwrap();
        assert_eq!(orbit.values(), &[1]);
        assert_eq!(orbit.start(), 1);
        assert_eq!(orbit.len(), 1);
    }

    #[test]
    fn test_orbit_of_six() {
        let orbit = collatz_orbit(6).unwrap();
        assert_eq!(orbit.values(), &[6, 3, 10, 5, 16, 8, 4, 2, 1]);
    }

    #[test]
    fn test_orbit_of_seven() {
        let orbit = collatz_orbit(7).unwrap();
        assert_eq!(
            orbit.values(),
            &[7, 22, 11, 34, 17, 52, 26, 13, 40, 20, 10, 5, 16, 8, 4, 2, 1]
        );
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!(matches!(
            collatz_orbit(0),
            Err(CollatzError::InvalidInput { .. })
        ));
        assert!(matches!(
            collatz_step(0),
            Err(CollatzError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_step_cap() {
        // Orbit of 6 takes 8 steps; a cap of 8 passes, 7 does not.
        assert!(collatz_orbit_capped(6, 8).is_ok());
        assert_eq!(
            collatz_orbit_capped(6, 7),
            Err(CollatzError::SequenceTooLong {
                start: 6,
                max_steps: 7
            })
        );
    }

    #[test]
    fn test_odd_step_overflow() {
        // u64::MAX is odd, so 3n+1 cannot fit.
        assert_eq!(
            collatz_step(u64::MAX),
            Err(CollatzError::Overflow { value: u64::MAX })
        );
    }

    #[test]
    fn test_inverse_children() {
        // Only the even predecessor unless m = 4 (mod 6).
        assert_eq!(inverse_children(1).unwrap(), vec![2]);
        assert_eq!(inverse_children(5).unwrap(), vec![10]);
        // 4 = 6*0+4: odd predecessor 1, even predecessor 8
        assert_eq!(inverse_children(4).unwrap(), vec![1, 8]);
        assert_eq!(inverse_children(10).unwrap(), vec![3, 20]);
        assert_eq!(inverse_children(22).unwrap(), vec![7, 44]);
    }

    #[test]
    fn test_inverse_children_are_actual_predecessors() {
        for m in 1..500u64 {
            for pred in inverse_children(m).unwrap() {
                assert_eq!(collatz_step(pred).unwrap(), m, "pred {} of {}", pred, m);
            }
        }
    }

    #[test]
    fn test_points_log10_matches_values() {
        let orbit = collatz_orbit(6).unwrap();
        let pts = orbit.points_log10();
        assert_eq!(pts.len(), orbit.len());
        assert_eq!(pts[0].0, 0.0);
        assert!((pts[3].1 - (5f64).log10()).abs() < 1e-12);
    }

    #[test]
    fn test_points_pair_step_with_value() {
        let orbit = collatz_orbit(6).unwrap();
        assert_eq!(orbit.points()[0], (0.0, 6.0));
        assert_eq!(orbit.points()[8], (8.0, 1.0));
        assert_eq!(orbit.max_value(), 16);
    }

    proptest! {
        #[test]
        fn prop_orbit_starts_at_n_and_ends_at_one(n in 1u64..10_000) {
            let orbit = collatz_orbit(n).unwrap();
            prop_assert!(orbit.len() >= 1);
            prop_assert_eq!(orbit.start(), n);
            prop_assert_eq!(*orbit.values().last().unwrap(), 1);
        }

        #[test]
        fn prop_consecutive_values_follow_the_map(n in 1u64..5_000) {
            let orbit = collatz_orbit(n).unwrap();
            for pair in orbit.values().windows(2) {
                prop_assert_eq!(collatz_step(pair[0]).unwrap(), pair[1]);
            }
        }
    }
}
