//! Leading-digit extraction and the Benford reference distribution

/// First (most significant) decimal digit of `n`, by repeated division.
/// Returns 0 only for input 0, which orbit values never are.
pub fn leading_digit(mut n: u64) -> u8 {
    while n >= 10 {
        n /= 10;
    }
    n as u8
}

/// Benford's Law probabilities for leading digits 1..=9:
/// `P(d) = log10(1 + 1/d)`.
pub fn benford() -> [f64; 9] {
    std::array::from_fn(|i| {
        let d = (i + 1) as f64;
        (1.0 + 1.0 / d).log10()
    })
}

/// Cumulative tally of leading digits across every orbit value seen.
///
/// Counts only grow; `reset` is the explicit session restart. Index `i`
/// of the internal array holds the count for digit `i + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitTally {
    counts: [u64; 9],
    total: u64,
}

impl DigitTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the leading digit of every value. Zero values carry no
    /// leading digit in 1..=9 and are ignored.
    pub fn record<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = u64>,
    {
        for value in values {
            let digit = leading_digit(value);
            if digit >= 1 {
                self.counts[(digit - 1) as usize] += 1;
                self.total += 1;
            }
        }
    }

    /// Count recorded for a digit in 1..=9
    pub fn count(&self, digit: u8) -> u64 {
        assert!((1..=9).contains(&digit), "digit out of range: {}", digit);
        self.counts[(digit - 1) as usize]
    }

    /// Total number of values recorded
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Relative frequency of each leading digit 1..=9.
    /// All zeros while nothing has been recorded.
    pub fn frequencies(&self) -> [f64; 9] {
        if self.total == 0 {
            return [0.0; 9];
        }
        let total = self.total as f64;
        std::array::from_fn(|i| self.counts[i] as f64 / total)
    }

    /// Drop all counts (session restart)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_leading_digit() {
        assert_eq!(leading_digit(7), 7);
        assert_eq!(leading_digit(10), 1);
        assert_eq!(leading_digit(305), 3);
        assert_eq!(leading_digit(999), 9);
        assert_eq!(leading_digit(u64::MAX), 1); // 18446...
    }

    #[test]
    fn test_empty_tally_is_all_zero() {
        let tally = DigitTally::new();
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.frequencies(), [0.0; 9]);
    }

    #[test]
    fn test_record_one_through_nine_is_uniform() {
        let mut tally = DigitTally::new();
        tally.record(1..=9);
        assert_eq!(tally.total(), 9);
        for d in 1..=9 {
            assert_eq!(tally.count(d), 1);
        }
        for freq in tally.frequencies() {
            assert!((freq - 1.0 / 9.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_counts_follow_leading_digits() {
        let mut tally = DigitTally::new();
        tally.record([16, 13, 191, 2]);
        assert_eq!(tally.count(1), 3);
        assert_eq!(tally.count(2), 1);
        assert_eq!(tally.count(9), 0);
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn test_count_sum_equals_total() {
        let mut tally = DigitTally::new();
        tally.record([6, 3, 10, 5, 16, 8, 4, 2, 1]);
        let sum: u64 = (1..=9).map(|d| tally.count(d)).sum();
        assert_eq!(sum, tally.total());
    }

    #[test]
    fn test_frequencies_idempotent_between_records() {
        let mut tally = DigitTally::new();
        tally.record([7, 22, 11]);
        assert_eq!(tally.frequencies(), tally.frequencies());
    }

    #[test]
    fn test_total_is_monotonic_across_records() {
        let mut tally = DigitTally::new();
        let mut previous = tally.total();
        for batch in [vec![1, 2], vec![], vec![900, 34, 17]] {
            tally.record(batch);
            assert!(tally.total() >= previous);
            previous = tally.total();
        }
    }

    #[test]
    fn test_benford_sums_to_one() {
        let sum: f64 = benford().iter().sum();
        assert!((sum - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_benford_reference_values() {
        let probs = benford();
        assert!((probs[0] - 0.30103).abs() < 1e-5);
        assert!((probs[8] - 0.04576).abs() < 1e-5);
        // Strictly decreasing from digit 1 to digit 9
        for pair in probs.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }
}
