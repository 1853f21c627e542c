//! Missing-range computation over the domain `[1, 99]`
//!
//! Given a non-decreasing sequence of integers drawn from the domain, the
//! complement is reported as compact range tokens: `"n"` for a single
//! missing value and `"a-b"` for a contiguous missing block.
//!
//! ```rust
//! use grocery_core::missing_ranges::{complement, missing_elements, validate};
//!
//! let input = [5, 6, 10];
//! assert!(validate(&input));
//! assert_eq!(missing_elements(&input), "1-4,7-9,11-99");
//! assert_eq!(complement(&[]).len(), 1);
//! ```

use std::fmt;

/// Smallest value of the domain
pub const DOMAIN_MIN: i32 = 1;

/// Largest value of the domain
pub const DOMAIN_MAX: i32 = 99;

/// One contiguous block of missing values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingRange {
    /// A single missing value, rendered as `"n"`
    Single(i32),
    /// An inclusive block of two or more missing values, rendered as `"a-b"`
    Span(i32, i32),
}

impl MissingRange {
    /// Build the token for the inclusive block `[low, high]`
    fn between(low: i32, high: i32) -> Self {
        if low == high {
            MissingRange::Single(low)
        } else {
            MissingRange::Span(low, high)
        }
    }
}

impl fmt::Display for MissingRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingRange::Single(value) => write!(f, "{}", value),
            MissingRange::Span(low, high) => write!(f, "{}-{}", low, high),
        }
    }
}

/// Check that every value lies in `[1, 99]` and the sequence never decreases
///
/// Repeated values are accepted. An empty sequence is valid.
pub fn validate(values: &[i32]) -> bool {
    let mut previous = 0;

    for &value in values {
        if !(DOMAIN_MIN..=DOMAIN_MAX).contains(&value) {
            log::debug!("Rejecting value {} outside [{}, {}]", value, DOMAIN_MIN, DOMAIN_MAX);
            return false;
        }

        if value < previous {
            log::debug!("Rejecting decreasing step {} -> {}", previous, value);
            return false;
        }

        previous = value;
    }

    true
}

/// Compute the blocks of the domain not covered by `values`
///
/// Assumes `values` passed [`validate`]. Single pass, constant extra state.
pub fn complement(values: &[i32]) -> Vec<MissingRange> {
    let mut ranges = Vec::new();
    let mut low = DOMAIN_MIN;

    for &value in values {
        if low < value {
            ranges.push(MissingRange::between(low, value - 1));
        }

        low = value.saturating_add(1);
    }

    if low <= DOMAIN_MAX {
        ranges.push(MissingRange::between(low, DOMAIN_MAX));
    }

    ranges
}

/// Render the complement of `values` as comma-separated tokens
pub fn missing_elements(values: &[i32]) -> String {
    complement(values)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
