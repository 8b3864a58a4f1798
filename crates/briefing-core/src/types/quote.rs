//! Closing-price quote.

use serde::{Deserialize, Serialize};

/// Price and day-over-day change for one instrument.
///
/// `None` fields mean the fetch failed or the provider had no data; a quote
/// is stored for every catalog entry either way.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Quote {
    /// Last closing price, rounded to 2 decimals.
    pub price: Option<f64>,
    /// Percent change vs the previous close, rounded to 2 decimals.
    pub change: Option<f64>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Quote {
    /// Explicit absent marker for a failed or uncovered symbol.
    pub fn absent() -> Self {
        Self::default()
    }

    /// Derive a quote from a time-ordered closing-price series.
    ///
    /// The last observation is the current price; the second-to-last is the
    /// previous close (defaulting to the current when only one observation
    /// exists). Change is 0 when the previous close is 0. An empty series
    /// yields an absent quote.
    pub fn from_closes(closes: &[f64]) -> Self {
        let Some(&current) = closes.last() else {
            return Self::absent();
        };
        let previous = if closes.len() >= 2 {
            closes[closes.len() - 2]
        } else {
            current
        };
        let change = if previous != 0.0 {
            (current - previous) / previous * 100.0
        } else {
            0.0
        };
        Self {
            price: Some(round2(current)),
            change: Some(round2(change)),
        }
    }

    pub fn is_absent(&self) -> bool {
        self.price.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_point_series() {
        let q = Quote::from_closes(&[100.0, 110.0]);
        assert_eq!(q.price, Some(110.0));
        assert_eq!(q.change, Some(10.0));
    }

    #[test]
    fn test_single_point_defaults_previous_to_current() {
        let q = Quote::from_closes(&[50.0]);
        assert_eq!(q.price, Some(50.0));
        assert_eq!(q.change, Some(0.0));
    }

    #[test]
    fn test_zero_previous_close() {
        let q = Quote::from_closes(&[0.0, 5.0]);
        assert_eq!(q.price, Some(5.0));
        assert_eq!(q.change, Some(0.0));
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        let q = Quote::from_closes(&[3.0, 4.0]);
        // (4 - 3) / 3 * 100 = 33.333...
        assert_eq!(q.change, Some(33.33));
        let q = Quote::from_closes(&[100.0, 100.005]);
        assert_eq!(q.price, Some(100.01));
    }

    #[test]
    fn test_empty_series_is_absent() {
        let q = Quote::from_closes(&[]);
        assert!(q.is_absent());
        assert_eq!(q, Quote::absent());
    }

    #[test]
    fn test_uses_last_two_of_longer_series() {
        let q = Quote::from_closes(&[10.0, 20.0, 90.0, 99.0]);
        assert_eq!(q.price, Some(99.0));
        assert_eq!(q.change, Some(10.0));
    }
}
