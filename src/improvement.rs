//! Pace trend classification
//!
//! Compares a run's pace to the pace of the immediately previous run by
//! insertion order. A previous pace of zero is the "no prior data"
//! sentinel and classifies as `Equal`, same as a missing previous run.

use rust_decimal::Decimal;

use crate::models::Trend;

/// Classify `current_pace` against the previous run's pace.
///
/// Pure and total: every input pair yields a trend, nothing fails.
pub fn classify(current_pace: Decimal, previous_pace: Option<Decimal>) -> Trend {
    let previous = match previous_pace {
        Some(pace) if pace != Decimal::ZERO => pace,
        _ => return Trend::Equal,
    };

    if current_pace < previous {
        Trend::Improved
    } else if current_pace > previous {
        Trend::Deteriorated
    } else {
        Trend::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_no_previous_is_equal() {
        assert_eq!(classify(dec!(5.5), None), Trend::Equal);
    }

    #[test]
    fn test_zero_previous_is_sentinel() {
        assert_eq!(classify(dec!(5.5), Some(dec!(0))), Trend::Equal);
    }

    #[test]
    fn test_lower_pace_improves() {
        assert_eq!(classify(dec!(5.5), Some(dec!(6.0))), Trend::Improved);
    }

    #[test]
    fn test_higher_pace_deteriorates() {
        assert_eq!(classify(dec!(6.2), Some(dec!(5.5))), Trend::Deteriorated);
    }

    #[test]
    fn test_equal_pace() {
        assert_eq!(classify(dec!(5.5), Some(dec!(5.5))), Trend::Equal);
    }
}
