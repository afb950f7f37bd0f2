//! Duration and pace display formatting
//!
//! Converts fractional-minutes values (pace per km, total elapsed time)
//! into the `M:SS` / `H:MM:SS` strings every list row and summary tile
//! renders.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{Result, RunLogError};

/// Render a non-negative fractional-minutes value.
///
/// Whole seconds are `floor(value * 60)`. Output is `M:SS` (minutes
/// unpadded, seconds zero-padded), switching to `H:MM:SS` once an hour
/// component exists. Pure: same input, same output.
pub fn format_minutes(value: Decimal) -> Result<String> {
    if value < Decimal::ZERO {
        return Err(RunLogError::NegativeDuration { value });
    }

    let total_seconds = (value * dec!(60)).floor().to_u64().unwrap_or(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        Ok(format!("{}:{:02}:{:02}", hours, minutes, seconds))
    } else {
        Ok(format!("{}:{:02}", minutes, seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero() {
        assert_eq!(format_minutes(dec!(0)).unwrap(), "0:00");
    }

    #[test]
    fn test_fractional_minutes() {
        assert_eq!(format_minutes(dec!(1.5)).unwrap(), "1:30");
        assert_eq!(format_minutes(dec!(7.87)).unwrap(), "7:52");
    }

    #[test]
    fn test_seconds_zero_padded() {
        assert_eq!(format_minutes(dec!(5.05)).unwrap(), "5:03");
    }

    #[test]
    fn test_hour_rollover() {
        assert_eq!(format_minutes(dec!(61)).unwrap(), "1:01:00");
        assert_eq!(format_minutes(dec!(60)).unwrap(), "1:00:00");
        assert_eq!(format_minutes(dec!(125.25)).unwrap(), "2:05:15");
    }

    #[test]
    fn test_just_under_an_hour() {
        assert_eq!(format_minutes(dec!(59.99)).unwrap(), "59:59");
    }

    #[test]
    fn test_fraction_truncates_not_rounds() {
        // 0.999 min = 59.94 s, floored to 59
        assert_eq!(format_minutes(dec!(0.999)).unwrap(), "0:59");
    }

    #[test]
    fn test_negative_is_rejected() {
        let err = format_minutes(dec!(-0.5)).unwrap_err();
        assert_eq!(err, RunLogError::NegativeDuration { value: dec!(-0.5) });
    }
}
