use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, RunLogError};
use crate::improvement;

/// Pace trend of a run versus the immediately previous run in the
/// collection. Lower pace means faster, hence `Improved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Improved,
    Equal,
    Deteriorated,
}

/// Direction hint for list rendering (arrow up/down/level)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendArrow {
    Up,
    Level,
    Down,
}

impl Trend {
    /// Map the trend onto the arrow a list row renders next to the pace.
    pub fn arrow(&self) -> TrendArrow {
        match self {
            Trend::Improved => TrendArrow::Up,
            Trend::Equal => TrendArrow::Level,
            Trend::Deteriorated => TrendArrow::Down,
        }
    }
}

/// Round to two decimal places, midpoint away from zero.
///
/// Applied at run creation and in every aggregate so that displayed
/// values reproduce exactly no matter which view computed them.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// A single logged run. Immutable after creation; identity is the `id`
/// field compared by value, never by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Opaque unique identifier, assigned once, never reused
    pub id: Uuid,

    /// 1-based insertion position; survives deletion of other runs
    pub sequence_number: u32,

    /// Distance in kilometers
    pub distance_km: Decimal,

    /// Whole minutes of elapsed time
    pub minutes: u32,

    /// Remaining seconds of elapsed time
    pub seconds: u32,

    /// Calendar date of the run (time of day not significant)
    pub date: NaiveDate,

    /// Derived: minutes + seconds/60, rounded to two decimals
    pub total_minutes: Decimal,

    /// Derived: total_minutes / distance_km, rounded to two decimals
    pub pace_min_per_km: Decimal,

    /// Classified once at creation against the previous run
    pub trend: Trend,
}

impl Run {
    /// Build a run from raw input, deriving elapsed time, pace and trend.
    ///
    /// Fails with [`RunLogError::NonPositiveDistance`] before anything is
    /// constructed, so a rejected run never reaches the collection.
    pub fn create(
        sequence_number: u32,
        distance_km: Decimal,
        minutes: u32,
        seconds: u32,
        date: NaiveDate,
        previous: Option<&Run>,
    ) -> Result<Self> {
        if distance_km <= Decimal::ZERO {
            return Err(RunLogError::NonPositiveDistance { value: distance_km });
        }

        let total_minutes = round2(Decimal::from(minutes) + Decimal::from(seconds) / dec!(60));
        let pace_min_per_km = round2(total_minutes / distance_km);
        let trend =
            improvement::classify(pace_min_per_km, previous.map(|run| run.pace_min_per_km));

        Ok(Run {
            id: Uuid::new_v4(),
            sequence_number,
            distance_km,
            minutes,
            seconds,
            date,
            total_minutes,
            pace_min_per_km,
            trend,
        })
    }
}
