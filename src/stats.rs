//! Aggregate and post-selection statistics
//!
//! Both computations are single linear passes over the ordered run
//! slice and are rebuilt on demand; snapshots carry no lifecycle of
//! their own and must not be cached across collection mutations.
//! Record-holder identity travels inside [`AggregateSnapshot`] rather
//! than in shared state, so independent views can never observe a
//! stale record id.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;
use uuid::Uuid;

use crate::models::{round2, Run};

/// Collection-wide aggregates plus current record holders.
///
/// `best_distance_run_id` identifies the run achieving `max_distance`,
/// `best_pace_run_id` the run achieving `min_pace` (lowest pace is
/// fastest). On ties the earliest run in collection order holds the
/// record. Both are `None` for an empty collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateSnapshot {
    pub max_distance: Decimal,
    pub avg_distance: Decimal,
    pub min_distance: Decimal,
    pub min_pace: Decimal,
    pub max_pace: Decimal,
    pub avg_pace: Decimal,
    pub best_distance_run_id: Option<Uuid>,
    pub best_pace_run_id: Option<Uuid>,
}

/// Aggregates over the runs strictly after a selected run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostSelectionSnapshot {
    pub following_count: usize,
    pub avg_distance_after: Decimal,
    pub avg_total_minutes_after: Decimal,
}

/// Core statistics engine
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute min/max/average distance and pace plus record holders.
    ///
    /// An empty slice yields the all-zero snapshot with no record ids.
    /// Strict comparisons keep the first extremal run as record holder
    /// when later runs tie.
    pub fn compute_aggregates(runs: &[Run]) -> AggregateSnapshot {
        let first = match runs.first() {
            Some(run) => run,
            None => return AggregateSnapshot::default(),
        };

        let mut max_distance = first.distance_km;
        let mut min_distance = first.distance_km;
        let mut min_pace = first.pace_min_per_km;
        let mut max_pace = first.pace_min_per_km;
        let mut best_distance_run_id = first.id;
        let mut best_pace_run_id = first.id;
        let mut distance_sum = Decimal::ZERO;
        let mut pace_sum = Decimal::ZERO;

        for run in runs {
            if run.distance_km > max_distance {
                max_distance = run.distance_km;
                best_distance_run_id = run.id;
            }
            if run.distance_km < min_distance {
                min_distance = run.distance_km;
            }
            if run.pace_min_per_km < min_pace {
                min_pace = run.pace_min_per_km;
                best_pace_run_id = run.id;
            }
            if run.pace_min_per_km > max_pace {
                max_pace = run.pace_min_per_km;
            }
            distance_sum += run.distance_km;
            pace_sum += run.pace_min_per_km;
        }

        let count = Decimal::from(runs.len() as u64);
        trace!(runs = runs.len(), "aggregates recomputed");

        AggregateSnapshot {
            max_distance: round2(max_distance),
            avg_distance: round2(distance_sum / count),
            min_distance: round2(min_distance),
            min_pace: round2(min_pace),
            max_pace: round2(max_pace),
            avg_pace: round2(pace_sum / count),
            best_distance_run_id: Some(best_distance_run_id),
            best_pace_run_id: Some(best_pace_run_id),
        }
    }

    /// Compute count and averages over the runs strictly after `selected`.
    ///
    /// The selected run itself is excluded. A selected run that is no
    /// longer in the slice (deleted after selection), or one with
    /// nothing after it, yields the all-zero snapshot; division by the
    /// following count only happens when it is positive.
    pub fn compute_after(runs: &[Run], selected: &Run) -> PostSelectionSnapshot {
        let mut following = false;
        let mut count: usize = 0;
        let mut distance_sum = Decimal::ZERO;
        let mut minutes_sum = Decimal::ZERO;

        for run in runs {
            if following {
                count += 1;
                distance_sum += run.distance_km;
                minutes_sum += run.total_minutes;
            } else if run.id == selected.id {
                following = true;
            }
        }

        if count == 0 {
            return PostSelectionSnapshot::default();
        }

        let divisor = Decimal::from(count as u64);
        PostSelectionSnapshot {
            following_count: count,
            avg_distance_after: round2(distance_sum / divisor),
            avg_total_minutes_after: round2(minutes_sum / divisor),
        }
    }
}
