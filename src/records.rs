//! Record ("trophy") lookup
//!
//! Pure identity checks against a previously computed
//! [`AggregateSnapshot`]. The presentation layer calls these per row to
//! decorate record-holding runs; no computation happens here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::stats::AggregateSnapshot;

/// Dimension a record can be held in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordDimension {
    /// Longest run of the collection
    Distance,
    /// Fastest (lowest) pace of the collection
    Pace,
}

/// True when `run_id` currently holds the record for `dimension`.
pub fn is_record_holder(
    run_id: Uuid,
    snapshot: &AggregateSnapshot,
    dimension: RecordDimension,
) -> bool {
    match dimension {
        RecordDimension::Distance => snapshot.best_distance_run_id == Some(run_id),
        RecordDimension::Pace => snapshot.best_pace_run_id == Some(run_id),
    }
}

/// True when `run_id` holds the record in either dimension. List rows
/// show a single combined trophy badge.
pub fn holds_any_record(run_id: Uuid, snapshot: &AggregateSnapshot) -> bool {
    is_record_holder(run_id, snapshot, RecordDimension::Distance)
        || is_record_holder(run_id, snapshot, RecordDimension::Pace)
}
