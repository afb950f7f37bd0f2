// Library interface for the runlog statistics engine
// The presentation layer consumes this API directly; there is no CLI or
// wire surface.

pub mod collection;
pub mod config;
pub mod error;
pub mod format;
pub mod improvement;
pub mod logging;
pub mod models;
pub mod records;
pub mod stats;

// Re-export commonly used types for convenience
pub use collection::RunCollection;
pub use config::AppConfig;
pub use error::{Result, RunLogError};
pub use format::format_minutes;
pub use improvement::classify;
pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
pub use models::{round2, Run, Trend, TrendArrow};
pub use records::{holds_any_record, is_record_holder, RecordDimension};
pub use stats::{AggregateSnapshot, PostSelectionSnapshot, StatsCalculator};
