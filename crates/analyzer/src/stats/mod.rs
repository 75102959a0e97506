//! Stats — frequency counting and the single-pass aggregation of log records.

pub mod rank;
pub mod aggregate;

pub use rank::{FrequencyCounter, RankedCounts};
pub use aggregate::{aggregate, AggregateStatistics, Aggregator, TOP_ADDRESSES, TOP_ERROR_CODES};
