//! Fetching-independent aggregation logic

pub mod aggregator;
pub mod collector;
pub mod estimator;

pub use collector::{SourceStats, StatsCollector};
