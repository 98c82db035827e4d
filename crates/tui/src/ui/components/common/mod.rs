//! Shared building blocks used by multiple components.

mod scroll_metrics;

pub use scroll_metrics::ScrollMetrics;
