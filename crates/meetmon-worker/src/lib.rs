//! Background reconciliation loops for MeetMon.
//!
//! This crate provides:
//! - A metrics sampler that publishes live gauges for in-progress meetings
//! - A staleness sweeper that force-closes meetings whose owner stopped
//!   reporting
//!
//! Both loops run for the lifetime of the process and stop on the shared
//! shutdown signal.

pub mod sampler;
pub mod sweeper;

pub use sampler::MetricsSampler;
pub use sweeper::StaleSweeper;
