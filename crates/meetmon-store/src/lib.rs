//! # meetmon-store
//!
//! Persistent store implementations for MeetMon. Supports two backends:
//!
//! - **redis**: the durable backend used in production, via the
//!   [redis](https://crates.io/crates/redis) crate
//! - **memory**: an in-process map for development and tests
//!
//! The provider is selected at runtime based on configuration.

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use provider::StoreManager;
