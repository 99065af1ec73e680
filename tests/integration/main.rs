//! Integration test entry point.

mod helpers;
mod monitor_test;
mod persistence_test;
