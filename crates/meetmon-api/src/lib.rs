//! # meetmon-api
//!
//! HTTP API layer for MeetMon built on Axum.
//!
//! Provides the monitor endpoints, health and metrics exposition,
//! request-logging middleware, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
